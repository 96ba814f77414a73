// ARG version pins: line grammar, comment hints, feed selection and the
// document rewrite pass.
pub mod declaration;
pub mod hints;
pub mod strategy;
pub mod updater;

pub use updater::{DocumentUpdater, PinEntry, UpdateReport, list_pins};
