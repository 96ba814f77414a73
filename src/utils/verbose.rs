/// Process variable set by `--verbose`.
pub const VERBOSE_VAR: &str = "UPDATE_VERSIONS_VERBOSE";

pub fn is_enabled() -> bool {
    std::env::var(VERBOSE_VAR).is_ok()
}

/// Print a `[VERBOSE]` diagnostic on stderr when verbose output is enabled.
pub fn log(message: impl AsRef<str>) {
    if is_enabled() {
        eprintln!("[VERBOSE] {}", message.as_ref());
    }
}
