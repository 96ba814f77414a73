use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "update-versions",
    about = "Update ARG version pins in a Dockerfile to the latest upstream releases",
    version
)]
pub struct Cli {
    /// Overwrite the Dockerfile in place instead of printing it to stdout
    #[arg(long)]
    pub in_place: bool,

    /// Path to the Dockerfile
    #[arg(short, long, value_name = "PATH", default_value = "Dockerfile")]
    pub file: PathBuf,

    /// List version pins and the feed each one follows, without network access
    #[arg(short, long, conflicts_with = "in_place")]
    pub list: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
