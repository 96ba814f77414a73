mod cli;
mod config;
mod error;
mod feed;
mod pin;
mod utils;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use config::FeedConfig;
use error::Result;
use feed::HttpFeed;
use std::process;
use workflow::OutputMode;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var(utils::verbose::VERBOSE_VAR, "1");
        }
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        return workflow::execute_list(&cli.file);
    }

    let config = FeedConfig::from_env()?;
    let feed = HttpFeed::new(config)?;
    let mode = if cli.in_place {
        OutputMode::InPlace
    } else {
        OutputMode::Stdout
    };

    workflow::execute_update(&cli.file, mode, &feed, true)
}
