use crate::error::{Result, UpdateError};
use crate::feed::ReleaseFeed;
use crate::pin::{DocumentUpdater, PinEntry, UpdateReport, list_pins};
use crate::utils::PathValidator;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Where the rewritten document goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the whole document to stdout.
    Stdout,
    /// Overwrite the source file.
    InPlace,
}

/// Execute the update workflow, printing the document to stdout in
/// `OutputMode::Stdout`.
pub fn execute_update<P: AsRef<Path>>(
    path: P,
    mode: OutputMode,
    feed: &dyn ReleaseFeed,
    show_progress: bool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    update_file(path, mode, feed, show_progress, &mut out)?;
    Ok(())
}

/// Read `path`, bump its pins and deliver the result. Nothing is written
/// unless the whole pass succeeds and at least one pin changed.
pub fn update_file<P: AsRef<Path>, W: Write>(
    path: P,
    mode: OutputMode,
    feed: &dyn ReleaseFeed,
    show_progress: bool,
    out: &mut W,
) -> Result<UpdateReport> {
    let path = path.as_ref();
    eprintln!(
        "{}",
        format!("Checking version pins in {}...", path.display())
            .cyan()
            .bold()
    );

    let target = PathValidator::validate_target_file(path)?;
    let content = fs::read_to_string(&target).map_err(|e| UpdateError::io(path, e))?;

    let updater = DocumentUpdater::new(feed)?.with_progress(show_progress);
    let report = updater.process(&content)?;

    if !report.is_changed() {
        eprintln!("{}", "No updates, already at latest".yellow());
        return Ok(report);
    }

    print_update_report(&report);

    match mode {
        OutputMode::InPlace => {
            fs::write(&target, &report.output).map_err(|e| UpdateError::io(path, e))?;
            eprintln!(
                "{}",
                format!("✓ {} updated", path.display()).green().bold()
            );
        }
        OutputMode::Stdout => {
            out.write_all(report.output.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(report)
}

/// Execute the list workflow (no network access)
pub fn execute_list<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let target = PathValidator::validate_target_file(path)?;
    let content = fs::read_to_string(&target).map_err(|e| UpdateError::io(path, e))?;
    let entries = list_pins(&content)?;

    println!(
        "{}",
        format!("Version pins in {}:", path.display()).cyan().bold()
    );
    if entries.is_empty() {
        println!("   {}", "(none)".dimmed());
        return Ok(());
    }
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

fn format_entry(entry: &PinEntry) -> String {
    let source = match &entry.strategy {
        Some(strategy) => strategy.to_string().bright_cyan().to_string(),
        None => "not tracked".dimmed().to_string(),
    };
    format!(
        "   {:>4}  {} = {}  ({})",
        entry.line_number,
        entry.name.bold(),
        entry.version,
        source
    )
}

fn print_update_report(report: &UpdateReport) {
    eprintln!(
        "\n{}",
        format!("Updated {} pin(s):", report.updates.len()).green()
    );
    for update in &report.updates {
        eprintln!(
            "   • {} {} → {} (line {})",
            update.name.bright_cyan(),
            update.old_version.dimmed(),
            update.new_version.green(),
            update.line_number
        );
    }
}
