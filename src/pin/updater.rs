use crate::error::Result;
use crate::feed::ReleaseFeed;
use crate::pin::declaration::DeclarationMatcher;
use crate::pin::hints::Hints;
use crate::pin::strategy::FeedStrategy;
use crate::utils::verbose;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// A declaration whose value was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinUpdate {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub name: String,
    pub old_version: String,
    pub new_version: String,
    /// Replacement line, newline-terminated.
    pub line: String,
}

/// Result of a full pass over a document.
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    pub output: String,
    pub updates: Vec<PinUpdate>,
}

impl UpdateReport {
    pub fn is_changed(&self) -> bool {
        !self.updates.is_empty()
    }
}

/// A declaration found by [`list_pins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinEntry {
    pub line_number: usize,
    pub name: String,
    pub version: String,
    pub strategy: Option<FeedStrategy>,
}

/// Rewrites declaration lines with the versions reported by a feed.
pub struct DocumentUpdater<'a> {
    feed: &'a dyn ReleaseFeed,
    matcher: DeclarationMatcher,
    show_progress: bool,
}

impl<'a> DocumentUpdater<'a> {
    pub fn new(feed: &'a dyn ReleaseFeed) -> Result<Self> {
        Ok(Self {
            feed,
            matcher: DeclarationMatcher::new()?,
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check a single line (without its terminator). Returns `None` when
    /// the line is not a declaration, no feed applies, or the feed reports
    /// the version already pinned.
    pub fn update_line(&self, line_number: usize, line: &str) -> Result<Option<PinUpdate>> {
        let Some(decl) = self.matcher.parse(line) else {
            return Ok(None);
        };

        let hints = Hints::parse(decl.comment);
        let Some(strategy) = FeedStrategy::resolve(decl.name, &hints) else {
            verbose::log(format!("{}: no feed applies, skipping", decl.name));
            return Ok(None);
        };

        verbose::log(format!("{}: checking {}", decl.name, strategy));
        let candidate = strategy.fetch(self.feed)?;

        if candidate == decl.current {
            verbose::log(format!("{}: already at {}", decl.name, decl.current));
            return Ok(None);
        }

        verbose::log(format!("{}: {} -> {}", decl.name, decl.current, candidate));
        Ok(Some(PinUpdate {
            line_number,
            name: decl.name.to_string(),
            old_version: decl.current.to_string(),
            new_version: candidate.clone(),
            line: decl.render(&candidate),
        }))
    }

    /// Run every line of `input` through [`update_line`](Self::update_line).
    ///
    /// Every emitted line ends with `\n`. The first feed error aborts the
    /// pass and no output is returned.
    pub fn process(&self, input: &str) -> Result<UpdateReport> {
        let total = input.lines().count();
        let pb = ProgressBar::new(total as u64);
        if !self.show_progress || verbose::is_enabled() {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        if let Ok(style) = ProgressStyle::default_bar().template("  [{bar:40}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }

        let mut report = UpdateReport {
            output: String::with_capacity(input.len() + 1),
            updates: Vec::new(),
        };

        for (index, line) in input.lines().enumerate() {
            let update = match self.update_line(index + 1, line) {
                Ok(update) => update,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };

            match update {
                Some(update) => {
                    pb.set_message(update.name.clone());
                    report.output.push_str(&update.line);
                    report.updates.push(update);
                }
                None => {
                    report.output.push_str(line);
                    report.output.push('\n');
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(report)
    }
}

/// List declarations with the feed each would use, without querying.
pub fn list_pins(input: &str) -> Result<Vec<PinEntry>> {
    let matcher = DeclarationMatcher::new()?;
    let entries = input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let decl = matcher.parse(line)?;
            let hints = Hints::parse(decl.comment);
            Some(PinEntry {
                line_number: index + 1,
                name: decl.name.to_string(),
                version: decl.current.to_string(),
                strategy: FeedStrategy::resolve(decl.name, &hints),
            })
        })
        .collect();
    Ok(entries)
}
