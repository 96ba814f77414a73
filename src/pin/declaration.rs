use crate::error::Result;
use regex::Regex;

// leading whitespace + `ARG `, variable name, version, optional comment.
const DECLARATION_PATTERN: &str = concat!(
    r"^(\s*ARG\s+)",
    r"([A-Za-z_][A-Za-z0-9_]+)=",
    r"(v?[0-9.]+)",
    r"(\s*#.*)?\s*$",
);

/// An `ARG NAME=value # hints` line split into its segments.
///
/// `leading + name + "=" + current + comment` reproduces the matched line,
/// minus trailing whitespace outside the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub leading: &'a str,
    pub name: &'a str,
    pub current: &'a str,
    pub comment: &'a str,
}

impl Declaration<'_> {
    /// Rebuild the line with `value` in place of the current version.
    pub fn render(&self, value: &str) -> String {
        format!("{}{}={}{}\n", self.leading, self.name, value, self.comment)
    }
}

/// Recognises declaration lines.
#[derive(Debug, Clone)]
pub struct DeclarationMatcher {
    pattern: Regex,
}

impl DeclarationMatcher {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(DECLARATION_PATTERN)?,
        })
    }

    /// Split `line` (without its line terminator) into a declaration, or
    /// `None` if it is not one.
    pub fn parse<'a>(&self, line: &'a str) -> Option<Declaration<'a>> {
        let caps = self.pattern.captures(line)?;
        Some(Declaration {
            leading: caps.get(1)?.as_str(),
            name: caps.get(2)?.as_str(),
            current: caps.get(3)?.as_str(),
            comment: caps.get(4).map_or("", |m| m.as_str()),
        })
    }
}
