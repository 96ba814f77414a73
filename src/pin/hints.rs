const COMMENT_MARKER: char = '#';

/// Feed hints carried in the trailing comment of a declaration,
/// e.g. `# repo=helm/helm,prefix=helm-`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hints {
    pub repo: Option<String>,
    pub prefix: Option<String>,
}

impl Hints {
    /// Parse a comment suffix. Unknown keys and segments without `=` are
    /// ignored. A later duplicate key overrides an earlier one, and an empty
    /// value clears the hint.
    pub fn parse(suffix: &str) -> Self {
        let body = suffix.trim();
        let body = body.strip_prefix(COMMENT_MARKER).unwrap_or(body).trim();

        let mut hints = Self::default();
        for segment in body.split(',') {
            let Some((key, value)) = segment.trim().split_once('=') else {
                continue;
            };
            let value = Some(value.to_string()).filter(|v| !v.is_empty());
            match key {
                "repo" => hints.repo = value,
                "prefix" => hints.prefix = value,
                _ => {}
            }
        }
        hints
    }
}
