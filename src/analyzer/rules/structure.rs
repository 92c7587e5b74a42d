//! Key lines that lost their colon right before a list.

use super::MarkerCheck;
use crate::analyzer::lines::MarkerSource;
use crate::{Issue, IssueKind, Severity};

/// Rule for bare keys followed by list items (`examples` / `- foo`)
pub struct StructureCheck;

impl StructureCheck {
    pub const NAME: &'static str = "structure";

    pub fn new() -> Self {
        Self
    }
}

impl Default for StructureCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerCheck for StructureCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, source: &MarkerSource<'_>) -> Vec<Issue> {
        let bare_key = cached_regex!(r"^[a-zA-Z][a-zA-Z0-9_]*\s*$");

        source
            .lines
            .windows(2)
            .enumerate()
            .filter_map(|(idx, pair)| {
                let key = pair[0].trim();
                if bare_key.is_match(key) && pair[1].trim().starts_with('-') {
                    Some(Issue::new(
                        IssueKind::Structure,
                        Severity::High,
                        format!("Missing colon after key \"{}\"", key),
                        idx + 1,
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}
