//! `examples:` sections must open with list items.

use super::MarkerCheck;
use crate::analyzer::lines::{find_line_number, MarkerSource};
use crate::{Issue, IssueKind, Severity};

/// How many lines after the `examples:` key are searched for a list item
const LOOKAHEAD: usize = 5;

/// Rule for the examples section layout
pub struct ExamplesSectionCheck;

impl ExamplesSectionCheck {
    pub const NAME: &'static str = "examples";

    pub fn new() -> Self {
        Self
    }
}

impl Default for ExamplesSectionCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerCheck for ExamplesSectionCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, source: &MarkerSource<'_>) -> Vec<Issue> {
        if !source.text.contains("examples:") {
            return Vec::new();
        }

        let key_line = find_line_number(&source.lines, cached_regex!(r"examples\s*:"));
        let total = source.line_count();
        // Nothing follows the key: no lines to judge.
        if key_line >= total {
            return Vec::new();
        }

        // key_line is 1-based, so as a 0-based index it already points past the key.
        let end = (key_line + LOOKAHEAD).min(total);
        let list_item = cached_regex!(r"^\s*-\s+");
        let has_list_items = source.lines[key_line..end]
            .iter()
            .any(|line| list_item.is_match(line));

        if has_list_items {
            Vec::new()
        } else {
            vec![Issue::new(
                IssueKind::Example,
                Severity::Medium,
                "Examples section should contain list items starting with \"-\"",
                key_line,
            )]
        }
    }
}
