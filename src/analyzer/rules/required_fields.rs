//! Top-level fields every marker must carry.

use super::MarkerCheck;
use crate::analyzer::lines::{find_line_for_insertion, MarkerSource};
use crate::{Issue, IssueKind, Severity};
use regex::Regex;

/// Rule for `name:` and `description:` presence
pub struct RequiredFieldsCheck;

impl RequiredFieldsCheck {
    pub const NAME: &'static str = "required-fields";

    /// Required fields in reporting order
    pub const FIELDS: [&'static str; 2] = ["name", "description"];

    pub fn new() -> Self {
        Self
    }

    fn key_pattern(field: &str) -> &'static Regex {
        match field {
            "name" => cached_regex!(r"(?m)^name\s*:"),
            _ => cached_regex!(r"(?m)^description\s*:"),
        }
    }

    /// A missing `name` blocks identification; other gaps are structural.
    fn kind_for(field: &str) -> IssueKind {
        if field == "name" {
            IssueKind::Id
        } else {
            IssueKind::Structure
        }
    }
}

impl Default for RequiredFieldsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerCheck for RequiredFieldsCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, source: &MarkerSource<'_>) -> Vec<Issue> {
        Self::FIELDS
            .iter()
            .filter(|field| !Self::key_pattern(field).is_match(source.text))
            .map(|field| {
                Issue::new(
                    Self::kind_for(field),
                    Severity::High,
                    format!("Required field \"{}\" is missing", field),
                    find_line_for_insertion(&source.lines, field),
                )
            })
            .collect()
    }
}
