//! Record identifier checks: presence, commented-out `id:` and value format.

use super::MarkerCheck;
use crate::analyzer::lines::{find_line_for_insertion, find_line_number, MarkerSource};
use crate::{Issue, IssueKind, Severity};

/// Rule for the top-level `id:` field
pub struct IdFieldCheck;

impl IdFieldCheck {
    pub const NAME: &'static str = "id-field";

    pub fn new() -> Self {
        Self
    }
}

impl Default for IdFieldCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim whitespace, then drop one leading and one trailing quote character.
fn normalize_id_value(raw: &str) -> &str {
    let value = raw.trim();
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}

fn is_valid_id(value: &str) -> bool {
    cached_regex!(r"^[A-Z][A-Z0-9_]*$").is_match(value)
}

impl MarkerCheck for IdFieldCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, source: &MarkerSource<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();
        let active_key = cached_regex!(r"^id\s*:");
        let commented_key = cached_regex!(r"^\s*#\s*id\s*:");

        if !cached_regex!(r"(?m)^id\s*:").is_match(source.text) {
            issues.push(Issue::new(
                IssueKind::Id,
                Severity::High,
                "ID field is missing",
                find_line_for_insertion(&source.lines, "id"),
            ));
        } else if cached_regex!(r"(?m)^\s*#\s*id\s*:").is_match(source.text) {
            issues.push(Issue::new(
                IssueKind::Id,
                Severity::High,
                "ID field is commented out",
                find_line_number(&source.lines, commented_key),
            ));
        }

        // `\s*` after the colon may cross into the next line, like the key lookup above.
        if let Some(caps) = cached_regex!(r"(?m)^id\s*:\s*(.+)").captures(source.text) {
            let value = normalize_id_value(&caps[1]);
            if !is_valid_id(value) {
                issues.push(Issue::new(
                    IssueKind::Id,
                    Severity::Medium,
                    format!("ID format should be uppercase with underscores: {}", value),
                    find_line_number(&source.lines, active_key),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Issue> {
        IdFieldCheck::new().check(&MarkerSource::new(text))
    }

    #[test]
    fn valid_id_no_issues() {
        assert!(run("name: Foo\nid: A_FOO_2\n").is_empty());
        assert!(run("name: Foo\nid: \"S_QUOTED\"\n").is_empty());
        assert!(run("name: Foo\nid: 'C_SINGLE'\n").is_empty());
    }

    #[test]
    fn missing_id_anchored_after_name() {
        let issues = run("description: d\nname: Foo\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "ID field is missing");
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].line, 3);
    }

    #[test]
    fn missing_id_without_name_goes_to_line_two() {
        let issues = run("description: d\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn only_commented_id_counts_as_missing() {
        let issues = run("name: Foo\n# id: FOO\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "ID field is missing");
    }

    #[test]
    fn commented_id_next_to_active_id() {
        let issues = run("name: Foo\n  # id: OLD\nid: FOO\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "ID field is commented out");
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn lowercase_id_reports_value() {
        let issues = run("name: Foo\ndescription: d\nid: lowercase_value\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Id);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert!(issues[0].message.contains("lowercase_value"));
        assert_eq!(issues[0].line, 3);
    }

    #[test]
    fn indented_id_is_not_top_level() {
        let issues = run("name: Foo\nframe:\n  id: X\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "ID field is missing");
    }

    #[test]
    fn normalize_strips_one_quote_pair() {
        assert_eq!(normalize_id_value("  \"A_B\"  "), "A_B");
        assert_eq!(normalize_id_value("'A_B"), "A_B");
        assert_eq!(normalize_id_value("\"\"A\"\""), "\"A\"");
    }
}
