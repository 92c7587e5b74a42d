//! Markdown maintenance report written next to the scanned markers

use crate::analyzer::FileRecord;
use crate::{AggregateResult, Bucket};
use chrono::{DateTime, Utc};

/// Default report file name inside the scanned folder
pub const REPORT_FILENAME: &str = "marker-report.md";

/// Reporter for the human-readable `marker-report.md`
pub struct MarkdownReporter;

impl MarkdownReporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report stamped with the current time
    pub fn report(&self, results: &AggregateResult, folder_path: &str) -> String {
        self.report_at(results, folder_path, Utc::now())
    }

    /// Render the report with an explicit generation time
    pub fn report_at(
        &self,
        results: &AggregateResult,
        folder_path: &str,
        generated: DateTime<Utc>,
    ) -> String {
        let mut md = String::new();
        md.push_str("# Marker Report\n\n");
        md.push_str(&format!("- Folder: `{}`\n", folder_path));
        md.push_str(&format!("- Generated: {}\n\n", generated.to_rfc3339()));

        md.push_str("## Summary\n\n");
        md.push_str("| Bucket | Files |\n");
        md.push_str("|---|---:|\n");
        for bucket in Bucket::ALL {
            md.push_str(&format!("| {} | {} |\n", bucket.label(), results.count(bucket)));
        }
        md.push_str(&format!("| **Total** | **{}** |\n", results.total));

        for bucket in Bucket::ALL.into_iter().filter(|b| *b != Bucket::Clean) {
            let records: Vec<&FileRecord> = results
                .files
                .iter()
                .filter(|r| AggregateResult::bucket_for(&r.analysis) == bucket)
                .collect();
            if records.is_empty() {
                continue;
            }

            md.push_str(&format!("\n## {} ({})\n", bucket.label(), records.len()));
            for record in records {
                md.push_str(&format!("\n### {}\n\n", record.analysis.filename));
                for issue in &record.analysis.issues {
                    md.push_str(&format!(
                        "- line {} [{}] {}: {}\n",
                        issue.line, issue.severity, issue.kind, issue.message
                    ));
                }
            }
        }

        md
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileAnalysis, Issue, IssueKind, Severity};
    use chrono::TimeZone;
    use std::path::Path;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn summary_table_lists_every_bucket() {
        let mut agg = AggregateResult::new();
        agg.record(
            Path::new("m/a.yaml"),
            FileAnalysis::from_issues("a.yaml", vec![], 2),
        );
        let md = MarkdownReporter::new().report_at(&agg, "m", fixed_time());
        assert!(md.starts_with("# Marker Report\n"));
        assert!(md.contains("- Generated: 2024-05-01T12:00:00+00:00"));
        assert!(md.contains("| Clean | 1 |"));
        assert!(md.contains("| Manual review | 0 |"));
        assert!(md.contains("| **Total** | **1** |"));
        // Clean files get no section of their own.
        assert!(!md.contains("### a.yaml"));
    }

    #[test]
    fn non_clean_files_listed_with_issues() {
        let mut agg = AggregateResult::new();
        agg.record(
            Path::new("m/b.yaml"),
            FileAnalysis::from_issues(
                "b.yaml",
                vec![Issue::new(
                    IssueKind::Example,
                    Severity::Medium,
                    "Examples section should contain list items starting with \"-\"",
                    4,
                )],
                6,
            ),
        );
        agg.record(
            Path::new("m/c.yaml"),
            FileAnalysis::read_failure("c.yaml", "bad bytes"),
        );
        let md = MarkdownReporter::new().report_at(&agg, "m", fixed_time());
        assert!(md.contains("## Fix examples (1)"));
        assert!(md.contains("### b.yaml"));
        assert!(md.contains("- line 4 [medium] example: Examples section"));
        assert!(md.contains("## Manual review (1)"));
        assert!(md.contains("- line 1 [critical] critical: Failed to process file: bad bytes"));
        assert!(!md.contains("## Fix ID"));
    }
}
