//! Console reporter with colored output

use crate::{AggregateResult, Bucket, FileStatus, Issue, Severity};
use colored::Colorize;

/// Reporter for terminal output. Writes to stderr so stdout stays JSON.
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to list every issue, not only the per-file bucket
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print the per-file lines and the summary to stderr
    pub fn report(&self, results: &AggregateResult) {
        eprint!("{}", self.render(results));
    }

    /// Render the per-file lines and the summary
    pub fn render(&self, results: &AggregateResult) -> String {
        let mut out = String::new();

        for record in &results.files {
            let bucket = AggregateResult::bucket_for(&record.analysis);
            out.push_str(&format!(
                "{} {} ({})\n",
                self.bucket_icon(bucket),
                record.analysis.filename,
                self.paint_bucket(bucket)
            ));

            if self.verbose || record.analysis.status == FileStatus::Error {
                for issue in &record.analysis.issues {
                    out.push_str(&self.format_issue(issue));
                }
            }
        }

        out.push_str(&self.render_summary(results));
        out
    }

    fn format_issue(&self, issue: &Issue) -> String {
        let location = format!("L{}", issue.line);
        let severity = self.paint_severity(issue.severity);
        if self.use_colors {
            format!(
                "   {} [{}] {} {}\n",
                location.dimmed(),
                severity,
                issue.kind.to_string().dimmed(),
                issue.message
            )
        } else {
            format!(
                "   {} [{}] {} {}\n",
                location, severity, issue.kind, issue.message
            )
        }
    }

    fn render_summary(&self, results: &AggregateResult) -> String {
        let rule = "=".repeat(40);
        let title = if self.use_colors {
            "Summary".bold().to_string()
        } else {
            "Summary".to_string()
        };

        let mut out = format!("\n{}\n{}\n{}\n", rule, title, rule);
        out.push_str(&format!("   {:<16}{}\n", "Files scanned:", results.total));
        for bucket in Bucket::ALL {
            let label = format!("{}:", bucket.label());
            let count = results.count(bucket);
            let count_str = count.to_string();
            let count_str = if self.use_colors && count > 0 {
                self.paint(bucket, &count_str)
            } else {
                count_str
            };
            out.push_str(&format!("   {:<16}{}\n", label, count_str));
        }
        out
    }

    fn bucket_icon(&self, bucket: Bucket) -> String {
        let icon = match bucket {
            Bucket::Clean => "✓",
            Bucket::Review => "✗",
            _ => "⚠",
        };
        self.paint(bucket, icon)
    }

    fn paint_bucket(&self, bucket: Bucket) -> String {
        self.paint(bucket, bucket.label())
    }

    fn paint(&self, bucket: Bucket, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match bucket {
            Bucket::Clean => text.green().to_string(),
            Bucket::Review => text.red().bold().to_string(),
            _ => text.yellow().to_string(),
        }
    }

    fn paint_severity(&self, severity: Severity) -> String {
        let s = severity.to_string();
        if !self.use_colors {
            return s;
        }
        match severity {
            Severity::Critical => s.red().bold().to_string(),
            Severity::High => s.red().to_string(),
            Severity::Medium => s.yellow().to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
