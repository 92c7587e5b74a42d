//! Marker Cleaner: maintenance triage for YAML marker definitions
//!
//! This library scans a folder of marker files, runs a fixed battery of
//! text checks over each one and sorts every file into a single maintenance
//! bucket (clean, fix ID, fix examples, fix structure, manual review).

pub mod analyzer;
pub mod config;
pub mod error;
pub mod progress;
pub mod reporter;

pub use analyzer::{AggregateResult, AnalysisEngine, FileRecord};
pub use error::ScanError;

use serde::{Deserialize, Serialize};

/// A problem detected in one marker file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Category of the problem
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Impact of the problem
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed). For missing content this is the suggested insertion line.
    pub line: usize,
}

impl Issue {
    /// Build an issue. Line 0 is lifted to 1 so every issue points into the file.
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            line: line.max(1),
        }
    }
}

/// Issue categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    Id,
    Structure,
    Example,
    RequiredField,
    /// Reserved for files that could not be read at all
    Critical,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Id => write!(f, "id"),
            IssueKind::Structure => write!(f, "structure"),
            IssueKind::Example => write!(f, "example"),
            IssueKind::RequiredField => write!(f, "required-field"),
            IssueKind::Critical => write!(f, "critical"),
        }
    }
}

/// Severity levels, ordered `Medium < High < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// Per-file status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Clean,
    NeedsFix,
    /// The file could not be read; the check battery never ran
    Error,
}

/// Result of analyzing one file's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    /// File name (no directory part)
    pub filename: String,
    /// Issues in check execution order
    pub issues: Vec<Issue>,
    pub status: FileStatus,
    /// Number of `\n`-separated lines
    pub line_count: usize,
}

impl FileAnalysis {
    /// Wrap the issues found by the check battery
    pub fn from_issues(filename: impl Into<String>, issues: Vec<Issue>, line_count: usize) -> Self {
        let status = if issues.is_empty() {
            FileStatus::Clean
        } else {
            FileStatus::NeedsFix
        };
        Self {
            filename: filename.into(),
            issues,
            status,
            line_count,
        }
    }

    /// Analysis for a file whose content could not be read or decoded
    pub fn read_failure(filename: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            filename: filename.into(),
            issues: vec![Issue::new(
                IssueKind::Critical,
                Severity::Critical,
                format!("Failed to process file: {}", error),
                1,
            )],
            status: FileStatus::Error,
            line_count: 0,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Maintenance bucket a file is sorted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bucket {
    Clean,
    FixId,
    FixExample,
    FixStructure,
    Review,
}

impl Bucket {
    /// All buckets in report order
    pub const ALL: [Bucket; 5] = [
        Bucket::Clean,
        Bucket::FixId,
        Bucket::FixExample,
        Bucket::FixStructure,
        Bucket::Review,
    ];

    /// Human-readable label used by the console and Markdown reports
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Clean => "Clean",
            Bucket::FixId => "Fix ID",
            Bucket::FixExample => "Fix examples",
            Bucket::FixStructure => "Fix structure",
            Bucket::Review => "Manual review",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Clean => write!(f, "clean"),
            Bucket::FixId => write!(f, "fixId"),
            Bucket::FixExample => write!(f, "fixExample"),
            Bucket::FixStructure => write!(f, "fixStructure"),
            Bucket::Review => write!(f, "review"),
        }
    }
}
