//! Run-wide tally of buckets and per-file records.

use super::classify;
use crate::{Bucket, FileAnalysis, FileStatus};
use serde::Serialize;
use std::path::Path;

/// A file analysis plus the path it was read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    #[serde(flatten)]
    pub analysis: FileAnalysis,
    /// Path as found during the scan
    pub path: String,
}

/// Bucket counters and per-file detail for one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub total: usize,
    pub clean: usize,
    pub fix_id: usize,
    pub fix_example: usize,
    pub fix_structure: usize,
    pub review: usize,
    /// Records in processing order
    pub files: Vec<FileRecord>,
}

impl AggregateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one analyzed file and return the bucket it was counted under.
    ///
    /// Unreadable files go straight to review; everything else goes through
    /// [`classify`].
    pub fn record(&mut self, path: &Path, analysis: FileAnalysis) -> Bucket {
        let bucket = Self::bucket_for(&analysis);
        self.total += 1;
        *self.counter_mut(bucket) += 1;
        self.files.push(FileRecord {
            analysis,
            path: path.to_string_lossy().into_owned(),
        });
        bucket
    }

    /// Counter for one bucket
    pub fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Clean => self.clean,
            Bucket::FixId => self.fix_id,
            Bucket::FixExample => self.fix_example,
            Bucket::FixStructure => self.fix_structure,
            Bucket::Review => self.review,
        }
    }

    fn counter_mut(&mut self, bucket: Bucket) -> &mut usize {
        match bucket {
            Bucket::Clean => &mut self.clean,
            Bucket::FixId => &mut self.fix_id,
            Bucket::FixExample => &mut self.fix_example,
            Bucket::FixStructure => &mut self.fix_structure,
            Bucket::Review => &mut self.review,
        }
    }

    /// Sum of all bucket counters; equals `total` for any aggregate built by `record`.
    pub fn bucket_sum(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.count(*b)).sum()
    }

    /// Bucket a file analysis is counted under
    pub fn bucket_for(analysis: &FileAnalysis) -> Bucket {
        if analysis.status == FileStatus::Error {
            Bucket::Review
        } else {
            classify(&analysis.issues)
        }
    }

    /// Append another partial aggregate (e.g. from a separate worker) after this one
    pub fn merge(&mut self, other: AggregateResult) {
        self.total += other.total;
        self.clean += other.clean;
        self.fix_id += other.fix_id;
        self.fix_example += other.fix_example;
        self.fix_structure += other.fix_structure;
        self.review += other.review;
        self.files.extend(other.files);
    }
}
