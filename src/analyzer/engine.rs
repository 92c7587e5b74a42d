//! Analysis engine - runs the check battery and drives folder scans

use super::aggregate::AggregateResult;
use super::lines::MarkerSource;
use super::rules::{default_checks, MarkerCheck};
use crate::config::{build_ignore_set, is_ignored, Config};
use crate::error::ScanError;
use crate::progress::{ProgressEvent, ProgressSink, START_PERCENT};
use crate::{Bucket, FileAnalysis, Issue};
use anyhow::Result;
use globset::GlobSet;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Main analysis engine that orchestrates all checks
pub struct AnalysisEngine {
    /// Check battery in execution order
    checks: Vec<Box<dyn MarkerCheck>>,
    /// Per-check overrides, extensions and ignore patterns
    config: Config,
    ignore_set: Option<GlobSet>,
    /// Analyze file contents on the rayon pool
    parallel: bool,
}

impl AnalysisEngine {
    /// Create a new analysis engine with the default battery and no config
    pub fn new() -> Self {
        Self {
            checks: default_checks(),
            config: Config::default(),
            ignore_set: None,
            parallel: false,
        }
    }

    /// Apply a loaded config (check overrides, extensions, ignore patterns)
    pub fn with_config(mut self, config: Config) -> Result<Self> {
        self.ignore_set = if config.ignore.is_empty() {
            None
        } else {
            Some(build_ignore_set(&config.ignore)?)
        };
        self.config = config;
        Ok(self)
    }

    /// Analyze file contents in parallel; recording and progress stay in listing order
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Drop or re-grade one check's issues according to config
    fn apply_config_to_issues(&self, check: &str, issues: Vec<Issue>) -> Vec<Issue> {
        match self.config.check_setting(check) {
            None => issues,
            Some(setting) => match setting.to_severity() {
                None => Vec::new(),
                Some(severity) => issues
                    .into_iter()
                    .map(|mut issue| {
                        issue.severity = severity;
                        issue
                    })
                    .collect(),
            },
        }
    }

    /// Run every check over `content`. Checks never short-circuit each other,
    /// so a YAML parse failure still leaves the text checks' findings in place.
    ///
    /// `\r\n` and lone `\r` line endings are read as `\n`.
    pub fn analyze(&self, filename: &str, content: &str) -> FileAnalysis {
        let content = normalize_newlines(content);
        let source = MarkerSource::new(&content);

        let mut issues = Vec::new();
        for check in &self.checks {
            let found = check.check(&source);
            issues.extend(self.apply_config_to_issues(check.name(), found));
        }

        FileAnalysis::from_issues(filename, issues, source.line_count())
    }

    /// Read and analyze one file. Read and decode failures become a single
    /// critical issue instead of an error.
    pub fn analyze_path(&self, path: &Path) -> FileAnalysis {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match fs::read_to_string(path) {
            Ok(content) => self.analyze(&filename, &content),
            Err(e) => FileAnalysis::read_failure(filename, e),
        }
    }

    /// Analyze one file and record it; returns the bucket it was counted under
    pub fn process_file(&self, path: &Path, aggregate: &mut AggregateResult) -> Bucket {
        let analysis = self.analyze_path(path);
        aggregate.record(path, analysis)
    }

    /// Marker files directly inside `folder`, grouped by extension in config
    /// order and sorted by name within each group.
    pub fn collect_marker_files(&self, folder: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !folder.exists() {
            return Err(ScanError::DirectoryNotFound(folder.to_path_buf()));
        }
        if !folder.is_dir() {
            return Err(ScanError::NotADirectory(folder.to_path_buf()));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| ScanError::ReadDir {
                path: folder.to_path_buf(),
                source,
            })?;
            entries.push(entry.into_path());
        }

        let mut files = Vec::new();
        for ext in self.config.marker_extensions() {
            for path in &entries {
                let matches = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e == ext)
                    .unwrap_or(false);
                if !matches || files.contains(path) {
                    continue;
                }
                if let Some(ref set) = self.ignore_set {
                    if is_ignored(path, set) {
                        continue;
                    }
                }
                files.push(path.clone());
            }
        }

        Ok(files)
    }

    /// Scan a folder: one progress event after discovery, one per file, one at the end.
    ///
    /// Only folder-level problems are returned as errors; every discovered file
    /// ends up in the aggregate.
    pub fn scan_folder(
        &self,
        folder: &Path,
        progress: &mut dyn ProgressSink,
    ) -> Result<AggregateResult, ScanError> {
        let files = self.collect_marker_files(folder)?;
        progress.emit(&ProgressEvent::new(
            format!("Found {} YAML files", files.len()),
            START_PERCENT,
        ));

        let mut aggregate = AggregateResult::new();
        if self.parallel {
            use rayon::prelude::*;

            let analyses: Vec<FileAnalysis> =
                files.par_iter().map(|p| self.analyze_path(p)).collect();
            for (done, (path, analysis)) in files.iter().zip(analyses).enumerate() {
                aggregate.record(path, analysis);
                emit_file_progress(progress, path, done + 1, files.len());
            }
        } else {
            for (done, path) in files.iter().enumerate() {
                self.process_file(path, &mut aggregate);
                emit_file_progress(progress, path, done + 1, files.len());
            }
        }

        progress.emit(&ProgressEvent::new("Analysis complete", 100));
        Ok(aggregate)
    }
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

fn emit_file_progress(progress: &mut dyn ProgressSink, path: &Path, done: usize, total: usize) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    progress.emit(&ProgressEvent::new(
        format!("Processed {}", name),
        ProgressEvent::file_percent(done, total),
    ));
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
