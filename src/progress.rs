//! Progress events emitted while a folder is scanned.
//!
//! The engine only talks to a [`ProgressSink`]; the CLI plugs in
//! [`StderrProgress`], which writes `PROGRESS:{json}` lines a parent process can
//! pick out of stderr.

use serde::{Deserialize, Serialize};
use std::io::Write;

/// Percentage reported once the file list is known
pub const START_PERCENT: u8 = 10;
/// Share of the bar covered by per-file events
pub const FILE_SPAN_PERCENT: usize = 80;

/// One progress record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Always `"progress"`
    #[serde(rename = "type")]
    pub event_type: String,
    pub message: String,
    /// 0-100
    pub percent: u8,
}

impl ProgressEvent {
    pub fn new(message: impl Into<String>, percent: u8) -> Self {
        Self {
            event_type: "progress".to_string(),
            message: message.into(),
            percent: percent.min(100),
        }
    }

    /// `10 + floor(completed / total * 80)`
    pub fn file_percent(completed: usize, total: usize) -> u8 {
        if total == 0 {
            return START_PERCENT;
        }
        let span = completed.min(total) * FILE_SPAN_PERCENT / total;
        START_PERCENT + span as u8
    }
}

/// Receiver for progress events
pub trait ProgressSink {
    fn emit(&mut self, event: &ProgressEvent);
}

/// Discards every event
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn emit(&mut self, _event: &ProgressEvent) {}
}

/// Collects events in memory
impl ProgressSink for Vec<ProgressEvent> {
    fn emit(&mut self, event: &ProgressEvent) {
        self.push(event.clone());
    }
}

/// Writes `PROGRESS:{json}` lines to stderr
#[derive(Debug, Default)]
pub struct StderrProgress;

impl StderrProgress {
    pub const PREFIX: &'static str = "PROGRESS:";

    /// Format one event as a tagged line (without newline)
    pub fn format(event: &ProgressEvent) -> String {
        let json = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
        format!("{}{}", Self::PREFIX, json)
    }
}

impl ProgressSink for StderrProgress {
    fn emit(&mut self, event: &ProgressEvent) {
        let mut stderr = std::io::stderr().lock();
        // A closed stderr must not abort the scan.
        let _ = writeln!(stderr, "{}", Self::format(event));
    }
}
