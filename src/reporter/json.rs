//! JSON reporter for machine-readable output

use crate::AggregateResult;
use serde::Serialize;

/// Reporter for the driver's JSON payload
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Payload for a completed scan
    pub fn report_success(&self, results: &AggregateResult, folder_path: &str) -> String {
        self.render(&SuccessPayload {
            success: true,
            results,
            folder_path,
        })
    }

    /// Payload for a scan that could not start or finish
    pub fn report_failure(&self, error: &str, folder_path: &str) -> String {
        self.render(&FailurePayload {
            success: false,
            error,
            folder_path,
        })
    }

    fn render<T: Serialize>(&self, payload: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

// `folder_path` stays snake_case on the wire; `results` is camelCase inside.
#[derive(Serialize)]
struct SuccessPayload<'a> {
    success: bool,
    results: &'a AggregateResult,
    folder_path: &'a str,
}

#[derive(Serialize)]
struct FailurePayload<'a> {
    success: bool,
    error: &'a str,
    folder_path: &'a str,
}
