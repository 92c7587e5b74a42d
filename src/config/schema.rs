//! Config schema and deserialization

use crate::analyzer::rules::CHECK_NAMES;
use crate::Severity;
use serde::Deserialize;
use std::collections::HashMap;

/// Per-check setting (off, medium, high, critical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSetting {
    /// Disable the check entirely
    Off,
    Medium,
    High,
    Critical,
}

impl CheckSetting {
    /// Convert to crate::Severity if not Off
    pub fn to_severity(self) -> Option<Severity> {
        match self {
            CheckSetting::Off => None,
            CheckSetting::Medium => Some(Severity::Medium),
            CheckSetting::High => Some(Severity::High),
            CheckSetting::Critical => Some(Severity::Critical),
        }
    }
}

/// Root config structure for .markercleanerrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Marker file extensions, without the dot (default: yaml, yml)
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns for file names to skip
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Per-check overrides. Key is the check name (e.g. "examples").
    #[serde(default)]
    pub checks: HashMap<String, CheckSetting>,
}

impl Config {
    /// Setting for a check, or None when the check keeps its built-in severities
    pub fn check_setting(&self, check: &str) -> Option<CheckSetting> {
        self.checks.get(check).copied()
    }

    /// Extensions in scan order
    pub fn marker_extensions(&self) -> Vec<&str> {
        if self.extensions.is_empty() {
            vec!["yaml", "yml"]
        } else {
            self.extensions
                .iter()
                .map(|s| s.trim_start_matches('.'))
                .collect()
        }
    }

    /// Check names in `checks` that no check answers to
    pub fn unknown_checks(&self) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .checks
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !CHECK_NAMES.contains(k))
            .collect();
        unknown.sort();
        unknown
    }
}
