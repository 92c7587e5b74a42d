//! Analyzer module - marker check battery, bucket policy and scan engine

/// Compile a regex literal once and hand out a `&'static Regex`.
macro_rules! cached_regex {
    ($pattern:literal) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("valid regex literal"))
    }};
}

pub mod aggregate;
pub mod classify;
pub mod engine;
pub mod lines;
pub mod rules;

pub use aggregate::{AggregateResult, FileRecord};
pub use classify::classify;
pub use engine::AnalysisEngine;
