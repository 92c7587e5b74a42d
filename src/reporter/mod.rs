//! Reporter module for output formatting

pub mod console;
pub mod json;
pub mod markdown;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::{MarkdownReporter, REPORT_FILENAME};
