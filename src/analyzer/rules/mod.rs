//! Marker checks
//!
//! Every check sees the raw text and its line view; none of them requires the
//! document to be valid YAML. The engine runs them all, in `default_checks` order.

pub mod examples;
pub mod id_field;
pub mod required_fields;
pub mod structure;
pub mod syntax;

pub use examples::ExamplesSectionCheck;
pub use id_field::IdFieldCheck;
pub use required_fields::RequiredFieldsCheck;
pub use structure::StructureCheck;
pub use syntax::SyntaxCheck;

use super::lines::MarkerSource;
use crate::Issue;

/// Trait for marker checks
pub trait MarkerCheck: Send + Sync {
    /// Stable name of the check (used as config key)
    fn name(&self) -> &'static str;

    /// Inspect one file and return the issues found, in line order
    fn check(&self, source: &MarkerSource<'_>) -> Vec<Issue>;
}

/// The full battery in execution order
pub fn default_checks() -> Vec<Box<dyn MarkerCheck>> {
    vec![
        Box::new(IdFieldCheck::new()),
        Box::new(StructureCheck::new()),
        Box::new(ExamplesSectionCheck::new()),
        Box::new(RequiredFieldsCheck::new()),
        Box::new(SyntaxCheck::new()),
    ]
}

/// Names of all checks, in execution order
pub const CHECK_NAMES: [&str; 5] = [
    IdFieldCheck::NAME,
    StructureCheck::NAME,
    ExamplesSectionCheck::NAME,
    RequiredFieldsCheck::NAME,
    SyntaxCheck::NAME,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_order_matches_names() {
        let names: Vec<&str> = default_checks().iter().map(|c| c.name()).collect();
        assert_eq!(names, CHECK_NAMES.to_vec());
    }
}
