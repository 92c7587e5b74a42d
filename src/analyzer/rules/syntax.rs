//! Whole-document YAML parse; the only check that can raise critical severity.

use super::MarkerCheck;
use crate::analyzer::lines::MarkerSource;
use crate::{Issue, IssueKind, Severity};
use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Rule for YAML syntax errors
pub struct SyntaxCheck;

impl SyntaxCheck {
    pub const NAME: &'static str = "syntax";

    pub fn new() -> Self {
        Self
    }
}

impl Default for SyntaxCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerCheck for SyntaxCheck {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check(&self, source: &MarkerSource<'_>) -> Vec<Issue> {
        match serde_yaml::from_str::<UntaggedDocument>(source.text) {
            Ok(_) => Vec::new(),
            Err(e) => {
                let line = e.location().map(|loc| loc.line()).unwrap_or(1);
                vec![Issue::new(
                    IssueKind::Structure,
                    Severity::Critical,
                    format!("YAML syntax error: {}", e),
                    line,
                )]
            }
        }
    }
}

/// Walks the document without building it. Repeated keys are accepted;
/// application tags (`!name`) are rejected. Core `!!` tags resolve as plain values.
struct UntaggedDocument;

impl<'de> Deserialize<'de> for UntaggedDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UntaggedVisitor)
    }
}

struct UntaggedVisitor;

impl<'de> Visitor<'de> for UntaggedVisitor {
    type Value = UntaggedDocument;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a YAML document")
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(UntaggedDocument)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        UntaggedDocument::deserialize(deserializer)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        UntaggedDocument::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<UntaggedDocument>()?.is_some() {}
        Ok(UntaggedDocument)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map
            .next_entry::<UntaggedDocument, UntaggedDocument>()?
            .is_some()
        {}
        Ok(UntaggedDocument)
    }

    // serde_yaml hands application-tagged nodes over as enums named after the tag.
    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
        let (tag, _) = data.variant::<String>()?;
        Err(de::Error::custom(format!(
            "could not determine a constructor for the tag '!{}'",
            tag
        )))
    }
}
