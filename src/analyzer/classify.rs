//! Bucket policy: reduce a file's issue list to exactly one bucket.

use crate::{Bucket, Issue, IssueKind, Severity};

/// Pick the bucket for a file's issues. First matching rule wins:
///
/// 1. a critical-severity issue of kind `critical` sends the file to review
/// 2. any `id` issue → fix ID
/// 3. any `structure` issue → fix structure
/// 4. any `example` issue → fix examples
/// 5. anything else → review
///
/// YAML syntax errors are `structure` issues with critical severity, so they
/// land in fix-structure rather than review.
pub fn classify(issues: &[Issue]) -> Bucket {
    if issues.is_empty() {
        return Bucket::Clean;
    }

    let has_kind = |kind: IssueKind| issues.iter().any(|i| i.kind == kind);

    let unreadable = issues.iter().any(|i| i.severity == Severity::Critical)
        && has_kind(IssueKind::Critical);
    if unreadable {
        Bucket::Review
    } else if has_kind(IssueKind::Id) {
        Bucket::FixId
    } else if has_kind(IssueKind::Structure) {
        Bucket::FixStructure
    } else if has_kind(IssueKind::Example) {
        Bucket::FixExample
    } else {
        Bucket::Review
    }
}
