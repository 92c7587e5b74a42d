//! Edge case tests: degenerate inputs must not panic.

use marker_cleaner::progress::NoProgress;
use marker_cleaner::{AggregateResult, AnalysisEngine, Bucket, FileAnalysis, FileStatus, IssueKind};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn analyze_bytes(bytes: &[u8]) -> FileAnalysis {
    let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    AnalysisEngine::new().analyze_path(file.path())
}

#[test]
fn empty_file_no_panic() {
    let r = analyze_bytes(b"");
    assert_eq!(r.line_count, 1);
    // id, name and description all missing
    assert_eq!(r.issues.len(), 3);
    assert!(r.issues.iter().all(|i| i.line == 2));
    assert_eq!(AggregateResult::bucket_for(&r), Bucket::FixId);
}

#[test]
fn whitespace_only_no_panic() {
    let r = analyze_bytes(b"   \n\n\t\n");
    assert_eq!(r.status, FileStatus::NeedsFix);
}

#[test]
fn not_yaml_no_panic() {
    let r = analyze_bytes(b"{{{{ ]]]] : : :\n- - -\n");
    assert!(r
        .issues
        .iter()
        .any(|i| i.kind == IssueKind::Structure && i.message.starts_with("YAML syntax error")));
}

#[test]
fn invalid_utf8_goes_to_review() {
    let r = analyze_bytes(&[b'n', b'a', 0xff, 0xfe, b'\n']);
    assert_eq!(r.status, FileStatus::Error);
    assert_eq!(r.line_count, 0);
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].kind, IssueKind::Critical);
    assert_eq!(r.issues[0].line, 1);
    assert_eq!(AggregateResult::bucket_for(&r), Bucket::Review);
}

#[test]
fn crlf_line_endings_are_clean() {
    let r = analyze_bytes(b"name: Foo\r\nid: A_FOO\r\ndescription: d\r\n");
    assert!(r.is_clean(), "{:?}", r.issues);
}

#[test]
fn examples_key_on_last_line_is_skipped() {
    let r = analyze_bytes(b"name: Foo\nid: A_FOO\ndescription: d\nexamples:");
    assert!(r.is_clean(), "{:?}", r.issues);
}

#[test]
fn inline_comment_is_part_of_id_value() {
    let r = analyze_bytes(b"name: Foo\nid: A_FOO # legacy\ndescription: d\n");
    assert_eq!(r.issues.len(), 1);
    assert_eq!(
        r.issues[0].message,
        "ID format should be uppercase with underscores: A_FOO # legacy"
    );
}

#[test]
fn indented_id_does_not_count() {
    let r = analyze_bytes(b"name: Foo\nmeta:\n  id: A_FOO\ndescription: d\n");
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].message, "ID field is missing");
    assert_eq!(r.issues[0].line, 2);
}

#[test]
fn large_file_no_panic() {
    let mut text = String::from("name: Big\nid: A_BIG\ndescription: d\nexamples:\n");
    for i in 0..5000 {
        text.push_str(&format!("  - \"example {}\"\n", i));
    }
    let r = analyze_bytes(text.as_bytes());
    assert!(r.is_clean());
    assert_eq!(r.line_count, 5005);
}

#[test]
fn empty_folder_yields_zero_totals() {
    let dir = TempDir::new().unwrap();
    let r = AnalysisEngine::new()
        .scan_folder(dir.path(), &mut NoProgress)
        .unwrap();
    assert_eq!(r.total, 0);
    assert!(r.files.is_empty());
}

#[test]
fn folder_without_markers_yields_zero_totals() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("readme.md"), "# hi").unwrap();
    std::fs::write(dir.path().join("data.json"), "{}").unwrap();
    let r = AnalysisEngine::new()
        .scan_folder(dir.path(), &mut NoProgress)
        .unwrap();
    assert_eq!(r.total, 0);
}

#[test]
fn uppercase_extension_is_not_a_marker() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("a.YAML"), "name: Foo\n").unwrap();
    let files = AnalysisEngine::new()
        .collect_marker_files(dir.path())
        .unwrap();
    assert!(files.is_empty());
}

#[test]
fn unicode_file_name_no_panic() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("märker_ß.yaml"),
        "name: Ü\nid: A_U\ndescription: ä\n",
    )
    .unwrap();
    let r = AnalysisEngine::new()
        .scan_folder(dir.path(), &mut NoProgress)
        .unwrap();
    assert_eq!(r.clean, 1);
    assert_eq!(r.files[0].analysis.filename, "märker_ß.yaml");
}

#[test]
fn missing_path_no_panic() {
    let r = AnalysisEngine::new().analyze_path(Path::new("does/not/exist.yaml"));
    assert_eq!(r.status, FileStatus::Error);
    assert_eq!(r.filename, "exist.yaml");
}

#[test]
fn repeated_examples_block_stays_clean() {
    let r = analyze_bytes(
        b"name: Foo\nid: A_FOO\ndescription: d\nexamples:\n  - a\nexamples:\n  - b\n",
    );
    assert!(r.is_clean(), "{:?}", r.issues);
    assert_eq!(AggregateResult::bucket_for(&r), Bucket::Clean);
}

#[test]
fn carriage_return_only_file_is_clean() {
    let r = analyze_bytes(b"name: Foo\rid: A_FOO\rdescription: d\rexamples:\r  - a\r");
    assert!(r.is_clean(), "{:?}", r.issues);
    assert_eq!(r.line_count, 6);
}
