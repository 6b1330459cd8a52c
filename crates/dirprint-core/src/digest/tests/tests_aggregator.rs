//! Tests for fingerprint aggregation

use crate::digest::{DirectoryFingerprint, FileRecord, combine, digest_bytes};

const X_SHA256: &str = "4b68ab3847feda7d6c62c1fbcbeebfa35eab7351ed5e78f4ddadea5df64b8015";
const Y_SHA256: &str = "18f5384d58bcb1bba0bcd9e6a6781d1a6ac2cc280c330ecbab6cb7931b721552";
const XY_FINGERPRINT: &str = "efae2aa969161b80b6216047a254c64647e404e02d93f2aa4979e8a5680f838b";

#[test]
fn test_combine_empty() {
    let result = combine(Vec::new());

    assert_eq!(result.fingerprint, digest_bytes(b""));
    assert!(result.files.is_empty());
    assert_eq!(result.file_count(), 0);
}

#[test]
fn test_combine_single_file_hashes_digest_text() {
    let digest = digest_bytes(b"abc");
    let result = combine(vec![FileRecord::new("a.txt", digest.clone())]);

    assert_eq!(result.fingerprint, digest_bytes(digest.as_bytes()));
    assert_eq!(
        result.fingerprint,
        "dfe7a23fefeea519e9bbfdd1a6be94c4b2e4529dd6b7cbea83f9959c2621b13c"
    );
    assert_eq!(result.files, vec!["a.txt"]);
}

#[test]
fn test_combine_known_pair() {
    assert_eq!(digest_bytes(b"X"), X_SHA256);
    assert_eq!(digest_bytes(b"Y"), Y_SHA256);

    let result = combine(vec![
        FileRecord::new("a.txt", X_SHA256),
        FileRecord::new("b.txt", Y_SHA256),
    ]);

    assert_eq!(result.fingerprint, XY_FINGERPRINT);
    assert_eq!(result.files, vec!["a.txt", "b.txt"]);
}

#[test]
fn test_combine_is_order_independent() {
    let records = vec![
        FileRecord::new("src/main.rs", digest_bytes(b"fn main() {}")),
        FileRecord::new("README.md", digest_bytes(b"# readme")),
        FileRecord::new("src/lib.rs", digest_bytes(b"pub mod a;")),
        FileRecord::new("Cargo.toml", digest_bytes(b"[package]")),
    ];
    let mut reversed = records.clone();
    reversed.reverse();
    let mut rotated = records.clone();
    rotated.rotate_left(2);

    let expected = combine(records);
    assert_eq!(combine(reversed), expected);
    assert_eq!(combine(rotated), expected);
    assert_eq!(
        expected.files,
        vec!["Cargo.toml", "README.md", "src/lib.rs", "src/main.rs"]
    );
}

#[test]
fn test_combine_swapped_contents_same_fingerprint() {
    let before = combine(vec![
        FileRecord::new("a.txt", X_SHA256),
        FileRecord::new("b.txt", Y_SHA256),
    ]);
    let after = combine(vec![
        FileRecord::new("a.txt", Y_SHA256),
        FileRecord::new("b.txt", X_SHA256),
    ]);

    assert_eq!(before, after);
}

#[test]
fn test_combine_depends_on_content_multiset() {
    let once = combine(vec![FileRecord::new("a.txt", X_SHA256)]);
    let twice = combine(vec![
        FileRecord::new("a.txt", X_SHA256),
        FileRecord::new("copy/a.txt", X_SHA256),
    ]);

    assert_ne!(once.fingerprint, twice.fingerprint);
    assert_eq!(twice.files, vec!["a.txt", "copy/a.txt"]);
}

#[test]
fn test_combine_renaming_changes_only_files() {
    let before = combine(vec![FileRecord::new("old.txt", X_SHA256)]);
    let after = combine(vec![FileRecord::new("new.txt", X_SHA256)]);

    assert_eq!(before.fingerprint, after.fingerprint);
    assert_ne!(before.files, after.files);
}

#[test]
fn test_matches_is_case_and_whitespace_tolerant() {
    let result = DirectoryFingerprint {
        fingerprint: XY_FINGERPRINT.to_string(),
        files: vec!["a.txt".to_string(), "b.txt".to_string()],
    };

    assert!(result.matches(XY_FINGERPRINT));
    assert!(result.matches(&format!("  {}\n", XY_FINGERPRINT.to_uppercase())));
    assert!(!result.matches(X_SHA256));
}

#[test]
fn test_fingerprint_serializes_with_stable_field_names() -> anyhow::Result<()> {
    let result = combine(vec![FileRecord::new("a.txt", X_SHA256)]);

    let json = serde_json::to_value(&result)?;
    assert_eq!(json["fingerprint"], result.fingerprint);
    assert_eq!(json["files"], serde_json::json!(["a.txt"]));

    let back: DirectoryFingerprint = serde_json::from_value(json)?;
    assert_eq!(back, result);
    Ok(())
}
