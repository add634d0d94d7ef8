//! End-to-end dataset pipeline tests.
//!
//! These tests exercise the real `scanner::scan_images` →
//! `decode::decode_path` → `analysis::tally_records` chain against a real
//! temporary directory, verifying that the pipeline finds exactly the
//! allow-listed files, decodes their labels, and produces consistent
//! cross-tabulations.
//!
//! **Why a `tests/` integration test (not unit test)?**
//!
//! The scanner reads an actual directory and the decoder's contract is
//! about real file paths (extension stripping, non-UTF-8 names). A
//! `tempfile` fixture exercises every code path with zero mocking.

use std::fs;
use std::path::Path;

use facesleuth_core::analysis::tally_records;
use facesleuth_core::decode::{decode_path, DecodeError};
use facesleuth_core::model::{Ethnicity, Gender};
use facesleuth_core::scanner::scan_images;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn touch(path: &Path) {
    fs::File::create(path).unwrap();
}

/// Create a reproducible dataset directory:
///
/// ```text
/// root/
///   25_0_2_111.jpg
///   25_1_2_222.jpg
///   30_0_0_333.png
///   80_1_4_444.BMP      (uppercase extension)
///   notes.txt           (not an image — ignored)
///   nested/             (subdirectory — never entered)
///     5_0_0_555.jpg
/// ```
fn build_dataset(root: &Path) {
    touch(&root.join("25_0_2_111.jpg"));
    touch(&root.join("25_1_2_222.jpg"));
    touch(&root.join("30_0_0_333.png"));
    touch(&root.join("80_1_4_444.BMP"));
    touch(&root.join("notes.txt"));
    let nested = root.join("nested");
    fs::create_dir_all(&nested).unwrap();
    touch(&nested.join("5_0_0_555.jpg"));
}

/// Run the full pipeline on a directory, aborting on the first bad name
/// exactly as the binary does.
fn analyse(dir: &Path) -> Result<facesleuth_core::analysis::DatasetTally, DecodeError> {
    let images = scan_images(dir).expect("scan must succeed");
    let mut records = Vec::with_capacity(images.len());
    for path in &images {
        records.push(decode_path(path)?);
    }
    Ok(tally_records(&records))
}

// ── Scanner ──────────────────────────────────────────────────────────────────

/// Only allow-listed image files directly inside the directory are found;
/// the text file and the nested subdirectory are excluded.
#[test]
fn scan_finds_only_direct_images() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_dataset(tmp.path());

    let images = scan_images(tmp.path()).expect("scan must succeed");
    assert_eq!(images.len(), 4, "found: {images:?}");
    assert!(images.iter().all(|p| p.parent() == Some(tmp.path())));
}

/// An empty directory scans successfully to an empty list.
#[test]
fn scan_empty_directory() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let images = scan_images(tmp.path()).expect("scan must succeed");
    assert!(images.is_empty());
}

/// A missing input directory is a fatal scan error naming the path.
#[test]
fn scan_missing_directory_fails() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let missing = tmp.path().join("no_such_dir");

    let err = scan_images(&missing).expect_err("scan must fail");
    assert_eq!(err.path, missing);
    assert!(err.to_string().contains("no_such_dir"));
}

/// A file path (not a directory) is also a fatal scan error.
#[test]
fn scan_file_as_input_fails() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let file = tmp.path().join("25_0_2_111.jpg");
    touch(&file);

    assert!(scan_images(&file).is_err());
}

// ── Pipeline ─────────────────────────────────────────────────────────────────

/// The full pipeline over the fixture dataset produces the expected
/// cross-tabulation.
#[test]
fn pipeline_tallies_fixture_dataset() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_dataset(tmp.path());

    let tally = analyse(tmp.path()).expect("all fixture names are valid");

    assert_eq!(tally.record_count, 4);

    let at_25 = tally.age_bucket(25);
    assert_eq!(at_25.total, 2);
    assert_eq!(at_25.gender[Gender::Male.index()], 1);
    assert_eq!(at_25.gender[Gender::Female.index()], 1);
    assert_eq!(at_25.ethnicity[Ethnicity::Mongoloid.index()], 2);

    assert_eq!(tally.age_bucket(30).total, 1);
    assert_eq!(tally.age_bucket(80).total, 1);
    // The nested file must not have been counted.
    assert_eq!(tally.age_bucket(5).total, 0);

    assert_eq!(tally.ethnicity_bucket(Ethnicity::Mongoloid).total, 2);
    assert_eq!(tally.gender_bucket(Gender::Female).count_at_age(80), 1);
}

/// One malformed filename aborts the whole run — no partial tally.
#[test]
fn malformed_filename_aborts_pipeline() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    touch(&tmp.path().join("25_0_2_111.jpg"));
    touch(&tmp.path().join("abc_0_0_1.jpg"));

    let err = analyse(tmp.path()).expect_err("pipeline must abort");
    assert!(matches!(err, DecodeError::Field { field: "age", .. }));
}

/// An out-of-range ethnicity index aborts the run as a label lookup error.
#[test]
fn out_of_range_label_aborts_pipeline() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    touch(&tmp.path().join("25_0_9_111.jpg"));

    let err = analyse(tmp.path()).expect_err("pipeline must abort");
    assert!(matches!(err, DecodeError::EthnicityIndex { index: 9, .. }));
}
