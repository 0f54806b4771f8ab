mod common;

use std::fs;

use thaigen_core::NamePhonemeEntry;
use thaigen_generate::errors::{ErrorKind, GenerationError};
use thaigen_generate::reference::{NameReferenceSet, parse_name_phoneme_line};

#[test]
fn keeps_one_name_per_phoneme() {
    let set = NameReferenceSet::from_lines("first", ["สมชาย\tS1", "สมหญิง\tS1", "สมศักดิ์\tS2"])
        .expect("parse names");

    assert_eq!(set.len(), 2);
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["สมชาย", "สมศักดิ์"]);
    assert_eq!(set.entries()[0], NamePhonemeEntry::new("สมชาย", "S1"));
}

#[test]
fn deduplication_is_idempotent() {
    let lines = ["ข\tb", "ก\ta", "ค\ta", "ง\tc", "จ\tb"];
    let first = NameReferenceSet::from_lines("names", lines).expect("parse");
    let second = NameReferenceSet::from_lines("names", lines).expect("parse");
    assert_eq!(first, second);

    let again = NameReferenceSet::from_entries(first.entries().to_vec());
    assert_eq!(again, first);
}

#[test]
fn phonemes_are_distinct_and_sorted() {
    let lines = ["n1\tzz", "n2\tab", "n3\tzz", "n4\tm", "n5\tab", "n6\ta"];
    let set = NameReferenceSet::from_lines("names", lines).expect("parse");
    let phonemes: Vec<&str> = set.entries().iter().map(|e| e.phoneme.as_str()).collect();
    assert_eq!(phonemes, vec!["a", "ab", "m", "zz"]);
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["n6", "n2", "n4", "n1"]);
}

#[test]
fn extra_tabs_stay_in_the_phoneme() {
    let entry = parse_name_phoneme_line("names", 1, "สมชาย\ts o m\tch a j\r\n").expect("parse");
    assert_eq!(entry.name, "สมชาย");
    assert_eq!(entry.phoneme, "s o m\tch a j");
}

#[test]
fn line_without_tab_is_malformed() {
    let result = NameReferenceSet::from_lines("first.txt", ["สมชาย\tS1", "สมหญิง"]);
    match result {
        Err(err @ GenerationError::MalformedReferenceLine { .. }) => {
            assert_eq!(err.kind(), ErrorKind::MalformedReferenceLine);
            if let GenerationError::MalformedReferenceLine { line, content, .. } = err {
                assert_eq!(line, 2);
                assert_eq!(content, "สมหญิง");
            }
        }
        other => panic!("expected malformed line error, got {other:?}"),
    }
}

#[test]
fn loads_from_file_and_skips_blank_lines() {
    let dir = common::temp_dir("names_file");
    let path = dir.join("first.txt");
    fs::write(&path, "สมชาย\tS1\r\n\r\nสมศักดิ์\tS2\n\n").expect("write names");

    let set = NameReferenceSet::load(&path).expect("load names");
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["สมชาย", "สมศักดิ์"]);
}

#[test]
fn missing_file_is_data_unavailable() {
    let dir = common::temp_dir("names_missing");
    let result = NameReferenceSet::load(&dir.join("absent.txt"));
    assert!(matches!(result, Err(GenerationError::DataUnavailable(_))));
}

#[test]
fn file_without_entries_is_data_unavailable() {
    let dir = common::temp_dir("names_empty");
    let path = dir.join("empty.txt");
    fs::write(&path, "\n").expect("write names");
    let result = NameReferenceSet::load(&path);
    assert!(matches!(result, Err(GenerationError::DataUnavailable(_))));
}
