// tests/unit_record.rs
//! Tests for the dataset loader.

use std::fs;

use larder_core::error::LarderError;
use larder_core::record::load_records;
use tempfile::TempDir;

#[test]
fn csv_rows_load_with_lenient_numerics() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.csv");
    fs::write(
        &path,
        "recipe_name,ingredients,cuisine_path,total_time,rating,url\n\
         Lentil Salad,red lentils; olive oil,Recipes > Mediterranean,20,4.5,http://example.org/1\n\
         Mystery Stew,beans; carrots,,about an hour,not rated,\n",
    )
    .unwrap();

    let outcome = load_records(&path).unwrap();
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.malformed, 0);

    let salad = &outcome.records[0];
    assert_eq!(salad.name, "Lentil Salad");
    assert_eq!(salad.total_time, Some(20));
    assert_eq!(salad.rating, Some(4.5));
    assert_eq!(salad.url.as_deref(), Some("http://example.org/1"));

    // Malformed numerics become None, never a failure.
    let stew = &outcome.records[1];
    assert_eq!(stew.total_time, None);
    assert_eq!(stew.rating, None);
    assert_eq!(stew.cuisine_path, None);
}

#[test]
fn json_array_and_data_envelope_both_load() {
    let dir = TempDir::new().unwrap();

    let plain = dir.path().join("plain.json");
    fs::write(
        &plain,
        r#"[{"recipe_name": "Dal", "ingredients": ["red lentils", "turmeric"], "total_time": 35}]"#,
    )
    .unwrap();
    let outcome = load_records(&plain).unwrap();
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].total_time, Some(35));

    let wrapped = dir.path().join("wrapped.json");
    fs::write(
        &wrapped,
        r#"{"data": [{"name": "Toast", "ingredients": "bread; butter", "rating": "4.0"}]}"#,
    )
    .unwrap();
    let outcome = load_records(&wrapped).unwrap();
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].rating, Some(4.0));
}

#[test]
fn non_object_json_rows_are_counted_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        r#"[{"recipe_name": "Ok", "ingredients": "rice"}, 42, "nope"]"#,
    )
    .unwrap();
    let outcome = load_records(&path).unwrap();
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.malformed, 2);
}

#[test]
fn missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nowhere.csv");
    match load_records(&path) {
        Err(LarderError::SourceMissing(p)) => assert_eq!(p, path),
        other => panic!("expected SourceMissing, got {other:?}"),
    }
}

#[test]
fn unsupported_extension_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("recipes.xml");
    fs::write(&path, "<recipes/>").unwrap();
    assert!(matches!(
        load_records(&path),
        Err(LarderError::UnsupportedFormat(_))
    ));
}
