//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use routine_cli::commands::{ConvertRequest, run_convert};
use routine_transform::AggregateOptions;
use serde_json::{Value, json};

const CSV: &str = "\
person,morning_product,morning_product_ingredients,morning_product_type,morning_product_link,night_product,night_product_ingredients,night_product_type,night_product_link,alcohol,sls,perfume,vitamin_c,vitamin_b,exfoliant,link_morning,link_night
Alice,Cleanser,\"Water, Glycerin\",,,,,,,true,false,false,false,false,false,http://x,
Bob,Sunscreen,\"Zinc Oxide , Water\",SPF,http://s,Retinol,,Serum,,false,false,true,false,false,false,http://b,http://b
Alice,Toner,Water,,,,,,,true,false,false,true,false,false,http://x,http://y
";

fn write_input(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("routines.csv");
    fs::write(&path, CSV).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn converts_csv_to_nested_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("routines.json");

    let result = run_convert(&ConvertRequest::new(&input, &output)).unwrap();
    assert_eq!(result.record_count, 3);
    assert_eq!(result.routines.len(), 2);
    assert_eq!(result.product_count(), 4);
    assert_eq!(result.output.as_deref(), Some(output.as_path()));

    let document = read_json(&output);
    let routines = document["routines"].as_array().unwrap();
    assert_eq!(routines.len(), 2);

    let alice = &routines[0];
    assert_eq!(alice["title"], "Alice");
    assert_eq!(alice["sources"], json!(["http://x", "http://y"]));
    assert_eq!(alice["flags"], json!(["A", "C"]));
    assert_eq!(
        alice["steps"]["Morning"],
        json!([
            {"name": "Cleanser", "link": "", "type": "", "ingredients": ["Water", "Glycerin"], "flags": ["A"]},
            {"name": "Toner", "link": "", "type": "", "ingredients": ["Water"], "flags": ["A", "C"]}
        ])
    );
    assert_eq!(alice["steps"]["Evening"], json!([]));

    let bob = &routines[1];
    assert_eq!(bob["sources"], json!(["http://b"]));
    assert_eq!(bob["flags"], json!(["P"]));
    assert_eq!(bob["steps"]["Morning"][0]["ingredients"], json!(["Zinc Oxide", "Water"]));
    assert_eq!(bob["steps"]["Morning"][0]["type"], "SPF");
    assert_eq!(
        bob["steps"]["Evening"],
        json!([{"name": "Retinol", "link": "", "type": "Serum", "ingredients": [""], "flags": ["P"]}])
    );
}

#[test]
fn drop_empty_ingredients_option_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("routines.json");

    let request = ConvertRequest::new(&input, &output)
        .with_options(AggregateOptions::drop_empty_ingredients());
    run_convert(&request).unwrap();

    let document = read_json(&output);
    assert_eq!(
        document["routines"][1]["steps"]["Evening"][0]["ingredients"],
        json!([])
    );
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("routines.json");

    let result = run_convert(&ConvertRequest::new(&input, &output).with_dry_run(true)).unwrap();
    assert!(result.output.is_none());
    assert_eq!(result.routines.len(), 2);
    assert!(!output.exists());
}

#[test]
fn missing_input_is_reported_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("routines.json");

    let error = run_convert(&ConvertRequest::new(dir.path().join("absent.csv"), &output))
        .unwrap_err();
    let message = format!("{error:#}");
    assert!(message.starts_with("read input"), "{message}");
    assert!(message.contains("absent.csv"), "{message}");
    assert!(!output.exists());
}

#[test]
fn decode_failure_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "person,alcohol\nAlice,perhaps\n").unwrap();
    let output = dir.path().join("routines.json");

    let error = run_convert(&ConvertRequest::new(&input, &output)).unwrap_err();
    assert!(format!("{error:#}").contains("line 2"));
    assert!(!output.exists());
}
