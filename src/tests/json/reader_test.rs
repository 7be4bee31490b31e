use serde::Deserialize;
use serde_json::Value;
use tempfile::tempdir;

use crate::json::reader::read_json_file;

#[derive(Debug, Deserialize)]
struct Person {
    name: String,
    age: u32,
}

#[test]
fn test_read_json_file() {
    let dir = tempdir().unwrap();
    let test_file_path = dir.path().join("test_data.json");
    let json_data = r#"{"name": "John Doe", "age": 30, "is_active": true}"#;
    std::fs::write(&test_file_path, json_data).expect("Failed to create test file");

    let json: Value = read_json_file(test_file_path.to_str().unwrap()).unwrap();

    assert_eq!(json["name"], "John Doe");
    assert_eq!(json["age"], 30);
    assert_eq!(json["is_active"], true);
}

#[test]
fn test_read_json_file_into_struct() {
    let dir = tempdir().unwrap();
    let test_file_path = dir.path().join("person.json");
    std::fs::write(&test_file_path, r#"{"name": "Ada", "age": 36}"#).unwrap();

    let person: Person = read_json_file(test_file_path.to_str().unwrap()).unwrap();

    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 36);
}

#[test]
fn test_read_json_file_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("non_existent_file.json");

    let result = read_json_file::<Value>(missing.to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn test_read_json_file_invalid_json() {
    let dir = tempdir().unwrap();
    let test_file_path = dir.path().join("test_data_invalid.json");
    // Missing closing brace
    let invalid_json_data = r#"{"name": "John Doe", "age": 30, "is_active": true"#;
    std::fs::write(&test_file_path, invalid_json_data).expect("Failed to create test file");

    let result = read_json_file::<Value>(test_file_path.to_str().unwrap());
    assert!(result.is_err());
}
