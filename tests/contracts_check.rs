mod common;

use common::run_json;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let accepted = run_json(&["check", "100", "azul", "15"]);
    assert_eq!(accepted["ok"], true);
    validate("check.schema.json", &accepted["data"]);

    let rejected = run_json(&["check", "90", "roxo", "25"]);
    assert_eq!(rejected["ok"], true);
    validate("check.schema.json", &rejected["data"]);

    let demo = run_json(&["demo"]);
    assert_eq!(demo["ok"], true);
    validate("demo.schema.json", &demo["data"]);
}
