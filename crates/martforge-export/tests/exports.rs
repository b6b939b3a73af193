use std::fs;
use std::path::PathBuf;

use martforge_core::{ColumnKind as K, Table, Value};
use martforge_export::{csv, json, sql, xml};

fn fixture() -> Table {
    let mut table = Table::new(
        "dim_customer",
        "customer_id",
        &[
            ("customer_id", K::Int),
            ("full_name", K::Text),
            ("phone", K::Text),
            ("balance", K::Numeric),
        ],
    );
    table
        .push_row(vec![
            Value::Int(1),
            Value::Text("Ahmed Alami".into()),
            Value::Text("+212612345678".into()),
            Value::Float(120.5),
        ])
        .unwrap();
    table
        .push_row(vec![
            Value::Int(2),
            Value::Text("Sara <El> Fassi & Co".into()),
            Value::Null,
            Value::Float(0.0),
        ])
        .unwrap();
    table
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("martforge_export_{}_{}", uuid::Uuid::new_v4(), name))
}

#[test]
fn csv_renders_null_as_empty_field() {
    let path = temp_path("customers.csv");
    csv::write_table_csv(&path, &fixture()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "customer_id;full_name;phone;balance"
    );
    assert_eq!(lines.next().unwrap(), "1;Ahmed Alami;+212612345678;120.50");
    // Empty field between the two delimiters marks the missing phone.
    assert_eq!(lines.next().unwrap(), "2;Sara <El> Fassi & Co;;0.00");
    fs::remove_file(path).ok();
}

#[test]
fn json_renders_null_as_explicit_literal() {
    let path = temp_path("customers.json");
    json::write_table_json(&path, &fixture()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(records[0]["customer_id"], 1);
    assert!(records[1]["phone"].is_null());
    assert_eq!(records[1]["balance"], 0.0);
    fs::remove_file(path).ok();
}

#[test]
fn xml_renders_null_as_empty_element_and_escapes_text() {
    let path = temp_path("customers.xml");
    xml::write_table_xml(&path, &fixture(), "customer").unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(content.contains("<dim_customer>"));
    assert!(content.contains("<phone/>"));
    assert!(content.contains("Sara &lt;El&gt; Fassi &amp; Co"));
    fs::remove_file(path).ok();
}

#[test]
fn schema_script_covers_every_table() {
    let script = sql::schema_script(&[fixture()]);
    assert!(script.contains("CREATE TABLE IF NOT EXISTS dim_customer ("));
    assert!(script.contains("PRIMARY KEY (customer_id)"));
}
