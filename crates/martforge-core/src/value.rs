use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

/// Declared type of a table column. Drives rendering and DDL emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Int,
    /// Fixed-point numeric rendered with two decimal places.
    Numeric,
    Text,
    Date,
    Timestamp,
}

impl ColumnKind {
    /// SQL type used by the generated schema script.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnKind::Int => "INT",
            ColumnKind::Numeric => "NUMERIC(12,2)",
            ColumnKind::Text => "TEXT",
            ColumnKind::Date => "DATE",
            ColumnKind::Timestamp => "TIMESTAMP",
        }
    }
}

/// A single cell in a generated table.
///
/// Numeric values are stored already rounded; rendering never re-rounds, so
/// every export format sees identical digits.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render for textual formats (CSV fields, XML element text).
    /// NULL renders as the empty string; callers decide the null marker.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => format!("{value:.2}"),
            Value::Text(value) => value.clone(),
            Value::Date(value) => value.format("%Y-%m-%d").to_string(),
            Value::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// JSON representation with an explicit `null` literal.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Int(value) => json!(value),
            Value::Float(value) => json!(value),
            Value::Text(value) => json!(value),
            Value::Date(_) | Value::Timestamp(_) => json!(self.render()),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<Option<i64>> for Value {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Value::Null, Value::Int)
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::Text)
    }
}
