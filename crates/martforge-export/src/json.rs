use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use martforge_core::Table;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::ExportError;

/// Write a table as a pretty-printed JSON array of records. NULL becomes an
/// explicit `null` literal.
pub fn write_table_json(path: &Path, table: &Table) -> Result<(), ExportError> {
    let records: Vec<Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            for (column, value) in table.columns.iter().zip(row) {
                record.insert(column.name.clone(), value.to_json());
            }
            Value::Object(record)
        })
        .collect();

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &records)?;
    debug!(table = %table.name, rows = table.rows.len(), path = %path.display(), "json written");
    Ok(())
}
