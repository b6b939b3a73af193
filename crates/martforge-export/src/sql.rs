use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use martforge_core::Table;

use crate::errors::ExportError;

/// Render `CREATE TABLE IF NOT EXISTS` statements for every table, in order.
/// Only column layout is emitted; the loader bulk-inserts the data itself.
pub fn schema_script(tables: &[Table]) -> String {
    let mut script = String::from("-- Star-schema DDL generated by martforge\n\n");
    for table in tables {
        let _ = writeln!(script, "CREATE TABLE IF NOT EXISTS {} (", table.name);
        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|column| format!("  {} {}", column.name, column.kind.sql_type()))
            .collect();
        if let Some(primary_key) = &table.primary_key {
            lines.push(format!("  PRIMARY KEY ({primary_key})"));
        }
        script.push_str(&lines.join(",\n"));
        script.push_str("\n);\n\n");
    }
    script
}

/// Write the schema script for the given tables to `path`.
pub fn write_schema_script(path: &Path, tables: &[Table]) -> Result<(), ExportError> {
    fs::write(path, schema_script(tables))?;
    Ok(())
}
