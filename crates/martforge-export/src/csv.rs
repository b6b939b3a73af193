use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use martforge_core::Table;
use tracing::debug;

use crate::errors::ExportError;

/// Semicolon delimiter, matching the spreadsheet-friendly convention of the
/// downstream consumers.
pub const DELIMITER: u8 = b';';

/// Write a table as CSV: header row, then rows in order. NULL becomes an
/// empty field.
pub fn write_table_csv(path: &Path, table: &Table) -> Result<(), ExportError> {
    let writer = BufWriter::new(File::create(path)?);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .from_writer(writer);

    let header: Vec<&str> = table.columns.iter().map(|col| col.name.as_str()).collect();
    writer.write_record(&header)?;

    for row in &table.rows {
        let record: Vec<String> = row.iter().map(|value| value.render()).collect();
        writer.write_record(&record)?;
    }

    writer.flush().map_err(csv::Error::from)?;
    debug!(table = %table.name, rows = table.rows.len(), path = %path.display(), "csv written");
    Ok(())
}
