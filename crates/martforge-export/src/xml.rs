use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use martforge_core::Table;
use tracing::debug;

use crate::errors::ExportError;

/// Write a table as XML: one element per row under a root named after the
/// table. NULL becomes an empty element.
pub fn write_table_xml(path: &Path, table: &Table, row_tag: &str) -> Result<(), ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
    writeln!(writer, "<{}>", table.name)?;

    for row in &table.rows {
        writeln!(writer, "  <{row_tag}>")?;
        for (column, value) in table.columns.iter().zip(row) {
            if value.is_null() {
                writeln!(writer, "    <{0}/>", column.name)?;
            } else {
                writeln!(
                    writer,
                    "    <{0}>{1}</{0}>",
                    column.name,
                    escape(&value.render())
                )?;
            }
        }
        writeln!(writer, "  </{row_tag}>")?;
    }

    writeln!(writer, "</{}>", table.name)?;
    writer.flush()?;
    debug!(table = %table.name, rows = table.rows.len(), path = %path.display(), "xml written");
    Ok(())
}

/// Escape the five XML-reserved characters in element text.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(escape("H&M <beta>"), "H&amp;M &lt;beta&gt;");
        assert_eq!(escape("L'Oreal"), "L&apos;Oreal");
    }
}
