use crate::error::{Error, Result};
use crate::value::{ColumnKind, Value};

/// A column in a generated table.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A finished flat table: ordered columns plus positional rows.
///
/// Tables are immutable once a generator hands them over; exporters and the
/// loader only read.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub primary_key: Option<String>,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: &str, primary_key: &str, columns: &[(&str, ColumnKind)]) -> Self {
        Self {
            name: name.to_string(),
            primary_key: Some(primary_key.to_string()),
            columns: columns
                .iter()
                .map(|(name, kind)| Column {
                    name: (*name).to_string(),
                    kind: *kind,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::InvalidRow(format!(
                "table '{}': expected {} values, got {}",
                self.name,
                self.columns.len(),
                row.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| Error::UnknownColumn(format!("{}.{}", self.name, name)))
    }

    /// Value of `column` in row `row`, by name.
    pub fn value(&self, row: usize, column: &str) -> Result<&Value> {
        let index = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|values| values.get(index))
            .ok_or_else(|| Error::InvalidRow(format!("table '{}': no row {}", self.name, row)))
    }

    /// All values of a column, in row order.
    pub fn column_values(&self, column: &str) -> Result<Vec<&Value>> {
        let index = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| &row[index]).collect())
    }
}
