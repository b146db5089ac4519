//! # Table Output Model
//!
//! Typed columns and the sheet-to-table conversion that produces them.
//! Conversion walks the raw columns in sheet order, infers one canonical
//! type per column, normalizes every cell to it, and truncates the table at
//! the first column whose header cell is falsy. The resulting [`Table`] is
//! what the external table writer serializes to delimited text.

pub mod column;
pub mod normalize;

use crate::error::ResultMessage;
use crate::error::Sheet2TableError;
use crate::sheet::cell::CellValue;
use crate::sheet::RawColumn;
use crate::table::column::build_column;
use crate::table::column::Column;

static NULL_CELL: CellValue = CellValue::Null;

/// An ordered collection of typed columns, truncated at the first falsy
/// header. Immutable once conversion hands it over.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Table { columns: Vec::new() }
    }

    /// Appends a column; insertion order is sheet order.
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header texts in column order, the output's first row.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.header.as_str())
    }

    /// Number of data rows, the length of the longest column. Upstream
    /// guarantees a uniform row count; mismatches are not reconciled here.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.values.len())
            .max()
            .unwrap_or(0)
    }

    /// Row-wise view of the normalized values for the table writer. A row
    /// position past a column's end yields Null.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> {
        (0..self.row_count()).map(move |row| {
            self.columns
                .iter()
                .map(|column| column.values.get(row).unwrap_or(&NULL_CELL))
                .collect()
        })
    }
}

/// Converts raw sheet columns into a typed table.
///
/// Each raw column's first cell is its header. A falsy header stops the
/// conversion entirely; that column and every later one are discarded, no
/// matter what their own headers say. A conversion failure on any column
/// aborts the whole table, so no partially typed table escapes downstream.
pub fn convert<I>(sheet_columns: I) -> Result<Table, Sheet2TableError>
where
    I: IntoIterator<Item = Vec<CellValue>>,
{
    let mut table = Table::new();
    for (index, cells) in sheet_columns.into_iter().enumerate() {
        let raw = RawColumn::from_cells(index, cells);
        if !raw.has_header() {
            tracing::debug!(index, "falsy header, truncating remaining columns");
            break;
        }

        let name = raw.header.to_string();
        let column = build_column(raw).with_prefix(&format!("column '{name}'"))?;
        tracing::debug!(
            column = %column.header,
            kind = %column.normalized_type,
            rows = column.values.len(),
            "built column"
        );
        table.push(column);
    }
    Ok(table)
}
