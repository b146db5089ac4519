//! # Sheet Input Boundary
//!
//! Data model for raw spreadsheet columns as handed over by the external
//! sheet reader: each column is an ordered sequence of tagged cell values
//! whose first element is the header cell and whose remaining elements are
//! the data rows. The engine only consumes these; parsing the spreadsheet
//! container is the reader's job.

pub mod cell;

use crate::sheet::cell::CellValue;

/// One raw column as produced by the sheet reader, split into header cell
/// and data values.
#[derive(Clone, Debug)]
pub struct RawColumn {
    /// Column index (0-based position in the sheet)
    pub index: usize,
    /// Header cell (raw first-row value, any variant)
    pub header: CellValue,
    /// Data cell values in row order
    pub values: Vec<CellValue>,
}

impl RawColumn {
    /// Splits a raw cell sequence into header (element 0) and data values.
    /// A zero-length sequence yields a Null header and no values.
    pub fn from_cells(index: usize, cells: Vec<CellValue>) -> Self {
        let mut cells = cells.into_iter();
        let header = cells.next().unwrap_or(CellValue::Null);
        RawColumn {
            index,
            header,
            values: cells.collect(),
        }
    }

    /// Returns true if the header cell is truthy, i.e. the column survives
    /// the truncation rule.
    pub fn has_header(&self) -> bool {
        self.header.is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use crate::sheet::cell::CellValue;
    use crate::sheet::RawColumn;

    #[test]
    fn from_cells_splits_header() {
        let column = RawColumn::from_cells(
            2,
            vec![
                CellValue::Text("Name".to_owned()),
                CellValue::Text("alice".to_owned()),
                CellValue::Null,
            ],
        );

        assert_eq!(column.index, 2);
        assert_eq!(column.header, CellValue::Text("Name".to_owned()));
        assert_eq!(
            column.values,
            vec![CellValue::Text("alice".to_owned()), CellValue::Null]
        );
        assert!(column.has_header());
    }

    #[test]
    fn from_cells_empty_sequence() {
        let column = RawColumn::from_cells(0, vec![]);

        assert_eq!(column.header, CellValue::Null);
        assert!(column.values.is_empty());
        assert!(!column.has_header());
    }

    #[test]
    fn falsy_headers() {
        for header in [
            CellValue::Null,
            CellValue::Text("".to_owned()),
            CellValue::Integer(0),
            CellValue::Boolean(false),
        ] {
            let column = RawColumn::from_cells(0, vec![header]);
            assert!(!column.has_header());
        }
    }
}
