use crate::error::Sheet2TableError;
use crate::sheet::cell::CellType;
use crate::sheet::cell::CellValue;
use crate::sheet::RawColumn;
use crate::table::normalize::normalizer_for;
use std::collections::HashSet;
use thiserror::Error;

/// The classifier produced a column type with no registry entry. This is a
/// programming defect in the fixed rule set, not a data problem; it aborts
/// the whole conversion.
#[derive(Error, Debug)]
#[error("no normalizer registered for column type '{0}'")]
pub struct InternalConsistencyError(pub CellType);

/// One fully typed column of the output table. Immutable once built; every
/// non-Null value conforms to `normalized_type`.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column index (0-based position in the sheet)
    pub index: usize,
    /// Column name (from the header row)
    pub header: String,
    /// Normalized cell values, one per data row
    pub values: Vec<CellValue>,
    /// Canonical type every non-Null value conforms to
    pub normalized_type: CellType,
}

/// Determines the canonical type for a column from its cell type tags.
///
/// The result is a function of the set of distinct non-Null tags present:
/// integers and floats widen to float, dates and datetimes widen to
/// datetime, any other mix flattens to text so no data is lost, a lone tag
/// wins outright, and a column of nothing but Null stays Null.
pub fn classify(tags: impl IntoIterator<Item = CellType>) -> CellType {
    let mut distinct: HashSet<CellType> = tags.into_iter().collect();
    distinct.remove(&CellType::Null);

    if distinct.len() == 2 {
        if distinct.contains(&CellType::Integer) && distinct.contains(&CellType::Float) {
            return CellType::Float;
        }
        if distinct.contains(&CellType::DateTime) && distinct.contains(&CellType::Date) {
            return CellType::DateTime;
        }
    }

    if distinct.len() > 1 {
        return CellType::Text;
    }
    distinct.into_iter().next().unwrap_or(CellType::Null)
}

/// Builds a typed column from a raw one: classify the cell tags, look up the
/// normalization routine, run it once. Pure and single-pass.
pub fn build_column(column: RawColumn) -> Result<Column, Sheet2TableError> {
    let RawColumn { index, header, values } = column;

    let column_type = classify(values.iter().map(CellValue::cell_type));
    let normalize =
        normalizer_for(column_type).ok_or(InternalConsistencyError(column_type))?;
    let (normalized_type, normalized) = normalize(values)?;

    Ok(Column {
        index,
        header: header.to_string(),
        values: normalized,
        normalized_type,
    })
}
