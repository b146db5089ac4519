use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt::Display;

/// Types of cell data in spreadsheet columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Absent or empty cells
    #[default]
    Null,
    /// Text values
    Text,
    /// 64-bit signed integers
    Integer,
    /// Double-precision floating point numbers
    Float,
    /// Date and time values
    DateTime,
    /// Date values without a time component
    Date,
    /// Boolean values (true/false)
    Boolean,
}

impl CellType {
    /// Returns the string representation of the cell type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CellType::Null => "null",
            CellType::Text => "text",
            CellType::Integer => "integer",
            CellType::Float => "float",
            CellType::DateTime => "datetime",
            CellType::Date => "date",
            CellType::Boolean => "boolean",
        }
    }
}

impl Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single raw cell value, tagged with its runtime category.
///
/// The sheet reader produces these at the boundary; the engine never inspects
/// anything beyond the variant and its payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    /// Absent or empty cell
    #[default]
    Null,
    /// Text value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Date and time value
    DateTime(NaiveDateTime),
    /// Date value without a time component
    Date(NaiveDate),
    /// Boolean value
    Boolean(bool),
}

impl CellValue {
    /// Returns the type tag of this value.
    pub const fn cell_type(&self) -> CellType {
        match self {
            CellValue::Null => CellType::Null,
            CellValue::Text(_) => CellType::Text,
            CellValue::Integer(_) => CellType::Integer,
            CellValue::Float(_) => CellType::Float,
            CellValue::DateTime(_) => CellType::DateTime,
            CellValue::Date(_) => CellType::Date,
            CellValue::Boolean(_) => CellType::Boolean,
        }
    }

    /// Truthiness of a cell value: Null, empty text, zero and false are falsy;
    /// dates and datetimes are always truthy.
    ///
    /// Drives header truncation and the Text/Boolean normalization routines.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Null => false,
            CellValue::Text(value) => !value.is_empty(),
            CellValue::Integer(value) => *value != 0,
            CellValue::Float(value) => *value != 0.0,
            CellValue::DateTime(_) | CellValue::Date(_) => true,
            CellValue::Boolean(value) => *value,
        }
    }
}

impl Display for CellValue {
    /// Renders the value as delimited-text field content; Null renders as the
    /// empty string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(value) => write!(f, "{}", value),
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            CellValue::Boolean(value) => write!(f, "{}", if *value { "true" } else { "false" }),
        }
    }
}
