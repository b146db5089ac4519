use crate::sheet::cell::CellType;
use crate::sheet::cell::CellValue;
use thiserror::Error;

/// Error raised when a raw value cannot be coerced to a column's canonical
/// type. Not retried; the failure is deterministic.
#[derive(Error, Debug)]
#[error("cannot convert '{value}' to {target}")]
pub struct ConversionError {
    /// Text rendering of the offending raw value
    pub value: String,
    /// Canonical type the value was being coerced to
    pub target: CellType,
}

/// A normalization routine: coerces the raw values of one column and reports
/// the type they now conform to.
pub type NormalizeFn =
    fn(Vec<CellValue>) -> Result<(CellType, Vec<CellValue>), ConversionError>;

/// Fixed dispatch table from canonical column type to normalization routine.
/// One entry per tag; compile-time state, never mutated.
static NORMALIZERS: &[(CellType, NormalizeFn)] = &[
    (CellType::Null, normalize_empty),
    (CellType::Text, normalize_text),
    (CellType::Integer, normalize_integers),
    (CellType::Float, normalize_floats),
    (CellType::DateTime, normalize_datetimes),
    (CellType::Date, normalize_dates),
    (CellType::Boolean, normalize_booleans),
];

/// Looks up the normalization routine for a canonical column type.
pub fn normalizer_for(kind: CellType) -> Option<NormalizeFn> {
    NORMALIZERS
        .iter()
        .find(|(key, _)| *key == kind)
        .map(|(_, normalize)| *normalize)
}

/// Normalizes a column which contains only empty cells.
fn normalize_empty(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    Ok((CellType::Null, vec![CellValue::Null; values.len()]))
}

/// Normalizes a column of text cells: truthy values become their text
/// rendering, falsy values (empty text, zero, false, Null) become Null.
fn normalize_text(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    let normalized = values
        .into_iter()
        .map(|value| {
            if value.is_truthy() {
                CellValue::Text(value.to_string())
            } else {
                CellValue::Null
            }
        })
        .collect();
    Ok((CellType::Text, normalized))
}

/// Normalizes a column of integer cells: values pass through unchanged.
///
/// Unlike every other routine, no empty-cell substitution happens here; a
/// Null cell stays whatever the reader produced. Pinned by a conformance
/// test in case the rule is ever reconsidered.
fn normalize_integers(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    Ok((CellType::Integer, values))
}

/// Normalizes a column of float cells: integers widen, booleans coerce to
/// 0.0/1.0, text must parse as a number, Null passes through.
fn normalize_floats(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    let mut normalized = Vec::with_capacity(values.len());
    for value in values {
        let float = match value {
            CellValue::Null => CellValue::Null,
            CellValue::Integer(value) => CellValue::Float(value as f64),
            CellValue::Float(value) => CellValue::Float(value),
            CellValue::Boolean(value) => CellValue::Float(if value { 1.0 } else { 0.0 }),
            CellValue::Text(value) => match value.trim().parse::<f64>() {
                Ok(float) => CellValue::Float(float),
                Err(_) => {
                    return Err(ConversionError {
                        value,
                        target: CellType::Float,
                    })
                }
            },
            other => {
                return Err(ConversionError {
                    value: other.to_string(),
                    target: CellType::Float,
                })
            }
        };
        normalized.push(float);
    }
    Ok((CellType::Float, normalized))
}

/// Normalizes a column of datetime cells: dates widen to midnight datetimes
/// so every non-Null value conforms to the column type.
fn normalize_datetimes(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    let mut normalized = Vec::with_capacity(values.len());
    for value in values {
        let datetime = match value {
            CellValue::Null => CellValue::Null,
            CellValue::DateTime(value) => CellValue::DateTime(value),
            CellValue::Date(value) => {
                CellValue::DateTime(value.and_hms_opt(0, 0, 0).expect("Append 00:00:00"))
            }
            other => {
                return Err(ConversionError {
                    value: other.to_string(),
                    target: CellType::DateTime,
                })
            }
        };
        normalized.push(datetime);
    }
    Ok((CellType::DateTime, normalized))
}

/// Normalizes a column of date cells: values pass through unchanged.
fn normalize_dates(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    Ok((CellType::Date, values))
}

/// Normalizes a column of boolean cells: the empty-text sentinel becomes
/// Null, everything else becomes its truthiness (Null included, so a blank
/// cell in a boolean column reads as false).
fn normalize_booleans(
    values: Vec<CellValue>,
) -> Result<(CellType, Vec<CellValue>), ConversionError> {
    let normalized = values
        .into_iter()
        .map(|value| match value {
            CellValue::Text(text) if text.is_empty() => CellValue::Null,
            other => CellValue::Boolean(other.is_truthy()),
        })
        .collect();
    Ok((CellType::Boolean, normalized))
}
