use thiserror::Error;

/// Main error type for the sheet2table engine.
/// Aggregates the column-level and internal-consistency failures the
/// conversion can surface.
#[derive(Error, Debug)]
pub enum Sheet2TableError {
    #[error("{0}")]
    WithContextError(String),

    /// A raw value could not be coerced to the column's canonical type.
    /// Aborts the whole conversion; no partial table is emitted.
    #[error("{0}")]
    ConversionError(#[from] crate::table::normalize::ConversionError),

    /// The classifier produced a type with no registry entry. A defect in
    /// the fixed rule set; fatal.
    #[error("{0}")]
    InternalConsistencyError(#[from] crate::table::column::InternalConsistencyError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, Sheet2TableError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| Sheet2TableError::WithContextError(format!("{}: {}", message, e)))
    }
}
