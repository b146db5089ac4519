//! # sheet2table
//!
//! Column type-inference and normalization engine for flattening a
//! spreadsheet's columnar data into a uniformly-typed table, ready for
//! text-based serialization such as CSV. Reading the spreadsheet container
//! and encoding the output are external collaborators; this crate only
//! decides one canonical type per column and coerces every cell to it.
//!
//! ## Features
//!
//! - **Tagged cell values**: Null, Text, Integer, Float, DateTime, Date and
//!   Boolean cells as an explicit variant type, no runtime reflection
//! - **Type inference**: one canonical type per column from the set of cell
//!   types present, with numeric (integer → float) and temporal
//!   (date → datetime) widening and a text fallback for mixed columns
//! - **Fixed normalizer registry**: one immutable coercion routine per
//!   canonical type, wired at compile time
//! - **Header truncation**: conversion stops at the first column whose
//!   header cell is empty, discarding everything after it
//! - **All-or-nothing conversion**: a coercion failure on any column aborts
//!   the whole table
//!
//! ## Example
//!
//! ```
//! use sheet2table::{convert, CellType, CellValue};
//!
//! let table = convert(vec![
//!     vec![
//!         CellValue::Text("Score".to_owned()),
//!         CellValue::Integer(1),
//!         CellValue::Float(2.5),
//!         CellValue::Null,
//!     ],
//! ])?;
//!
//! let column = &table.columns()[0];
//! assert_eq!(column.header, "Score");
//! assert_eq!(column.normalized_type, CellType::Float);
//! # Ok::<(), sheet2table::Sheet2TableError>(())
//! ```

mod error;
mod sheet;
mod table;

pub use crate::error::ResultMessage;
pub use crate::error::Sheet2TableError;
pub use crate::sheet::cell::CellType;
pub use crate::sheet::cell::CellValue;
pub use crate::sheet::RawColumn;
pub use crate::table::column::build_column;
pub use crate::table::column::classify;
pub use crate::table::column::Column;
pub use crate::table::column::InternalConsistencyError;
pub use crate::table::convert;
pub use crate::table::normalize::normalizer_for;
pub use crate::table::normalize::ConversionError;
pub use crate::table::normalize::NormalizeFn;
pub use crate::table::Table;
