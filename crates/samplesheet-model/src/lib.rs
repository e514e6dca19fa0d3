//! Sample sheet data model.
//!
//! This crate defines the types shared by ingestion and validation:
//!
//! - **Columns**: the positional column catalog and the required header set
//! - **Rows**: [`SampleRow`], one parsed data line with optional trailing fields
//! - **Sheet**: [`SampleSheet`], the header tokens plus rows in file order

pub mod columns;
pub mod error;
pub mod row;
pub mod sheet;

pub use columns::{COLUMNS, MAX_FIELDS, MIN_FIELDS, REQUIRED_HEADERS};
pub use error::{Result, RowError};
pub use row::SampleRow;
pub use sheet::SampleSheet;
