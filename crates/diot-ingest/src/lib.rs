//! Metadata export ingestion.
//!
//! Reads the tilde-delimited tax-metadata export into a header index and a
//! rectangular table of raw string rows. The whole table is validated before
//! it is handed on, so later stages never see a ragged row.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use diot_ingest::read_metadata;
//!
//! let table = read_metadata(Path::new("metadata.txt"))?;
//! for row in &table.rows {
//!     assert_eq!(row.len(), table.column_count());
//! }
//! ```

mod error;
mod header;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Header ===
pub use header::{FIELD_DELIMITER, HeaderIndex, split_line};

// === Reading ===
pub use reader::{
    MetadataTable, RawRow, parse_metadata, read_metadata, validate_encoding, validate_rows,
};
