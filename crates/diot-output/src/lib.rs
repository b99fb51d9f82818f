//! Report output generation.
//!
//! Every report row is written to two files in lockstep:
//!
//! - a headerless pipe-delimited `.txt` file, the fixed format submitted to
//!   the tax authority;
//! - a comma-delimited `.csv` file with the target schema as first line,
//!   for review in spreadsheet tools.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    CSV_DELIMITER, DualFormatWriter, OutputPaths, TXT_DELIMITER, WriteSummary, csv_path_for,
    write_report,
};
