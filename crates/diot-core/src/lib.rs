//! DIOT conversion entry points.
//!
//! Ties the stages together: the metadata export is read and validated,
//! every row is mapped and derived against a filing profile, and only then
//! are the pipe-delimited and comma-delimited reports written.

#![deny(unsafe_code)]

mod checksum;
mod convert;
mod error;
mod paths;
mod report;

pub use checksum::file_sha256;
pub use convert::{ConvertOptions, Converter, REDACTED, convert, transform};
pub use error::{ConvertError, PathError, Result};
pub use paths::{
    CONVERTED_SUFFIX, ResolvedPaths, TXT_EXTENSION, default_output_name, resolve_paths,
};
pub use report::ConversionReport;
