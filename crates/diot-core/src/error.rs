//! Error types for the conversion entry points.

use std::path::PathBuf;

use diot_ingest::IngestError;
use diot_model::ModelError;
use diot_output::OutputError;
use diot_transform::TransformError;
use thiserror::Error;

/// Rejections of user-supplied input and output locations.
///
/// Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Please select an input .txt file.")]
    MissingInput,

    #[error("The selected input file does not exist (or is not a file).")]
    InputNotFound { path: PathBuf },

    #[error("Please select an output folder.")]
    MissingOutputDir,

    #[error("Output folder looks like a file. Please choose a folder, not a file.")]
    OutputDirLooksLikeFile { path: PathBuf },

    #[error("The selected output folder does not exist (or is not a folder).")]
    OutputDirNotFound { path: PathBuf },

    #[error("Please enter an output filename (e.g., output.txt).")]
    MissingOutputName,

    #[error("Parent directory of the output file does not exist.")]
    OutputParentMissing { path: PathBuf },
}

/// Errors that can stop a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Paths(#[from] PathError),

    /// Filing profile failed validation.
    #[error(transparent)]
    Profile(#[from] ModelError),

    /// Engine could not be built from the profile's rules.
    #[error(transparent)]
    Configuration(#[from] TransformError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// A data row could not be derived.
    #[error("row {row}: {source}")]
    Derivation {
        /// 1-based data row number; the header line is not counted.
        row: usize,
        #[source]
        source: TransformError,
    },

    #[error(transparent)]
    Output(#[from] OutputError),

    /// A written report file could not be read back for its digest.
    #[error("failed to compute checksum of {path}: {source}")]
    Checksum {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_error_names_row_and_column() {
        let err = ConvertError::Derivation {
            row: 4,
            source: TransformError::NumericParse {
                column: "ValorTotal".to_string(),
                value: "n/a".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "row 4: column ValorTotal: value 'n/a' is not a number"
        );
    }

    #[test]
    fn test_path_errors_pass_through() {
        let err = ConvertError::from(PathError::MissingOutputName);
        assert_eq!(
            err.to_string(),
            "Please enter an output filename (e.g., output.txt)."
        );
    }
}
