//! Outcome of one conversion.

use std::path::PathBuf;

/// What a conversion read, derived, and wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub txt_output: PathBuf,
    pub csv_output: PathBuf,
    /// Header width of the input file.
    pub input_columns: usize,
    /// Data rows converted; equals the row count of each output file.
    pub rows: usize,
    /// Hex SHA-256 of the TXT file; `None` on a dry run.
    pub txt_sha256: Option<String>,
    /// Hex SHA-256 of the CSV file; `None` on a dry run.
    pub csv_sha256: Option<String>,
    pub dry_run: bool,
}

impl ConversionReport {
    /// Whether both report files were written.
    pub fn wrote_files(&self) -> bool {
        self.txt_sha256.is_some() && self.csv_sha256.is_some()
    }
}
