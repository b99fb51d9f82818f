//! Metadata export reading with whole-table structural validation.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::header::{HeaderIndex, duplicate_names, split_line};

/// One data line split into fields. Read-only once the table is built.
pub type RawRow = Vec<String>;

/// Parsed metadata export: header, name index, and rectangular data rows.
#[derive(Debug, Clone)]
pub struct MetadataTable {
    /// File the table was read from.
    pub path: PathBuf,
    /// Header column names in file order.
    pub columns: Vec<String>,
    /// Name-to-position index built from `columns`.
    pub index: HeaderIndex,
    /// Data rows, each exactly `columns.len()` fields wide.
    pub rows: Vec<RawRow>,
}

impl MetadataTable {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Rejects files that start with a UTF-16 byte-order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a tilde-delimited metadata export.
///
/// The first line is the header. Every later line is a data row. All rows
/// are read before any of them is checked, then every row must be as wide as
/// the header. The file is closed on every exit path.
pub fn read_metadata(path: &Path) -> Result<MetadataTable> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    debug!(path = %path.display(), "reading metadata export");
    parse_metadata(BufReader::new(file), path)
}

/// Parses a metadata export from any buffered reader.
///
/// `path` is only used for error reporting and logging.
pub fn parse_metadata<R: BufRead>(reader: R, path: &Path) -> Result<MetadataTable> {
    let read_error = |source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line.map_err(read_error)?,
        None => {
            return Err(IngestError::EmptyInput {
                path: path.to_path_buf(),
            });
        }
    };
    let header_line = header_line
        .strip_prefix('\u{feff}')
        .unwrap_or(&header_line);
    if header_line.trim().is_empty() {
        return Err(IngestError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let columns = split_line(header_line);
    let duplicates = duplicate_names(&columns);
    if !duplicates.is_empty() {
        warn!(
            path = %path.display(),
            columns = ?duplicates,
            "header repeats column names; the last occurrence of each is used"
        );
    }
    let index = HeaderIndex::from_columns(&columns);

    let mut rows = Vec::new();
    for line in lines {
        let line = line.map_err(read_error)?;
        rows.push(split_line(&line));
    }

    validate_rows(&rows, columns.len(), path)?;

    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "metadata export parsed"
    );

    Ok(MetadataTable {
        path: path.to_path_buf(),
        columns,
        index,
        rows,
    })
}

/// Checks that every row has `want` fields.
///
/// Reports the first offending row with 1-based data-row numbering.
pub fn validate_rows(rows: &[RawRow], want: usize, path: &Path) -> Result<()> {
    match rows.iter().position(|row| row.len() != want) {
        Some(i) => Err(IngestError::Format {
            path: path.to_path_buf(),
            row: i + 1,
            got: rows[i].len(),
            want,
        }),
        None => Ok(()),
    }
}
