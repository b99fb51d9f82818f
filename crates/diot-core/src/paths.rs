//! Resolution of user-supplied input and output locations.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use diot_output::OutputPaths;
use tracing::debug;

use crate::error::PathError;

/// Extension of the submission file.
pub const TXT_EXTENSION: &str = "txt";

/// Suffix appended to the input stem by [`default_output_name`].
pub const CONVERTED_SUFFIX: &str = "_converted";

/// Validated input file and the two report paths derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub outputs: OutputPaths,
}

impl ResolvedPaths {
    pub fn txt_output(&self) -> &Path {
        &self.outputs.txt
    }

    pub fn csv_output(&self) -> &Path {
        &self.outputs.csv
    }
}

/// Checks the three user-supplied locations and builds the output paths.
///
/// Every argument is trimmed first. `.txt` is appended to `output_name`
/// unless it already ends with it (any case). Checks run in a fixed order
/// and the first failure is returned.
pub fn resolve_paths(
    input: &str,
    output_dir: &str,
    output_name: &str,
) -> Result<ResolvedPaths, PathError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PathError::MissingInput);
    }
    let input = PathBuf::from(input);
    if !input.is_file() {
        return Err(PathError::InputNotFound { path: input });
    }

    let output_dir = output_dir.trim();
    if output_dir.is_empty() {
        return Err(PathError::MissingOutputDir);
    }
    let output_dir = PathBuf::from(output_dir);
    if has_txt_extension(&output_dir) {
        return Err(PathError::OutputDirLooksLikeFile { path: output_dir });
    }
    if !output_dir.is_dir() {
        return Err(PathError::OutputDirNotFound { path: output_dir });
    }

    let output_name = output_name.trim();
    if output_name.is_empty() {
        return Err(PathError::MissingOutputName);
    }
    let output_name = with_txt_extension(output_name);

    let txt = output_dir.join(output_name);
    match txt.parent() {
        Some(parent) if parent.is_dir() => {}
        _ => return Err(PathError::OutputParentMissing { path: txt }),
    }

    let outputs = OutputPaths::from_txt(txt);
    debug!(
        input = %input.display(),
        txt = %outputs.txt.display(),
        csv = %outputs.csv.display(),
        "paths resolved"
    );
    Ok(ResolvedPaths { input, outputs })
}

/// `<input stem>_converted.txt`.
pub fn default_output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    format!("{stem}{CONVERTED_SUFFIX}.{TXT_EXTENSION}")
}

fn has_txt_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TXT_EXTENSION))
}

fn with_txt_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(".txt") {
        name.to_string()
    } else {
        format!("{name}.{TXT_EXTENSION}")
    }
}
