use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use diot_core::{ConversionReport, ConvertOptions, Converter, default_output_name, resolve_paths};
use diot_model::FilingProfile;

use crate::cli::{ConvertArgs, SchemaArgs};
use crate::summary::schema_table;

pub fn run_convert(args: &ConvertArgs, log_data: bool) -> Result<ConversionReport> {
    let span = info_span!("command", name = "convert");
    let _guard = span.enter();

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let output_name = args
        .output_name
        .clone()
        .unwrap_or_else(|| default_output_name(&args.input));
    let paths = resolve_paths(
        &args.input.to_string_lossy(),
        &output_dir.to_string_lossy(),
        &output_name,
    )?;

    let profile = load_profile(args.profile.as_deref())?;
    let converter = Converter::new(&profile)?;
    let options = ConvertOptions::default()
        .with_dry_run(args.dry_run)
        .with_log_values(log_data);
    let report = converter.convert(&paths.input, paths.txt_output(), &options)?;
    Ok(report)
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let profile = load_profile(args.profile.as_deref())?;
    println!("Profile: {}", profile.profile.name);
    println!("{}", schema_table(&profile));
    Ok(())
}

pub fn run_profile() -> Result<()> {
    let rendered = FilingProfile::diot()
        .to_toml()
        .context("render built-in profile")?;
    print!("{rendered}");
    Ok(())
}

/// Profile from `path`, or the built-in DIOT profile.
pub fn load_profile(path: Option<&Path>) -> Result<FilingProfile> {
    match path {
        Some(path) => Ok(FilingProfile::load(path)?),
        None => {
            debug!("using built-in filing profile");
            Ok(FilingProfile::diot())
        }
    }
}

/// Folder holding `input`, or the current folder for a bare file name.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
