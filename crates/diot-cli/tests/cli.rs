//! Argument parsing and command behaviour of the `diot` binary.

use std::fs;
use std::path::Path;

use clap::Parser;
use diot_cli::cli::{Cli, Command, LogFormatArg};
use diot_cli::commands::{load_profile, run_convert};
use diot_core::PathError;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("diot").chain(args.iter().copied())).unwrap()
}

#[test]
fn parses_convert_with_options() {
    let cli = parse(&[
        "convert",
        "enero.txt",
        "--output-dir",
        "out",
        "--output-name",
        "diot_enero",
        "--dry-run",
        "--log-data",
        "--log-format",
        "json",
    ]);
    assert!(cli.log_data);
    assert!(matches!(cli.log_format, LogFormatArg::Json));
    match cli.command {
        Command::Convert(args) => {
            assert_eq!(args.input.to_str(), Some("enero.txt"));
            assert_eq!(args.output_dir.as_deref().and_then(Path::to_str), Some("out"));
            assert_eq!(args.output_name.as_deref(), Some("diot_enero"));
            assert!(args.dry_run);
            assert!(args.profile.is_none());
        }
        _ => panic!("expected convert"),
    }
}

#[test]
fn convert_requires_input() {
    assert!(Cli::try_parse_from(["diot", "convert"]).is_err());
}

#[test]
fn parses_schema_and_profile() {
    let cli = parse(&["schema", "--profile", "custom.toml"]);
    assert!(matches!(cli.command, Command::Schema(ref args) if args.profile.is_some()));
    let cli = parse(&["-q", "profile"]);
    assert!(matches!(cli.command, Command::Profile));
}

#[test]
fn convert_defaults_to_input_folder_and_name() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("enero.txt");
    fs::write(&input, "RfcEmisor~Monto\nabc123~100.60\n").unwrap();
    let cli = parse(&["convert", input.to_str().unwrap()]);
    let Command::Convert(args) = cli.command else {
        panic!("expected convert");
    };

    let report = run_convert(&args, false).unwrap();

    assert_eq!(report.rows, 1);
    assert_eq!(report.txt_output, dir.path().join("enero_converted.txt"));
    assert_eq!(
        fs::read_to_string(dir.path().join("enero_converted.txt")).unwrap(),
        "04|03|ABC123|||||101|16||||||||||||||\n"
    );
    assert!(dir.path().join("enero_converted.csv").exists());
}

#[test]
fn convert_reports_path_errors_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("enero.txt");
    fs::write(&input, "RfcEmisor~Monto\n").unwrap();
    let cli = parse(&[
        "convert",
        input.to_str().unwrap(),
        "--output-dir",
        input.to_str().unwrap(),
    ]);
    let Command::Convert(args) = cli.command else {
        panic!("expected convert");
    };

    let err = run_convert(&args, false).unwrap_err();

    assert_eq!(
        err.downcast_ref::<PathError>(),
        Some(&PathError::OutputDirLooksLikeFile { path: input.clone() })
    );
    assert_eq!(
        format!("{err:#}"),
        "Output folder looks like a file. Please choose a folder, not a file."
    );
}

#[test]
fn custom_profile_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.toml");
    let mut rendered = diot_model::FilingProfile::diot().to_toml().unwrap();
    rendered = rendered.replace("name = \"DIOT\"", "name = \"DIOT-2027\"");
    fs::write(&path, rendered).unwrap();

    let profile = load_profile(Some(&path)).unwrap();

    assert_eq!(profile.profile.name, "DIOT-2027");
    assert_eq!(profile.schema().len(), 23);
}
