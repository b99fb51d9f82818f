//! End-to-end conversion tests.

use std::fs;
use std::path::{Path, PathBuf};

use diot_core::{ConvertError, ConvertOptions, Converter, convert, transform};
use diot_ingest::IngestError;
use diot_model::{FilingProfile, RuleSpec};
use insta::assert_snapshot;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn input(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("metadata.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    fn txt(&self) -> PathBuf {
        self.dir.path().join("report.txt")
    }

    fn csv(&self) -> PathBuf {
        self.dir.path().join("report.csv")
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// ============================================================================
// Successful conversions
// ============================================================================

#[test]
fn converts_reference_row() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto\nabc123~100.60\n");

    let report = transform(&input, &fx.txt()).unwrap();

    assert_eq!(report.rows, 1);
    assert_eq!(report.input_columns, 2);
    assert_eq!(report.csv_output, fx.csv());
    assert!(report.wrote_files());
    assert_eq!(
        read(&fx.txt()),
        "04|03|ABC123|||||101|16||||||||||||||\n"
    );
    assert_snapshot!(read(&fx.csv()), @r"
    TipoTercero,TipoOperacion,RFCProveedor,NIF,NombreExtranjero,Pais,JurisdiccionFiscal,ValorTotal,IVANoAcreditable,ValorIVA11,IVAPagado11,ValorFronterNorte,IVAFronteraNorte,ValorFronteraSur,IVAFronteraSur,ValorImportacion,IVAImportacion,ValorImportacionExentos,ValorExentosIVA,ValorIVA0,ValorNoIVA,IVARetenidoContribuyente,IVAPagadoGastosGeneral
    04,03,ABC123,,,,,101,16,,,,,,,,,,,,,,
    ");
}

#[test]
fn copies_passthrough_columns_and_drops_the_rest() {
    let fx = Fixture::new();
    let input = fx.input(
        "Uuid~RfcEmisor~NIF~Serie~Monto\r\n\
         u-1 ~ xyz9 ~ N-1 ~ A ~ 9.60\r\n",
    );

    transform(&input, &fx.txt()).unwrap();

    assert_eq!(
        read(&fx.txt()),
        "04|03|XYZ9|N-1||||10|2||||||||||||||\n"
    );
}

#[test]
fn row_counts_match_in_both_files() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto\na~1\nb~2.51\nc~\u{20}3.5\n");

    let report = transform(&input, &fx.txt()).unwrap();

    assert_eq!(report.rows, 3);
    assert_eq!(read(&fx.txt()).lines().count(), 3);
    let csv = read(&fx.csv());
    let mut lines = csv.lines();
    assert_eq!(
        lines.next().map(|l| l.split(',').count()),
        Some(23)
    );
    assert_eq!(lines.count(), 3);
    assert!(!read(&fx.txt()).contains("TipoTercero"));
}

#[test]
fn header_only_input_writes_header_only_csv() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto\n");

    let report = transform(&input, &fx.txt()).unwrap();

    assert_eq!(report.rows, 0);
    assert_eq!(read(&fx.txt()), "");
    assert_eq!(read(&fx.csv()).lines().count(), 1);
}

#[test]
fn reruns_are_byte_identical() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto~NIF\nabc~10.51~x\ndef~10.50~y\n");

    let first = transform(&input, &fx.txt()).unwrap();
    let first_txt = fs::read(fx.txt()).unwrap();
    let second = transform(&input, &fx.txt()).unwrap();

    assert_eq!(first.txt_sha256, second.txt_sha256);
    assert_eq!(first.csv_sha256, second.csv_sha256);
    assert_eq!(first_txt, fs::read(fx.txt()).unwrap());
}

#[test]
fn custom_profile_drives_layout() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto~Fecha\nabc~99.99~2026-01-31\n");
    let profile = FilingProfile::from_toml_str(
        r#"
[profile]
schema = "diot.filing-profile"
schema_version = 1
name = "short"

[output]
target_columns = ["TipoTercero", "RFCProveedor", "ValorTotal", "Fecha"]

[rename]
RfcEmisor = "RFCProveedor"
Monto = "ValorTotal"

[[rules]]
kind = "constant"
column = "TipoTercero"
value = "05"

[[rules]]
kind = "rounded_amount"
column = "ValorTotal"
source = "ValorTotal"
"#,
    )
    .unwrap();

    convert(&input, &fx.txt(), &profile, &ConvertOptions::default()).unwrap();

    assert_eq!(read(&fx.txt()), "05|abc|100|2026-01-31\n");
    assert_eq!(
        read(&fx.csv()),
        "TipoTercero,RFCProveedor,ValorTotal,Fecha\n05,abc,100,2026-01-31\n"
    );
}

#[test]
fn dry_run_writes_nothing() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto\nabc~1\n");
    let options = ConvertOptions::default().with_dry_run(true);

    let report = Converter::diot()
        .unwrap()
        .convert(&input, &fx.txt(), &options)
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.rows, 1);
    assert_eq!(report.txt_sha256, None);
    assert!(!fx.txt().exists());
    assert!(!fx.csv().exists());
}

// ============================================================================
// Failures leave no output behind
// ============================================================================

#[test]
fn irregular_row_fails_before_writing() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto\nabc~1\nabc\n");

    let err = transform(&input, &fx.txt()).unwrap_err();

    match err {
        ConvertError::Ingest(IngestError::Format { row, got, want, .. }) => {
            assert_eq!((row, got, want), (2, 1, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!fx.txt().exists());
    assert!(!fx.csv().exists());
}

#[test]
fn non_numeric_amount_fails_before_writing() {
    let fx = Fixture::new();
    let input = fx.input("RfcEmisor~Monto\nabc~1\ndef~mil\n");

    let err = transform(&input, &fx.txt()).unwrap_err();

    assert!(matches!(err, ConvertError::Derivation { row: 2, .. }));
    assert!(!fx.txt().exists());
    assert!(!fx.csv().exists());
}

#[test]
fn empty_input_is_rejected() {
    let fx = Fixture::new();
    let input = fx.input("");

    let err = transform(&input, &fx.txt()).unwrap_err();

    assert!(matches!(err, ConvertError::Ingest(IngestError::EmptyInput { .. })));
    assert!(!fx.txt().exists());
}

#[test]
fn bad_rules_are_reported_before_reading_input() {
    let fx = Fixture::new();
    let mut profile = FilingProfile::diot();
    profile.rules.push(RuleSpec::constant("IVA", "0"));

    // The input does not exist; the rule set is checked first.
    let missing = fx.dir.path().join("missing.txt");
    let err = convert(&missing, &fx.txt(), &profile, &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::Configuration(_)));
    assert!(!fx.txt().exists());
}

#[test]
fn missing_input_is_an_io_error() {
    let fx = Fixture::new();
    let missing = fx.dir.path().join("missing.txt");

    let err = transform(&missing, &fx.txt()).unwrap_err();

    assert!(matches!(
        err,
        ConvertError::Ingest(IngestError::FileNotFound { .. })
    ));
}
