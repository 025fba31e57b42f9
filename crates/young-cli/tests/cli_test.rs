use std::fs;

use tempfile::tempdir;

use young_cli::{Args, report, run};
use young::{DiagramError, Marks, YoungError};

fn args(partition: &str) -> Args {
    Args {
        partition: partition.to_string(),
        marks: Marks::None,
        transpose: false,
        hooks: false,
        covers: false,
        output: None,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn report_plain_diagram() {
    let output = report(&args("3,2")).expect("report should succeed");

    assert_eq!(
        output,
        "■ ■ ■\n■ ■\npartition: [3, 2]\nsize: 5\nstandard tableaux: 5\n"
    );
}

#[test]
fn report_with_addable_marks_and_covers() {
    let cfg = Args {
        marks: Marks::Addable,
        covers: true,
        ..args("2,1")
    };
    let output = report(&cfg).expect("report should succeed");

    assert!(output.starts_with("■ ■ +\n■ +\n+\n"));
    assert!(output.contains("covers above: [3, 1] [2, 2] [2, 1, 1]\n"));
    assert!(output.contains("covers below: [1, 1] [2]\n"));
}

#[test]
fn report_transposed_hooks() {
    let cfg = Args {
        transpose: true,
        hooks: true,
        ..args("3,1")
    };
    let output = report(&cfg).expect("report should succeed");

    assert!(output.starts_with("4 1\n2\n1\n"));
    assert!(output.contains("partition: [2, 1, 1]\n"));
    assert!(output.contains("standard tableaux: 3\n"));
}

#[test]
fn report_empty_diagram() {
    let cfg = Args {
        covers: true,
        ..args("[]")
    };
    let output = report(&cfg).expect("report should succeed");

    assert_eq!(
        output,
        "partition: []\nsize: 0\nstandard tableaux: 1\ncovers above: [1]\ncovers below: none\n"
    );
}

#[test]
fn transposing_empty_diagram_fails() {
    let cfg = Args {
        transpose: true,
        ..args("")
    };
    let err = report(&cfg).unwrap_err();

    assert!(matches!(
        err,
        YoungError::Diagram(DiagramError::EmptyDiagram { .. })
    ));
}

#[test]
fn invalid_partition_fails() {
    let err = report(&args("1,2")).unwrap_err();

    assert!(matches!(
        err,
        YoungError::Diagram(DiagramError::InvalidPartition { .. })
    ));
}

#[test]
fn run_writes_output_file_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    let output_path = temp_dir.path().join("diagram.txt");
    fs::write(&config_path, "[render]\ncell = \"#\"\nremovable = \"x\"\n")
        .expect("Failed to write config");

    let cfg = Args {
        marks: Marks::Removable,
        output: Some(output_path.to_string_lossy().to_string()),
        config: Some(config_path.to_string_lossy().to_string()),
        ..args("2,2")
    };
    run(&cfg).expect("run should succeed");

    let written = fs::read_to_string(&output_path).expect("Failed to read output");
    assert!(written.starts_with("# #\n# x\n"));
}

#[test]
fn run_with_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let cfg = Args {
        config: Some(
            temp_dir
                .path()
                .join("missing.toml")
                .to_string_lossy()
                .to_string(),
        ),
        ..args("1")
    };

    assert!(matches!(run(&cfg), Err(YoungError::Config(_))));
}

#[test]
fn oversized_partition_fails_cleanly() {
    let err = report(&args("100000000000")).unwrap_err();

    assert!(matches!(err, YoungError::Parse { .. }));
}

#[test]
fn report_to_stdout_when_no_output_path() {
    assert!(args("2,1").output.is_none());
    run(&args("2,1")).expect("run should succeed");
}
