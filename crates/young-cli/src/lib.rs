//! CLI logic for the Young diagram tool.
//!
//! This module contains the core CLI logic: it parses a partition, applies
//! the requested transform, and reports the diagram and its invariants.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use young::{DiagramBuilder, YoungDiagram, YoungError};

/// Run the Young CLI application
///
/// Builds the report for the requested partition and writes it to the
/// output file, or to stdout when no output path is given.
///
/// # Errors
///
/// Returns `YoungError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Partition parsing errors
/// - Diagram errors such as transposing the empty diagram
pub fn run(args: &Args) -> Result<(), YoungError> {
    let report = report(args)?;

    match &args.output {
        Some(output) => {
            fs::write(output, &report)?;
            info!(output_file = output; "Report written successfully");
        }
        None => print!("{report}"),
    }

    Ok(())
}

/// Build the text report for the requested partition.
///
/// The report holds the rendered diagram (or its hook lengths), followed by
/// the partition, its size and its number of standard tableaux, and
/// optionally its covers in Young's lattice.
///
/// # Errors
///
/// See [`run`].
pub fn report(args: &Args) -> Result<String, YoungError> {
    info!(partition = args.partition, marks:% = args.marks; "Processing partition");

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    let mut diagram = builder.parse(&args.partition)?;
    if args.transpose {
        diagram = diagram.transpose()?;
        info!(partition:% = diagram; "Transposed diagram");
    }

    let body = if args.hooks {
        builder.render_hooks(&diagram)
    } else {
        builder.render(&diagram, args.marks)
    };

    let mut lines = Vec::new();
    if !body.is_empty() {
        lines.push(body);
    }
    lines.push(format!("partition: {diagram}"));
    lines.push(format!("size: {}", diagram.size()));
    lines.push(format!(
        "standard tableaux: {}",
        diagram.number_of_standard_tableaux()
    ));

    if args.covers {
        lines.push(format!(
            "covers above: {}",
            join_diagrams(&diagram.reachable_by_addition())
        ));
        lines.push(format!(
            "covers below: {}",
            join_diagrams(&diagram.reachable_by_removal())
        ));
    }

    let mut report = lines.join("\n");
    report.push('\n');
    Ok(report)
}

fn join_diagrams(diagrams: &[YoungDiagram]) -> String {
    if diagrams.is_empty() {
        return "none".to_string();
    }
    diagrams
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
