//! High-level pipeline API: design matrix in, disease matrix out.
//!
//! This module combines all steps: loading the design table,
//! transforming every row, and writing the disease matrix.
//!
//! # Example
//!
//! ```rust,ignore
//! use epimorph::pipeline::{run, RunOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = run(
//!         Path::new("design.csv"),
//!         Path::new("disease.csv"),
//!         RunOptions::default(),
//!     )?;
//!
//!     println!("Transformed {} rows", summary.rows);
//!     Ok(())
//! }
//! ```

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult, TableError};
use crate::models::{DesignPoint, DiseaseRow};
use crate::report;
use crate::table::{load_design, write_disease, DESIGN_COLUMNS};
use crate::transform::disease::epidemiological_to_disease;

/// Options for a pipeline run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOptions {
    /// Overwrite the output file if it already exists
    pub force: bool,
}

/// Result of a complete pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Number of disease rows written
    pub rows: usize,

    /// Detected input delimiter
    pub delimiter: char,

    /// Input column headers
    pub headers: Vec<String>,

    /// Header columns beyond the six the transform consumes
    pub extra_columns: usize,
}

/// Run the full transformation pipeline.
///
/// This is the main entry point. It:
/// 1. Loads the design table with delimiter auto-detection
/// 2. Transforms every row, stopping at the first invalid one
/// 3. Creates the output file and writes the disease matrix
///
/// The output file is created only after the whole design has
/// transformed cleanly, so a failed run leaves no partial output.
///
/// # Arguments
/// * `input` - Path to the design matrix CSV
/// * `output` - Path for the disease matrix CSV
/// * `options` - Run options
///
/// # Returns
/// A `RunSummary` with the row count and input metadata.
pub fn run(input: &Path, output: &Path, options: RunOptions) -> PipelineResult<RunSummary> {
    if options.force {
        report::warning("force passed, disease matrix will be over-written if it exists");
    }

    report::info(format!("📖 Reading design matrix: {}", input.display()));
    let table = load_design(input).map_err(|source| PipelineError::Load {
        path: input.to_path_buf(),
        source,
    })?;

    report::success(format!(
        "Detected separator: '{}'",
        format_delimiter(table.delimiter)
    ));
    report::success(format!("Read {} design points", table.points.len()));
    report::info(format!("Columns: {}", table.headers.join(", ")));

    let extra_columns = table.extra_columns();
    if extra_columns > 0 {
        // TODO: Route extra design columns through to the output.
        report::warning(format!(
            "{} extra column(s) beyond the {} used are ignored",
            extra_columns, DESIGN_COLUMNS
        ));
    }

    if table.points.is_empty() {
        return Err(PipelineError::EmptyDesign);
    }

    report::info("⚙️  Transforming design points...");
    let rows = transform_design(&table.points)?;
    report::success(format!("Transformed {} rows", rows.len()));

    report::info(format!("💾 Writing disease matrix: {}", output.display()));
    let file = open_output(output, options.force)?;
    write_disease(file, &rows).map_err(|source| PipelineError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    report::success(format!("Wrote {} rows", rows.len()));

    Ok(RunSummary {
        rows: rows.len(),
        delimiter: table.delimiter,
        headers: table.headers,
        extra_columns,
    })
}

/// Transform a slice of design points into disease rows.
///
/// Stops at the first invalid point; the error carries its 1-based row
/// number within the design data.
pub fn transform_design(points: &[DesignPoint]) -> PipelineResult<Vec<DiseaseRow>> {
    let mut rows = Vec::with_capacity(points.len());

    for (index, point) in points.iter().enumerate() {
        let rates = epidemiological_to_disease(point.incubation, point.infect_time, point.r_zero)
            .map_err(|source| PipelineError::Row {
                row: index + 1,
                source,
            })?;
        rows.push(DiseaseRow::new(rates, point));
    }

    Ok(rows)
}

/// Create the output file, refusing to clobber an existing one unless
/// forced.
fn open_output(path: &Path, force: bool) -> PipelineResult<File> {
    let mut opts = OpenOptions::new();
    opts.write(true);
    if force {
        opts.create(true).truncate(true);
    } else {
        opts.create_new(true);
    }

    opts.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            PipelineError::OutputExists {
                path: path.to_path_buf(),
            }
        } else {
            PipelineError::Write {
                path: path.to_path_buf(),
                source: TableError::Io(e),
            }
        }
    })
}

/// Format delimiter for display
fn format_delimiter(d: char) -> &'static str {
    match d {
        ';' => ";",
        ',' => ",",
        '\t' => "TAB",
        '|' => "|",
        _ => "?",
    }
}
