//! Design and disease matrix I/O.
//!
//! Reads the scaled design table (CSV with a header row) and writes the
//! eight-column disease matrix. The input delimiter is auto-detected;
//! the output is always comma-separated with fixed six-decimal values.

use std::io::Write;
use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::models::{DesignPoint, DiseaseRow};

/// Number of design columns the transform consumes.
pub const DESIGN_COLUMNS: usize = 6;

/// Output header for the disease matrix, in column order.
pub const DISEASE_HEADER: [&str; 8] = [
    "beta[2]",
    "beta[3]",
    "progress[1]",
    "progress[2]",
    "progress[3]",
    "scale_rate[1]",
    "scale_rate[2]",
    "repeats",
];

// =============================================================================
// Design Table
// =============================================================================

/// A parsed design table with parsing metadata.
#[derive(Debug, Clone)]
pub struct DesignTable {
    /// Design points in file order.
    pub points: Vec<DesignPoint>,
    /// Column headers as they appear in the file.
    pub headers: Vec<String>,
    /// Detected or used delimiter.
    pub delimiter: char,
}

impl DesignTable {
    /// Number of header columns beyond the six the transform consumes.
    pub fn extra_columns(&self) -> usize {
        self.headers.len().saturating_sub(DESIGN_COLUMNS)
    }
}

/// Detect the delimiter by counting occurrences in the first line
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Load a design table from disk with delimiter auto-detection.
pub fn load_design<P: AsRef<Path>>(path: P) -> TableResult<DesignTable> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let delimiter = detect_delimiter(&content);
    read_design(&content, delimiter)
}

/// Parse design table content with an explicit delimiter.
///
/// The first line is the header and must name at least six columns.
/// Data rows are parsed positionally; header names only feed error
/// messages and the extra-column count.
pub fn read_design(content: &str, delimiter: char) -> TableResult<DesignTable> {
    if content.trim().is_empty() {
        return Err(TableError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.len() < DESIGN_COLUMNS {
        return Err(TableError::MissingColumns {
            line: 1,
            expected: DESIGN_COLUMNS,
            found: headers.len(),
        });
    }

    let mut points = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        // Whitespace-only lines are not data
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }

        if record.len() < DESIGN_COLUMNS {
            return Err(TableError::MissingColumns {
                line,
                expected: DESIGN_COLUMNS,
                found: record.len(),
            });
        }

        let mut fields = [0.0; DESIGN_COLUMNS];
        for (i, slot) in fields.iter_mut().enumerate() {
            let raw = record[i].trim();
            *slot = raw.parse().map_err(|_| TableError::BadField {
                line,
                column: headers[i].clone(),
                value: raw.to_string(),
            })?;
        }

        points.push(DesignPoint::from_fields(fields));
    }

    Ok(DesignTable {
        points,
        headers,
        delimiter,
    })
}

// =============================================================================
// Disease Matrix Output
// =============================================================================

/// Write the disease matrix: fixed header, one line per row,
/// comma-separated, six decimal places.
pub fn write_disease<W: Write>(writer: W, rows: &[DiseaseRow]) -> TableResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(DISEASE_HEADER)?;
    for row in rows {
        wtr.write_record(row.fields().iter().map(|v| format_rate(*v)))?;
    }
    wtr.flush()?;

    Ok(())
}

/// Fixed-point output format, six decimal places.
fn format_rate(value: f64) -> String {
    format!("{:.6}", value)
}

// =============================================================================
// Tests
// =============================================================================
