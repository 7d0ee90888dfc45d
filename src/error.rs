//! Error types for the design-to-disease transformation pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`TransformError`] - epidemiological parameter errors
//! - [`TableError`] - design table parsing errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors during the epidemiological-to-disease transform.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Incubation period must be strictly positive.
    #[error("Invalid incubation period: {value} (must be > 0)")]
    InvalidIncubation { value: f64 },

    /// Infectious period must be strictly positive.
    #[error("Invalid infectious period: {value} (must be > 0)")]
    InvalidInfectiousPeriod { value: f64 },

    /// Basic reproduction number must be non-negative.
    #[error("Invalid R0: {value} (must be >= 0)")]
    InvalidRZero { value: f64 },

    /// Infectious period too short to split into two stages.
    #[error("Infectious period {value} leaves no stage-2 duration (must be > 1)")]
    StageTwoCollapse { value: f64 },

    /// Doubling-time quadratic has no real root.
    #[error("Doubling-time discriminant is negative: {value}")]
    NegativeDiscriminant { value: f64 },
}

// =============================================================================
// Design Table Errors
// =============================================================================

/// Errors during design table parsing.
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV format.
    #[error("Invalid CSV format: {0}")]
    Malformed(#[from] csv::Error),

    /// Empty file.
    #[error("Design table is empty")]
    Empty,

    /// Row (or header) is missing required columns.
    #[error("Line {line}: expected at least {expected} columns, found {found}")]
    MissingColumns {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Field could not be parsed as a number.
    #[error("Line {line}, column '{column}' (value '{value}'): not a number")]
    BadField {
        line: u64,
        column: String,
        value: String,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::transform::pipeline::run`].
/// It wraps all lower-level errors and adds pipeline-specific variants.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Design matrix could not be loaded.
    #[error("Cannot read design matrix {}: {source}", path.display())]
    Load { path: PathBuf, source: TableError },

    /// Disease matrix could not be written.
    #[error("Cannot write disease matrix {}: {source}", path.display())]
    Write { path: PathBuf, source: TableError },

    /// Design matrix parsed but holds no data rows.
    #[error("Design matrix has no data rows")]
    EmptyDesign,

    /// A design row failed the transform.
    #[error("Design row {row}: {source}")]
    Row { row: usize, source: TransformError },

    /// Output file already exists and `--force` was not given.
    #[error("Disease matrix already exists: {} (pass --force to overwrite)", path.display())]
    OutputExists { path: PathBuf },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for design table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
