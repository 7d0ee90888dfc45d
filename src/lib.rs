//! # Epimorph - Epidemiological design to disease parameter transformation
//!
//! Epimorph transforms a scaled design matrix of epidemiological
//! parameters (incubation period, infectious period, R0) into the
//! per-stage disease progression rates a simulator consumes.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Design CSV  │────▶│    Table    │────▶│  Transform  │────▶│ Disease CSV │
//! │ (6+ cols)   │     │ (auto-sep)  │     │ (per row)   │     │ (8 cols)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use epimorph::{run, RunOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let summary = run(
//!         Path::new("design.csv"),
//!         Path::new("disease.csv"),
//!         RunOptions::default(),
//!     )
//!     .unwrap();
//!     println!("Transformed {} rows", summary.rows);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (DesignPoint, DiseaseRates, DiseaseRow)
//! - [`table`] - Design table parsing and disease matrix output
//! - [`transform`] - Epidemiological transform and pipeline
//! - [`report`] - Progress reporting

// Core modules
pub mod error;
pub mod models;

// Table I/O
pub mod table;

// Transformation
pub mod transform;

// Progress reporting
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    PipelineError, PipelineResult, TableError, TableResult, TransformError, TransformResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{DesignPoint, DiseaseRates, DiseaseRow};

// =============================================================================
// Re-exports - Table I/O
// =============================================================================

pub use table::{
    detect_delimiter, load_design, read_design, write_disease, DesignTable, DESIGN_COLUMNS,
    DISEASE_HEADER,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::disease::{doubling_time, epidemiological_to_disease, STAGE_ONE_DURATION};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{run, transform_design, RunOptions, RunSummary};
