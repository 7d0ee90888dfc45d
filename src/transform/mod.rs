//! Transformation module.
//!
//! This module handles design to disease transformation:
//! - Disease: Closed-form epidemiological transform
//! - Pipeline: Main transformation pipeline

pub mod disease;
pub mod pipeline;

pub use disease::{doubling_time, epidemiological_to_disease, STAGE_ONE_DURATION};
pub use pipeline::{run, transform_design, RunOptions, RunSummary};
