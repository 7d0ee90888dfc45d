//! Domain models for the design-to-disease transformation pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`DesignPoint`] - One scaled design row (epidemiological parameters)
//! - [`DiseaseRates`] - Per-stage infection and progression rates
//! - [`DiseaseRow`] - Complete output row (rates plus passthrough columns)

use serde::{Deserialize, Serialize};

// =============================================================================
// Design Point
// =============================================================================

/// One row of the scaled design matrix.
///
/// Column order matches the design file: incubation period, infectious
/// period, R0, two scale rates, and the repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignPoint {
    /// Incubation period in days (> 0).
    pub incubation: f64,
    /// Total infectious period in days (> 1).
    pub infect_time: f64,
    /// Basic reproduction number (>= 0).
    pub r_zero: f64,
    /// First scale rate, carried through unchanged.
    pub scale_rate_1: f64,
    /// Second scale rate, carried through unchanged.
    pub scale_rate_2: f64,
    /// Number of simulator repeats, carried through unchanged.
    pub repeats: f64,
}

impl DesignPoint {
    /// Build a design point from the first six numeric fields of a row.
    pub fn from_fields(fields: [f64; 6]) -> Self {
        let [incubation, infect_time, r_zero, scale_rate_1, scale_rate_2, repeats] = fields;
        Self {
            incubation,
            infect_time,
            r_zero,
            scale_rate_1,
            scale_rate_2,
            repeats,
        }
    }
}

// =============================================================================
// Disease Rates
// =============================================================================

/// Per-stage rates produced by the epidemiological transform.
///
/// Stage 1 is the fixed-length early infectious stage, stage 2 the
/// remainder of the infectious period. The latent stage progresses at
/// the reciprocal of the incubation period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRates {
    /// Infection rate during stage 1.
    pub beta_2: f64,
    /// Infection rate during stage 2.
    pub beta_3: f64,
    /// Progression rate out of the latent stage.
    pub progress_1: f64,
    /// Progression rate out of stage 1.
    pub progress_2: f64,
    /// Progression rate out of stage 2.
    pub progress_3: f64,
}

// =============================================================================
// Disease Row
// =============================================================================

/// A complete output row: transformed rates plus the design columns
/// that pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRow {
    /// Infection rate during stage 1.
    pub beta_2: f64,
    /// Infection rate during stage 2.
    pub beta_3: f64,
    /// Progression rate out of the latent stage.
    pub progress_1: f64,
    /// Progression rate out of stage 1.
    pub progress_2: f64,
    /// Progression rate out of stage 2.
    pub progress_3: f64,
    /// First scale rate from the design point.
    pub scale_rate_1: f64,
    /// Second scale rate from the design point.
    pub scale_rate_2: f64,
    /// Repeat count from the design point.
    pub repeats: f64,
}

impl DiseaseRow {
    /// Combine transformed rates with the passthrough columns of the
    /// design point they came from.
    pub fn new(rates: DiseaseRates, point: &DesignPoint) -> Self {
        Self {
            beta_2: rates.beta_2,
            beta_3: rates.beta_3,
            progress_1: rates.progress_1,
            progress_2: rates.progress_2,
            progress_3: rates.progress_3,
            scale_rate_1: point.scale_rate_1,
            scale_rate_2: point.scale_rate_2,
            repeats: point.repeats,
        }
    }

    /// Fields in output column order.
    pub fn fields(&self) -> [f64; 8] {
        [
            self.beta_2,
            self.beta_3,
            self.progress_1,
            self.progress_2,
            self.progress_3,
            self.scale_rate_1,
            self.scale_rate_2,
            self.repeats,
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_design_point_from_fields() {
        let point = DesignPoint::from_fields([5.0, 7.0, 2.5, 0.1, 0.2, 10.0]);
        assert_eq!(point.incubation, 5.0);
        assert_eq!(point.infect_time, 7.0);
        assert_eq!(point.r_zero, 2.5);
        assert_eq!(point.scale_rate_1, 0.1);
        assert_eq!(point.scale_rate_2, 0.2);
        assert_eq!(point.repeats, 10.0);
    }

    #[test]
    fn test_disease_row_passthrough() {
        let point = DesignPoint::from_fields([5.0, 7.0, 2.5, 0.1, 0.2, 10.0]);
        let rates = DiseaseRates {
            beta_2: 0.5,
            beta_3: 0.5,
            progress_1: 0.2,
            progress_2: 1.0,
            progress_3: 0.25,
        };
        let row = DiseaseRow::new(rates, &point);
        assert_eq!(row.beta_2, 0.5);
        assert_eq!(row.scale_rate_1, 0.1);
        assert_eq!(row.scale_rate_2, 0.2);
        assert_eq!(row.repeats, 10.0);
    }

    #[test]
    fn test_disease_row_field_order() {
        let row = DiseaseRow {
            beta_2: 1.0,
            beta_3: 2.0,
            progress_1: 3.0,
            progress_2: 4.0,
            progress_3: 5.0,
            scale_rate_1: 6.0,
            scale_rate_2: 7.0,
            repeats: 8.0,
        };
        assert_eq!(row.fields(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_design_point_serialization() {
        let point = DesignPoint::from_fields([5.0, 7.0, 2.5, 0.1, 0.2, 10.0]);
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"incubation\":5.0"));
        let back: DesignPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }
}
