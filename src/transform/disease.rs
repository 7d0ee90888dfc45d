//! Closed-form transform from epidemiological parameters to disease
//! progression rates.
//!
//! The disease model has a latent stage followed by two infectious
//! stages. Stage 1 lasts [`STAGE_ONE_DURATION`] days, stage 2 the rest
//! of the infectious period. Both infectious stages share one infection
//! rate, beta = R0 / infectious period; progression out of each stage
//! is the reciprocal of its duration.
//!
//! The exponential-growth doubling time is solved from a quadratic in
//! the same pass, which rejects ill-posed parameter combinations early.

use std::f64::consts::LN_2;

use crate::error::{TransformError, TransformResult};
use crate::models::DiseaseRates;

/// Duration of the first infectious stage, in days.
pub const STAGE_ONE_DURATION: f64 = 1.0;

// =============================================================================
// Public Transform
// =============================================================================

/// Transform one epidemiological parameter set into disease rates.
///
/// # Arguments
/// * `incubation` - Incubation period in days (> 0)
/// * `infect_time` - Total infectious period in days (> 1)
/// * `r_zero` - Basic reproduction number (>= 0)
///
/// # Returns
/// Per-stage infection and progression rates. Both infectious stages
/// carry the same beta; progression rates are reciprocal durations.
pub fn epidemiological_to_disease(
    incubation: f64,
    infect_time: f64,
    r_zero: f64,
) -> TransformResult<DiseaseRates> {
    validate(incubation, infect_time, r_zero)?;

    if infect_time <= STAGE_ONE_DURATION {
        return Err(TransformError::StageTwoCollapse { value: infect_time });
    }

    let beta = r_zero / infect_time;
    let inv_incubation = 1.0 / incubation;
    let inv_infect = 1.0 / infect_time;

    // Solved for every row; the value itself is not part of the output yet.
    let _doubling_time = solve_doubling_time(beta, inv_incubation, inv_infect)?;

    let stage_two = infect_time - STAGE_ONE_DURATION;

    Ok(DiseaseRates {
        beta_2: beta,
        beta_3: beta,
        progress_1: inv_incubation,
        progress_2: 1.0 / STAGE_ONE_DURATION,
        progress_3: 1.0 / stage_two,
    })
}

/// Doubling time of the early exponential growth phase, in days.
///
/// Negative for subcritical parameters (R0 below the epidemic
/// threshold), positive infinity exactly at R0 = 1.
pub fn doubling_time(incubation: f64, infect_time: f64, r_zero: f64) -> TransformResult<f64> {
    validate(incubation, infect_time, r_zero)?;

    let beta = r_zero / infect_time;
    let inv_incubation = 1.0 / incubation;
    let inv_infect = 1.0 / infect_time;

    solve_doubling_time(beta, inv_incubation, inv_infect)
}

// =============================================================================
// Internals
// =============================================================================

/// Check the three epidemiological preconditions.
///
/// Comparisons are negated so NaN inputs fail them.
fn validate(incubation: f64, infect_time: f64, r_zero: f64) -> TransformResult<()> {
    if !(incubation > 0.0) {
        return Err(TransformError::InvalidIncubation { value: incubation });
    }
    if !(infect_time > 0.0) {
        return Err(TransformError::InvalidInfectiousPeriod { value: infect_time });
    }
    if !(r_zero >= 0.0) {
        return Err(TransformError::InvalidRZero { value: r_zero });
    }
    Ok(())
}

/// Solve the growth-rate quadratic and scale the root to a doubling time.
fn solve_doubling_time(beta: f64, inv_incubation: f64, inv_infect: f64) -> TransformResult<f64> {
    let quad_a = (beta * inv_incubation) - (inv_infect * inv_incubation);
    let quad_b = inv_infect + inv_incubation;
    let quad_c = -1.0;

    let disc_sq = (quad_b * quad_b) - (4.0 * quad_a * quad_c);
    if !(disc_sq >= 0.0) {
        return Err(TransformError::NegativeDiscriminant { value: disc_sq });
    }

    // Positive-root branch; the numerator term is -beta, not -quad_b.
    let root = ((-beta) + disc_sq.sqrt()) / (2.0 * quad_a);
    Ok(LN_2 * root)
}

// =============================================================================
// Tests
// =============================================================================
