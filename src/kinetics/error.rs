//! Kinetics Error Module
//!
//! Errors raised while constructing a [`KineticsModel`](super::model::KineticsModel).
//!
//! All validation happens at construction time. Once a model exists, reading its
//! derived series never fails; non-finite values in the reaction quotient are
//! regular data, not errors.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    #[error("Invalid parameter: {name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },
    #[error("Invalid parameter: duration must be greater than zero, got {0}")]
    NonPositiveDuration(f64),
    #[error("Invalid parameter: point count must be at least 2, got {0}")]
    TooFewPoints(usize),
    #[error("Invalid parameter: kf + kb must be non-zero (kf = {kf}, kb = {kb}), no reaction occurs")]
    DegenerateRateSum { kf: f64, kb: f64 },
    #[error("Invalid parameter: {name} = {value} is outside the range [{lower}, {upper}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },
    #[error("Failed to build reaction parameters: {0}")]
    BuilderError(String),
}

impl From<super::parameters::ReactionParametersBuilderError> for KineticsError {
    fn from(err: super::parameters::ReactionParametersBuilderError) -> Self {
        KineticsError::BuilderError(err.to_string())
    }
}
