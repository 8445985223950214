//! Reaction parameters for the reversible first-order reaction A ⇌ B.
//!
//! [`ReactionParameters`] bundles the two rate constants, the two initial
//! concentrations and the description of the time grid. It can be created
//! programmatically, through [`ReactionParametersBuilder`], or deserialized from a
//! JSON parameter file (see [`crate::io`]).
//!
//! # Examples
//!
//! ```
//! use revkin::prelude::ReactionParametersBuilder;
//!
//! let params = ReactionParametersBuilder::default()
//!     .kf(2.0)
//!     .kb(1.0)
//!     .a0(1.0)
//!     .b0(0.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.duration, 10.0);
//! assert_eq!(params.point_count, 100);
//! assert!(params.validate().is_ok());
//! ```

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::error::KineticsError;

/// Final simulated time used when none is given.
pub const DEFAULT_DURATION: f64 = 10.0;

/// Number of samples in the time grid used when none is given.
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Closed interval accepted by an interactive control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub lower: f64,
    pub upper: f64,
}

impl ControlRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Input ranges offered by the interactive front-end.
///
/// Rate constants start at 1, so the degenerate `kf + kb == 0` system cannot be
/// reached from the controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRanges {
    pub kf: ControlRange,
    pub kb: ControlRange,
    pub a0: ControlRange,
    pub b0: ControlRange,
}

pub const CONTROL_RANGES: ControlRanges = ControlRanges {
    kf: ControlRange::new(1.0, 10.0),
    kb: ControlRange::new(1.0, 10.0),
    a0: ControlRange::new(0.0, 10.0),
    b0: ControlRange::new(0.0, 10.0),
};

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

fn default_point_count() -> usize {
    DEFAULT_POINT_COUNT
}

/// Parameters of a reversible first-order reaction.
///
/// # Fields
///
/// * `kf` - Forward rate constant (A → B)
/// * `kb` - Backward rate constant (B → A)
/// * `a0` - Initial reactant concentration
/// * `b0` - Initial product concentration
/// * `duration` - Final simulated time (default: 10.0)
/// * `point_count` - Number of samples in the time grid (default: 100)
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
pub struct ReactionParameters {
    pub kf: f64,
    pub kb: f64,
    pub a0: f64,
    pub b0: f64,
    #[builder(default = "DEFAULT_DURATION")]
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[builder(default = "DEFAULT_POINT_COUNT")]
    #[serde(default = "default_point_count")]
    pub point_count: usize,
}

impl ReactionParameters {
    /// Creates parameters on the default time grid.
    pub fn new(kf: f64, kb: f64, a0: f64, b0: f64) -> Self {
        Self {
            kf,
            kb,
            a0,
            b0,
            duration: DEFAULT_DURATION,
            point_count: DEFAULT_POINT_COUNT,
        }
    }

    /// Returns a copy of these parameters on a different time grid.
    pub fn with_grid(self, duration: f64, point_count: usize) -> Self {
        Self {
            duration,
            point_count,
            ..self
        }
    }

    /// Checks that the parameters describe a well-defined model.
    ///
    /// # Errors
    ///
    /// * [`KineticsError::NonFiniteParameter`] if any scalar is NaN or infinite
    /// * [`KineticsError::NonPositiveDuration`] if `duration <= 0`
    /// * [`KineticsError::TooFewPoints`] if `point_count < 2`
    /// * [`KineticsError::DegenerateRateSum`] if `kf + kb == 0`
    /// * [`KineticsError::NonFiniteParameter`] if `kf + kb`, `a0 + b0`, the
    ///   equilibrium reactant concentration or its distance from `a0` overflow
    ///
    /// Negative rate constants or concentrations are accepted; they are outside
    /// the physical regime and only reported as a warning.
    pub fn validate(&self) -> Result<(), KineticsError> {
        for (name, value) in self.named_scalars() {
            if !value.is_finite() {
                return Err(KineticsError::NonFiniteParameter { name, value });
            }
        }

        if self.duration <= 0.0 {
            return Err(KineticsError::NonPositiveDuration(self.duration));
        }

        if self.point_count < 2 {
            return Err(KineticsError::TooFewPoints(self.point_count));
        }

        let rate_sum = self.rate_sum();
        if !rate_sum.is_finite() {
            return Err(KineticsError::NonFiniteParameter {
                name: "kf + kb",
                value: rate_sum,
            });
        }

        if rate_sum == 0.0 {
            return Err(KineticsError::DegenerateRateSum {
                kf: self.kf,
                kb: self.kb,
            });
        }

        // The closed form is evaluated from these, an overflow here turns [A](0) into NaN
        let derived = [
            ("a0 + b0", self.total_concentration()),
            ("kb * (a0 + b0) / (kf + kb)", self.equilibrium_reactant()),
            (
                "a0 - kb * (a0 + b0) / (kf + kb)",
                self.a0 - self.equilibrium_reactant(),
            ),
        ];
        for (name, value) in derived {
            if !value.is_finite() {
                return Err(KineticsError::NonFiniteParameter { name, value });
            }
        }

        for (name, value) in self.named_scalars().into_iter().take(4) {
            if value < 0.0 {
                log::warn!("{name} = {value} is negative, outside the physical regime");
            }
        }

        Ok(())
    }

    /// Checks the rate constants and initial concentrations against the given
    /// control ranges.
    pub fn check_ranges(&self, ranges: &ControlRanges) -> Result<(), KineticsError> {
        let checks = [
            ("kf", self.kf, ranges.kf),
            ("kb", self.kb, ranges.kb),
            ("a0", self.a0, ranges.a0),
            ("b0", self.b0, ranges.b0),
        ];

        for (name, value, range) in checks {
            if !range.contains(value) {
                return Err(KineticsError::OutOfRange {
                    name,
                    value,
                    lower: range.lower,
                    upper: range.upper,
                });
            }
        }

        Ok(())
    }

    /// Total concentration `a0 + b0`, conserved over time.
    pub fn total_concentration(&self) -> f64 {
        self.a0 + self.b0
    }

    /// Observed relaxation rate `kf + kb`.
    pub fn rate_sum(&self) -> f64 {
        self.kf + self.kb
    }

    /// Relaxation time `1/(kf + kb)`.
    ///
    /// Negative when the rate sum is negative, i.e. when the system diverges from
    /// its fixed point instead of relaxing towards it.
    pub fn relaxation_time(&self) -> f64 {
        self.rate_sum().recip()
    }

    /// Reactant concentration for `t → ∞`, `kb·(a0 + b0)/(kf + kb)`.
    pub fn equilibrium_reactant(&self) -> f64 {
        self.kb * self.total_concentration() / self.rate_sum()
    }

    fn named_scalars(&self) -> [(&'static str, f64); 5] {
        [
            ("kf", self.kf),
            ("kb", self.kb),
            ("a0", self.a0),
            ("b0", self.b0),
            ("duration", self.duration),
        ]
    }
}
