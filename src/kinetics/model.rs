//! Closed-form model of the reversible first-order reaction A ⇌ B.
//!
//! The rate law
//!
//! ```text
//! d[A]/dt = -kf·[A] + kb·[B],    [B] = A0 + B0 - [A],    [A](0) = A0
//! ```
//!
//! is linear and has the exact solution
//!
//! ```text
//! [A](t) = ( kb·(A0+B0) - (kb·B0 - kf·A0)·exp(-(kf+kb)·t) ) / (kf+kb)
//! ```
//!
//! The model evaluates it in the equivalent relaxation form
//! `[A](t) = A0 + (A0 - A_eq)·expm1(-(kf+kb)·t)` with `A_eq = kb·(A0+B0)/(kf+kb)`,
//! which reproduces the initial concentrations exactly at `t = 0` and stays accurate
//! for small `(kf+kb)·t`. The product follows from mass conservation and the
//! reaction quotient is `Q = [B]/[A]`.
//!
//! # Examples
//!
//! ```
//! use revkin::prelude::KineticsModel;
//!
//! let model = KineticsModel::with_grid(1.0, 1.0, 1.0, 0.0, 5.0, 100).unwrap();
//!
//! let reactant = model.reactant_concentration();
//! let quotient = model.reaction_quotient();
//!
//! assert_eq!(reactant[0], 1.0);
//! assert_eq!(quotient[0], 0.0);
//! assert!((quotient[99] - 1.0).abs() < 1e-3);
//! ```

use std::f64::consts::LN_2;

use ndarray::Array1;
use rayon::prelude::*;

use super::{
    error::KineticsError,
    parameters::{ReactionParameters, DEFAULT_DURATION, DEFAULT_POINT_COUNT},
    result::KineticsResult,
};

/// Analytical kinetics of a single reversible first-order pair.
///
/// The model is immutable once constructed. The time grid is built at
/// construction, the concentration and quotient series are recomputed from the
/// stored parameters on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct KineticsModel {
    params: ReactionParameters,
    time: Array1<f64>,
}

impl KineticsModel {
    /// Creates a model on the default grid (`duration = 10`, `point_count = 100`).
    ///
    /// # Errors
    ///
    /// Returns a [`KineticsError`] if the parameters are invalid, see
    /// [`ReactionParameters::validate`].
    pub fn new(kf: f64, kb: f64, a0: f64, b0: f64) -> Result<Self, KineticsError> {
        Self::with_grid(kf, kb, a0, b0, DEFAULT_DURATION, DEFAULT_POINT_COUNT)
    }

    /// Creates a model with an explicit time grid.
    pub fn with_grid(
        kf: f64,
        kb: f64,
        a0: f64,
        b0: f64,
        duration: f64,
        point_count: usize,
    ) -> Result<Self, KineticsError> {
        Self::from_parameters(ReactionParameters {
            kf,
            kb,
            a0,
            b0,
            duration,
            point_count,
        })
    }

    /// Creates a model from a full parameter set.
    pub fn from_parameters(params: ReactionParameters) -> Result<Self, KineticsError> {
        params.validate()?;

        let time = time_grid(params.duration, params.point_count);
        log::debug!(
            "Created kinetics model: kf = {}, kb = {}, A0 = {}, B0 = {}, {} points over [0, {}]",
            params.kf,
            params.kb,
            params.a0,
            params.b0,
            params.point_count,
            params.duration
        );

        Ok(Self { params, time })
    }

    /// Evaluates many independent parameter sets in parallel.
    ///
    /// Results are returned in the order of `params`. The whole call fails with the
    /// error of the first invalid set.
    pub fn bulk_simulate(
        params: &[ReactionParameters],
    ) -> Result<Vec<KineticsResult>, KineticsError> {
        log::debug!("Simulating {} parameter sets", params.len());
        params
            .par_iter()
            .map(|p| Self::from_parameters(*p).map(|model| model.simulate()))
            .collect()
    }

    pub fn parameters(&self) -> &ReactionParameters {
        &self.params
    }

    /// Uniformly spaced samples over `[0, duration]`, both ends included.
    pub fn time(&self) -> &Array1<f64> {
        &self.time
    }

    /// Reactant concentration `[A]` at every sample of the time grid.
    pub fn reactant_concentration(&self) -> Array1<f64> {
        self.time.mapv(|t| self.reactant_at(t))
    }

    /// Product concentration `[B]` at every sample of the time grid.
    ///
    /// `[A] + [B]` equals `A0 + B0` at every sample up to rounding.
    pub fn product_concentration(&self) -> Array1<f64> {
        self.time.mapv(|t| self.product_at(t))
    }

    /// Reaction quotient `Q = [B]/[A]` at every sample of the time grid.
    ///
    /// Where `[A]` is exactly zero the quotient is `+∞` (or NaN when `[B]` is zero
    /// too). These values are returned as they are.
    pub fn reaction_quotient(&self) -> Array1<f64> {
        &self.product_concentration() / &self.reactant_concentration()
    }

    /// Evaluates all series once and returns them as an owned snapshot.
    pub fn simulate(&self) -> KineticsResult {
        let reactant = self.reactant_concentration();
        let product = self.product_concentration();
        let quotient = &product / &reactant;

        KineticsResult {
            parameters: self.params,
            time: self.time.to_vec(),
            reactant: reactant.to_vec(),
            product: product.to_vec(),
            quotient: quotient.to_vec(),
        }
    }

    /// Reactant concentration at an arbitrary time.
    pub fn reactant_at(&self, t: f64) -> f64 {
        self.params.a0 + self.displacement() * self.decay(t)
    }

    /// Product concentration at an arbitrary time.
    pub fn product_at(&self, t: f64) -> f64 {
        self.params.b0 - self.displacement() * self.decay(t)
    }

    /// Reaction quotient at an arbitrary time.
    pub fn quotient_at(&self, t: f64) -> f64 {
        self.product_at(t) / self.reactant_at(t)
    }

    /// Conserved total concentration `A0 + B0`.
    pub fn total_concentration(&self) -> f64 {
        self.params.total_concentration()
    }

    /// Observed relaxation rate `kf + kb`.
    pub fn rate_sum(&self) -> f64 {
        self.params.rate_sum()
    }

    /// Relaxation time `1/(kf + kb)`, see [`ReactionParameters::relaxation_time`].
    pub fn relaxation_time(&self) -> f64 {
        self.params.relaxation_time()
    }

    /// Time after which the distance to equilibrium has halved.
    pub fn half_life(&self) -> f64 {
        LN_2 / self.rate_sum()
    }

    /// Equilibrium constant `K = kf/kb`, `None` for an irreversible reaction.
    pub fn equilibrium_constant(&self) -> Option<f64> {
        if self.params.kb == 0.0 {
            None
        } else {
            Some(self.params.kf / self.params.kb)
        }
    }

    /// Reactant concentration for `t → ∞`.
    pub fn equilibrium_reactant(&self) -> f64 {
        self.params.equilibrium_reactant()
    }

    /// Product concentration for `t → ∞`.
    pub fn equilibrium_product(&self) -> f64 {
        self.total_concentration() - self.equilibrium_reactant()
    }

    fn displacement(&self) -> f64 {
        self.params.a0 - self.equilibrium_reactant()
    }

    // exp(-(kf+kb)·t) - 1, which is -0.0 at t = 0
    fn decay(&self, t: f64) -> f64 {
        (-self.rate_sum() * t).exp_m1()
    }
}

impl TryFrom<ReactionParameters> for KineticsModel {
    type Error = KineticsError;

    fn try_from(params: ReactionParameters) -> Result<Self, Self::Error> {
        Self::from_parameters(params)
    }
}

impl TryFrom<&ReactionParameters> for KineticsModel {
    type Error = KineticsError;

    fn try_from(params: &ReactionParameters) -> Result<Self, Self::Error> {
        Self::from_parameters(*params)
    }
}

/// Builds `point_count` evenly spaced samples from 0 to `duration`.
///
/// The last sample is pinned to `duration` so the grid ends exactly there.
fn time_grid(duration: f64, point_count: usize) -> Array1<f64> {
    let step = duration / (point_count - 1) as f64;
    Array1::from_shape_fn(point_count, |i| {
        if i + 1 == point_count {
            duration
        } else {
            i as f64 * step
        }
    })
}
