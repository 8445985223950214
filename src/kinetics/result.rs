//! Kinetics Result Module
//!
//! [`KineticsResult`] is an owned snapshot of every series a
//! [`KineticsModel`](super::model::KineticsModel) derives, together with the
//! parameters that produced it. It is what downstream consumers (plotting, tables,
//! JSON export) work with.
//!
//! JSON has no representation for NaN or infinities, so non-finite samples in any
//! series are written as `null` and read back as NaN. Diverging parameter sets
//! (negative `kf + kb`) overflow the concentrations themselves, not only the
//! quotient.

use itertools::izip;
use serde::{Deserialize, Serialize};

use super::parameters::ReactionParameters;

/// One row of a [`KineticsResult`]: `(time, reactant, product, quotient)`.
pub type KineticsRow = (f64, f64, f64, f64);

/// Time series of a reversible first-order reaction.
///
/// # Fields
///
/// * `parameters` - The parameters the series were derived from
/// * `time` - Sample times
/// * `reactant` - Reactant concentration `[A]` at each sample
/// * `product` - Product concentration `[B]` at each sample
/// * `quotient` - Reaction quotient `[B]/[A]` at each sample, may be non-finite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticsResult {
    pub parameters: ReactionParameters,
    #[serde(with = "nullable_floats")]
    pub time: Vec<f64>,
    #[serde(with = "nullable_floats")]
    pub reactant: Vec<f64>,
    #[serde(with = "nullable_floats")]
    pub product: Vec<f64>,
    #[serde(with = "nullable_floats")]
    pub quotient: Vec<f64>,
}

impl KineticsResult {
    /// Number of time samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Iterates over `(time, reactant, product, quotient)` rows.
    pub fn rows(&self) -> impl Iterator<Item = KineticsRow> + '_ {
        izip!(&self.time, &self.reactant, &self.product, &self.quotient)
            .map(|(t, a, b, q)| (*t, *a, *b, *q))
    }

    /// Reaction quotient at the last sample.
    pub fn final_quotient(&self) -> Option<f64> {
        self.quotient.last().copied()
    }

    /// Number of quotient samples that are NaN or infinite.
    pub fn non_finite_quotients(&self) -> usize {
        self.quotient.iter().filter(|q| !q.is_finite()).count()
    }

    /// Largest deviation of `[A] + [B]` from `A0 + B0` over all samples.
    pub fn max_mass_balance_error(&self) -> f64 {
        let total = self.parameters.total_concentration();
        self.reactant
            .iter()
            .zip(&self.product)
            .map(|(a, b)| (a + b - total).abs())
            .fold(0.0, f64::max)
    }
}

mod nullable_floats {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        values
            .iter()
            .map(|v| v.is_finite().then_some(*v))
            .collect::<Vec<Option<f64>>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::kinetics::model::KineticsModel;

    #[test]
    fn test_rows() {
        let result = KineticsModel::with_grid(1.0, 1.0, 1.0, 0.0, 2.0, 3)
            .unwrap()
            .simulate();
        let rows: Vec<KineticsRow> = result.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], (0.0, 1.0, 0.0, 0.0));
        assert_eq!(rows[2].0, 2.0);
    }

    #[test]
    fn test_mass_balance() {
        let result = KineticsModel::new(4.0, 0.5, 2.0, 7.0).unwrap().simulate();
        assert!(result.max_mass_balance_error() < 1e-12);
    }

    #[test]
    fn test_non_finite_quotient_serializes_as_null() {
        let result = KineticsModel::with_grid(1.0, 1.0, 0.0, 1.0, 1.0, 2)
            .unwrap()
            .simulate();
        assert_eq!(result.non_finite_quotients(), 1);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["quotient"][0].is_null());

        let restored: KineticsResult = serde_json::from_value(json).unwrap();
        assert!(restored.quotient[0].is_nan());
        assert_relative_eq!(restored.quotient[1], result.quotient[1]);
        for (restored, original) in restored.reactant.iter().zip(&result.reactant) {
            assert_relative_eq!(*restored, *original, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_diverging_concentrations_roundtrip() {
        // kf + kb < 0, exp(1000) overflows at the last sample
        let result = KineticsModel::with_grid(-2.0, 1.0, 1.0, 0.0, 1000.0, 3)
            .unwrap()
            .simulate();
        assert_eq!(result.reactant[2], f64::INFINITY);
        assert_eq!(result.product[2], f64::NEG_INFINITY);

        let json = serde_json::to_string(&result).unwrap();
        let restored: KineticsResult = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 3);
        assert_eq!(restored.time, result.time);
        assert!(restored.reactant[2].is_nan());
        assert!(restored.product[2].is_nan());
        assert!(restored.quotient[2].is_nan());
        assert_relative_eq!(restored.reactant[1], result.reactant[1], max_relative = 1e-12);
        assert_relative_eq!(restored.product[1], result.product[1], max_relative = 1e-12);
    }
}
