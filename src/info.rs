//! Information display module for kinetics models and results
//!
//! Implements `Display` for [`KineticsModel`] (parameters and equilibrium
//! properties) and [`KineticsResult`] (sampled series) as tables.

use std::fmt::{self, Display};

use tabled::{builder::Builder, settings::Style};

use crate::kinetics::{
    model::KineticsModel,
    result::{KineticsResult, KineticsRow},
};

/// Maximum number of rows shown for a result before it is thinned out.
const MAX_ROWS: usize = 11;

impl Display for KineticsModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.parameters();
        let mut builder = Builder::default();
        builder.push_record(["Property", "Value"]);

        let rows = [
            ("Forward rate constant kf", format_value(params.kf)),
            ("Backward rate constant kb", format_value(params.kb)),
            ("Initial reactant [A]0", format_value(params.a0)),
            ("Initial product [B]0", format_value(params.b0)),
            ("Duration", format_value(params.duration)),
            ("Points", params.point_count.to_string()),
            ("Relaxation time 1/(kf+kb)", format_value(self.relaxation_time())),
            ("Half-life", format_value(self.half_life())),
            ("Equilibrium [A]", format_value(self.equilibrium_reactant())),
            ("Equilibrium [B]", format_value(self.equilibrium_product())),
            (
                "Equilibrium constant K",
                self.equilibrium_constant()
                    .map(format_value)
                    .unwrap_or_else(|| "∞ (irreversible)".to_string()),
            ),
        ];

        for (name, value) in rows {
            builder.push_record([name.to_string(), value]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        write!(f, "{}", table)
    }
}

impl Display for KineticsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(["Time", "[A]", "[B]", "Q"]);

        for (t, a, b, q) in sample_rows(self) {
            builder.push_record([
                format_value(t),
                format_value(a),
                format_value(b),
                format_value(q),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        write!(f, "{}", table)
    }
}

/// Picks at most `MAX_ROWS` evenly spread rows, always keeping the first and last.
fn sample_rows(result: &KineticsResult) -> Vec<KineticsRow> {
    let n = result.len();
    if n <= MAX_ROWS {
        return result.rows().collect();
    }

    let stride = (n - 1) as f64 / (MAX_ROWS - 1) as f64;
    let rows: Vec<_> = result.rows().collect();
    (0..MAX_ROWS)
        .map(|i| rows[((i as f64 * stride).round() as usize).min(n - 1)])
        .collect()
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else {
        format!("{:.4}", value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.0), "1.0000");
        assert_eq!(format_value(f64::INFINITY), "∞");
        assert_eq!(format_value(f64::NEG_INFINITY), "-∞");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_sample_rows_keeps_ends() {
        let result = KineticsModel::with_grid(1.0, 1.0, 1.0, 0.0, 5.0, 100)
            .unwrap()
            .simulate();
        let rows = sample_rows(&result);

        assert_eq!(rows.len(), MAX_ROWS);
        assert_eq!(rows[0].0, 0.0);
        assert_eq!(rows[MAX_ROWS - 1].0, 5.0);
    }

    #[test]
    fn test_model_display() {
        let model = KineticsModel::new(1.0, 0.0, 1.0, 0.0).unwrap();
        let table = model.to_string();

        assert!(table.contains("Forward rate constant kf"));
        assert!(table.contains("∞ (irreversible)"));
    }

    #[test]
    fn test_result_display() {
        let result = KineticsModel::with_grid(1.0, 1.0, 0.0, 1.0, 1.0, 3)
            .unwrap()
            .simulate();
        let table = result.to_string();

        assert!(table.contains("[A]"));
        assert!(table.contains("∞"));
        assert!(table.contains("1.0000"));
    }
}
