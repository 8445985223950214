//! revkin: kinetics of reversible first-order reactions
//!
//! This library computes the time evolution of a reversible first-order reaction
//! A ⇌ B from its closed-form solution:
//! - Reactant and product concentrations over a uniform time grid
//! - The reaction quotient Q = [B]/[A] and its approach to K = kf/kb
//! - Equilibrium properties (equilibrium concentrations, relaxation time, half-life)
//! - Plotting of the results through `plotly`
//! - Tabular summaries and JSON import/export
//!
//! # Quick Start
//!
//! ```rust
//! use revkin::prelude::*;
//!
//! # fn main() -> Result<(), KineticsError> {
//! let model = KineticsModel::with_grid(2.0, 1.0, 1.0, 0.0, 5.0, 100)?;
//! let result = model.simulate();
//!
//! assert_eq!(result.len(), 100);
//! assert_eq!(model.equilibrium_constant(), Some(2.0));
//! # Ok(())
//! # }
//! ```

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::kinetics::error::*;
    pub use crate::kinetics::model::*;
    pub use crate::kinetics::parameters::*;
    pub use crate::kinetics::result::*;
    pub use crate::plotting::{write_html, PlotConfig, PlotError, PlotTraces};
}

/// Closed-form model of the reaction A ⇌ B
pub mod kinetics {
    /// Error types for invalid model parameters
    pub mod error;
    /// The analytical kinetics model
    pub mod model;
    /// Reaction parameters and their validation
    pub mod parameters;
    /// Owned snapshots of the derived series
    pub mod result;
}

/// Plotting and visualization functionality
pub mod plotting;

/// Tabular display of models and results
pub mod info;

/// IO functionality
pub mod io;
