//! Plotting Module
//!
//! Renders a [`KineticsResult`] as interactive plotly figures.
//!
//! # Key Components
//!
//! - [`PlotConfig`]: units, axis labels, title and figure size
//! - [`KineticsResult::plot_concentrations`]: `[A]` and `[B]` against time
//! - [`KineticsResult::plot_quotient`]: `Q = [B]/[A]` against time, non-finite
//!   samples are left out of the trace
//! - [`write_html`]: writes a figure as a standalone HTML page
//!
//! Both figures draw the y-axis with power exponents, e.g. `10^-3`.

use std::path::Path;

use plotly::{
    common::{ExponentFormat, Line, Mode},
    layout::Axis,
    Layout, Plot, Scatter,
};
use thiserror::Error;

use crate::kinetics::result::KineticsResult;

/// Plot traces are stored in a vector of Box<Scatter<f64, f64>>.
pub type PlotTraces = Vec<Box<Scatter<f64, f64>>>;

const COLORS: &[&str] = &["blue", "orange", "green"];

pub const CONCENTRATION_TITLE: &str = "Concentration vs time for Reactant ⇌ Product";
pub const QUOTIENT_TITLE: &str = "Reaction Quotient vs Time for Reactant ⇌ Product";

/// Configuration options for plotting kinetics results.
///
/// # Fields
///
/// * `time_unit` - Unit shown on the time axis
/// * `concentration_unit` - Unit shown on the concentration axis, empty for none
/// * `quotient_label` - Axis label of the reaction quotient
/// * `title` - Overrides the default figure title
/// * `show_title` - Whether a title is drawn at all
/// * `width` - Width of the plot in pixels
/// * `height` - Height of the plot in pixels
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub time_unit: String,
    pub concentration_unit: String,
    pub quotient_label: String,
    pub title: Option<String>,
    pub show_title: bool,
    pub width: usize,
    pub height: usize,
}

impl Default for PlotConfig {
    /// Creates a default plot configuration.
    ///
    /// - Time unit: "s"
    /// - Concentration unit: "mol/l"
    /// - Quotient label: "Q"
    /// - Title: the figure's default title
    /// - Width: 800px
    /// - Height: 600px
    fn default() -> Self {
        Self {
            time_unit: "s".to_string(),
            concentration_unit: "mol/l".to_string(),
            quotient_label: "Q".to_string(),
            title: None,
            show_title: true,
            width: 800,
            height: 600,
        }
    }
}

impl PlotConfig {
    fn time_label(&self) -> String {
        format!("Time / {}", self.time_unit)
    }

    fn concentration_label(&self) -> String {
        if self.concentration_unit.is_empty() {
            "Concentration".to_string()
        } else {
            format!("Concentration / {}", self.concentration_unit)
        }
    }

    fn resolve_title(&self, default: &str) -> Option<String> {
        if !self.show_title {
            return None;
        }
        Some(self.title.clone().unwrap_or_else(|| default.to_string()))
    }

    fn layout(&self, default_title: &str, y_label: String) -> Layout {
        let mut layout = Layout::new()
            .show_legend(true)
            .width(self.width)
            .height(self.height)
            .x_axis(Axis::new().title(self.time_label()))
            .y_axis(
                Axis::new()
                    .title(y_label)
                    .exponent_format(ExponentFormat::Power),
            );

        if let Some(title) = self.resolve_title(default_title) {
            layout = layout.title(title);
        }

        layout
    }
}

impl KineticsResult {
    /// Creates the concentration figure: reactant and product against time.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::EmptySeries`] if the result holds no samples.
    pub fn plot_concentrations(&self, config: &PlotConfig) -> Result<Plot, PlotError> {
        if self.is_empty() {
            return Err(PlotError::EmptySeries);
        }

        let mut plot = Plot::new();
        for trace in PlotTraces::from(self) {
            plot.add_trace(trace);
        }
        plot.set_layout(config.layout(CONCENTRATION_TITLE, config.concentration_label()));

        Ok(plot)
    }

    /// Creates the reaction quotient figure.
    ///
    /// Samples where the quotient is NaN or infinite cannot be drawn and are left
    /// out of the trace.
    pub fn plot_quotient(&self, config: &PlotConfig) -> Result<Plot, PlotError> {
        if self.is_empty() {
            return Err(PlotError::EmptySeries);
        }

        let (time, quotient) = finite_pairs(&self.time, &self.quotient);
        let dropped = self.len() - time.len();
        if dropped > 0 {
            log::warn!("Dropped {dropped} non-finite reaction quotient samples from the plot");
        }

        let trace = Scatter::new(time, quotient)
            .name(&config.quotient_label)
            .mode(Mode::Lines)
            .line(Line::new().color(COLORS[2]).width(2.0));

        let mut plot = Plot::new();
        plot.add_trace(trace);
        plot.set_layout(config.layout(QUOTIENT_TITLE, config.quotient_label.clone()));

        Ok(plot)
    }
}

/// Implements conversion from KineticsResult to the two concentration traces.
impl From<&KineticsResult> for PlotTraces {
    fn from(result: &KineticsResult) -> Self {
        let series = [("Reactant", &result.reactant), ("Product", &result.product)];

        series
            .into_iter()
            .enumerate()
            .map(|(i, (name, values))| {
                Scatter::new(result.time.clone(), values.clone())
                    .name(name)
                    .mode(Mode::Lines)
                    .line(Line::new().color(COLORS[i % COLORS.len()]).width(2.0))
            })
            .collect()
    }
}

/// Writes a figure as a standalone HTML page.
pub fn write_html(plot: &Plot, path: impl AsRef<Path>) -> Result<(), PlotError> {
    let path = path.as_ref();
    std::fs::write(path, plot.to_html()).map_err(|source| PlotError::WriteError {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("Wrote figure to {}", path.display());
    Ok(())
}

fn finite_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y)
        .filter(|(_, y)| y.is_finite())
        .map(|(x, y)| (*x, *y))
        .unzip()
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Nothing to plot, the result holds no samples")]
    EmptySeries,
    #[error("Failed to write figure to {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
