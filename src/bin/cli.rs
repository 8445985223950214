//! Command-line interface for the revkin library
//!
//! This binary is a thin front-end over the kinetics model:
//! - Simulating a reversible first-order reaction and exporting the series
//! - Rendering the concentration and reaction quotient figures as HTML
//! - Summarising equilibrium properties
//! - Comparing relaxation under scaled rate constants
//!
//! # Usage
//!
//! ```bash
//! # Simulate with the default parameters and print a table
//! revkin simulate --table
//!
//! # Read parameters from a file, override kf, write results and figures
//! revkin simulate --params params.json --kf 3 --output result.json --plot-dir figures
//!
//! # Show equilibrium properties
//! revkin info --kf 2 --kb 1
//!
//! # Scale both rate constants by 1, 2 and 4
//! revkin scale --factors 1 2 4
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;
use revkin::{
    io::{load_parameters, save_result, IOError},
    kinetics::{
        error::KineticsError,
        model::KineticsModel,
        parameters::{ReactionParameters, CONTROL_RANGES},
        result::KineticsResult,
    },
    plotting::{write_html, PlotConfig, PlotError},
};
use tabled::{builder::Builder, settings::Style, Table};
use thiserror::Error;

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Simulate the reaction and export the time series
    Simulate {
        #[command(flatten)]
        params: ParameterArgs,

        /// Path to save the result as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory to write the concentration and quotient figures to
        #[arg(long)]
        plot_dir: Option<PathBuf>,

        /// Time unit shown on the figures
        #[arg(long, default_value = "s")]
        time_unit: String,

        /// Concentration unit shown on the figures
        #[arg(long, default_value = "mol/l")]
        concentration_unit: String,

        /// Print the sampled series as a table
        #[arg(long)]
        table: bool,
    },
    /// Show parameters and equilibrium properties
    Info {
        #[command(flatten)]
        params: ParameterArgs,
    },
    /// Compare relaxation when both rate constants are scaled by common factors
    Scale {
        #[command(flatten)]
        params: ParameterArgs,

        /// Factors applied to kf and kb
        #[arg(long, num_args = 1.., default_values_t = vec![1.0, 2.0, 4.0])]
        factors: Vec<f64>,
    },
}

/// Reaction parameters, optionally seeded from a JSON file
#[derive(Args)]
struct ParameterArgs {
    /// Path to a JSON parameter file, explicit flags override its values
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Forward rate constant
    #[arg(long)]
    kf: Option<f64>,

    /// Backward rate constant
    #[arg(long)]
    kb: Option<f64>,

    /// Initial reactant concentration
    #[arg(long)]
    a0: Option<f64>,

    /// Initial product concentration
    #[arg(long)]
    b0: Option<f64>,

    /// Final simulated time
    #[arg(short, long)]
    duration: Option<f64>,

    /// Number of samples in the time grid
    #[arg(short = 'n', long)]
    points: Option<usize>,

    /// Restrict rate constants to [1, 10] and concentrations to [0, 10]
    #[arg(long)]
    strict_ranges: bool,
}

impl ParameterArgs {
    /// Resolves the parameter set: built-in defaults, then the file, then flags.
    fn resolve(&self) -> Result<ReactionParameters, CliError> {
        let base = match &self.params {
            Some(path) => load_parameters(path)?,
            None => ReactionParameters::new(1.0, 1.0, 1.0, 0.0).with_grid(5.0, 100),
        };

        let params = ReactionParameters {
            kf: self.kf.unwrap_or(base.kf),
            kb: self.kb.unwrap_or(base.kb),
            a0: self.a0.unwrap_or(base.a0),
            b0: self.b0.unwrap_or(base.b0),
            duration: self.duration.unwrap_or(base.duration),
            point_count: self.points.unwrap_or(base.point_count),
        };

        if self.strict_ranges {
            params.check_ranges(&CONTROL_RANGES)?;
        }

        log::debug!("Resolved parameters: {:?}", params);
        Ok(params)
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Kinetics(#[from] KineticsError),
    #[error(transparent)]
    IO(#[from] IOError),
    #[error(transparent)]
    Plot(#[from] PlotError),
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Main entry point for the CLI application
pub fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(err) = run(&cli.command) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(command: &Commands) -> Result<(), CliError> {
    match command {
        Commands::Simulate {
            params,
            output,
            plot_dir,
            time_unit,
            concentration_unit,
            table,
        } => {
            let model = KineticsModel::from_parameters(params.resolve()?)?;
            let result = model.simulate();

            if *table {
                println!("{}", result);
            }

            if let Some(path) = output {
                save_result(path, &result)?;
                log::info!("Saved result to {}", path.display());
            }

            if let Some(dir) = plot_dir {
                std::fs::create_dir_all(dir).map_err(|source| CliError::CreateDir {
                    path: dir.clone(),
                    source,
                })?;

                let config = PlotConfig {
                    time_unit: time_unit.clone(),
                    concentration_unit: concentration_unit.clone(),
                    ..PlotConfig::default()
                };
                write_html(
                    &result.plot_concentrations(&config)?,
                    dir.join("concentration.html"),
                )?;
                write_html(&result.plot_quotient(&config)?, dir.join("quotient.html"))?;
                log::info!("Saved figures to {}", dir.display());
            }

            let non_finite = result.non_finite_quotients();
            if non_finite > 0 {
                println!(
                    "{}",
                    format!("{non_finite} reaction quotient samples are not finite ([A] = 0)")
                        .yellow()
                );
            }

            if let Some(q) = result.final_quotient() {
                println!("{} {:.6}", "Final reaction quotient:".bold(), q);
            }
            if let Some(k) = model.equilibrium_constant() {
                println!("{} {:.6}", "Equilibrium constant:".bold(), k);
            }
        }
        Commands::Info { params } => {
            let model = KineticsModel::from_parameters(params.resolve()?)?;
            println!("{}", model);
        }
        Commands::Scale { params, factors } => {
            let scaled = scaled_parameters(&params.resolve()?, factors);
            let results = KineticsModel::bulk_simulate(&scaled)?;
            println!("{}", scale_table(factors, &results));
        }
    }

    Ok(())
}

/// Multiplies both rate constants by each factor, keeping concentrations and grid.
fn scaled_parameters(base: &ReactionParameters, factors: &[f64]) -> Vec<ReactionParameters> {
    factors
        .iter()
        .map(|f| ReactionParameters {
            kf: base.kf * f,
            kb: base.kb * f,
            ..*base
        })
        .collect()
}

fn scale_table(factors: &[f64], results: &[KineticsResult]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Factor", "kf", "kb", "Relaxation time", "Final Q"]);
    for (factor, result) in factors.iter().zip(results) {
        let p = &result.parameters;
        builder.push_record([
            format!("{factor}"),
            format!("{:.4}", p.kf),
            format!("{:.4}", p.kb),
            format!("{:.4}", p.relaxation_time()),
            result
                .final_quotient()
                .map(|q| format!("{q:.6}"))
                .unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table
}
