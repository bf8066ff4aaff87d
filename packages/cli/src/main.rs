#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Police budget alternatives generator.
//!
//! Picks a city and something else its money could pay for, then shows how
//! many of those half the police budget would fund next to how the city
//! actually splits its general fund. The `data` subcommand lists the
//! sources behind every figure.
//!
//! Logging goes through `pretty_env_logger` and is filtered by `RUST_LOG`.

mod config;
mod interactive;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use police_budget_dataset::Dataset;
use police_budget_selection::SelectionState;
use rand::SeedableRng as _;
use rand::rngs::StdRng;

use crate::config::{Config, Flags};
use crate::render::DataSection;

/// Compare a city's police budget with what else it could pay for.
#[derive(Parser)]
#[command(name = "police_budget")]
#[command(about = "Compare a city's police budget with what else it could pay for")]
struct Cli {
    /// Directory with `cities.json` and `alternatives.json` to use instead
    /// of the bundled data.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Analytics sink: `log`, `file`, or `none`.
    #[arg(long, global = true)]
    analytics: Option<String>,

    /// Output path for the `file` analytics sink.
    #[arg(long, global = true)]
    analytics_file: Option<PathBuf>,

    /// Subcommand to execute. Defaults to `interactive`.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show the comparison for one city and alternative.
    Generate {
        /// City name (random if omitted).
        #[arg(long)]
        city: Option<String>,

        /// Alternative name (random if omitted).
        #[arg(long)]
        alternative: Option<String>,

        /// Seed for the random pick.
        #[arg(long)]
        seed: Option<u64>,

        /// Print the comparison as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the data sources behind every figure.
    Data {
        /// Only show one section.
        #[arg(long, value_enum)]
        section: Option<DataSection>,
    },

    /// Browse comparisons from a menu.
    Interactive {
        /// Seed for the initial random pick.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let cli = Cli::parse();

    let config = Config::resolve(Flags {
        data_dir: cli.data_dir,
        analytics: cli.analytics,
        analytics_file: cli.analytics_file,
    })?;
    log::debug!("Resolved configuration: {config:?}");

    let dataset = config.load_dataset()?;
    let colors = console::colors_enabled();

    match cli.command.unwrap_or(Commands::Interactive { seed: None }) {
        Commands::Generate {
            city,
            alternative,
            seed,
            json,
        } => {
            let state = initial_selection(
                &dataset,
                &config,
                city.as_deref(),
                alternative.as_deref(),
                seed,
            )?;
            state.view_page(interactive::GENERATOR_PAGE);

            if json {
                println!("{}", serde_json::to_string_pretty(state.comparison())?);
            } else {
                print!("{}", render::generator_view(state.comparison(), colors));
            }
        }
        Commands::Data { section } => {
            let sections = section.as_ref().map_or(DataSection::ALL, std::slice::from_ref);
            print!("{}", render::data_view(&dataset, sections, colors));
        }
        Commands::Interactive { seed } => {
            let mut state = initial_selection(&dataset, &config, None, None, seed)?;
            interactive::run(&mut state, colors)?;
        }
    }

    Ok(())
}

/// Builds the starting selection. Named records are used as given and the
/// rest are drawn at random.
fn initial_selection<'a>(
    dataset: &'a Dataset,
    config: &Config,
    city: Option<&str>,
    alternative: Option<&str>,
    seed: Option<u64>,
) -> Result<SelectionState<'a>, Box<dyn std::error::Error>> {
    let tracker = config.tracker()?;
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let random = SelectionState::random(dataset, tracker.clone(), &mut rng)?;

    let city = match city {
        Some(name) => dataset
            .city(name)
            .ok_or_else(|| format!("Unknown city '{name}'"))?,
        None => random.city(),
    };
    let alternative = match alternative {
        Some(name) => dataset
            .alternative(name)
            .ok_or_else(|| format!("Unknown alternative '{name}'"))?,
        None => random.alternative(),
    };

    Ok(SelectionState::new(dataset, city, alternative, tracker))
}
