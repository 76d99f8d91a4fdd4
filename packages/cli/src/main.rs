#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the crime dashboard.
//!
//! Runs the same load, filter, and aggregate pipeline as the API server and
//! prints the result, or starts the server itself.

mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use crime_dash_analytics::dashboard::Dashboard;
use crime_dash_query::input::FilterInput;
use crime_dash_query::station_options;
use crime_dash_query_models::FilterState;
use crime_dash_server::{DEFAULT_DATA_LOCATION, ServerConfig, load_stations, run_server};
use crime_dash_server_models::ApiAnalysis;
use crime_dash_source::fetch::source_for_location;
use crime_dash_source::{Dataset, load_dataset};

#[derive(Parser)]
#[command(name = "crime_dash", about = "Crime record dashboard")]
struct Cli {
    /// CSV dataset path or `http(s)://` URL
    #[arg(long, global = true, env = "CRIME_DASH_DATA", default_value = DEFAULT_DATA_LOCATION)]
    data: String,
    /// TOML file replacing the built-in station coordinate table
    #[arg(long, global = true, env = "CRIME_DASH_STATIONS")]
    stations: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the category, trend, age, and summary views
    Analyze {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print the chart payload as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// List the police stations present in the dataset
    Stations,
    /// Print the filtered records as JSON
    Records {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Start the API server (`BIND_ADDR` and `PORT` are read from the
    /// environment)
    Serve,
}

#[derive(Args)]
struct FilterArgs {
    /// Category name, or `All`
    #[arg(long)]
    category: Option<String>,
    /// Police station name, or `All`
    #[arg(long)]
    station: Option<String>,
    /// Earliest date (`YYYY-MM-DD`, inclusive)
    #[arg(long)]
    start_date: Option<String>,
    /// Latest date (`YYYY-MM-DD`, inclusive)
    #[arg(long)]
    end_date: Option<String>,
    /// Minimum age (inclusive)
    #[arg(long)]
    min_age: Option<String>,
    /// Maximum age (inclusive)
    #[arg(long)]
    max_age: Option<String>,
}

impl From<FilterArgs> for FilterInput {
    fn from(args: FilterArgs) -> Self {
        Self {
            category: args.category,
            station: args.station,
            start_date: args.start_date,
            end_date: args.end_date,
            min_age: args.min_age,
            max_age: args.max_age,
        }
    }
}

impl FilterArgs {
    fn into_state(self) -> Result<FilterState, Box<dyn std::error::Error>> {
        let input = FilterInput::from(self);
        Ok(FilterState::try_from(&input)?)
    }
}

async fn load(data: &str, stations: Option<&Path>) -> Result<Dataset, Box<dyn std::error::Error>> {
    let stations = load_stations(stations).await?;
    let source = source_for_location(data);
    Ok(load_dataset(source.as_ref(), &stations).await?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");
    let Cli {
        data,
        stations,
        command,
    } = Cli::parse();

    match command {
        Commands::Analyze { filter, json } => {
            let filter = filter.into_state()?;
            let dataset = load(&data, stations.as_deref()).await?;
            let snapshot = Dashboard::new(dataset.records).set_filter(filter);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ApiAnalysis::from(&snapshot.views))?
                );
            } else {
                print!("{}", report::render(&snapshot.filter, &snapshot.views));
            }
        }
        Commands::Stations => {
            let dataset = load(&data, stations.as_deref()).await?;
            for station in station_options(&dataset.records) {
                println!("{station}");
            }
        }
        Commands::Records { filter } => {
            let filter = filter.into_state()?;
            let dataset = load(&data, stations.as_deref()).await?;
            let snapshot = Dashboard::new(dataset.records).set_filter(filter);
            println!("{}", serde_json::to_string_pretty(&snapshot.records)?);
        }
        Commands::Serve => {
            let config = ServerConfig {
                data_location: data,
                stations_path: stations,
                ..ServerConfig::from_env()
            };
            // The server uses actix-web's runtime, so run it on a blocking
            // thread to avoid nesting runtimes.
            tokio::task::spawn_blocking(move || {
                actix_web::rt::System::new().block_on(run_server(config))
            })
            .await??;
        }
    }

    Ok(())
}
