#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the crime dashboard.
//!
//! Loads and validates the dataset once at startup, then answers map and
//! chart queries by filtering and aggregating the in-memory records on
//! every request.

mod handlers;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use crime_dash_source::stations::StationTable;
use crime_dash_source::{Dataset, SourceError, fetch::source_for_location, load_dataset};

/// Default dataset location.
pub const DEFAULT_DATA_LOCATION: &str = "data/crime_data.csv";

/// Errors that abort server startup.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The dataset or station table could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The HTTP server failed to bind or run.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Server startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// File path or `http(s)://` URL of the CSV dataset.
    pub data_location: String,
    /// Optional replacement station table.
    pub stations_path: Option<PathBuf>,
    /// Address to bind.
    pub bind_addr: String,
    /// Port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Reads `CRIME_DASH_DATA`, `CRIME_DASH_STATIONS`, `BIND_ADDR`, and
    /// `PORT`, falling back to defaults for anything unset or invalid.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_location: std::env::var("CRIME_DASH_DATA")
                .unwrap_or_else(|_| DEFAULT_DATA_LOCATION.to_string()),
            stations_path: std::env::var("CRIME_DASH_STATIONS").ok().map(PathBuf::from),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The validated working dataset (read-only).
    pub dataset: Dataset,
}

/// Loads the station table named by `path`, or the embedded default.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be read or parsed.
pub async fn load_stations(path: Option<&std::path::Path>) -> Result<StationTable, SourceError> {
    match path {
        Some(path) => StationTable::from_path(path).await,
        None => Ok(StationTable::embedded()),
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/categories", web::get().to(handlers::categories))
            .route("/stations", web::get().to(handlers::stations))
            .route("/incidents", web::get().to(handlers::incidents))
            .route("/analysis", web::get().to(handlers::analysis)),
    );
}

/// Starts the crime dashboard API server.
///
/// The dataset is loaded before the server binds; if it cannot be loaded
/// the server does not start.
///
/// # Errors
///
/// Returns [`ServerError`] if the dataset cannot be loaded or the HTTP
/// server fails to bind or run.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let stations = load_stations(config.stations_path.as_deref()).await?;
    log::info!("Station table has {} entries", stations.len());

    let source = source_for_location(&config.data_location);
    let dataset = load_dataset(source.as_ref(), &stations).await?;
    log::info!(
        "Loaded {} valid records from {}",
        dataset.records.len(),
        dataset.label
    );

    let state = web::Data::from(Arc::new(AppState { dataset }));

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
