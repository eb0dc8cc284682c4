//! vvmd - Vehicle View-Model Daemon
//!
//! HTTP server assembling vehicle view-models from simulated remote lookups.
//!
//! Usage:
//!   vvmd [config.toml]
//!
//! If no config file is provided, every VIN resolves to the built-in demo
//! vehicle and each simulated lookup takes one second.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vvm_aggregator::Aggregator;
use vvm_api::{create_router, AppState};
use vvm_sim::{SimulatedBackend, VehicleFixture};

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let mut result = Args { config_path: None };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(arg.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"vvmd - Vehicle View-Model Daemon

Usage: vvmd [config.toml]

Options:
  -h, --help    Print this help message

Examples:
  # Run with the built-in demo vehicle
  vvmd

  # Run with a config file
  vvmd config.toml
"#
    );
}

fn default_port() -> u16 {
    8080
}

fn default_latency_ms() -> u64 {
    1000
}

fn default_call_timeout_ms() -> u64 {
    5000
}

/// Top-level daemon configuration
#[derive(Debug, Deserialize, Default)]
struct Config {
    #[serde(default)]
    server: ServerConfig,
    #[serde(default)]
    backend: BackendConfig,
    /// Simulated vehicle fixtures; empty means "answer every VIN"
    #[serde(default, rename = "vehicle")]
    vehicles: Vec<VehicleFixture>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    #[serde(default = "default_port")]
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BackendConfig {
    /// Artificial latency of each simulated lookup
    #[serde(default = "default_latency_ms")]
    latency_ms: u64,
    /// Upper bound for a single backend call
    #[serde(default = "default_call_timeout_ms")]
    call_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            call_timeout_ms: default_call_timeout_ms(),
        }
    }
}

impl Config {
    fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vvmd=info,vvm_api=info,vvm_aggregator=info,vvm_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vvmd (Vehicle View-Model Daemon)");

    let args = parse_args();

    let config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        Config::load(path)?
    } else {
        tracing::info!("No config file provided, using built-in demo vehicle");
        Config::default()
    };

    let backend = SimulatedBackend::new(
        Duration::from_millis(config.backend.latency_ms),
        config.vehicles,
    );
    let aggregator = Aggregator::with_call_timeout(
        Arc::new(backend),
        Duration::from_millis(config.backend.call_timeout_ms),
    );

    let state = AppState::new(aggregator);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use vvm_core::Engine;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.latency_ms, 1000);
        assert_eq!(config.backend.call_timeout_ms, 5000);
        assert!(config.vehicles.is_empty());
    }

    #[test]
    fn config_parses_vehicle_fixtures() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9090

            [backend]
            latency_ms = 0

            [[vehicle]]
            vin = "ABC123"
            model = "SomeElectricCar"
            engine = "BEV"
            electric_range = 512

            [[vehicle]]
            vin = "DEF456"
            model = "SomeHybridCar"
            engine = "PHEV"
            electric_range = 80
            fuel_range = 700
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.backend.latency_ms, 0);
        assert_eq!(config.vehicles.len(), 2);
        assert_eq!(config.vehicles[0].engine, Engine::Bev);
        assert_eq!(config.vehicles[1].fuel_range, 700);
    }
}
