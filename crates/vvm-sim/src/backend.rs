//! SimulatedBackend - fixture-backed lookups with artificial latency

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::time::sleep;
use vvm_core::{BackendError, BackendResult, BasicData, Engine, PictureEntry, VehicleBackend};

/// Latency the reference simulator adds to every call
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

fn default_range_km() -> u32 {
    512
}

/// One simulated vehicle, deserializable from a `[[vehicle]]` config entry.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleFixture {
    pub vin: String,
    pub model: String,
    pub engine: Engine,
    #[serde(default = "default_range_km")]
    pub electric_range: u32,
    #[serde(default = "default_range_km")]
    pub fuel_range: u32,
}

impl VehicleFixture {
    /// The fixture every VIN resolves to when no fixtures are configured:
    /// "SomeElectricCar", BEV, 512 km either way.
    fn reference(vin: &str) -> Self {
        Self {
            vin: vin.to_string(),
            model: "SomeElectricCar".to_string(),
            engine: Engine::Bev,
            electric_range: default_range_km(),
            fuel_range: default_range_km(),
        }
    }
}

/// Simulated remote vehicle services.
///
/// Every operation sleeps for the configured latency and then answers from
/// the fixture table. With an empty table any VIN resolves to the reference
/// fixture; with a configured table an unknown VIN fails the basic-data
/// lookup, which exercises the unsuppressed error path end to end.
pub struct SimulatedBackend {
    latency: Duration,
    fixtures: HashMap<String, VehicleFixture>,
}

impl SimulatedBackend {
    /// Create a simulator from a latency and fixture entries.
    pub fn new(latency: Duration, fixtures: impl IntoIterator<Item = VehicleFixture>) -> Self {
        let fixtures: HashMap<String, VehicleFixture> = fixtures
            .into_iter()
            .map(|fixture| (fixture.vin.clone(), fixture))
            .collect();

        tracing::info!(
            latency_ms = latency.as_millis() as u64,
            fixtures = fixtures.len(),
            "Created simulated vehicle backend"
        );

        Self { latency, fixtures }
    }

    /// Create a simulator with no configured fixtures.
    pub fn with_latency(latency: Duration) -> Self {
        Self::new(latency, [])
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }

    fn resolve(&self, vin: &str) -> BackendResult<VehicleFixture> {
        if self.fixtures.is_empty() {
            return Ok(VehicleFixture::reference(vin));
        }
        self.fixtures
            .get(vin)
            .cloned()
            .ok_or_else(|| BackendError::VehicleNotFound(vin.to_string()))
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl VehicleBackend for SimulatedBackend {
    async fn fetch_basic_data(&self, vin: &str) -> BackendResult<BasicData> {
        self.delay().await;
        let fixture = self.resolve(vin)?;
        Ok(BasicData {
            model: fixture.model,
            engine: fixture.engine,
        })
    }

    async fn fetch_pictures(&self, vin: &str) -> BackendResult<Vec<PictureEntry>> {
        self.delay().await;
        Ok(["top", "front", "left", "right"]
            .into_iter()
            .map(|label| {
                PictureEntry::new(
                    label,
                    format!("https://example.com/pictures/{}/{}.png", vin, label),
                )
            })
            .collect())
    }

    async fn fetch_electric_range(&self, vin: &str) -> BackendResult<u32> {
        self.delay().await;
        Ok(self.resolve(vin)?.electric_range)
    }

    async fn fetch_fuel_range(&self, vin: &str) -> BackendResult<u32> {
        self.delay().await;
        Ok(self.resolve(vin)?.fuel_range)
    }

    async fn fetch_silhouette(&self, model: &str) -> BackendResult<String> {
        self.delay().await;
        Ok(format!(
            "https://example.com/pictures/{}/silhouette.png",
            model
        ))
    }
}
