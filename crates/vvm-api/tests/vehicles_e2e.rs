//! E2E tests for the vehicle view-model API
//!
//! Each test binds the full router to a local listener and exercises it over
//! real HTTP: simulator-backed happy paths, degraded records, and the
//! unsuppressed basic-data error path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use vvm_aggregator::Aggregator;
use vvm_api::{create_router, AppState};
use vvm_core::{BackendError, BackendResult, BasicData, Engine, PictureEntry, VehicleBackend};
use vvm_sim::{SimulatedBackend, VehicleFixture};

// =============================================================================
// Test server
// =============================================================================

/// Serve the router for the given backend on an ephemeral local port and
/// return the base url.
async fn spawn_server(backend: Arc<dyn VehicleBackend>) -> String {
    let aggregator = Aggregator::new(backend);
    let app = create_router(AppState::new(aggregator));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Zero-latency simulator answering every VIN with the reference vehicle.
fn demo_backend() -> Arc<dyn VehicleBackend> {
    Arc::new(SimulatedBackend::with_latency(Duration::ZERO))
}

// =============================================================================
// Mock Backend
// =============================================================================

/// Scripted backend for the paths the simulator cannot produce.
struct MockBackend {
    fail_basic_data: bool,
    duplicate_front: bool,
}

#[async_trait]
impl VehicleBackend for MockBackend {
    async fn fetch_basic_data(&self, _vin: &str) -> BackendResult<BasicData> {
        if self.fail_basic_data {
            return Err(BackendError::Upstream("basic data service down".to_string()));
        }
        Ok(BasicData {
            model: "SomeElectricCar".to_string(),
            engine: Engine::Bev,
        })
    }

    async fn fetch_pictures(&self, vin: &str) -> BackendResult<Vec<PictureEntry>> {
        if self.duplicate_front {
            return Ok(vec![
                PictureEntry::new("front", format!("https://example.com/pictures/{}/a.png", vin)),
                PictureEntry::new("front", format!("https://example.com/pictures/{}/b.png", vin)),
            ]);
        }
        Ok(vec![])
    }

    async fn fetch_electric_range(&self, _vin: &str) -> BackendResult<u32> {
        Ok(512)
    }

    async fn fetch_fuel_range(&self, _vin: &str) -> BackendResult<u32> {
        Ok(700)
    }

    async fn fetch_silhouette(&self, model: &str) -> BackendResult<String> {
        Ok(format!(
            "https://example.com/pictures/{}/silhouette.png",
            model
        ))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let base = spawn_server(demo_backend()).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn get_vehicle_returns_the_assembled_record() {
    let base = spawn_server(demo_backend()).await;

    let response = reqwest::get(format!("{}/vehicles/ABC123", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "vin": "ABC123",
            "model": "SomeElectricCar",
            "engine": "BEV",
            "picture": "https://example.com/pictures/ABC123/front.png",
            "range": { "electric": 512 }
        })
    );
}

#[tokio::test]
async fn phev_record_carries_both_range_fields() {
    let backend = Arc::new(SimulatedBackend::new(
        Duration::ZERO,
        [VehicleFixture {
            vin: "DEF456".to_string(),
            model: "SomeHybridCar".to_string(),
            engine: Engine::Phev,
            electric_range: 80,
            fuel_range: 700,
        }],
    ));
    let base = spawn_server(backend).await;

    let response = reqwest::get(format!("{}/vehicles/DEF456", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["engine"], "PHEV");
    assert_eq!(body["range"], json!({ "electric": 80, "gasoline": 700 }));
}

#[tokio::test]
async fn unknown_vin_returns_not_found() {
    let backend = Arc::new(SimulatedBackend::new(
        Duration::ZERO,
        [VehicleFixture {
            vin: "ABC123".to_string(),
            model: "SomeElectricCar".to_string(),
            engine: Engine::Bev,
            electric_range: 512,
            fuel_range: 512,
        }],
    ));
    let base = spawn_server(backend).await;

    let response = reqwest::get(format!("{}/vehicles/NOSUCHVIN", base)).await.unwrap();

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn basic_data_failure_returns_bad_gateway() {
    let backend = Arc::new(MockBackend {
        fail_basic_data: true,
        duplicate_front: false,
    });
    let base = spawn_server(backend).await;

    let response = reqwest::get(format!("{}/vehicles/ABC123", base)).await.unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "bad_gateway");
}

#[tokio::test]
async fn ambiguous_front_picture_degrades_to_empty_string() {
    let backend = Arc::new(MockBackend {
        fail_basic_data: false,
        duplicate_front: true,
    });
    let base = spawn_server(backend).await;

    let response = reqwest::get(format!("{}/vehicles/ABC123", base)).await.unwrap();

    // Still a complete record — the ambiguity never surfaces as an error.
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["picture"], "");
    assert_eq!(body["range"], json!({ "electric": 512 }));
}

#[tokio::test]
async fn empty_picture_set_falls_back_to_the_model_silhouette() {
    let backend = Arc::new(MockBackend {
        fail_basic_data: false,
        duplicate_front: false,
    });
    let base = spawn_server(backend).await;

    let response = reqwest::get(format!("{}/vehicles/ABC123", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["picture"],
        "https://example.com/pictures/SomeElectricCar/silhouette.png"
    );
}
