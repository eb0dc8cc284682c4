//! VehicleBackend trait - the abstraction over the remote lookup services

use async_trait::async_trait;

use crate::error::BackendResult;
use crate::models::{BasicData, PictureEntry};

/// The lookup operations the view-model is assembled from.
///
/// Every operation is a one-shot asynchronous call against an independent
/// remote service: no retries, no caching, no latency assumptions. Each call
/// may fail or take arbitrarily long — callers own the timeout and fallback
/// policy.
///
/// Implementations:
/// - `SimulatedBackend` (vvm-sim) - in-process simulator with fixed latency
/// - a real implementation would talk HTTP/RPC to the vehicle services
#[async_trait]
pub trait VehicleBackend: Send + Sync {
    /// Fetch model name and engine type for a vehicle.
    async fn fetch_basic_data(&self, vin: &str) -> BackendResult<BasicData>;

    /// Fetch the complete picture set of a vehicle.
    ///
    /// Returns the full ordered sequence; an empty vector is a valid answer
    /// (a vehicle may have no pictures at all).
    async fn fetch_pictures(&self, vin: &str) -> BackendResult<Vec<PictureEntry>>;

    /// Fetch the electric range in kilometres.
    async fn fetch_electric_range(&self, vin: &str) -> BackendResult<u32>;

    /// Fetch the gasoline range in kilometres.
    async fn fetch_fuel_range(&self, vin: &str) -> BackendResult<u32>;

    /// Fetch the generic silhouette picture url for a model.
    ///
    /// Keyed by model name, not VIN — the silhouette is a model-level asset
    /// used when a vehicle has no front picture of its own.
    async fn fetch_silhouette(&self, model: &str) -> BackendResult<String>;
}
