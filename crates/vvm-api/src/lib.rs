//! vvm-api - REST layer for the vehicle view-model server
//!
//! This crate provides the HTTP surface over the aggregation engine. It is
//! backend-agnostic: anything implementing `VehicleBackend` can sit behind
//! the aggregator it serves.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use vvm_api::{create_router, AppState};
//! use vvm_aggregator::Aggregator;
//! use vvm_sim::SimulatedBackend;
//!
//! let aggregator = Aggregator::new(Arc::new(SimulatedBackend::default()));
//! let router = create_router(AppState::new(aggregator));
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the vehicle REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Vehicle view-model
        .route("/vehicles/{vin}", get(handlers::vehicles::get_vehicle))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
