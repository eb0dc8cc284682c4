//! vvm-aggregator - Concurrent assembly of the vehicle view-model
//!
//! This crate owns the fan-out/fan-in logic of the server: one request fans
//! out into several independent backend lookups, and their results are joined
//! into a single [`Vehicle`](vvm_core::Vehicle) record with per-field
//! fallback behavior.
//!
//! # Pipeline
//!
//! ```text
//!                        ┌─────────────────────┐
//!                        │  fetch_basic_data   │  failure fails the request
//!                        └──────────┬──────────┘
//!                                   │ model, engine
//!                  ┌────────────────┴────────────────┐
//!                  ▼                                 ▼
//!       ┌────────────────────┐           ┌──────────────────────┐
//!       │  picture pipeline  │           │    range pipeline    │
//!       │  fetch_pictures    │           │  BEV:  electric      │
//!       │  pick "front"      │           │  PHEV: electric+fuel │
//!       │  else silhouette   │           │  CEV:  fuel          │
//!       └─────────┬──────────┘           └──────────┬───────────┘
//!                 │ url or ""                       │ range or {}
//!                 └────────────────┬────────────────┘
//!                                  ▼
//!                             Vehicle record
//! ```
//!
//! Both pipelines run concurrently and the record is built only after both
//! have completed (a join, not a race). Failures inside a pipeline are
//! absorbed into that pipeline's fallback value; only the basic-data lookup
//! can fail the whole request.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vvm_aggregator::Aggregator;
//! use vvm_sim::SimulatedBackend;
//!
//! let aggregator = Aggregator::new(Arc::new(SimulatedBackend::default()));
//! let vehicle = aggregator.assemble("ABC123").await?;
//! ```

mod aggregator;

pub use aggregator::{Aggregator, AssembleError, DEFAULT_CALL_TIMEOUT};

// Re-export core types for convenience
pub use vvm_core::{BackendError, BackendResult, Vehicle, VehicleBackend};
