//! vvm-core - Core types and traits for the vehicle view-model server
//!
//! This crate provides the domain model and the `VehicleBackend` abstraction
//! that the aggregation and API layers are built against.

pub mod backend;
pub mod error;
pub mod models;

pub use backend::VehicleBackend;
pub use error::{BackendError, BackendResult};
pub use models::{BasicData, Engine, PictureEntry, Range, Vehicle};
