//! vvm-sim - Simulated vehicle backend
//!
//! An in-process `VehicleBackend` that answers every lookup from a fixture
//! table after a fixed artificial delay, standing in for the real remote
//! services. The daemon uses it as demo backend; tests use it with zero
//! latency as a deterministic double.

mod backend;

pub use backend::{SimulatedBackend, VehicleFixture, DEFAULT_LATENCY};
