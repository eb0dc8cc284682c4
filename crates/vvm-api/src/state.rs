//! Application state for the vehicle API

use std::sync::Arc;

use vvm_aggregator::Aggregator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The aggregation engine serving vehicle requests
    aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Create a new AppState around an aggregator
    pub fn new(aggregator: Aggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }

    /// Get the aggregation engine
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }
}
