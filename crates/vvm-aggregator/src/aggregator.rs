//! Aggregator - fan-out/fan-in assembly of the vehicle record

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};
use vvm_core::{BackendError, BackendResult, BasicData, Engine, Range, Vehicle, VehicleBackend};

/// Label of the picture entry used as the primary display image
const FRONT_LABEL: &str = "front";

/// Default upper bound for a single backend call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Error returned by [`Aggregator::assemble`].
///
/// Only the basic-data lookup can fail a request — without model and engine
/// type there is nothing to build a record from. Every other lookup failure
/// is absorbed into a per-field fallback value and never surfaces here.
#[derive(Debug, Error)]
#[error("basic data lookup failed for vehicle {vin}")]
pub struct AssembleError {
    /// VIN the failed request was for
    pub vin: String,
    /// The underlying backend failure
    #[source]
    pub source: BackendError,
}

/// Failure modes of the picture pipeline. Never crosses the crate boundary:
/// every variant is suppressed to an empty url before the record is built.
#[derive(Debug, Error)]
enum PictureError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// More than one entry claims the "front" label, so there is no single
    /// primary image to pick.
    #[error("ambiguous front picture: {count} entries labeled \"front\"")]
    AmbiguousFront { count: usize },
}

/// Assembles [`Vehicle`] records by fanning out to a [`VehicleBackend`].
///
/// Stateless apart from its configuration: each request owns its pipeline
/// state exclusively, so one `Aggregator` serves any number of concurrent
/// requests without locking.
pub struct Aggregator {
    backend: Arc<dyn VehicleBackend>,
    call_timeout: Duration,
}

impl Aggregator {
    /// Create an aggregator with the default per-call timeout.
    pub fn new(backend: Arc<dyn VehicleBackend>) -> Self {
        Self::with_call_timeout(backend, DEFAULT_CALL_TIMEOUT)
    }

    /// Create an aggregator with a custom per-call timeout.
    ///
    /// The timeout bounds every individual backend call. An elapsed timeout
    /// is treated like any other failure of that call: fatal for basic data,
    /// suppressed to the fallback value inside the pipelines.
    pub fn with_call_timeout(backend: Arc<dyn VehicleBackend>, call_timeout: Duration) -> Self {
        Self {
            backend,
            call_timeout,
        }
    }

    /// Assemble the view-model record for a vehicle.
    ///
    /// Fetches basic data first, then resolves picture and range
    /// concurrently and joins them into the final record. The returned
    /// record is complete but possibly degraded: an empty `picture` or an
    /// empty `range` stands in for whatever could not be resolved.
    pub async fn assemble(&self, vin: &str) -> Result<Vehicle, AssembleError> {
        let BasicData { model, engine } = self
            .bounded(self.backend.fetch_basic_data(vin))
            .await
            .map_err(|source| AssembleError {
                vin: vin.to_string(),
                source,
            })?;

        let (picture, range) = tokio::join!(
            self.resolve_picture(vin, &model),
            self.resolve_range(vin, engine),
        );

        Ok(Vehicle {
            vin: vin.to_string(),
            model,
            engine,
            picture,
            range,
        })
    }

    /// Run the picture pipeline, absorbing any failure into an empty url.
    async fn resolve_picture(&self, vin: &str, model: &str) -> String {
        match self.front_picture(vin, model).await {
            Ok(url) => url,
            Err(err) => {
                warn!(%vin, error = %err, "picture lookup failed, serving empty url");
                String::new()
            }
        }
    }

    /// Select the url of the unique "front" picture, falling back to the
    /// model silhouette when the vehicle has none.
    ///
    /// The fallback decision is made against the complete picture sequence —
    /// `fetch_pictures` returns it in full, never a prefix.
    async fn front_picture(&self, vin: &str, model: &str) -> Result<String, PictureError> {
        let pictures = self.bounded(self.backend.fetch_pictures(vin)).await?;

        let mut fronts = pictures
            .into_iter()
            .filter(|entry| entry.label == FRONT_LABEL)
            .map(|entry| entry.url);

        match (fronts.next(), fronts.next()) {
            (Some(url), None) => Ok(url),
            (None, _) => {
                info!(%vin, %model, "no front picture, falling back to silhouette");
                let url = self.bounded(self.backend.fetch_silhouette(model)).await?;
                Ok(url)
            }
            (Some(_), Some(_)) => Err(PictureError::AmbiguousFront {
                count: 2 + fronts.count(),
            }),
        }
    }

    /// Run the range pipeline, absorbing any failure into the empty range.
    async fn resolve_range(&self, vin: &str, engine: Engine) -> Range {
        match self.fetch_range(vin, engine).await {
            Ok(range) => range,
            Err(err) => {
                warn!(%vin, %engine, error = %err, "range lookup failed, serving empty range");
                Range::default()
            }
        }
    }

    /// Issue the range lookups dictated by the engine type.
    ///
    /// PHEV needs both ranges; the two lookups run concurrently and the
    /// branch fails if either of them fails.
    async fn fetch_range(&self, vin: &str, engine: Engine) -> BackendResult<Range> {
        match engine {
            Engine::Bev => {
                let electric = self.bounded(self.backend.fetch_electric_range(vin)).await?;
                Ok(Range {
                    electric: Some(electric),
                    gasoline: None,
                })
            }
            Engine::Phev => {
                let (electric, gasoline) = tokio::join!(
                    self.bounded(self.backend.fetch_electric_range(vin)),
                    self.bounded(self.backend.fetch_fuel_range(vin)),
                );
                Ok(Range {
                    electric: Some(electric?),
                    gasoline: Some(gasoline?),
                })
            }
            Engine::Cev => {
                let gasoline = self.bounded(self.backend.fetch_fuel_range(vin)).await?;
                Ok(Range {
                    electric: None,
                    gasoline: Some(gasoline),
                })
            }
        }
    }

    /// Apply the per-call timeout to a backend call.
    async fn bounded<T>(&self, call: impl Future<Output = BackendResult<T>>) -> BackendResult<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(BackendError::Timeout),
        }
    }
}
