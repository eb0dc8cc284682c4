//! Domain model for the vehicle view-model server

use serde::{Deserialize, Serialize};

/// Drive-train variant of a vehicle.
///
/// This is a closed set: the range lookup strategy branches exhaustively on
/// it, so adding a variant is an API change, not a data change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Engine {
    /// Battery electric vehicle — electric range only
    Bev,
    /// Plug-in hybrid — both electric and gasoline range
    Phev,
    /// Combustion engine vehicle — gasoline range only
    Cev,
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Engine::Bev => "BEV",
            Engine::Phev => "PHEV",
            Engine::Cev => "CEV",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEV" => Ok(Engine::Bev),
            "PHEV" => Ok(Engine::Phev),
            "CEV" => Ok(Engine::Cev),
            _ => Err(format!("Unknown engine type: '{}'", s)),
        }
    }
}

/// Master data for a vehicle, fetched exactly once per request.
///
/// The engine type drives which range lookups are issued downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicData {
    /// Model name (e.g. "SomeElectricCar"), also the silhouette lookup key
    pub model: String,
    /// Drive-train variant
    pub engine: Engine,
}

/// One entry of a vehicle's picture set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureEntry {
    /// Perspective label ("front", "top", "left", ...)
    pub label: String,
    /// Where the picture is served from
    pub url: String,
}

impl PictureEntry {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Driving range of a vehicle in kilometres.
///
/// Which fields are present depends on the engine type; a field that does not
/// apply (or could not be resolved) is `None` and omitted from JSON. The
/// `Default` value is the fully-unresolved range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electric: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gasoline: Option<u32>,
}

/// The assembled vehicle view-model — the response payload of
/// `GET /vehicles/{vin}`.
///
/// Constructed once per request and immutable afterwards. `picture` is always
/// present; an empty string means no picture could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vin: String,
    pub model: String,
    pub engine: Engine,
    pub picture: String,
    pub range: Range,
}
