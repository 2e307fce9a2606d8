//! # area-game-api-types
//!
//! Wire types exchanged with the area game server.
//!
//! Field names follow the server's JSON, which mixes `latitude`/`longitude`
//! for polygon points with `lat`/`lon` for player positions.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Another player's last known position, as returned by a nearby search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSighting {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl PlayerSighting {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// The server's verdict for a containment check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaStatus {
    /// Whether the point was inside the game area. Older servers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
    pub msg: String,
}

impl AreaStatus {
    pub fn with_message(msg: impl Into<String>) -> Self {
        Self {
            status: None,
            msg: msg.into(),
        }
    }
}

/// Body of `POST /gameapi/nearbyplayers`.
///
/// `distance` is forwarded verbatim; the server interprets it as meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlayersRequest {
    pub user_name: String,
    pub password: String,
    pub lat: f64,
    pub lon: f64,
    pub distance: String,
}
