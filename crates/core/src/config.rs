//! Client configuration.
//!
//! Every field has a default, so hosts only supply what they want to change:
//!
//! ```
//! use area_game_core::config::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "server_url": "https://game.example.org" }"#).unwrap();
//! assert_eq!(config.server_url, "https://game.example.org");
//! assert_eq!(config.default_distance, "10000");
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::area_game::position::Region;

#[derive(Debug, thiserror::Error)]
#[error("Invalid configuration: {0}")]
pub struct ConfigError(#[from] serde_json::Error);

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Base URL of the game server, without a trailing slash
    pub server_url: String,

    pub default_user_name: String,
    pub default_password: String,
    /// Search radius in meters, kept as text because it is edited as text
    pub default_distance: String,

    pub status_expiry_ms: u64,
    /// Shown once a server status message has expired
    pub status_placeholder: String,

    pub region_latitude_delta: f64,
    pub region_longitude_delta: f64,
    pub recenter_duration_ms: u64,

    // hardcoded for now; should become the centroid of the fetched polygon
    pub game_area_center: GameAreaCenter,

    pub high_accuracy: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct GameAreaCenter {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl GameAreaCenter {
    pub fn region(&self) -> Region {
        Region {
            latitude: self.latitude,
            longitude: self.longitude,
            latitude_delta: self.latitude_delta,
            longitude_delta: self.longitude_delta,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:3333".into(),
            default_user_name: "t1".into(),
            default_password: "secret".into(),
            default_distance: "10000".into(),
            status_expiry_ms: 3000,
            status_placeholder: "- - - - - - - - - - - - - - - - - - - -".into(),
            region_latitude_delta: 0.0922,
            region_longitude_delta: 0.0421,
            recenter_duration_ms: 1000,
            game_area_center: GameAreaCenter {
                latitude: 55.777055745928664,
                longitude: 12.55897432565689,
                latitude_delta: 0.002,
                longitude_delta: 0.04,
            },
            high_accuracy: true,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn status_expiry(&self) -> Duration {
        Duration::from_millis(self.status_expiry_ms)
    }

    pub fn recenter_duration(&self) -> Duration {
        Duration::from_millis(self.recenter_duration_ms)
    }
}
