//! # area-game-core
//!
//! Position, geofence and proximity orchestration for the area game client.
//!
//! The host supplies the platform pieces through traits:
//!
//! - [`location::GeoSampleSource`] for permission and coordinate samples
//! - [`map::MapView`] and [`map::Alerts`] for what the player sees
//! - [`facade::ServerFacade`] for the game server, with
//!   [`facade::http::HttpServerFacade`] as the real implementation

pub mod area_game;
pub mod config;
pub mod error;
pub mod facade;
pub mod location;
pub mod map;

#[cfg(test)]
pub(crate) mod testing;

pub use area_game_api_types as api;
