//! Map and alert collaborators.
//!
//! The map widget itself lives in the host; the core only tells it what to
//! show and where to look.

use std::time::Duration;

use area_game_api_types::{Coordinate, PlayerSighting};

use crate::area_game::position::Region;

pub const OWN_POSITION_TITLE: &str = "This is your position";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    OwnPosition,
    Player,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub title: String,
    pub coordinate: Coordinate,
}

impl Marker {
    pub fn own_position(coordinate: Coordinate) -> Self {
        Self {
            kind: MarkerKind::OwnPosition,
            title: OWN_POSITION_TITLE.into(),
            coordinate,
        }
    }

    pub fn player(sighting: &PlayerSighting) -> Self {
        Self {
            kind: MarkerKind::Player,
            title: format!("Position of {}", sighting.name),
            coordinate: sighting.coordinate(),
        }
    }
}

/// Everything drawn on top of the base map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapScene {
    /// `None` while the game area is unavailable or the server is considered down
    pub game_area: Option<Vec<Coordinate>>,
    pub markers: Vec<Marker>,
}

pub trait MapView: Send + Sync {
    fn animate_to_region(&self, region: Region, duration: Duration);
    fn display(&self, scene: MapScene);
}

/// Modal alerts shown on top of the whole screen.
pub trait Alerts: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}
