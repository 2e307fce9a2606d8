//! Boundary between the client core and the game server.
//!
//! The orchestrator only sees [`ServerFacade`]; [`http::HttpServerFacade`] is
//! the implementation used in the app.

pub mod http;

use std::future::Future;
use std::pin::Pin;

use area_game_api_types::{AreaStatus, Coordinate, PlayerSighting};

use crate::error::FacadeError;

pub type FacadeResult<T> = std::result::Result<T, FacadeError>;

pub trait ServerFacade: Send + Sync {
    /// Fetch the game area polygon, in boundary order
    fn fetch_game_area(
        &self,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<Vec<Coordinate>>> + Send + '_>>;

    /// Ask the server whether a point lies inside the game area
    fn is_user_in_area(
        &self,
        longitude: f64,
        latitude: f64,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<AreaStatus>> + Send + '_>>;

    /// Find other players within `distance` meters of the given point.
    ///
    /// `distance` is passed through untouched; the server validates it.
    fn find_nearby_players<'a>(
        &'a self,
        user_name: &'a str,
        password: &'a str,
        latitude: f64,
        longitude: f64,
        distance: &'a str,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<Vec<PlayerSighting>>> + Send + 'a>>;
}
