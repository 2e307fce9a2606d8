//! Device location capability.
//!
//! Hosts implement [`GeoSampleSource`] on top of the platform's permission and
//! location APIs.

use std::future::Future;
use std::pin::Pin;

use area_game_api_types::Coordinate;

use crate::error::LocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

pub trait GeoSampleSource: Send + Sync {
    fn request_permission(&self) -> Pin<Box<dyn Future<Output = Permission> + Send + '_>>;

    /// Read a single coordinate sample
    fn current_position(
        &self,
        high_accuracy: bool,
    ) -> Pin<Box<dyn Future<Output = Result<Coordinate, LocationError>> + Send + '_>>;
}
