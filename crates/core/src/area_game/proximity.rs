use std::sync::Arc;

use area_game_api_types::{Coordinate, PlayerSighting};
use tokio::sync::RwLock;

use crate::area_game::credentials::Credentials;
use crate::error::{GameError, Result};
use crate::facade::ServerFacade;

/// Other players found by the last nearby search.
///
/// Each successful search replaces the whole list. Concurrent searches are not
/// ordered against each other: whichever response lands last is kept.
pub struct ProximityQueryEngine {
    distance: RwLock<String>,
    sightings: RwLock<Arc<[PlayerSighting]>>,
}

impl ProximityQueryEngine {
    pub fn new(distance: impl Into<String>) -> Self {
        Self {
            distance: RwLock::new(distance.into()),
            sightings: RwLock::new(Arc::from(Vec::new())),
        }
    }

    pub async fn distance(&self) -> String {
        self.distance.read().await.clone()
    }

    /// Stored verbatim. The server decides whether it is a usable radius.
    pub async fn set_distance(&self, distance: impl Into<String>) {
        *self.distance.write().await = distance.into();
    }

    pub async fn sightings(&self) -> Arc<[PlayerSighting]> {
        Arc::clone(&*self.sightings.read().await)
    }

    pub async fn find_nearby(
        &self,
        facade: &dyn ServerFacade,
        credentials: &Credentials,
        coordinate: Option<Coordinate>,
        distance: &str,
    ) -> Result<Arc<[PlayerSighting]>> {
        let coordinate = coordinate.ok_or(GameError::PositionUnknown)?;

        let found = facade
            .find_nearby_players(
                &credentials.user_name,
                &credentials.password,
                coordinate.latitude,
                coordinate.longitude,
                distance,
            )
            .await
            .map_err(GameError::ProximityQueryFailed)?;

        let found: Arc<[PlayerSighting]> = found.into();
        *self.sightings.write().await = Arc::clone(&found);

        tracing::debug!("{} players within {distance}m", found.len());
        Ok(found)
    }
}
