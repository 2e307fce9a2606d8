use std::sync::Arc;

use area_game_api_types::Coordinate;
use geo::{Centroid, LineString, Point};
use tokio::sync::RwLock;

use crate::error::FacadeError;
use crate::facade::ServerFacade;

/// The server-defined game area boundary.
///
/// Cheap to clone; the points are shared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameArea {
    boundary: Arc<[Coordinate]>,
}

impl GameArea {
    pub fn new(boundary: Vec<Coordinate>) -> Self {
        Self {
            boundary: boundary.into(),
        }
    }

    pub fn boundary(&self) -> &[Coordinate] {
        &self.boundary
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Closed ring in (longitude, latitude) order
    pub fn to_line_string(&self) -> LineString {
        let mut ring: LineString = self
            .boundary
            .iter()
            .map(|c| (c.longitude, c.latitude))
            .collect();
        ring.close();
        ring
    }

    pub fn centroid(&self) -> Option<Coordinate> {
        let polygon = geo::Polygon::new(self.to_line_string(), vec![]);
        polygon
            .centroid()
            .map(|p: Point| Coordinate::new(p.y(), p.x()))
    }
}

#[derive(Debug, Default)]
struct CacheState {
    area: GameArea,
    available: bool,
}

#[derive(Default)]
pub struct GameAreaCache {
    state: RwLock<CacheState>,
}

impl GameAreaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the polygon and replace the cached one.
    ///
    /// On failure the cache is left as it was.
    pub async fn refresh(&self, facade: &dyn ServerFacade) -> Result<GameArea, FacadeError> {
        let area = GameArea::new(facade.fetch_game_area().await?);

        let mut state = self.state.write().await;
        state.area = area.clone();
        state.available = true;

        tracing::info!("game area fetched with {} points", area.boundary().len());
        Ok(area)
    }

    pub async fn area(&self) -> GameArea {
        self.state.read().await.area.clone()
    }

    pub async fn is_available(&self) -> bool {
        self.state.read().await.available
    }

    /// The cached area, if a fetch has succeeded
    pub async fn available_area(&self) -> Option<GameArea> {
        let state = self.state.read().await;
        state.available.then(|| state.area.clone())
    }
}
