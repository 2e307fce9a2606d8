use area_game_api_types::Coordinate;
use tokio::sync::RwLock;

use crate::error::LocationError;
use crate::location::{GeoSampleSource, Permission};

/// A map viewport: a center plus the visible span in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn around(coordinate: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// The player's position and the viewport derived from it. Always set together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    pub region: Region,
}

pub struct PositionTracker {
    latitude_delta: f64,
    longitude_delta: f64,
    high_accuracy: bool,
    fix: RwLock<Option<PositionFix>>,
}

impl PositionTracker {
    pub fn new(latitude_delta: f64, longitude_delta: f64, high_accuracy: bool) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
            high_accuracy,
            fix: RwLock::new(None),
        }
    }

    /// Request permission and read a single sample.
    ///
    /// A denial clears any previous fix. A sample failure leaves it untouched.
    pub async fn acquire(&self, source: &dyn GeoSampleSource) -> Result<PositionFix, LocationError> {
        if source.request_permission().await == Permission::Denied {
            *self.fix.write().await = None;
            return Err(LocationError::PermissionDenied);
        }

        let coordinate = source.current_position(self.high_accuracy).await?;
        Ok(self.set(coordinate).await)
    }

    pub(crate) async fn set(&self, coordinate: Coordinate) -> PositionFix {
        let fix = PositionFix {
            coordinate,
            region: Region::around(coordinate, self.latitude_delta, self.longitude_delta),
        };
        *self.fix.write().await = Some(fix);

        tracing::debug!(
            "position fix at {}, {}",
            coordinate.latitude,
            coordinate.longitude
        );
        fix
    }

    pub async fn fix(&self) -> Option<PositionFix> {
        *self.fix.read().await
    }

    pub async fn coordinate(&self) -> Option<Coordinate> {
        self.fix().await.map(|fix| fix.coordinate)
    }

    pub async fn region(&self) -> Option<Region> {
        self.fix().await.map(|fix| fix.region)
    }
}
