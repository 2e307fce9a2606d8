//! Callback traits implemented in Kotlin/Swift, and their adapters onto the
//! core collaborator traits.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use area_game_core::api::Coordinate;
use area_game_core::area_game::position::Region;
use area_game_core::error::LocationError;
use area_game_core::location::{GeoSampleSource, Permission};
use area_game_core::map::{Alerts, MapScene, MapView};

use crate::session::records::{DeviceCoordinate, MapOverlay, MapRegion};

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LocationProviderError {
    #[error("{reason}")]
    Unavailable { reason: String },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for LocationProviderError {
    fn from(value: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Unavailable {
            reason: value.reason,
        }
    }
}

/// Platform permission and location APIs. Calls may block.
#[uniffi::export(with_foreign)]
pub trait LocationProvider: Send + Sync {
    fn request_permission(&self) -> bool;
    fn current_position(
        &self,
        high_accuracy: bool,
    ) -> Result<DeviceCoordinate, LocationProviderError>;
}

#[uniffi::export(with_foreign)]
pub trait MapSurface: Send + Sync {
    fn animate_to_region(&self, region: MapRegion, duration_ms: u64);
    fn display(&self, overlay: MapOverlay);
}

#[uniffi::export(with_foreign)]
pub trait SessionListener: Send + Sync {
    fn on_alert(&self, title: String, message: String);
    fn on_proximity_query_failed(&self, message: String);
    /// Something in the snapshot may have changed
    fn on_state_changed(&self);
}

pub(crate) struct ForeignLocation(pub Arc<dyn LocationProvider>);

impl GeoSampleSource for ForeignLocation {
    fn request_permission(&self) -> Pin<Box<dyn Future<Output = Permission> + Send + '_>> {
        let provider = Arc::clone(&self.0);

        Box::pin(async move {
            match tokio::task::spawn_blocking(move || provider.request_permission()).await {
                Ok(true) => Permission::Granted,
                Ok(false) => Permission::Denied,
                Err(error) => {
                    tracing::error!("permission request did not complete: {error}");
                    Permission::Denied
                }
            }
        })
    }

    fn current_position(
        &self,
        high_accuracy: bool,
    ) -> Pin<Box<dyn Future<Output = Result<Coordinate, LocationError>> + Send + '_>> {
        let provider = Arc::clone(&self.0);

        Box::pin(async move {
            tokio::task::spawn_blocking(move || provider.current_position(high_accuracy))
                .await
                .map_err(|e| LocationError::Unavailable(e.to_string()))?
                .map(Coordinate::from)
                .map_err(|e| LocationError::Unavailable(e.to_string()))
        })
    }
}

pub(crate) struct ForeignMap(pub Arc<dyn MapSurface>);

impl MapView for ForeignMap {
    fn animate_to_region(&self, region: Region, duration: Duration) {
        let duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.0.animate_to_region(region.into(), duration_ms);
    }

    fn display(&self, scene: MapScene) {
        self.0.display(scene.into());
    }
}

pub(crate) struct ForeignAlerts(pub Arc<dyn SessionListener>);

impl Alerts for ForeignAlerts {
    fn alert(&self, title: &str, message: &str) {
        self.0.on_alert(title.to_owned(), message.to_owned());
    }
}
