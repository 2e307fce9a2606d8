//! Scripted collaborators for unit tests.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use area_game_api_types::{AreaStatus, Coordinate, PlayerSighting};

use crate::area_game::position::Region;
use crate::error::{FacadeError, LocationError};
use crate::facade::{FacadeResult, ServerFacade};
use crate::location::{GeoSampleSource, Permission};
use crate::map::{Alerts, MapScene, MapView};

pub(crate) fn sample_polygon() -> Vec<Coordinate> {
    vec![
        Coordinate::new(55.70, 12.58),
        Coordinate::new(55.71, 12.59),
        Coordinate::new(55.69, 12.60),
    ]
}

pub(crate) fn bob() -> PlayerSighting {
    PlayerSighting {
        name: "bob".into(),
        lat: 55.70,
        lon: 12.58,
    }
}

pub(crate) struct ScriptedLocation {
    permission: Permission,
    sample: Result<Coordinate, LocationError>,
    requests: Mutex<Vec<bool>>,
}

impl ScriptedLocation {
    pub fn granted(coordinate: Coordinate) -> Self {
        Self {
            permission: Permission::Granted,
            sample: Ok(coordinate),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Permission::Denied,
            sample: Err(LocationError::PermissionDenied),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            permission: Permission::Granted,
            sample: Err(LocationError::Unavailable("no fix".into())),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The `high_accuracy` flag of every sample request, in order
    pub fn high_accuracy_requests(&self) -> Vec<bool> {
        self.requests.lock().unwrap().clone()
    }
}

impl GeoSampleSource for ScriptedLocation {
    fn request_permission(&self) -> Pin<Box<dyn Future<Output = Permission> + Send + '_>> {
        Box::pin(async move { self.permission })
    }

    fn current_position(
        &self,
        high_accuracy: bool,
    ) -> Pin<Box<dyn Future<Output = Result<Coordinate, LocationError>> + Send + '_>> {
        self.requests.lock().unwrap().push(high_accuracy);
        let sample = self.sample.clone();
        Box::pin(async move { sample })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FacadeCall {
    FetchGameArea,
    IsUserInArea {
        longitude: f64,
        latitude: f64,
    },
    FindNearby {
        user_name: String,
        password: String,
        latitude: f64,
        longitude: f64,
        distance: String,
    },
}

fn not_scripted<T>() -> FacadeResult<T> {
    Err(FacadeError::Network("not scripted".into()))
}

/// Game area and area status answers repeat on every call; nearby answers are
/// consumed in order, each after its delay.
pub(crate) struct ScriptedFacade {
    game_area: FacadeResult<Vec<Coordinate>>,
    area_status: FacadeResult<AreaStatus>,
    nearby: Mutex<VecDeque<(Duration, FacadeResult<Vec<PlayerSighting>>)>>,
    calls: Mutex<Vec<FacadeCall>>,
}

impl ScriptedFacade {
    pub fn new() -> Self {
        Self {
            game_area: not_scripted(),
            area_status: not_scripted(),
            nearby: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_game_area(mut self, result: FacadeResult<Vec<Coordinate>>) -> Self {
        self.game_area = result;
        self
    }

    pub fn with_area_status(mut self, result: FacadeResult<AreaStatus>) -> Self {
        self.area_status = result;
        self
    }

    pub fn with_nearby(
        self,
        delay: Duration,
        result: FacadeResult<Vec<PlayerSighting>>,
    ) -> Self {
        self.nearby.lock().unwrap().push_back((delay, result));
        self
    }

    pub fn calls(&self) -> Vec<FacadeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: FacadeCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ServerFacade for ScriptedFacade {
    fn fetch_game_area(
        &self,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<Vec<Coordinate>>> + Send + '_>> {
        self.record(FacadeCall::FetchGameArea);
        let result = self.game_area.clone();
        Box::pin(async move { result })
    }

    fn is_user_in_area(
        &self,
        longitude: f64,
        latitude: f64,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<AreaStatus>> + Send + '_>> {
        self.record(FacadeCall::IsUserInArea {
            longitude,
            latitude,
        });
        let result = self.area_status.clone();
        Box::pin(async move { result })
    }

    fn find_nearby_players<'a>(
        &'a self,
        user_name: &'a str,
        password: &'a str,
        latitude: f64,
        longitude: f64,
        distance: &'a str,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<Vec<PlayerSighting>>> + Send + 'a>> {
        self.record(FacadeCall::FindNearby {
            user_name: user_name.into(),
            password: password.into(),
            latitude,
            longitude,
            distance: distance.into(),
        });
        let (delay, result) = self
            .nearby
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((Duration::ZERO, not_scripted()));

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        })
    }
}

#[derive(Default)]
pub(crate) struct RecordingMap {
    recenters: Mutex<Vec<(Region, Duration)>>,
    scenes: Mutex<Vec<MapScene>>,
}

impl RecordingMap {
    pub fn recenters(&self) -> Vec<(Region, Duration)> {
        self.recenters.lock().unwrap().clone()
    }

    pub fn last_scene(&self) -> Option<MapScene> {
        self.scenes.lock().unwrap().last().cloned()
    }
}

impl MapView for RecordingMap {
    fn animate_to_region(&self, region: Region, duration: Duration) {
        self.recenters.lock().unwrap().push((region, duration));
    }

    fn display(&self, scene: MapScene) {
        self.scenes.lock().unwrap().push(scene);
    }
}

#[derive(Default)]
pub(crate) struct RecordingAlerts {
    alerts: Mutex<Vec<(String, String)>>,
}

impl RecordingAlerts {
    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Alerts for RecordingAlerts {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .lock()
            .unwrap()
            .push((title.to_owned(), message.to_owned()));
    }
}
