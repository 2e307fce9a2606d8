use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use area_game_api_types::{Coordinate, PlayerSighting};
use tokio::sync::{RwLock, watch};

use crate::area_game::credentials::{Credentials, CredentialsStore};
use crate::area_game::game_area::{GameArea, GameAreaCache};
use crate::area_game::position::{PositionTracker, Region};
use crate::area_game::proximity::ProximityQueryEngine;
use crate::area_game::status::StatusMessenger;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::facade::ServerFacade;
use crate::location::GeoSampleSource;
use crate::map::{Alerts, MapScene, MapView, Marker};

pub const AREA_FETCH_FAILED_MESSAGE: &str = "Could not fetch GameArea";
pub const AREA_CHECK_FAILED_MESSAGE: &str = "Could not get result from server";
pub const SERVER_UNREACHABLE_TITLE: &str = "Error";
pub const SERVER_UNREACHABLE_MESSAGE: &str = "Server could not be reached";
pub const SERVER_DOWN_INFO: &str = " Server is not up";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Ready,
}

pub struct Collaborators {
    pub facade: Arc<dyn ServerFacade>,
    pub location: Arc<dyn GeoSampleSource>,
    pub map: Arc<dyn MapView>,
    pub alerts: Arc<dyn Alerts>,
}

/// Everything the game screen shows, read in one go.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub position: Option<Coordinate>,
    pub region: Option<Region>,
    /// Present only while the area is available and the server is considered up
    pub game_area: Option<GameArea>,
    pub game_area_available: bool,
    pub server_is_up: bool,
    pub other_players: Arc<[PlayerSighting]>,
    pub status: String,
    /// The status line, or a server-down notice once an area check has failed
    pub info: String,
    pub error_message: Option<String>,
    pub credentials: Credentials,
    pub distance: String,
    pub login_open: bool,
}

impl Snapshot {
    /// No region yet, so there is no map to show
    pub fn is_fetching(&self) -> bool {
        self.region.is_none()
    }
}

/// Drives the area game client.
///
/// All methods take `&self` so user actions can interleave while network or
/// location calls are pending. Nothing is retried: each failure is turned into
/// a flag or message once and the user may trigger the action again.
pub struct Orchestrator {
    config: GameConfig,
    facade: Arc<dyn ServerFacade>,
    location: Arc<dyn GeoSampleSource>,
    map: Arc<dyn MapView>,
    alerts: Arc<dyn Alerts>,

    credentials: CredentialsStore,
    game_area: GameAreaCache,
    position: PositionTracker,
    status: StatusMessenger,
    proximity: ProximityQueryEngine,

    phase: RwLock<Phase>,
    started: AtomicBool,
    server_is_up: AtomicBool,
    error_message: RwLock<Option<String>>,
    login_open: AtomicBool,
}

impl Orchestrator {
    pub fn new(config: GameConfig, collaborators: Collaborators) -> Self {
        let credentials = CredentialsStore::new(Credentials::new(
            config.default_user_name.clone(),
            config.default_password.clone(),
        ));
        let position = PositionTracker::new(
            config.region_latitude_delta,
            config.region_longitude_delta,
            config.high_accuracy,
        );
        let status = StatusMessenger::new(config.status_placeholder.clone(), config.status_expiry());
        let proximity = ProximityQueryEngine::new(config.default_distance.clone());

        Self {
            config,
            facade: collaborators.facade,
            location: collaborators.location,
            map: collaborators.map,
            alerts: collaborators.alerts,
            credentials,
            game_area: GameAreaCache::new(),
            position,
            status,
            proximity,
            phase: RwLock::new(Phase::Initializing),
            started: AtomicBool::new(false),
            server_is_up: AtomicBool::new(false),
            error_message: RwLock::new(None),
            login_open: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Acquire the position and fetch the game area, independently of each other.
    ///
    /// Only the first call does anything.
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::debug!("area game client already started");
            return;
        }

        tracing::info!("starting area game client");
        tokio::join!(self.acquire_position(), self.refresh_game_area());
        *self.phase.write().await = Phase::Ready;
    }

    async fn acquire_position(&self) {
        match self.position.acquire(self.location.as_ref()).await {
            Ok(fix) => {
                self.recenter(fix.region);
                self.publish_scene().await;
            }
            Err(error) => {
                tracing::warn!("could not acquire position: {error}");
                self.set_error(error.to_string()).await;
            }
        }
    }

    async fn refresh_game_area(&self) {
        match self.game_area.refresh(self.facade.as_ref()).await {
            Ok(_) => {
                self.server_is_up.store(true, Ordering::SeqCst);
                self.publish_scene().await;
            }
            Err(error) => {
                tracing::warn!("{}", GameError::AreaFetchFailed(error));
                self.set_error(AREA_FETCH_FAILED_MESSAGE).await;
            }
        }
    }

    fn recenter(&self, region: Region) {
        self.map
            .animate_to_region(region, self.config.recenter_duration());
    }

    /// Check a tapped point against the game area. Failures raise an alert.
    pub async fn on_map_press(&self, coordinate: Coordinate) {
        match self
            .facade
            .is_user_in_area(coordinate.longitude, coordinate.latitude)
            .await
        {
            Ok(status) => {
                self.status.show(&status);
            }
            Err(error) => {
                tracing::warn!("{}", GameError::AreaCheckFailed(error));
                self.alerts
                    .alert(SERVER_UNREACHABLE_TITLE, SERVER_UNREACHABLE_MESSAGE);
                self.mark_server_down().await;
            }
        }
    }

    /// Check the tracked position against the game area.
    ///
    /// Unlike [`Orchestrator::on_map_press`], failures set the static error
    /// message instead of raising an alert.
    pub async fn upload_real_position(&self) {
        let Some(coordinate) = self.position.coordinate().await else {
            tracing::warn!("{}", GameError::PositionUnknown);
            self.set_error(AREA_CHECK_FAILED_MESSAGE).await;
            self.mark_server_down().await;
            return;
        };

        match self
            .facade
            .is_user_in_area(coordinate.longitude, coordinate.latitude)
            .await
        {
            Ok(status) => {
                self.status.show(&status);
            }
            Err(error) => {
                tracing::warn!("{}", GameError::AreaCheckFailed(error));
                self.set_error(AREA_CHECK_FAILED_MESSAGE).await;
                self.mark_server_down().await;
            }
        }
    }

    /// Search for other players around the tracked position.
    ///
    /// Failures are returned to the caller, which decides how to show them.
    pub async fn find_nearby_players(&self) -> Result<Arc<[PlayerSighting]>> {
        let credentials = self.credentials.get().await;
        let coordinate = self.position.coordinate().await;
        let distance = self.proximity.distance().await;

        let result = self
            .proximity
            .find_nearby(self.facade.as_ref(), &credentials, coordinate, &distance)
            .await;

        match &result {
            Ok(_) => self.publish_scene().await,
            Err(error) => tracing::warn!("{error}"),
        }
        result
    }

    pub async fn center_on_game_area(&self) {
        // TODO: use the fetched polygon's centroid once the hardcoded center is confirmed to be a placeholder
        let region = self.config.game_area_center.region();

        if let Some(centroid) = self
            .game_area
            .available_area()
            .await
            .and_then(|area| area.centroid())
        {
            tracing::debug!(
                "centering on configured game area center, fetched polygon centroid is {}, {}",
                centroid.latitude,
                centroid.longitude
            );
        }

        self.recenter(region);
    }

    pub async fn set_user_name(&self, user_name: impl Into<String>) {
        self.credentials.set_user_name(user_name).await;
    }

    pub async fn set_password(&self, password: impl Into<String>) {
        self.credentials.set_password(password).await;
    }

    pub async fn set_distance(&self, distance: impl Into<String>) {
        self.proximity.set_distance(distance).await;
    }

    pub fn open_login(&self) {
        self.login_open.store(true, Ordering::SeqCst);
    }

    /// Credentials are already applied by the edits themselves
    pub fn close_login(&self) {
        self.login_open.store(false, Ordering::SeqCst);
    }

    pub fn server_is_up(&self) -> bool {
        self.server_is_up.load(Ordering::SeqCst)
    }

    pub fn status_message(&self) -> String {
        self.status.message()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<String> {
        self.status.subscribe()
    }

    pub async fn snapshot(&self) -> Snapshot {
        let server_is_up = self.server_is_up();
        let status = self.status.message();
        let phase = *self.phase.read().await;
        let fix = self.position.fix().await;
        let game_area = self.displayed_game_area().await;
        let game_area_available = self.game_area.is_available().await;
        let other_players = self.proximity.sightings().await;
        let error_message = self.error_message.read().await.clone();
        let credentials = self.credentials.get().await;
        let distance = self.proximity.distance().await;

        Snapshot {
            phase,
            position: fix.map(|fix| fix.coordinate),
            region: fix.map(|fix| fix.region),
            game_area,
            game_area_available,
            server_is_up,
            other_players,
            info: if server_is_up {
                status.clone()
            } else {
                SERVER_DOWN_INFO.to_owned()
            },
            status,
            error_message,
            credentials,
            distance,
            login_open: self.login_open.load(Ordering::SeqCst),
        }
    }

    async fn displayed_game_area(&self) -> Option<GameArea> {
        if !self.server_is_up() {
            return None;
        }
        self.game_area.available_area().await
    }

    async fn mark_server_down(&self) {
        self.server_is_up.store(false, Ordering::SeqCst);
        self.publish_scene().await;
    }

    async fn set_error(&self, message: impl Into<String>) {
        *self.error_message.write().await = Some(message.into());
    }

    async fn publish_scene(&self) {
        let mut markers = Vec::new();
        if let Some(coordinate) = self.position.coordinate().await {
            markers.push(Marker::own_position(coordinate));
        }
        markers.extend(self.proximity.sightings().await.iter().map(Marker::player));

        self.map.display(MapScene {
            game_area: self
                .displayed_game_area()
                .await
                .map(|area| area.boundary().to_vec()),
            markers,
        });
    }
}
