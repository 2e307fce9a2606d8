use area_game_core::api::{Coordinate, PlayerSighting};
use area_game_core::area_game::{Phase, Snapshot};
use area_game_core::area_game::position::Region;
use area_game_core::map::{MapScene, Marker, MarkerKind};

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct DeviceCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for DeviceCoordinate {
    fn from(value: Coordinate) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl From<DeviceCoordinate> for Coordinate {
    fn from(value: DeviceCoordinate) -> Self {
        Coordinate::new(value.latitude, value.longitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl From<Region> for MapRegion {
    fn from(value: Region) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
            latitude_delta: value.latitude_delta,
            longitude_delta: value.longitude_delta,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct MapMarker {
    pub title: String,
    pub coordinate: DeviceCoordinate,
    /// Drawn in a distinct color on the map
    pub is_own_position: bool,
}

impl From<Marker> for MapMarker {
    fn from(value: Marker) -> Self {
        Self {
            title: value.title,
            coordinate: value.coordinate.into(),
            is_own_position: value.kind == MarkerKind::OwnPosition,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct MapOverlay {
    pub game_area: Option<Vec<DeviceCoordinate>>,
    pub markers: Vec<MapMarker>,
}

impl From<MapScene> for MapOverlay {
    fn from(value: MapScene) -> Self {
        Self {
            game_area: value
                .game_area
                .map(|area| area.into_iter().map(DeviceCoordinate::from).collect()),
            markers: value.markers.into_iter().map(MapMarker::from).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct NearbyPlayer {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&PlayerSighting> for NearbyPlayer {
    fn from(value: &PlayerSighting) -> Self {
        Self {
            name: value.name.clone(),
            latitude: value.lat,
            longitude: value.lon,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct SessionSnapshot {
    pub ready: bool,
    /// True until the first position arrives
    pub fetching: bool,
    pub position: Option<DeviceCoordinate>,
    pub region: Option<MapRegion>,
    pub game_area: Option<Vec<DeviceCoordinate>>,
    pub game_area_available: bool,
    pub server_is_up: bool,
    pub other_players: Vec<NearbyPlayer>,
    pub status: String,
    pub info: String,
    pub error_message: Option<String>,
    pub user_name: String,
    pub password: String,
    pub distance: String,
    pub login_open: bool,
}

impl From<Snapshot> for SessionSnapshot {
    fn from(value: Snapshot) -> Self {
        Self {
            ready: value.phase == Phase::Ready,
            fetching: value.is_fetching(),
            position: value.position.map(DeviceCoordinate::from),
            region: value.region.map(MapRegion::from),
            game_area: value.game_area.map(|area| {
                area.boundary()
                    .iter()
                    .copied()
                    .map(DeviceCoordinate::from)
                    .collect()
            }),
            game_area_available: value.game_area_available,
            server_is_up: value.server_is_up,
            other_players: value.other_players.iter().map(NearbyPlayer::from).collect(),
            status: value.status,
            info: value.info,
            error_message: value.error_message,
            user_name: value.credentials.user_name,
            password: value.credentials.password,
            distance: value.distance,
            login_open: value.login_open,
        }
    }
}
