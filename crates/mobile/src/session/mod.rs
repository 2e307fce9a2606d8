use std::future::Future;
use std::sync::Arc;

use area_game_core::area_game::{Collaborators, Orchestrator};
use area_game_core::config::GameConfig;
use area_game_core::facade::http::HttpServerFacade;
use tokio::runtime::{Handle, Runtime};

use crate::session::bridge::{
    ForeignAlerts, ForeignLocation, ForeignMap, LocationProvider, MapSurface, SessionListener,
};
use crate::session::records::{DeviceCoordinate, SessionSnapshot};

pub mod bridge;
pub mod records;

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum SessionError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Runtime(String),
}

/// One running game client.
///
/// Actions return immediately; their work runs on the session's event loop and
/// the listener's `on_state_changed` fires once each has finished.
#[derive(uniffi::Object)]
pub struct AreaGameSession {
    runtime: Option<Runtime>,
    handle: Handle,
    orchestrator: Arc<Orchestrator>,
    listener: Arc<dyn SessionListener>,
}

#[uniffi::export]
impl AreaGameSession {
    /// `config_json` overrides individual fields of the default configuration
    #[uniffi::constructor]
    pub fn new(
        config_json: Option<String>,
        location: Arc<dyn LocationProvider>,
        map: Arc<dyn MapSurface>,
        listener: Arc<dyn SessionListener>,
    ) -> Result<Arc<Self>, SessionError> {
        crate::logging::setup_logging();

        let config = match config_json {
            Some(json) => {
                GameConfig::from_json(&json).map_err(|e| SessionError::Config(e.to_string()))?
            }
            None => GameConfig::default(),
        };

        // one worker: all game logic runs on a single event loop
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("area-game")
            .enable_all()
            .build()
            .map_err(|e| SessionError::Runtime(e.to_string()))?;

        let facade = HttpServerFacade::new(config.server_url.clone());
        let orchestrator = Arc::new(Orchestrator::new(
            config,
            Collaborators {
                facade: Arc::new(facade),
                location: Arc::new(ForeignLocation(location)),
                map: Arc::new(ForeignMap(map)),
                alerts: Arc::new(ForeignAlerts(Arc::clone(&listener))),
            },
        ));

        let session = Self {
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
            orchestrator,
            listener,
        };
        session.forward_status_changes();

        Ok(Arc::new(session))
    }

    pub fn start(&self) {
        self.dispatch(|game| async move { game.start().await });
    }

    pub fn on_map_press(&self, coordinate: DeviceCoordinate) {
        self.dispatch(move |game| async move { game.on_map_press(coordinate.into()).await });
    }

    pub fn upload_real_position(&self) {
        self.dispatch(|game| async move { game.upload_real_position().await });
    }

    pub fn find_nearby_players(&self) {
        let listener = Arc::clone(&self.listener);

        self.dispatch(|game| async move {
            if let Err(error) = game.find_nearby_players().await {
                listener.on_proximity_query_failed(error.to_string());
            }
        });
    }

    pub fn center_on_game_area(&self) {
        self.dispatch(|game| async move { game.center_on_game_area().await });
    }

    pub fn set_user_name(&self, user_name: String) {
        self.dispatch(|game| async move { game.set_user_name(user_name).await });
    }

    pub fn set_password(&self, password: String) {
        self.dispatch(|game| async move { game.set_password(password).await });
    }

    pub fn set_distance(&self, distance: String) {
        self.dispatch(|game| async move { game.set_distance(distance).await });
    }

    pub fn open_login(&self) {
        self.orchestrator.open_login();
        self.listener.on_state_changed();
    }

    pub fn close_login(&self) {
        self.orchestrator.close_login();
        self.listener.on_state_changed();
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.orchestrator.snapshot().await.into()
    }
}

impl AreaGameSession {
    fn dispatch<F, Fut>(&self, action: F)
    where
        F: FnOnce(Arc<Orchestrator>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = action(Arc::clone(&self.orchestrator));
        let listener = Arc::clone(&self.listener);

        self.handle.spawn(async move {
            task.await;
            listener.on_state_changed();
        });
    }

    fn forward_status_changes(&self) {
        let mut updates = self.orchestrator.subscribe_status();
        let listener = Arc::clone(&self.listener);

        self.handle.spawn(async move {
            while updates.changed().await.is_ok() {
                listener.on_state_changed();
            }
        });
    }
}

impl Drop for AreaGameSession {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
