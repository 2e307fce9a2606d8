//! Failure taxonomy for the area game client.
//!
//! Every failure is caught where the call was issued and turned into a flag or
//! message on the orchestrator. Nothing here is retried automatically.

/// Failures reported by the device's location subsystem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Permission to access location was denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// Failures reported by the server facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FacadeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("Could not fetch game area: {0}")]
    AreaFetchFailed(#[source] FacadeError),

    #[error("Area check failed: {0}")]
    AreaCheckFailed(#[source] FacadeError),

    #[error("Nearby player search failed: {0}")]
    ProximityQueryFailed(#[source] FacadeError),

    #[error("Player position has not been acquired yet")]
    PositionUnknown,
}

pub type Result<T> = std::result::Result<T, GameError>;
