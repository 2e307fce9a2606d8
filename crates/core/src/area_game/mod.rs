//! Client-side state for the area game: the player's position, the game area
//! polygon, login info, the transient status line, nearby players, and the
//! [`orchestrator::Orchestrator`] that ties them to user actions.

pub mod credentials;
pub mod game_area;
pub mod orchestrator;
pub mod position;
pub mod proximity;
pub mod status;

pub use orchestrator::{Collaborators, Orchestrator, Phase, Snapshot};
