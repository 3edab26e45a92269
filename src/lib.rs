//! Core library for the gangplank stack deployer.
//!
//! The crate exposes a control-plane abstraction for stack lifecycle
//! operations, a Portainer implementation of it, and the deploy
//! orchestration that decides between create, update, and remove for a
//! named Docker Swarm stack.

pub mod config;
pub mod control_plane;
pub mod deploy;
pub mod portainer;

pub use config::{ConfigError, DeployAction, DeployConfig, DeployMode};
pub use control_plane::{
    AuthToken, ControlPlane, ControlPlaneFuture, EndpointId, NewStack, StackId, StackSummary,
    StackUpdate, SwarmId,
};
pub use deploy::{DeployError, DeployOutcome, Deployer};
pub use portainer::{PortainerClient, PortainerError};
