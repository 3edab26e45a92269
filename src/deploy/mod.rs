//! Orchestrates a single stack deployment run.
//!
//! A run walks a fixed one-way sequence: authenticate, resolve the first
//! endpoint, resolve the swarm id, list the deployed stacks, then dispatch
//! to exactly one mutating call (create, update, or delete). The first
//! failure is terminal; nothing is retried or rolled back.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{DeployAction, DeployConfig};
use crate::control_plane::{
    AuthToken, ControlPlane, EndpointId, NewStack, StackId, StackUpdate, SwarmId,
};

/// Terminal outcome of a successful run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeployOutcome {
    /// The stack did not exist and was created.
    Created,
    /// The stack existed and its content was replaced.
    Updated,
    /// The stack existed and was deleted.
    Removed,
}

impl DeployOutcome {
    /// Returns the outcome as a lowercase word for log output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Removed => "removed",
        }
    }
}

/// Errors surfaced while performing a deployment run.
#[derive(Debug, Error)]
pub enum DeployError<ClientError>
where
    ClientError: std::error::Error + 'static,
{
    /// Raised when the control plane rejects the credentials or the
    /// authentication exchange fails.
    #[error("authentication failed: {0}")]
    Auth(#[source] ClientError),
    /// Raised when the endpoint listing cannot be fetched.
    #[error("failed to list endpoints: {0}")]
    Endpoints(#[source] ClientError),
    /// Raised when the control plane has no registered endpoints.
    #[error("no endpoints are registered with the control plane")]
    NoEndpoints,
    /// Raised when the swarm cluster id cannot be resolved.
    #[error("failed to inspect the swarm cluster: {0}")]
    Swarm(#[source] ClientError),
    /// Raised when the stack listing cannot be fetched.
    #[error("failed to list stacks: {0}")]
    Stacks(#[source] ClientError),
    /// Raised when creating a new stack fails.
    #[error("failed to create stack '{name}': {source}")]
    Create {
        /// Stack name from the configuration.
        name: String,
        /// Underlying client error.
        #[source]
        source: ClientError,
    },
    /// Raised when updating an existing stack fails.
    #[error("failed to update stack '{name}': {source}")]
    Update {
        /// Stack name from the configuration.
        name: String,
        /// Underlying client error.
        #[source]
        source: ClientError,
    },
    /// Raised when deleting an existing stack fails.
    #[error("failed to remove stack '{name}': {source}")]
    Remove {
        /// Stack name from the configuration.
        name: String,
        /// Underlying client error.
        #[source]
        source: ClientError,
    },
    /// Raised when removal is requested for a stack that is not deployed.
    /// Distinct from transport errors: the listing succeeded, the name was
    /// simply absent.
    #[error("stack '{0}' is not deployed and cannot be removed")]
    StackNotDeployed(String),
}

/// Executes the deploy/remove flow against a control plane.
#[derive(Debug)]
pub struct Deployer<C> {
    control_plane: C,
}

impl<C: ControlPlane> Deployer<C> {
    /// Creates a new deployer owning the given control plane client.
    #[must_use]
    pub const fn new(control_plane: C) -> Self {
        Self { control_plane }
    }

    /// Runs the full sequence and returns what happened to the stack.
    ///
    /// The first endpoint in the listing is used; when more than one is
    /// registered a warning is emitted, matching the single-endpoint
    /// assumption this tool has always made.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError`] tagged with the phase that failed. Removal of
    /// a stack that is not deployed is [`DeployError::StackNotDeployed`].
    pub async fn execute(
        &self,
        config: &DeployConfig,
    ) -> Result<DeployOutcome, DeployError<C::Error>> {
        info!("requesting session token");
        let token = self
            .control_plane
            .authenticate(&config.username, &config.password)
            .await
            .map_err(DeployError::Auth)?;

        let endpoints = self
            .control_plane
            .endpoints(&token)
            .await
            .map_err(DeployError::Endpoints)?;
        let endpoint = *endpoints.first().ok_or(DeployError::NoEndpoints)?;
        if endpoints.len() > 1 {
            warn!(
                count = endpoints.len(),
                endpoint = endpoint.value(),
                "multiple endpoints registered; using the first"
            );
        }

        // Resolved in every run, removals included; the call sequence is
        // identical regardless of mode.
        let swarm_id = self
            .control_plane
            .swarm_id(&token, endpoint)
            .await
            .map_err(DeployError::Swarm)?;

        let listed = self
            .control_plane
            .stacks(&token, endpoint)
            .await
            .map_err(DeployError::Stacks)?;
        let deployed: HashMap<String, StackId> = listed
            .into_iter()
            .map(|stack| (stack.name, stack.id))
            .collect();
        let existing = deployed.get(config.stack_name.as_str()).copied();

        match (&config.action, existing) {
            (DeployAction::Remove, Some(stack_id)) => {
                self.remove(&token, endpoint, stack_id, &config.stack_name)
                    .await
            }
            (DeployAction::Remove, None) => Err(DeployError::StackNotDeployed(
                config.stack_name.clone(),
            )),
            (DeployAction::Deploy { compose_content }, Some(stack_id)) => {
                self.update(
                    &token,
                    endpoint,
                    stack_id,
                    &config.stack_name,
                    compose_content,
                    swarm_id,
                )
                .await
            }
            (DeployAction::Deploy { compose_content }, None) => {
                self.create(&token, endpoint, &config.stack_name, compose_content, swarm_id)
                    .await
            }
        }
    }

    async fn remove(
        &self,
        token: &AuthToken,
        endpoint: EndpointId,
        stack_id: StackId,
        name: &str,
    ) -> Result<DeployOutcome, DeployError<C::Error>> {
        info!(stack = name, "removing stack");
        self.control_plane
            .delete_stack(token, endpoint, stack_id)
            .await
            .map_err(|err| DeployError::Remove {
                name: name.to_owned(),
                source: err,
            })?;
        info!(stack = name, "stack removed");
        Ok(DeployOutcome::Removed)
    }

    async fn update(
        &self,
        token: &AuthToken,
        endpoint: EndpointId,
        stack_id: StackId,
        name: &str,
        compose_content: &str,
        swarm_id: SwarmId,
    ) -> Result<DeployOutcome, DeployError<C::Error>> {
        info!(stack = name, "updating stack");
        let payload = StackUpdate {
            name: name.to_owned(),
            compose_content: compose_content.to_owned(),
            swarm_id,
        };
        self.control_plane
            .update_stack(token, endpoint, stack_id, &payload)
            .await
            .map_err(|err| DeployError::Update {
                name: name.to_owned(),
                source: err,
            })?;
        info!(stack = name, "stack updated");
        Ok(DeployOutcome::Updated)
    }

    async fn create(
        &self,
        token: &AuthToken,
        endpoint: EndpointId,
        name: &str,
        compose_content: &str,
        swarm_id: SwarmId,
    ) -> Result<DeployOutcome, DeployError<C::Error>> {
        info!(stack = name, "creating stack");
        let payload = NewStack {
            name: name.to_owned(),
            compose_content: compose_content.to_owned(),
            swarm_id,
        };
        self.control_plane
            .create_stack(token, endpoint, &payload)
            .await
            .map_err(|err| DeployError::Create {
                name: name.to_owned(),
                source: err,
            })?;
        info!(stack = name, "stack created");
        Ok(DeployOutcome::Created)
    }
}
