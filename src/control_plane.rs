//! Control-plane abstraction for stack lifecycle operations.
//!
//! The deploy orchestration only sees this trait, so tests can drive it with
//! a recording fake while the binary wires in the real Portainer client.

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`ControlPlane`] operations.
pub type ControlPlaneFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Opaque bearer token obtained once per run and attached to every
/// subsequent request. Never persisted across runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wraps a raw token string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token for use in an `Authorization` header.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Identifier of a managed environment registered with the control plane.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EndpointId(i64);

impl EndpointId {
    /// Wraps a raw endpoint identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// Identifier of a deployed stack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StackId(i64);

impl StackId {
    /// Wraps a raw stack identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// Cluster identifier associated with an endpoint's swarm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwarmId(String);

impl SwarmId {
    /// Wraps a raw swarm identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Name and identifier of a stack known to the control plane.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StackSummary {
    /// Stack name, unique per endpoint.
    pub name: String,
    /// Remote identifier used for update and delete calls.
    pub id: StackId,
}

/// Payload for creating a stack that does not exist yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewStack {
    /// Name the stack is registered under.
    pub name: String,
    /// Compose file content delivered as a string.
    pub compose_content: String,
    /// Swarm cluster the stack is deployed onto.
    pub swarm_id: SwarmId,
}

/// Payload for replacing the content of an existing stack.
///
/// Updates always prune resources no longer declared in the new content.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StackUpdate {
    /// Name the stack is registered under.
    pub name: String,
    /// Replacement compose file content.
    pub compose_content: String,
    /// Swarm cluster the stack runs on.
    pub swarm_id: SwarmId,
}

/// Operations the deployer needs from an orchestration control plane.
///
/// Every method is a single request-response exchange; implementations do
/// not retry.
pub trait ControlPlane {
    /// Error type surfaced by the implementation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Exchanges credentials for a bearer token.
    fn authenticate<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> ControlPlaneFuture<'a, AuthToken, Self::Error>;

    /// Lists the identifiers of all registered endpoints.
    fn endpoints<'a>(
        &'a self,
        token: &'a AuthToken,
    ) -> ControlPlaneFuture<'a, Vec<EndpointId>, Self::Error>;

    /// Fetches the swarm cluster identifier for an endpoint.
    fn swarm_id<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
    ) -> ControlPlaneFuture<'a, SwarmId, Self::Error>;

    /// Lists the stacks deployed to an endpoint.
    fn stacks<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
    ) -> ControlPlaneFuture<'a, Vec<StackSummary>, Self::Error>;

    /// Creates a new stack on an endpoint.
    fn create_stack<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
        stack: &'a NewStack,
    ) -> ControlPlaneFuture<'a, (), Self::Error>;

    /// Replaces the content of an existing stack, pruning removed resources.
    fn update_stack<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
        stack_id: StackId,
        update: &'a StackUpdate,
    ) -> ControlPlaneFuture<'a, (), Self::Error>;

    /// Deletes an existing stack from an endpoint.
    fn delete_stack<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
        stack_id: StackId,
    ) -> ControlPlaneFuture<'a, (), Self::Error>;
}
