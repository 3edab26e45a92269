//! Portainer implementation of the control-plane operations.
//!
//! Every operation is a single request-response exchange against the
//! Portainer HTTP API. Non-success statuses abort with the status and body;
//! there are no retries.

mod error;
mod types;

pub use error::PortainerError;

use crate::control_plane::{
    AuthToken, ControlPlane, ControlPlaneFuture, EndpointId, NewStack, StackId, StackSummary,
    StackUpdate, SwarmId,
};
use serde::de::DeserializeOwned;
use types::{
    AuthRequest, AuthResponse, CreateStackRequest, EndpointRecord, StackRecord, SwarmInspect,
    UpdateStackRequest,
};

/// Client for the Portainer HTTP API.
///
/// TLS verification uses the platform trust store via rustls. No request
/// timeout is configured, matching the historical behaviour of this tool.
#[derive(Clone, Debug)]
pub struct PortainerClient {
    http: reqwest::Client,
    api_base: String,
}

impl PortainerClient {
    /// Constructs a client for the given Portainer base URL.
    ///
    /// The URL names the instance root; the `/api` prefix is appended here
    /// and trailing slashes are tolerated.
    ///
    /// # Errors
    ///
    /// Returns [`PortainerError::Client`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, PortainerError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|err| PortainerError::Client {
                message: err.to_string(),
            })?;
        Ok(Self {
            http,
            api_base: format!("{}/api", base_url.trim_end_matches('/')),
        })
    }

    /// Sends a request and returns the raw body of a success response.
    async fn execute(
        request: reqwest::RequestBuilder,
        context: &'static str,
    ) -> Result<Vec<u8>, PortainerError> {
        let response = request
            .send()
            .await
            .map_err(|err| PortainerError::Transport {
                context,
                message: err.to_string(),
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| PortainerError::Transport {
                context,
                message: err.to_string(),
            })?;

        if status.is_success() {
            Ok(body.to_vec())
        } else {
            Err(PortainerError::Api {
                context,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            })
        }
    }

    /// Sends a request and decodes the success body as JSON.
    async fn execute_json<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        context: &'static str,
    ) -> Result<T, PortainerError> {
        let body = Self::execute(request, context).await?;
        serde_json::from_slice(&body).map_err(|err| PortainerError::Decode {
            context,
            message: err.to_string(),
        })
    }
}

impl ControlPlane for PortainerClient {
    type Error = PortainerError;

    fn authenticate<'a>(
        &'a self,
        username: &'a str,
        password: &'a str,
    ) -> ControlPlaneFuture<'a, AuthToken, Self::Error> {
        Box::pin(async move {
            let request = self
                .http
                .post(format!("{}/auth", self.api_base))
                .json(&AuthRequest { username, password });
            let parsed: AuthResponse = Self::execute_json(request, "authentication").await?;
            Ok(AuthToken::new(parsed.jwt))
        })
    }

    fn endpoints<'a>(
        &'a self,
        token: &'a AuthToken,
    ) -> ControlPlaneFuture<'a, Vec<EndpointId>, Self::Error> {
        Box::pin(async move {
            let request = self
                .http
                .get(format!("{}/endpoints", self.api_base))
                .bearer_auth(token.as_str());
            let records: Vec<EndpointRecord> =
                Self::execute_json(request, "endpoint listing").await?;
            Ok(records
                .into_iter()
                .map(|record| EndpointId::new(record.id))
                .collect())
        })
    }

    fn swarm_id<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
    ) -> ControlPlaneFuture<'a, SwarmId, Self::Error> {
        Box::pin(async move {
            let request = self
                .http
                .get(format!(
                    "{}/endpoints/{}/docker/swarm",
                    self.api_base,
                    endpoint.value()
                ))
                .bearer_auth(token.as_str());
            let inspect: SwarmInspect = Self::execute_json(request, "swarm inspection").await?;
            Ok(SwarmId::new(inspect.id))
        })
    }

    fn stacks<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
    ) -> ControlPlaneFuture<'a, Vec<StackSummary>, Self::Error> {
        Box::pin(async move {
            let request = self
                .http
                .get(format!(
                    "{}/stacks?endpointId={}",
                    self.api_base,
                    endpoint.value()
                ))
                .bearer_auth(token.as_str());
            let records: Vec<StackRecord> = Self::execute_json(request, "stack listing").await?;
            Ok(records
                .into_iter()
                .map(|record| StackSummary {
                    name: record.name,
                    id: StackId::new(record.id),
                })
                .collect())
        })
    }

    fn create_stack<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
        stack: &'a NewStack,
    ) -> ControlPlaneFuture<'a, (), Self::Error> {
        Box::pin(async move {
            // type=1 selects a swarm stack, method=string delivers the
            // compose file inline rather than by upload or repository.
            let request = self
                .http
                .post(format!(
                    "{}/stacks?type=1&method=string&endpointId={}",
                    self.api_base,
                    endpoint.value()
                ))
                .bearer_auth(token.as_str())
                .json(&CreateStackRequest {
                    name: &stack.name,
                    stack_file_content: &stack.compose_content,
                    swarm_id: stack.swarm_id.as_str(),
                });
            Self::execute(request, "stack creation").await?;
            Ok(())
        })
    }

    fn update_stack<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
        stack_id: StackId,
        update: &'a StackUpdate,
    ) -> ControlPlaneFuture<'a, (), Self::Error> {
        Box::pin(async move {
            let request = self
                .http
                .put(format!(
                    "{}/stacks/{}?endpointId={}",
                    self.api_base,
                    stack_id.value(),
                    endpoint.value()
                ))
                .bearer_auth(token.as_str())
                .json(&UpdateStackRequest {
                    name: &update.name,
                    swarm_id: update.swarm_id.as_str(),
                    stack_file_content: &update.compose_content,
                    prune: true,
                });
            Self::execute(request, "stack update").await?;
            Ok(())
        })
    }

    fn delete_stack<'a>(
        &'a self,
        token: &'a AuthToken,
        endpoint: EndpointId,
        stack_id: StackId,
    ) -> ControlPlaneFuture<'a, (), Self::Error> {
        Box::pin(async move {
            let request = self
                .http
                .delete(format!(
                    "{}/stacks/{}?endpointId={}",
                    self.api_base,
                    stack_id.value(),
                    endpoint.value()
                ))
                .bearer_auth(token.as_str());
            Self::execute(request, "stack removal").await?;
            Ok(())
        })
    }
}
