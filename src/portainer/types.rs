//! Wire-level request and response shapes for the Portainer API.
//!
//! Field names follow the Portainer JSON conventions exactly (`jwt` on the
//! auth response, PascalCase elsewhere), so renames are spelled out rather
//! than derived.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub(crate) username: &'a str,
    pub(crate) password: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct AuthResponse {
    pub(crate) jwt: String,
}

#[derive(Deserialize)]
pub(crate) struct EndpointRecord {
    #[serde(rename = "Id")]
    pub(crate) id: i64,
}

#[derive(Deserialize)]
pub(crate) struct SwarmInspect {
    #[serde(rename = "ID")]
    pub(crate) id: String,
}

#[derive(Deserialize)]
pub(crate) struct StackRecord {
    #[serde(rename = "Id")]
    pub(crate) id: i64,
    #[serde(rename = "Name")]
    pub(crate) name: String,
}

#[derive(Serialize)]
pub(crate) struct CreateStackRequest<'a> {
    #[serde(rename = "Name")]
    pub(crate) name: &'a str,
    #[serde(rename = "StackFileContent")]
    pub(crate) stack_file_content: &'a str,
    #[serde(rename = "SwarmID")]
    pub(crate) swarm_id: &'a str,
}

#[derive(Serialize)]
pub(crate) struct UpdateStackRequest<'a> {
    #[serde(rename = "Name")]
    pub(crate) name: &'a str,
    #[serde(rename = "SwarmID")]
    pub(crate) swarm_id: &'a str,
    #[serde(rename = "StackFileContent")]
    pub(crate) stack_file_content: &'a str,
    #[serde(rename = "Prune")]
    pub(crate) prune: bool,
}
