//! Deployment configuration assembled once at the process boundary.
//!
//! The deployment interface is environment-variable driven, so loading goes
//! through an injectable lookup function. Unit tests supply arbitrary
//! environments without mutating the real process environment.

use thiserror::Error;

/// Environment variable holding the Portainer base URL.
pub const PORTAINER_URL_VAR: &str = "PORTAINER_URL";
/// Environment variable holding the authentication username.
pub const PORTAINER_USERNAME_VAR: &str = "PORTAINER_USERNAME";
/// Environment variable holding the authentication password.
pub const PORTAINER_PASSWORD_VAR: &str = "PORTAINER_PASSWORD";
/// Environment variable holding the stack name.
pub const STACK_NAME_VAR: &str = "STACK_NAME";
/// Environment variable holding the compose file content.
pub const COMPOSE_CONTENT_VAR: &str = "COMPOSE_CONTENT";

/// Mode selected on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeployMode {
    /// Create the stack if absent, update it in place if present.
    Deploy,
    /// Remove the stack; compose content is not required.
    Remove,
}

/// What a run does to the named stack once identifiers are resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeployAction {
    /// Submit the compose content, creating or updating as needed.
    Deploy {
        /// Compose file content submitted as the stack definition.
        compose_content: String,
    },
    /// Delete the stack. Fails when the stack is not deployed.
    Remove,
}

/// Immutable configuration for a single run.
///
/// Every field is validated non-blank at construction; the configuration is
/// never re-read once the run starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeployConfig {
    /// Base URL of the Portainer instance, without the `/api` suffix.
    pub portainer_url: String,
    /// Username submitted during authentication.
    pub username: String,
    /// Password submitted during authentication.
    pub password: String,
    /// Name of the stack to deploy or remove.
    pub stack_name: String,
    /// Action to perform against the stack.
    pub action: DeployAction,
}

impl DeployConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every required variable that
    /// is unset or blank.
    pub fn from_env(mode: DeployMode) -> Result<Self, ConfigError> {
        Self::from_lookup(mode, |name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    ///
    /// Blank values (empty or whitespace-only) count as missing. In remove
    /// mode the compose content is not consulted at all.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming every required variable that
    /// the lookup failed to produce.
    pub fn from_lookup<F>(mode: DeployMode, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();
        let mut require = |name: &'static str| -> String {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(name.to_owned());
                    String::new()
                }
            }
        };

        let portainer_url = require(PORTAINER_URL_VAR);
        let username = require(PORTAINER_USERNAME_VAR);
        let password = require(PORTAINER_PASSWORD_VAR);
        let stack_name = require(STACK_NAME_VAR);
        let action = match mode {
            DeployMode::Deploy => DeployAction::Deploy {
                compose_content: require(COMPOSE_CONTENT_VAR),
            },
            DeployMode::Remove => DeployAction::Remove,
        };

        if missing.is_empty() {
            Ok(Self {
                portainer_url,
                username,
                password,
                stack_name,
                action,
            })
        } else {
            Err(ConfigError::Missing { variables: missing })
        }
    }
}

/// Errors raised while assembling the run configuration.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// One or more required environment variables are unset or blank.
    #[error("missing required environment variable(s): {}", .variables.join(", "))]
    Missing {
        /// Names of the variables that must be set, in lookup order.
        variables: Vec<String>,
    },
}
