//! Request/acknowledge contract for pass-through host plugins.
//!
//! The host application ships several plugins besides the git bridge
//! (scaffolding, SSH manager, Kubernetes manager). They perform no work
//! themselves; the substantive logic lives in the host's scripting layer,
//! and each plugin only acknowledges the actions it recognizes with a
//! fixed success result. This crate models that contract so the bridge's
//! callers can treat every plugin uniformly: a known action always
//! acknowledges, an unknown action is rejected with the same
//! `Invalid action: <name>` wording the bridge uses.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from a pass-through plugin.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The action name is not in the plugin's action set.
    #[error("Invalid action: {0}")]
    InvalidAction(String),
}

/// Result type for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;

/// A fixed success acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    /// Plugin that acknowledged.
    pub plugin: String,
    /// Action that was acknowledged.
    pub action: String,
    /// Fixed status, always `"success"`.
    pub status: String,
}

/// A host plugin that acknowledges requests without doing any work.
pub trait HostPlugin: Send + Sync {
    /// Plugin name, e.g. `"ssh-manager"`.
    fn name(&self) -> &str;

    /// The action names the plugin acknowledges.
    fn actions(&self) -> &[String];

    /// Handles one action.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::InvalidAction`] for an unrecognized name.
    fn handle(&self, action: &str) -> Result<Acknowledgement> {
        if !self.actions().iter().any(|a| a == action) {
            return Err(PluginError::InvalidAction(action.to_string()));
        }
        debug!(plugin = self.name(), action, "acknowledged");
        Ok(Acknowledgement {
            plugin: self.name().to_string(),
            action: action.to_string(),
            status: "success".to_string(),
        })
    }
}

/// A pass-through plugin defined by its name and action set.
#[derive(Debug, Clone)]
pub struct StubPlugin {
    name: String,
    actions: Vec<String>,
}

impl StubPlugin {
    /// Creates a stub plugin.
    pub fn new<I, S>(name: impl Into<String>, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    /// The scaffolding plugin.
    pub fn scaffolding() -> Self {
        Self::new("scaffolding", ["init", "createProject", "checkToolAvailability"])
    }

    /// The SSH manager plugin.
    pub fn ssh_manager() -> Self {
        Self::new("ssh-manager", ["init", "generateKey", "testConnection", "executeCommand"])
    }

    /// The Kubernetes manager plugin.
    pub fn k8s_manager() -> Self {
        Self::new("k8s-manager", ["init", "testConnection", "executeCommand"])
    }
}

impl HostPlugin for StubPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn actions(&self) -> &[String] {
        &self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_action_always_acknowledges() {
        let plugin = StubPlugin::ssh_manager();
        let ack = plugin.handle("testConnection").unwrap();

        assert_eq!(ack.plugin, "ssh-manager");
        assert_eq!(ack.action, "testConnection");
        assert_eq!(ack.status, "success");
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let plugin = StubPlugin::scaffolding();
        let err = plugin.handle("deleteEverything").unwrap_err();

        assert!(matches!(err, PluginError::InvalidAction(ref name) if name == "deleteEverything"));
        assert_eq!(err.to_string(), "Invalid action: deleteEverything");
    }

    #[test]
    fn test_every_stub_exposes_init() {
        for plugin in [
            StubPlugin::scaffolding(),
            StubPlugin::ssh_manager(),
            StubPlugin::k8s_manager(),
        ] {
            let ack = plugin.handle("init").unwrap();
            assert_eq!(ack.status, "success");
        }
    }

    #[test]
    fn test_acknowledgement_wire_format() {
        let ack = StubPlugin::k8s_manager().handle("init").unwrap();
        let json = serde_json::to_string(&ack).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"plugin\":\"k8s-manager\""));
    }
}
