use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Operating mode of a switch port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortType {
    Access,
    Trunk,
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortType::Access => write!(f, "access"),
            PortType::Trunk => write!(f, "trunk"),
        }
    }
}

/// A switch port configuration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPort {
    /// The port identifier (e.g., "1", "24").
    pub port_id: String,

    /// The port name, if one has been assigned.
    pub name: Option<String>,

    /// Operating mode of the port.
    #[serde(rename = "type")]
    pub port_type: PortType,

    /// Access VLAN (access ports) or native VLAN (trunk ports).
    pub vlan: Option<u16>,

    /// Additional attributes for this port.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Live status of a switch port.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPortStatus {
    /// The port identifier.
    pub port_id: String,

    /// Whether the port is enabled.
    pub enabled: Option<bool>,

    /// Connection status (e.g., "Connected", "Disconnected").
    pub status: Option<String>,

    /// Additional attributes for this status record.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

/// Payload for updating a switch port.
///
/// All fields are optional; only the set ones are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPortUpdate {
    /// New operating mode.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub port_type: Option<PortType>,

    /// New access or native VLAN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u16>,

    /// New port name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the port is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Additional update attributes.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SwitchPortUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operating mode.
    pub fn port_type(mut self, port_type: PortType) -> Self {
        self.port_type = Some(port_type);
        self
    }

    /// Set the access or native VLAN.
    pub fn vlan(mut self, vlan: u16) -> Self {
        self.vlan = Some(vlan);
        self
    }

    /// Set the port name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether the port is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set an attribute this crate does not model. See the Meraki API
    /// documentation for the accepted fields.
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A client observed on a switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchClient {
    /// Client MAC address.
    pub mac: Option<String>,

    /// Client description (typically the hostname).
    pub description: Option<String>,

    /// The port the client was seen on.
    pub switchport: Option<String>,

    /// Additional attributes for this client.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}
