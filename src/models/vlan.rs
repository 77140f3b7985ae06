use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A reserved IP range inside a VLAN subnet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedIpRange {
    /// First address of the range.
    pub start: String,

    /// Last address of the range.
    pub end: String,

    /// Comment describing the reservation.
    pub comment: String,
}

/// Appliance VLAN settings for a network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanSettings {
    /// Whether VLANs are enabled on the appliance.
    pub vlans_enabled: bool,
}

/// A VLAN record as returned by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanInfo {
    /// The VLAN id (1-4094).
    pub id: u16,

    /// The VLAN name.
    pub name: String,

    /// Subnet in CIDR notation (e.g., "10.10.10.0/24").
    pub subnet: String,

    /// The appliance's IP inside the subnet (e.g., "10.10.10.1").
    pub appliance_ip: String,

    /// Reserved IP ranges inside the subnet.
    #[serde(default)]
    pub reserved_ip_ranges: Vec<ReservedIpRange>,

    /// Additional attributes for this VLAN.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl fmt::Display for VlanInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VLAN {} ({}): {}", self.id, self.name, self.subnet)
    }
}

/// Payload for creating a VLAN on an appliance.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanConfig {
    /// The VLAN id (1-4094).
    pub id: u16,

    /// The VLAN name.
    pub name: String,

    /// Subnet in CIDR notation.
    pub subnet: String,

    /// The appliance's IP inside the subnet.
    pub appliance_ip: String,

    /// Additional creation attributes.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl VlanConfig {
    pub fn new(
        id: u16,
        name: impl Into<String>,
        appliance_ip: impl Into<String>,
        subnet: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subnet: subnet.into(),
            appliance_ip: appliance_ip.into(),
            extra: HashMap::new(),
        }
    }

    /// Set an attribute this crate does not model. See the Meraki API
    /// documentation for the accepted fields.
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Payload for updating a VLAN.
///
/// All fields are optional; only the set ones are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VlanUpdate {
    /// New VLAN name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New subnet in CIDR notation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,

    /// New appliance IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appliance_ip: Option<String>,

    /// Replacement reserved IP ranges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_ip_ranges: Option<Vec<ReservedIpRange>>,

    /// Additional update attributes.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl VlanUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the VLAN name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the subnet.
    pub fn subnet(mut self, subnet: impl Into<String>) -> Self {
        self.subnet = Some(subnet.into());
        self
    }

    /// Set the appliance IP.
    pub fn appliance_ip(mut self, appliance_ip: impl Into<String>) -> Self {
        self.appliance_ip = Some(appliance_ip.into());
        self
    }

    /// Replace the reserved IP ranges.
    pub fn reserved_ip_ranges(mut self, ranges: Vec<ReservedIpRange>) -> Self {
        self.reserved_ip_ranges = Some(ranges);
        self
    }

    /// Set an attribute this crate does not model. See the Meraki API
    /// documentation for the accepted fields.
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
