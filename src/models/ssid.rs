use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An SSID record as returned by the dashboard.
///
/// Every wireless network exposes 16 SSID slots, numbered 0-15; slots that
/// have never been configured come back named "Unconfigured SSID N".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsidInfo {
    /// The SSID slot number (0-15).
    pub number: u8,

    /// The SSID name.
    pub name: String,

    /// Whether the SSID is broadcast.
    pub enabled: bool,

    /// Pre-shared key, present only for PSK auth modes.
    pub psk: Option<String>,

    /// VLAN the SSID tags client traffic into, if VLAN tagging is on.
    pub default_vlan_id: Option<u16>,

    /// Additional attributes for this SSID.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl fmt::Display for SsidInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (slot {}, {})",
            self.name,
            self.number,
            if self.enabled { "enabled" } else { "disabled" }
        )
    }
}

/// Payload for updating an SSID.
///
/// All fields are optional; only the set ones are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SsidUpdate {
    /// New SSID name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the SSID is broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// New pre-shared key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psk: Option<String>,

    /// VLAN to tag client traffic into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u16>,

    /// Additional update attributes.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SsidUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SSID name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether the SSID is broadcast.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Set the pre-shared key.
    pub fn psk(mut self, psk: impl Into<String>) -> Self {
        self.psk = Some(psk.into());
        self
    }

    /// Set the VLAN to tag client traffic into.
    pub fn vlan_id(mut self, vlan_id: u16) -> Self {
        self.vlan_id = Some(vlan_id);
        self
    }

    /// Set an attribute this crate does not model. See the Meraki API
    /// documentation for the accepted fields.
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
