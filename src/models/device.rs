use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Product family of a device, derived from its model string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Camera,
    Sensor,
    Wireless,
    Switch,
    /// Any model this crate has no specialization for.
    Other,
}

/// A device record as returned by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    /// The device serial number.
    pub serial: String,

    /// The device name, if one has been assigned.
    pub name: Option<String>,

    /// The hardware model (e.g., "MS225-48LP", "MR36").
    pub model: String,

    /// Dashboard URL of the device.
    pub url: Option<String>,

    /// The network the device is claimed into, if any.
    pub network_id: Option<String>,

    /// Additional attributes for this device.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl DeviceInfo {
    /// Classifies the device by its model prefix: MV cameras, MT sensors,
    /// MR wireless access points, MS switches.
    pub fn kind(&self) -> DeviceKind {
        if self.model.contains("MV") {
            DeviceKind::Camera
        } else if self.model.contains("MT") {
            DeviceKind::Sensor
        } else if self.model.contains("MR") {
            DeviceKind::Wireless
        } else if self.model.contains("MS") {
            DeviceKind::Switch
        } else {
            DeviceKind::Other
        }
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.serial, self.model)
    }
}

/// Payload for updating device attributes.
///
/// All fields are optional; only the set ones are sent. Attributes this
/// crate does not model can be supplied through [`DeviceUpdate::with`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    /// New device name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New tag set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// New street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// New free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// New latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// New longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    /// Whether to move the map marker to the new address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_map_marker: Option<bool>,

    /// Additional update attributes.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl DeviceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the device name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the tag set.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set the street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set free-form notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the coordinates.
    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Whether to move the map marker to the new address.
    pub fn move_map_marker(mut self, move_marker: bool) -> Self {
        self.move_map_marker = Some(move_marker);
        self
    }

    /// Set an attribute this crate does not model. See the Meraki API
    /// documentation for the accepted fields.
    pub fn with(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
