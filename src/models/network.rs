use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::MerakiError;

/// Product families a network can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductType {
    Appliance,
    Camera,
    CellularGateway,
    Sensor,
    Switch,
    SystemsManager,
    Wireless,
    /// A product family this crate does not model.
    #[serde(other)]
    Other,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductType::Appliance => "appliance",
            ProductType::Camera => "camera",
            ProductType::CellularGateway => "cellularGateway",
            ProductType::Sensor => "sensor",
            ProductType::Switch => "switch",
            ProductType::SystemsManager => "systemsManager",
            ProductType::Wireless => "wireless",
            ProductType::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// A network record as returned by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    /// The unique identifier for this network.
    pub id: String,

    /// The network name.
    pub name: String,

    /// The organization this network belongs to.
    pub organization_id: Option<String>,

    /// Product families present in the network.
    #[serde(default)]
    pub product_types: Vec<ProductType>,

    /// IANA timezone of the network.
    pub time_zone: Option<String>,

    /// Tags assigned to the network.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Dashboard URL of the network.
    pub url: Option<String>,

    /// Free-form notes.
    pub notes: Option<String>,

    /// Additional attributes for this network.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl fmt::Display for NetworkInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Payload for creating a network in an organization.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    /// The network name.
    pub name: String,

    /// Product families the network will contain.
    pub product_types: Vec<ProductType>,

    /// IANA timezone of the network.
    pub time_zone: String,

    /// Tags to assign to the network.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NetworkConfig {
    /// Create a new network configuration builder.
    pub fn builder() -> NetworkConfigBuilder {
        NetworkConfigBuilder::default()
    }
}

/// Builder for network creation payloads.
#[derive(Default)]
pub struct NetworkConfigBuilder {
    name: String,
    product_types: Vec<ProductType>,
    time_zone: Option<String>,
    tags: Vec<String>,
    notes: Option<String>,
}

impl NetworkConfigBuilder {
    /// Set the network name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add a product family to the network.
    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_types.push(product_type);
        self
    }

    /// Set the IANA timezone. Defaults to "America/New_York".
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set free-form notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Build the network configuration.
    pub fn build(self) -> Result<NetworkConfig, MerakiError> {
        if self.name.is_empty() {
            return Err(MerakiError::InvalidArgument("Network name is required".to_string()));
        }
        if self.product_types.is_empty() {
            return Err(MerakiError::InvalidArgument(
                "At least one product type is required".to_string(),
            ));
        }
        Ok(NetworkConfig {
            name: self.name,
            product_types: self.product_types,
            time_zone: self.time_zone.unwrap_or_else(|| "America/New_York".to_string()),
            tags: self.tags,
            notes: self.notes,
        })
    }
}
