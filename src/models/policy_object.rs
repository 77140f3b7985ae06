use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Address kind of a policy object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyObjectKind {
    /// An IP network in CIDR notation.
    Cidr,
    /// A fully-qualified domain name.
    Fqdn,
}

impl fmt::Display for PolicyObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyObjectKind::Cidr => write!(f, "cidr"),
            PolicyObjectKind::Fqdn => write!(f, "fqdn"),
        }
    }
}

/// A policy object record as returned by the dashboard.
///
/// The address lives under a JSON key named after the object's type
/// (`cidr` or `fqdn`); [`PolicyObjectInfo::address`] resolves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyObjectInfo {
    /// The unique identifier for this policy object.
    pub id: String,

    /// The policy object name.
    pub name: String,

    /// Category of the object (e.g., "network").
    pub category: String,

    /// Address kind.
    #[serde(rename = "type")]
    pub kind: PolicyObjectKind,

    /// CIDR address, present when `kind` is [`PolicyObjectKind::Cidr`].
    pub cidr: Option<String>,

    /// FQDN address, present when `kind` is [`PolicyObjectKind::Fqdn`].
    pub fqdn: Option<String>,

    /// Groups this object belongs to.
    #[serde(default)]
    pub group_ids: Vec<String>,

    /// Additional attributes for this policy object.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl PolicyObjectInfo {
    /// The address stored under the type-named key.
    pub fn address(&self) -> Option<&str> {
        match self.kind {
            PolicyObjectKind::Cidr => self.cidr.as_deref(),
            PolicyObjectKind::Fqdn => self.fqdn.as_deref(),
        }
    }
}

impl fmt::Display for PolicyObjectInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.name, self.kind, self.address().unwrap_or("-"))
    }
}

/// A policy object group record as returned by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyObjectGroupInfo {
    /// The unique identifier for this group.
    pub id: String,

    /// The group name.
    pub name: String,

    /// Policy objects contained in the group.
    #[serde(default)]
    pub object_ids: Vec<String>,

    /// Additional attributes for this group.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl fmt::Display for PolicyObjectGroupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
