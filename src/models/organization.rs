use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// An organization visible to the API key, as returned by the
/// `organizations` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSummary {
    /// The unique identifier for this organization.
    pub id: String,

    /// The organization name.
    pub name: String,

    /// Dashboard URL of the organization.
    pub url: Option<String>,

    /// Additional attributes for this organization.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}

impl fmt::Display for OrganizationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
