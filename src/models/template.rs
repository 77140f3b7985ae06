use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A configuration template defined in an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigTemplate {
    /// The unique identifier for this template.
    pub id: String,

    /// The template name.
    pub name: String,

    /// Additional attributes for this template.
    #[serde(flatten)]
    pub attributes: HashMap<String, serde_json::Value>,
}
