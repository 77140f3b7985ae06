use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::models::{PolicyObjectInfo, PolicyObjectKind};
use crate::{MerakiClient, MerakiResult};

/// A named address entry (CIDR or FQDN) usable in firewall rules.
///
/// The object holds the snapshot taken at construction or last refresh.
pub struct PolicyObject {
    client: MerakiClient,
    organization_id: String,
    info: PolicyObjectInfo,
}

impl PolicyObject {
    /// Fetches the policy object record for `id` in the organization.
    pub async fn connect(
        client: &MerakiClient,
        organization_id: &str,
        id: &str,
    ) -> MerakiResult<Self> {
        let endpoint = format!("organizations/{organization_id}/policyObjects/{id}");
        let info: PolicyObjectInfo = client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(Self::from_info(client, organization_id, info))
    }

    pub(crate) fn from_info(
        client: &MerakiClient,
        organization_id: &str,
        info: PolicyObjectInfo,
    ) -> Self {
        Self {
            client: client.clone(),
            organization_id: organization_id.to_string(),
            info,
        }
    }

    /// Creates a policy object in the organization.
    ///
    /// The dashboard rejects most punctuation in names, so dots become
    /// underscores, `*` becomes ` W `, and slashes become dashes before the
    /// POST. The address is nested under a JSON key named after the kind
    /// (`cidr` or `fqdn`).
    pub async fn create(
        client: &MerakiClient,
        organization_id: &str,
        name: &str,
        kind: PolicyObjectKind,
        address: &str,
        group_ids: Option<Vec<String>>,
    ) -> MerakiResult<Self> {
        let name = name.replace('.', "_").replace('*', " W ").replace('/', "-");

        let mut payload = serde_json::Map::new();
        payload.insert("name".to_string(), Value::String(name));
        payload.insert("category".to_string(), Value::String("network".to_string()));
        payload.insert("type".to_string(), Value::String(kind.to_string()));
        payload.insert(kind.to_string(), Value::String(address.to_string()));
        if let Some(group_ids) = group_ids {
            payload.insert("groupIds".to_string(), serde_json::to_value(group_ids)?);
        }

        let endpoint = format!("organizations/{organization_id}/policyObjects");
        let info: PolicyObjectInfo =
            client.request(Method::POST, &endpoint, Some(Value::Object(payload))).await?;
        Ok(Self::from_info(client, organization_id, info))
    }

    /// The unique identifier for this policy object.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// The policy object name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Category of the object.
    pub fn category(&self) -> &str {
        &self.info.category
    }

    /// Address kind.
    pub fn kind(&self) -> PolicyObjectKind {
        self.info.kind
    }

    /// The address stored under the type-named key.
    pub fn address(&self) -> Option<&str> {
        self.info.address()
    }

    /// Groups this object belongs to.
    pub fn group_ids(&self) -> &[String] {
        &self.info.group_ids
    }

    fn endpoint(&self) -> String {
        format!("organizations/{}/policyObjects/{}", self.organization_id, self.info.id)
    }

    /// Re-fetches the policy object record from the dashboard.
    pub async fn refresh(&mut self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.info = self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(())
    }

    /// Deletes the policy object from the organization.
    pub async fn delete(&self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.client.request_status(Method::DELETE, &endpoint, None::<()>).await?;
        Ok(())
    }
}

impl fmt::Display for PolicyObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)
    }
}
