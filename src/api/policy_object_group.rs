use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::models::PolicyObjectGroupInfo;
use crate::{MerakiClient, MerakiError, MerakiResult};

/// Longest group name the dashboard accepts.
const GROUP_NAME_MAX: usize = 38;

/// A named group of policy objects.
pub struct PolicyObjectGroup {
    client: MerakiClient,
    organization_id: String,
    info: PolicyObjectGroupInfo,
}

impl PolicyObjectGroup {
    /// Fetches the group record for `id` in the organization.
    pub async fn connect(
        client: &MerakiClient,
        organization_id: &str,
        id: &str,
    ) -> MerakiResult<Self> {
        let endpoint = format!("organizations/{organization_id}/policyObjects/groups/{id}");
        let info: PolicyObjectGroupInfo =
            client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(Self::from_info(client, organization_id, info))
    }

    pub(crate) fn from_info(
        client: &MerakiClient,
        organization_id: &str,
        info: PolicyObjectGroupInfo,
    ) -> Self {
        Self {
            client: client.clone(),
            organization_id: organization_id.to_string(),
            info,
        }
    }

    /// Creates a policy object group in the organization.
    ///
    /// Dots in the name become underscores before the POST.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::InvalidArgument` if the name exceeds the
    /// dashboard's 38-character limit.
    pub async fn create(
        client: &MerakiClient,
        organization_id: &str,
        name: &str,
        object_ids: Option<Vec<String>>,
    ) -> MerakiResult<Self> {
        let name = name.replace('.', "_");
        if name.len() > GROUP_NAME_MAX {
            return Err(MerakiError::InvalidArgument(format!(
                "policy object group name exceeds {GROUP_NAME_MAX} characters: '{name}'"
            )));
        }

        let mut payload = serde_json::Map::new();
        payload.insert("name".to_string(), Value::String(name));
        if let Some(object_ids) = object_ids {
            payload.insert("objectIds".to_string(), serde_json::to_value(object_ids)?);
        }

        let endpoint = format!("organizations/{organization_id}/policyObjects/groups");
        let info: PolicyObjectGroupInfo =
            client.request(Method::POST, &endpoint, Some(Value::Object(payload))).await?;
        Ok(Self::from_info(client, organization_id, info))
    }

    /// The unique identifier for this group.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Policy objects contained in the group.
    pub fn object_ids(&self) -> &[String] {
        &self.info.object_ids
    }

    fn endpoint(&self) -> String {
        format!(
            "organizations/{}/policyObjects/groups/{}",
            self.organization_id, self.info.id
        )
    }

    /// Re-fetches the group record from the dashboard.
    pub async fn refresh(&mut self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.info = self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(())
    }

    /// Deletes the group from the organization. Objects in the group are
    /// left in place.
    pub async fn delete(&self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.client.request_status(Method::DELETE, &endpoint, None::<()>).await?;
        Ok(())
    }
}

impl fmt::Display for PolicyObjectGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)
    }
}
