use std::fmt;

use reqwest::Method;

use crate::api::policy_object::PolicyObject;
use crate::api::policy_object_group::PolicyObjectGroup;
use crate::api::switch::Switch;
use crate::models::{DeviceInfo, NetworkInfo, OrganizationSummary, PolicyObjectGroupInfo, PolicyObjectInfo, PolicyObjectKind};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// Wildcard ranges wider than this are split across two groups, because
/// the dashboard caps group membership at 150 objects.
const RANGE_SPLIT_SPAN: u8 = 128;

/// Strips everything the dashboard rejects in resource names, keeping
/// alphanumerics, spaces, dashes, and underscores.
pub(crate) fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// An organization, resolved by name, with its policy objects and policy
/// object groups cached.
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &meraki_client::MerakiClient) -> meraki_client::MerakiResult<()> {
/// use meraki_client::{Organization, PolicyObjectKind};
///
/// let mut org = Organization::connect(client, "Acme Corp").await?;
///
/// let object = org
///     .create_policy_object("branch-subnet", PolicyObjectKind::Cidr, "10.40.0.0/24", None)
///     .await?;
/// println!("created {}", object);
/// # Ok(())
/// # }
/// ```
pub struct Organization {
    client: MerakiClient,
    id: String,
    name: String,
    policy_objects: Vec<PolicyObject>,
    policy_object_groups: Vec<PolicyObjectGroup>,
}

impl Organization {
    /// Resolves the organization id by name and loads the policy object
    /// and group collections.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::OrganizationNotFound` if no organization with
    /// that name is visible to the API key.
    pub async fn connect(client: &MerakiClient, name: &str) -> MerakiResult<Self> {
        let orgs: Vec<OrganizationSummary> =
            client.request(Method::GET, "organizations", None::<()>).await?;
        let org = orgs
            .into_iter()
            .find(|org| org.name == name)
            .ok_or_else(|| MerakiError::OrganizationNotFound(name.to_string()))?;

        let policy_objects = Self::fetch_policy_objects(client, &org.id).await?;
        let policy_object_groups = Self::fetch_policy_object_groups(client, &org.id).await?;

        Ok(Self {
            client: client.clone(),
            id: org.id,
            name: org.name,
            policy_objects,
            policy_object_groups,
        })
    }

    async fn fetch_policy_objects(
        client: &MerakiClient,
        organization_id: &str,
    ) -> MerakiResult<Vec<PolicyObject>> {
        let endpoint = format!("organizations/{organization_id}/policyObjects");
        let infos: Vec<PolicyObjectInfo> =
            client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(infos
            .into_iter()
            .map(|info| PolicyObject::from_info(client, organization_id, info))
            .collect())
    }

    async fn fetch_policy_object_groups(
        client: &MerakiClient,
        organization_id: &str,
    ) -> MerakiResult<Vec<PolicyObjectGroup>> {
        let endpoint = format!("organizations/{organization_id}/policyObjects/groups");
        let infos: Vec<PolicyObjectGroupInfo> =
            client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(infos
            .into_iter()
            .map(|info| PolicyObjectGroup::from_info(client, organization_id, info))
            .collect())
    }

    /// The unique identifier for this organization.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The organization name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cached policy objects.
    pub fn policy_objects(&self) -> &[PolicyObject] {
        &self.policy_objects
    }

    /// The cached policy object groups.
    pub fn policy_object_groups(&self) -> &[PolicyObjectGroup] {
        &self.policy_object_groups
    }

    /// Ids of all networks in the organization.
    pub async fn network_ids(&self) -> MerakiResult<Vec<String>> {
        let endpoint = format!("organizations/{}/networks", self.id);
        let networks: Vec<NetworkInfo> =
            self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(networks.into_iter().map(|network| network.id).collect())
    }

    /// The full device inventory of the organization.
    pub async fn devices(&self) -> MerakiResult<Vec<DeviceInfo>> {
        let endpoint = format!("organizations/{}/devices", self.id);
        self.client.request(Method::GET, &endpoint, None::<()>).await
    }

    /// All switches in the organization, with their port tables loaded.
    pub async fn switches(&self) -> MerakiResult<Vec<Switch>> {
        let mut switches = Vec::new();
        for info in self.devices().await? {
            if info.model.contains("MS") {
                switches.push(Switch::from_info(&self.client, info).await?);
            }
        }
        Ok(switches)
    }

    /// All switches in the organization, each paired with its trunk port
    /// ids.
    pub async fn switches_with_trunk_ports(&self) -> MerakiResult<Vec<(Switch, Vec<String>)>> {
        Ok(self
            .switches()
            .await?
            .into_iter()
            .map(|switch| {
                let trunks = switch.trunk_ports();
                (switch, trunks)
            })
            .collect())
    }

    /// Looks up a cached policy object by id or name.
    pub fn policy_object(&self, key: &str) -> Option<&PolicyObject> {
        self.policy_objects.iter().find(|object| object.id() == key || object.name() == key)
    }

    /// Creates a policy object and appends it to the cached collection.
    ///
    /// The name is stripped to alphanumerics, spaces, dashes, and
    /// underscores first.
    pub async fn create_policy_object(
        &mut self,
        name: &str,
        kind: PolicyObjectKind,
        address: &str,
        group_ids: Option<Vec<String>>,
    ) -> MerakiResult<&PolicyObject> {
        let name = sanitize_name(name);
        let object =
            PolicyObject::create(&self.client, &self.id, &name, kind, address, group_ids).await?;
        self.policy_objects.push(object);
        Ok(&self.policy_objects[self.policy_objects.len() - 1])
    }

    /// Deletes a policy object by name, removing it from the cached
    /// collection.
    ///
    /// Returns the id of the deleted object.
    pub async fn delete_policy_object(&mut self, name: &str) -> MerakiResult<String> {
        let position = self
            .policy_objects
            .iter()
            .position(|object| object.name() == name)
            .ok_or_else(|| MerakiError::PolicyObjectNotFound(name.to_string()))?;

        self.policy_objects[position].delete().await?;
        let object = self.policy_objects.remove(position);
        Ok(object.id().to_string())
    }

    /// Looks up a cached policy object group by id or name.
    pub fn policy_object_group(&self, key: &str) -> Option<&PolicyObjectGroup> {
        self.policy_object_groups.iter().find(|group| group.id() == key || group.name() == key)
    }

    /// Creates a policy object group and appends it to the cached
    /// collection.
    pub async fn create_policy_object_group(
        &mut self,
        name: &str,
        object_ids: Option<Vec<String>>,
    ) -> MerakiResult<&PolicyObjectGroup> {
        let name = sanitize_name(name);
        let group = PolicyObjectGroup::create(&self.client, &self.id, &name, object_ids).await?;
        self.policy_object_groups.push(group);
        Ok(&self.policy_object_groups[self.policy_object_groups.len() - 1])
    }

    /// Deletes a policy object group by name, removing it from the cached
    /// collection. Objects in the group are left in place.
    ///
    /// Returns the id of the deleted group.
    pub async fn delete_policy_object_group(&mut self, name: &str) -> MerakiResult<String> {
        let position = self
            .policy_object_groups
            .iter()
            .position(|group| group.name() == name)
            .ok_or_else(|| MerakiError::PolicyObjectNotFound(name.to_string()))?;

        self.policy_object_groups[position].delete().await?;
        let group = self.policy_object_groups.remove(position);
        Ok(group.id().to_string())
    }

    /// Deletes a group and every policy object that belonged to it.
    ///
    /// Returns the ids of the deleted objects.
    pub async fn delete_policy_object_group_and_objects(
        &mut self,
        name: &str,
    ) -> MerakiResult<Vec<String>> {
        let group_id = self.delete_policy_object_group(name).await?;

        let mut removed = Vec::new();
        let mut index = 0;
        while index < self.policy_objects.len() {
            if self.policy_objects[index].group_ids().iter().any(|id| *id == group_id) {
                self.policy_objects[index].delete().await?;
                let object = self.policy_objects.remove(index);
                removed.push(object.id().to_string());
            } else {
                index += 1;
            }
        }
        Ok(removed)
    }

    /// Expands a wildcard address pattern over the full 0-255 octet range.
    ///
    /// Equivalent to [`create_policy_object_range`]
    /// (Organization::create_policy_object_range) from 0 to 255.
    pub async fn create_wildcard_mask(&mut self, name: &str, pattern: &str) -> MerakiResult<()> {
        self.create_policy_object_range(name, pattern, 0, 255, None).await
    }

    /// Expands a wildcard address pattern into one CIDR policy object per
    /// value in `start..=end`.
    ///
    /// The pattern marks the varying octet with `*`, e.g.
    /// `"10.10.*.0/24"`. Objects are named `"{name} wildcard-{value}"` and
    /// collected into policy object groups: one group for spans of at most
    /// 128 values, otherwise two groups split at 128. Pass `group_ids` to
    /// reuse existing groups instead.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::InvalidArgument` if the pattern has no `.*.`
    /// marker or the range is reversed.
    pub async fn create_policy_object_range(
        &mut self,
        name: &str,
        pattern: &str,
        start: u8,
        end: u8,
        group_ids: Option<Vec<String>>,
    ) -> MerakiResult<()> {
        if !pattern.contains(".*.") {
            return Err(MerakiError::InvalidArgument(format!(
                "wildcard pattern must contain '.*.': '{pattern}'"
            )));
        }
        if end < start {
            return Err(MerakiError::InvalidArgument(format!(
                "range end {end} precedes start {start}"
            )));
        }

        let name = sanitize_name(name);

        if end - start <= RANGE_SPLIT_SPAN {
            let groups = match group_ids {
                Some(groups) => groups,
                None => {
                    let group_name = format!("{name} {start}-{end}");
                    vec![self
                        .create_policy_object_group(&group_name, None)
                        .await?
                        .id()
                        .to_string()]
                }
            };

            for value in start..=end {
                self.create_range_object(&name, pattern, value, &groups).await?;
            }
        } else {
            let (low_groups, high_groups) = match group_ids {
                Some(groups) => (groups.clone(), groups),
                None => {
                    let low_name = format!("{name} {start}-127");
                    let low = vec![self
                        .create_policy_object_group(&low_name, None)
                        .await?
                        .id()
                        .to_string()];
                    let high_name = format!("{name} 128-{end}");
                    let high = vec![self
                        .create_policy_object_group(&high_name, None)
                        .await?
                        .id()
                        .to_string()];
                    (low, high)
                }
            };

            for value in start..RANGE_SPLIT_SPAN {
                self.create_range_object(&name, pattern, value, &low_groups).await?;
            }
            for value in RANGE_SPLIT_SPAN..=end {
                self.create_range_object(&name, pattern, value, &high_groups).await?;
            }
        }

        Ok(())
    }

    async fn create_range_object(
        &mut self,
        name: &str,
        pattern: &str,
        value: u8,
        groups: &[String],
    ) -> MerakiResult<()> {
        let object_name = format!("{name} wildcard-{value}");
        let address = pattern.replace('*', &value.to_string());
        self.create_policy_object(
            &object_name,
            PolicyObjectKind::Cidr,
            &address,
            Some(groups.to_vec()),
        )
        .await?;
        Ok(())
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
