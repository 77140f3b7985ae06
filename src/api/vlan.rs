use std::collections::HashMap;
use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::models::{ReservedIpRange, VlanInfo, VlanUpdate};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// Selects one or all VLANs of an appliance network.
#[derive(Debug, Clone, Copy)]
pub enum VlanSelector<'a> {
    /// By VLAN id.
    Id(u16),
    /// By VLAN name.
    Name(&'a str),
    /// Every VLAN of the network; only meaningful for bulk operations.
    All,
}

impl VlanSelector<'_> {
    pub(crate) fn matches(&self, vlan: &Vlan) -> bool {
        match self {
            VlanSelector::Id(id) => vlan.id() == *id,
            VlanSelector::Name(name) => vlan.name() == *name,
            VlanSelector::All => true,
        }
    }
}

impl fmt::Display for VlanSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VlanSelector::Id(id) => write!(f, "id {id}"),
            VlanSelector::Name(name) => write!(f, "'{name}'"),
            VlanSelector::All => write!(f, "all"),
        }
    }
}

/// Rewrites one octet (1-4) of a dotted-quad address, preserving a CIDR
/// suffix on the last octet.
pub(crate) fn replace_octet(addr: &str, octet: u8, value: u8) -> MerakiResult<String> {
    if !(1..=4).contains(&octet) {
        return Err(MerakiError::InvalidArgument(format!(
            "octet must be between 1 and 4, got {octet}"
        )));
    }

    let mut parts: Vec<String> = addr.split('.').map(str::to_string).collect();
    if parts.len() != 4 {
        return Err(MerakiError::InvalidArgument(format!(
            "'{addr}' is not a dotted-quad address"
        )));
    }

    if octet == 4 {
        parts[3] = match parts[3].split_once('/') {
            Some((_, mask)) => format!("{value}/{mask}"),
            None => value.to_string(),
        };
    } else {
        parts[usize::from(octet) - 1] = value.to_string();
    }

    Ok(parts.join("."))
}

/// A VLAN configured on an appliance network.
///
/// The object holds the snapshot taken at construction or last refresh.
/// Mutating calls PUT the change and re-fetch (or, for the octet rewrite,
/// apply the acknowledged values directly).
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &meraki_client::MerakiClient) -> meraki_client::MerakiResult<()> {
/// use meraki_client::Vlan;
///
/// let mut vlan = Vlan::connect(client, "N_1234", 120).await?;
/// println!("{} -> {}", vlan.name(), vlan.subnet());
///
/// // Renumber 10.10.x.y to 10.20.x.y.
/// vlan.change_octet(2, 20).await?;
/// # Ok(())
/// # }
/// ```
pub struct Vlan {
    client: MerakiClient,
    network_id: String,
    info: VlanInfo,
}

impl Vlan {
    /// Fetches the VLAN record for `id` in the given network.
    pub async fn connect(client: &MerakiClient, network_id: &str, id: u16) -> MerakiResult<Self> {
        let endpoint = format!("networks/{network_id}/appliance/vlans/{id}");
        let info: VlanInfo = client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(Self::from_info(client, network_id, info))
    }

    pub(crate) fn from_info(client: &MerakiClient, network_id: &str, info: VlanInfo) -> Self {
        Self {
            client: client.clone(),
            network_id: network_id.to_string(),
            info,
        }
    }

    /// The VLAN id.
    pub fn id(&self) -> u16 {
        self.info.id
    }

    /// The VLAN name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Subnet in CIDR notation.
    pub fn subnet(&self) -> &str {
        &self.info.subnet
    }

    /// The appliance's IP inside the subnet.
    pub fn appliance_ip(&self) -> &str {
        &self.info.appliance_ip
    }

    /// Reserved IP ranges inside the subnet.
    pub fn reserved_ip_ranges(&self) -> &[ReservedIpRange] {
        &self.info.reserved_ip_ranges
    }

    /// Attributes beyond the ones this crate models.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.info.attributes
    }

    fn endpoint(&self) -> String {
        format!("networks/{}/appliance/vlans/{}", self.network_id, self.info.id)
    }

    /// Re-fetches the VLAN record from the dashboard.
    pub async fn refresh(&mut self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.info = self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(())
    }

    /// Updates the VLAN, then re-fetches the record so the local snapshot
    /// matches the server.
    pub async fn update(&mut self, update: &VlanUpdate) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.client.request_status(Method::PUT, &endpoint, Some(update)).await?;
        self.refresh().await
    }

    /// Deletes the VLAN from the network.
    pub async fn delete(&self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.client.request_status(Method::DELETE, &endpoint, None::<()>).await?;
        Ok(())
    }

    /// Renumbers one octet of both the appliance IP and the subnet, e.g.
    /// octet 2 -> 20 rewrites 10.10.10.1 and 10.10.10.0/24 into 10.20.10.1
    /// and 10.20.10.0/24.
    pub async fn change_octet(&mut self, octet: u8, value: u8) -> MerakiResult<()> {
        let appliance_ip = replace_octet(&self.info.appliance_ip, octet, value)?;
        let subnet = replace_octet(&self.info.subnet, octet, value)?;

        let endpoint = self.endpoint();
        let update = VlanUpdate::new().appliance_ip(appliance_ip.clone()).subnet(subnet.clone());
        self.client.request_status(Method::PUT, &endpoint, Some(&update)).await?;

        self.info.appliance_ip = appliance_ip;
        self.info.subnet = subnet;
        Ok(())
    }

    /// Reserves an IP range inside the subnet.
    ///
    /// With `keep_existing` the new range is appended to the ranges already
    /// reserved; without it the new range replaces them. The cached record
    /// is updated from the dashboard's response.
    pub async fn reserve_ip_range(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        comment: impl Into<String>,
        keep_existing: bool,
    ) -> MerakiResult<()> {
        let mut ranges = if keep_existing {
            self.info.reserved_ip_ranges.clone()
        } else {
            Vec::new()
        };
        ranges.push(ReservedIpRange {
            start: start.into(),
            end: end.into(),
            comment: comment.into(),
        });

        let endpoint = self.endpoint();
        let update = VlanUpdate::new().reserved_ip_ranges(ranges);
        self.info = self.client.request(Method::PUT, &endpoint, Some(&update)).await?;
        Ok(())
    }

    /// Renumbers one octet of the appliance IP, the subnet, and every
    /// reserved range in a single update.
    pub async fn change_octet_and_ranges(&mut self, octet: u8, value: u8) -> MerakiResult<()> {
        let appliance_ip = replace_octet(&self.info.appliance_ip, octet, value)?;
        let subnet = replace_octet(&self.info.subnet, octet, value)?;

        let mut ranges = Vec::with_capacity(self.info.reserved_ip_ranges.len());
        for range in &self.info.reserved_ip_ranges {
            ranges.push(ReservedIpRange {
                start: replace_octet(&range.start, octet, value)?,
                end: replace_octet(&range.end, octet, value)?,
                comment: range.comment.clone(),
            });
        }

        let update = VlanUpdate::new()
            .appliance_ip(appliance_ip)
            .subnet(subnet)
            .reserved_ip_ranges(ranges);
        self.update(&update).await
    }
}

impl fmt::Display for Vlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)
    }
}
