use reqwest::Method;

use crate::api::firewall::L3Firewall;
use crate::api::vlan::{Vlan, VlanSelector};
use crate::models::{VlanConfig, VlanInfo, VlanSettings};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// The security appliance of a network: VLAN settings, the VLAN
/// collection, and the layer 3 firewall.
///
/// Constructed by [`Network`](crate::Network) when the network's product
/// types include `appliance`. The VLAN collection is loaded only when
/// VLANs are enabled on the appliance.
pub struct Appliance {
    client: MerakiClient,
    network_id: String,
    vlans_enabled: bool,
    vlans: Vec<Vlan>,
    firewall: L3Firewall,
}

impl Appliance {
    pub(crate) async fn connect(client: &MerakiClient, network_id: &str) -> MerakiResult<Self> {
        let firewall = L3Firewall::connect(client, network_id).await?;

        let endpoint = format!("networks/{network_id}/appliance/vlans/settings");
        let settings: VlanSettings = client.request(Method::GET, &endpoint, None::<()>).await?;

        let vlans = if settings.vlans_enabled {
            Self::fetch_vlans(client, network_id).await?
        } else {
            Vec::new()
        };

        Ok(Self {
            client: client.clone(),
            network_id: network_id.to_string(),
            vlans_enabled: settings.vlans_enabled,
            vlans,
            firewall,
        })
    }

    async fn fetch_vlans(client: &MerakiClient, network_id: &str) -> MerakiResult<Vec<Vlan>> {
        let endpoint = format!("networks/{network_id}/appliance/vlans");
        let infos: Vec<VlanInfo> = client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(infos.into_iter().map(|info| Vlan::from_info(client, network_id, info)).collect())
    }

    /// Whether VLANs are enabled on the appliance.
    pub fn vlans_enabled(&self) -> bool {
        self.vlans_enabled
    }

    /// The cached VLAN collection; empty while VLANs are disabled.
    pub fn vlans(&self) -> &[Vlan] {
        &self.vlans
    }

    pub(crate) fn vlans_mut(&mut self) -> &mut [Vlan] {
        &mut self.vlans
    }

    /// The layer 3 firewall.
    pub fn firewall(&self) -> &L3Firewall {
        &self.firewall
    }

    /// Mutable access to the layer 3 firewall.
    pub fn firewall_mut(&mut self) -> &mut L3Firewall {
        &mut self.firewall
    }

    /// Looks up a VLAN in the cached collection.
    pub fn vlan(&self, selector: VlanSelector<'_>) -> Option<&Vlan> {
        self.vlans.iter().find(|vlan| selector.matches(vlan))
    }

    pub(crate) fn vlan_mut(&mut self, selector: VlanSelector<'_>) -> MerakiResult<&mut Vlan> {
        if matches!(selector, VlanSelector::All) {
            return Err(MerakiError::InvalidArgument(
                "a single VLAN selector is required".to_string(),
            ));
        }
        self.vlans
            .iter_mut()
            .find(|vlan| selector.matches(vlan))
            .ok_or_else(|| MerakiError::VlanNotFound(selector.to_string()))
    }

    /// Enables VLANs on the appliance and loads the VLAN collection. Does
    /// nothing if VLANs are already enabled.
    pub async fn enable_vlans(&mut self) -> MerakiResult<()> {
        if self.vlans_enabled {
            return Ok(());
        }

        let endpoint = format!("networks/{}/appliance/vlans/settings", self.network_id);
        let payload = serde_json::json!({ "vlansEnabled": true });
        self.client.request_status(Method::PUT, &endpoint, Some(payload)).await?;

        self.vlans_enabled = true;
        self.vlans = Self::fetch_vlans(&self.client, &self.network_id).await?;
        Ok(())
    }

    /// Creates a VLAN and appends it to the cached collection.
    pub async fn create_vlan(&mut self, config: &VlanConfig) -> MerakiResult<&Vlan> {
        let endpoint = format!("networks/{}/appliance/vlans", self.network_id);
        let info: VlanInfo = self.client.request(Method::POST, &endpoint, Some(config)).await?;

        self.vlans.push(Vlan::from_info(&self.client, &self.network_id, info));
        Ok(&self.vlans[self.vlans.len() - 1])
    }
}
