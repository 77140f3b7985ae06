use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::api::appliance::Appliance;
use crate::api::camera::Camera;
use crate::api::device::Device;
use crate::api::sensor::Sensor;
use crate::api::ssid::{Ssid, SsidSelector};
use crate::api::switch::Switch;
use crate::api::vlan::{Vlan, VlanSelector};
use crate::api::wireless::Wireless;
use crate::models::{
    ConfigTemplate, DeviceInfo, DeviceKind, DeviceUpdate, FirewallRule, NetworkConfig,
    NetworkInfo, PortType, ProductType, ReservedIpRange, SsidUpdate, SwitchClient,
    SwitchPortUpdate, VlanConfig, VlanUpdate,
};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// A typed reference to a device found in a network's collections.
pub enum NetworkDevice<'a> {
    Camera(&'a Camera),
    Sensor(&'a Sensor),
    Switch(&'a Switch),
    Wireless(&'a Wireless),
    Other(&'a Device),
}

impl NetworkDevice<'_> {
    /// The device serial number, whatever the specialization.
    pub fn serial(&self) -> &str {
        match self {
            NetworkDevice::Camera(camera) => camera.serial(),
            NetworkDevice::Sensor(sensor) => sensor.serial(),
            NetworkDevice::Switch(switch) => switch.serial(),
            NetworkDevice::Wireless(wireless) => wireless.serial(),
            NetworkDevice::Other(device) => device.serial(),
        }
    }
}

/// A network and its child resource objects.
///
/// Construction fetches the network record and partitions the network's
/// devices into cameras (MV), sensors (MT), wireless access points (MR),
/// and switches (MS); anything else stays a plain [`Device`]. Networks
/// whose product types include `appliance` also get an [`Appliance`] child
/// carrying the VLAN collection and the layer 3 firewall.
///
/// The aggregate operations below fan out to the child objects, looking
/// them up by serial, so a caller holding only the network can drive the
/// whole tree.
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &meraki_client::MerakiClient) -> meraki_client::MerakiResult<()> {
/// use meraki_client::{Network, SsidSelector};
///
/// let mut network = Network::find(client, "org_123", "Branch Office").await?;
///
/// // Rename the guest SSID on one of the access points.
/// network.rename_ssid("Q2MR-XXXX-XXXX", SsidSelector::Number(1), "Guest WiFi").await?;
///
/// // Move every access port of a switch to VLAN 120.
/// network.update_port_vlan("Q2SW-XXXX-XXXX", "7", 120).await?;
/// # Ok(())
/// # }
/// ```
pub struct Network {
    client: MerakiClient,
    info: NetworkInfo,
    appliance: Option<Appliance>,
    devices: Vec<Device>,
    cameras: Vec<Camera>,
    sensors: Vec<Sensor>,
    switches: Vec<Switch>,
    wireless: Vec<Wireless>,
}

impl Network {
    /// Finds a network by name within an organization.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::NetworkNotFound` if no network in the
    /// organization has that name.
    pub async fn find(
        client: &MerakiClient,
        organization_id: &str,
        name: &str,
    ) -> MerakiResult<Self> {
        let endpoint = format!("organizations/{organization_id}/networks");
        let networks: Vec<NetworkInfo> =
            client.request(Method::GET, &endpoint, None::<()>).await?;
        let info = networks
            .into_iter()
            .find(|network| network.name == name)
            .ok_or_else(|| MerakiError::NetworkNotFound(name.to_string()))?;
        Self::from_info(client, info).await
    }

    /// Connects to a network by id.
    pub async fn connect(client: &MerakiClient, id: &str) -> MerakiResult<Self> {
        let endpoint = format!("networks/{id}");
        let info: NetworkInfo = client.request(Method::GET, &endpoint, None::<()>).await?;
        Self::from_info(client, info).await
    }

    /// Creates a network in an organization and connects to it.
    pub async fn create(
        client: &MerakiClient,
        organization_id: &str,
        config: &NetworkConfig,
    ) -> MerakiResult<Self> {
        let endpoint = format!("organizations/{organization_id}/networks");
        let info: NetworkInfo = client.request(Method::POST, &endpoint, Some(config)).await?;
        log::info!("created network {} with id {}", info.name, info.id);
        Self::from_info(client, info).await
    }

    async fn from_info(client: &MerakiClient, info: NetworkInfo) -> MerakiResult<Self> {
        let appliance = if info.product_types.contains(&ProductType::Appliance) {
            Some(Appliance::connect(client, &info.id).await?)
        } else {
            None
        };

        let mut network = Self {
            client: client.clone(),
            info,
            appliance,
            devices: Vec::new(),
            cameras: Vec::new(),
            sensors: Vec::new(),
            switches: Vec::new(),
            wireless: Vec::new(),
        };
        network.load_devices().await?;
        Ok(network)
    }

    async fn load_devices(&mut self) -> MerakiResult<()> {
        let endpoint = format!("networks/{}/devices", self.info.id);
        let infos: Vec<DeviceInfo> =
            self.client.request(Method::GET, &endpoint, None::<()>).await?;

        self.devices.clear();
        self.cameras.clear();
        self.sensors.clear();
        self.switches.clear();
        self.wireless.clear();

        for info in infos {
            match info.kind() {
                DeviceKind::Camera => self.cameras.push(Camera::from_info(&self.client, info)),
                DeviceKind::Sensor => self.sensors.push(Sensor::from_info(&self.client, info)),
                DeviceKind::Wireless => {
                    self.wireless.push(Wireless::from_info(&self.client, info).await?)
                }
                DeviceKind::Switch => {
                    self.switches.push(Switch::from_info(&self.client, info).await?)
                }
                DeviceKind::Other => self.devices.push(Device::from_info(&self.client, info)),
            }
        }
        Ok(())
    }

    /// The unique identifier for this network.
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// The network name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// The organization this network belongs to.
    pub fn organization_id(&self) -> Option<&str> {
        self.info.organization_id.as_deref()
    }

    /// Product families present in the network.
    pub fn product_types(&self) -> &[ProductType] {
        &self.info.product_types
    }

    /// The cached network record.
    pub fn info(&self) -> &NetworkInfo {
        &self.info
    }

    /// The appliance child, present when the network has one.
    pub fn appliance(&self) -> Option<&Appliance> {
        self.appliance.as_ref()
    }

    /// Cameras in the network.
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Sensors in the network.
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Switches in the network.
    pub fn switches(&self) -> &[Switch] {
        &self.switches
    }

    /// Wireless access points in the network.
    pub fn wireless_devices(&self) -> &[Wireless] {
        &self.wireless
    }

    /// Devices with no specialization in this crate.
    pub fn other_devices(&self) -> &[Device] {
        &self.devices
    }

    fn require_organization_id(&self) -> MerakiResult<&str> {
        self.info.organization_id.as_deref().ok_or_else(|| {
            MerakiError::InvalidArgument(format!(
                "network {} carries no organization id",
                self.info.id
            ))
        })
    }

    fn appliance_ref(&self) -> MerakiResult<&Appliance> {
        self.appliance.as_ref().ok_or_else(|| {
            MerakiError::InvalidArgument(format!("network {} has no appliance", self.info.id))
        })
    }

    fn appliance_mut(&mut self) -> MerakiResult<&mut Appliance> {
        let id = self.info.id.clone();
        self.appliance
            .as_mut()
            .ok_or_else(|| MerakiError::InvalidArgument(format!("network {id} has no appliance")))
    }

    // ------------- Templates ------------- //

    /// Names of the configuration templates defined in the organization.
    pub async fn template_names(&self) -> MerakiResult<Vec<String>> {
        let organization_id = self.require_organization_id()?;
        let endpoint = format!("organizations/{organization_id}/configTemplates");
        let templates: Vec<ConfigTemplate> =
            self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(templates.into_iter().map(|template| template.name).collect())
    }

    async fn template_id(&self, name: &str) -> MerakiResult<String> {
        let organization_id = self.require_organization_id()?;
        let endpoint = format!("organizations/{organization_id}/configTemplates");
        let templates: Vec<ConfigTemplate> =
            self.client.request(Method::GET, &endpoint, None::<()>).await?;
        templates
            .into_iter()
            .find(|template| template.name == name)
            .map(|template| template.id)
            .ok_or_else(|| MerakiError::NotFound(format!("config template '{name}'")))
    }

    /// Binds the network to a configuration template, by template name.
    pub async fn bind_template(&self, template_name: &str, auto_bind: bool) -> MerakiResult<()> {
        let template_id = self.template_id(template_name).await?;
        let endpoint = format!("networks/{}/bind", self.info.id);
        let payload = serde_json::json!({
            "configTemplateId": template_id,
            "autoBind": auto_bind
        });
        self.client.request_status(Method::POST, &endpoint, Some(payload)).await?;
        Ok(())
    }

    /// Unbinds the network from its configuration template.
    pub async fn unbind_template(&self, retain_configs: bool) -> MerakiResult<()> {
        let endpoint = format!("networks/{}/unbind", self.info.id);
        let payload = serde_json::json!({ "retainConfigs": retain_configs });
        self.client.request_status(Method::POST, &endpoint, Some(payload)).await?;
        Ok(())
    }

    /// Binds to a template and immediately unbinds, keeping the template's
    /// configuration. The appliance child is rebuilt afterwards, since
    /// binding can change appliance settings.
    pub async fn bind_and_unbind_template(
        &mut self,
        template_name: &str,
        auto_bind: bool,
    ) -> MerakiResult<()> {
        self.bind_template(template_name, auto_bind).await?;
        self.unbind_template(true).await?;
        if self.info.product_types.contains(&ProductType::Appliance) {
            self.appliance = Some(Appliance::connect(&self.client, &self.info.id).await?);
        }
        Ok(())
    }

    // ------------- Appliance ------------- //

    /// The cached VLAN collection; empty when the network has no appliance
    /// or VLANs are disabled.
    pub fn vlans(&self) -> &[Vlan] {
        self.appliance.as_ref().map(Appliance::vlans).unwrap_or(&[])
    }

    /// Whether VLANs are enabled on the appliance.
    pub fn vlans_enabled(&self) -> bool {
        self.appliance.as_ref().is_some_and(Appliance::vlans_enabled)
    }

    /// Enables VLANs on the appliance.
    pub async fn enable_vlans(&mut self) -> MerakiResult<()> {
        self.appliance_mut()?.enable_vlans().await
    }

    /// Creates a VLAN on the appliance.
    pub async fn create_vlan(&mut self, config: &VlanConfig) -> MerakiResult<()> {
        self.appliance_mut()?.create_vlan(config).await?;
        Ok(())
    }

    /// Updates the selected VLAN.
    pub async fn update_vlan(
        &mut self,
        selector: VlanSelector<'_>,
        update: &VlanUpdate,
    ) -> MerakiResult<()> {
        self.appliance_mut()?.vlan_mut(selector)?.update(update).await
    }

    /// Renumbers one octet of the selected VLAN's appliance IP and subnet.
    /// [`VlanSelector::All`] applies the rewrite to every VLAN.
    pub async fn change_vlan_octet(
        &mut self,
        selector: VlanSelector<'_>,
        octet: u8,
        value: u8,
    ) -> MerakiResult<()> {
        let appliance = self.appliance_mut()?;
        match selector {
            VlanSelector::All => {
                for vlan in appliance.vlans_mut() {
                    vlan.change_octet(octet, value).await?;
                }
                Ok(())
            }
            _ => appliance.vlan_mut(selector)?.change_octet(octet, value).await,
        }
    }

    /// The reserved IP ranges of the selected VLAN.
    pub fn reserved_ip_ranges(
        &self,
        selector: VlanSelector<'_>,
    ) -> MerakiResult<&[ReservedIpRange]> {
        let appliance = self.appliance_ref()?;
        appliance
            .vlan(selector)
            .map(Vlan::reserved_ip_ranges)
            .ok_or_else(|| MerakiError::VlanNotFound(selector.to_string()))
    }

    /// Reserves an IP range in the selected VLAN.
    pub async fn reserve_vlan_ip_range(
        &mut self,
        selector: VlanSelector<'_>,
        start: &str,
        end: &str,
        comment: &str,
        keep_existing: bool,
    ) -> MerakiResult<()> {
        self.appliance_mut()?
            .vlan_mut(selector)?
            .reserve_ip_range(start, end, comment, keep_existing)
            .await
    }

    /// Renumbers one octet of the selected VLAN's addresses and reserved
    /// ranges. [`VlanSelector::All`] applies the rewrite to every VLAN.
    pub async fn change_vlan_octet_and_ranges(
        &mut self,
        selector: VlanSelector<'_>,
        octet: u8,
        value: u8,
    ) -> MerakiResult<()> {
        let appliance = self.appliance_mut()?;
        match selector {
            VlanSelector::All => {
                for vlan in appliance.vlans_mut() {
                    vlan.change_octet_and_ranges(octet, value).await?;
                }
                Ok(())
            }
            _ => appliance.vlan_mut(selector)?.change_octet_and_ranges(octet, value).await,
        }
    }

    /// The cached layer 3 firewall rules of the appliance.
    pub fn l3_firewall_rules(&self) -> MerakiResult<&[FirewallRule]> {
        Ok(self.appliance_ref()?.firewall().rules())
    }

    /// Appends a layer 3 firewall rule and returns the refreshed rule
    /// list.
    pub async fn add_l3_firewall_rule(
        &mut self,
        rule: FirewallRule,
    ) -> MerakiResult<&[FirewallRule]> {
        let appliance = self.appliance_mut()?;
        appliance.firewall_mut().add_rule(rule).await?;
        Ok(appliance.firewall().rules())
    }

    // ------------- Cameras ------------- //

    /// Fetches the video stream URL of a camera in the network.
    pub async fn video_link(&mut self, serial: &str) -> MerakiResult<String> {
        let camera = self
            .cameras
            .iter_mut()
            .find(|camera| camera.serial() == serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))?;
        camera.video_link().await
    }

    /// Fetches the analytics overview of a camera in the network.
    pub async fn camera_analytics(&self, serial: &str) -> MerakiResult<Value> {
        let camera = self
            .cameras
            .iter()
            .find(|camera| camera.serial() == serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))?;
        camera.analytics_overview().await
    }

    /// Fetches the analytics overview of every camera in the network.
    pub async fn all_camera_analytics(&self) -> MerakiResult<Vec<Value>> {
        let mut overviews = Vec::with_capacity(self.cameras.len());
        for camera in &self.cameras {
            overviews.push(camera.analytics_overview().await?);
        }
        Ok(overviews)
    }

    // ------------- Devices ------------- //

    /// Looks up a device across all collections by serial.
    pub fn device(&self, serial: &str) -> Option<NetworkDevice<'_>> {
        if let Some(camera) = self.cameras.iter().find(|c| c.serial() == serial) {
            return Some(NetworkDevice::Camera(camera));
        }
        if let Some(sensor) = self.sensors.iter().find(|s| s.serial() == serial) {
            return Some(NetworkDevice::Sensor(sensor));
        }
        if let Some(switch) = self.switches.iter().find(|s| s.serial() == serial) {
            return Some(NetworkDevice::Switch(switch));
        }
        if let Some(wireless) = self.wireless.iter().find(|w| w.serial() == serial) {
            return Some(NetworkDevice::Wireless(wireless));
        }
        self.devices.iter().find(|d| d.serial() == serial).map(NetworkDevice::Other)
    }

    /// Claims devices into the network by serial.
    pub async fn claim_devices(&self, serials: &[&str]) -> MerakiResult<()> {
        let endpoint = format!("networks/{}/devices/claim", self.info.id);
        let payload = serde_json::json!({ "serials": serials });
        self.client.request_status(Method::POST, &endpoint, Some(payload)).await?;
        log::info!("claimed {} device(s) into network {}", serials.len(), self.info.id);
        Ok(())
    }

    /// Removes devices from the network by serial, then reloads the device
    /// collections.
    pub async fn remove_devices(&mut self, serials: &[&str]) -> MerakiResult<()> {
        let endpoint = format!("networks/{}/devices/remove", self.info.id);
        for serial in serials {
            let payload = serde_json::json!({ "serial": serial });
            self.client.request_status(Method::POST, &endpoint, Some(payload)).await?;
        }
        self.load_devices().await
    }

    /// Applies an update to devices across every collection.
    ///
    /// With `serials` the update is restricted to the listed devices;
    /// without it every camera, sensor, switch, and access point in the
    /// network is updated.
    pub async fn update_devices(
        &mut self,
        update: &DeviceUpdate,
        serials: Option<&[&str]>,
    ) -> MerakiResult<()> {
        let wanted = |serial: &str| serials.map_or(true, |list| list.contains(&serial));

        for camera in &mut self.cameras {
            if wanted(camera.serial()) {
                camera.update(update).await?;
            }
        }
        for sensor in &mut self.sensors {
            if wanted(sensor.serial()) {
                sensor.update(update).await?;
            }
        }
        for switch in &mut self.switches {
            if wanted(switch.serial()) {
                switch.update(update).await?;
            }
        }
        for wireless in &mut self.wireless {
            if wanted(wireless.serial()) {
                wireless.update(update).await?;
            }
        }
        Ok(())
    }

    /// Moves devices to a new street address.
    pub async fn update_location(
        &mut self,
        address: &str,
        serials: Option<&[&str]>,
    ) -> MerakiResult<()> {
        self.update_devices(&DeviceUpdate::new().address(address), serials).await
    }

    // ------------- Sensors ------------- //

    /// Fetches the current alert overview of a sensor in the network.
    pub async fn sensor_metrics(&self, serial: &str) -> MerakiResult<Value> {
        let sensor = self
            .sensors
            .iter()
            .find(|sensor| sensor.serial() == serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))?;
        sensor.metrics().await
    }

    /// Fetches the current alert overview of every sensor in the network.
    pub async fn all_sensor_metrics(&self) -> MerakiResult<Vec<Value>> {
        let mut metrics = Vec::with_capacity(self.sensors.len());
        for sensor in &self.sensors {
            metrics.push(sensor.metrics().await?);
        }
        Ok(metrics)
    }

    // ------------- Switches ------------- //

    /// Looks up a switch by serial.
    pub fn switch(&self, serial: &str) -> Option<&Switch> {
        self.switches.iter().find(|switch| switch.serial() == serial)
    }

    fn switch_mut(&mut self, serial: &str) -> MerakiResult<&mut Switch> {
        self.switches
            .iter_mut()
            .find(|switch| switch.serial() == serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))
    }

    /// Trunk port ids of a switch in the network.
    pub fn trunk_ports(&self, serial: &str) -> MerakiResult<Vec<String>> {
        self.switch(serial)
            .map(Switch::trunk_ports)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))
    }

    /// Reconfigures a switch port as access or trunk.
    pub async fn change_port_type(
        &mut self,
        serial: &str,
        port_id: &str,
        port_type: PortType,
    ) -> MerakiResult<()> {
        let switch = self.switch_mut(serial)?;
        match port_type {
            PortType::Access => switch.set_port_access(port_id).await,
            PortType::Trunk => switch.set_port_trunk(port_id).await,
        }
    }

    /// Changes the access VLAN of a switch port.
    pub async fn update_port_vlan(
        &mut self,
        serial: &str,
        port_id: &str,
        vlan: u16,
    ) -> MerakiResult<()> {
        self.switch_mut(serial)?.update_port_vlan(port_id, vlan).await
    }

    /// Fetches the clients of a switch, skipping the given ports.
    pub async fn switch_clients(
        &self,
        serial: &str,
        exclude_trunk_ports: &[String],
    ) -> MerakiResult<Vec<SwitchClient>> {
        let switch = self
            .switch(serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))?;
        switch.clients(exclude_trunk_ports).await
    }

    /// Updates a switch port's configuration.
    pub async fn update_switch_port(
        &mut self,
        serial: &str,
        port_id: &str,
        update: &SwitchPortUpdate,
    ) -> MerakiResult<()> {
        self.switch_mut(serial)?.update_port(port_id, update).await
    }

    // ------------- Wireless ------------- //

    /// Looks up a wireless access point by serial.
    pub fn wireless(&self, serial: &str) -> Option<&Wireless> {
        self.wireless.iter().find(|wireless| wireless.serial() == serial)
    }

    fn wireless_mut(&mut self, serial: &str) -> MerakiResult<&mut Wireless> {
        self.wireless
            .iter_mut()
            .find(|wireless| wireless.serial() == serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))
    }

    /// The SSID slots cached on a wireless access point.
    pub fn ssids(&self, serial: &str) -> MerakiResult<&[Ssid]> {
        self.wireless(serial)
            .map(Wireless::ssids)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))
    }

    /// Looks up one SSID slot on a wireless access point.
    pub fn ssid(&self, serial: &str, selector: SsidSelector<'_>) -> MerakiResult<&Ssid> {
        let wireless = self
            .wireless(serial)
            .ok_or_else(|| MerakiError::DeviceNotFound(serial.to_string()))?;
        wireless.ssid(selector).ok_or_else(|| MerakiError::SsidNotFound(selector.to_string()))
    }

    /// Updates the selected SSID slot.
    pub async fn update_ssid(
        &mut self,
        serial: &str,
        selector: SsidSelector<'_>,
        update: &SsidUpdate,
    ) -> MerakiResult<()> {
        self.wireless_mut(serial)?.update_ssid(selector, update).await
    }

    /// Changes the VLAN the selected SSID tags client traffic into.
    pub async fn change_ssid_vlan(
        &mut self,
        serial: &str,
        selector: SsidSelector<'_>,
        vlan_id: u16,
    ) -> MerakiResult<()> {
        self.wireless_mut(serial)?.ssid_mut(selector)?.set_vlan(vlan_id).await
    }

    /// Changes the pre-shared key of the selected SSID.
    pub async fn change_ssid_psk(
        &mut self,
        serial: &str,
        selector: SsidSelector<'_>,
        psk: &str,
    ) -> MerakiResult<()> {
        self.wireless_mut(serial)?.ssid_mut(selector)?.set_psk(psk).await
    }

    /// Renames the selected SSID.
    pub async fn rename_ssid(
        &mut self,
        serial: &str,
        selector: SsidSelector<'_>,
        new_name: &str,
    ) -> MerakiResult<()> {
        self.wireless_mut(serial)?.ssid_mut(selector)?.rename(new_name).await
    }

    /// Starts broadcasting the selected SSID.
    pub async fn enable_ssid(
        &mut self,
        serial: &str,
        selector: SsidSelector<'_>,
    ) -> MerakiResult<()> {
        self.wireless_mut(serial)?.ssid_mut(selector)?.enable().await
    }

    /// Stops broadcasting the selected SSID.
    pub async fn disable_ssid(
        &mut self,
        serial: &str,
        selector: SsidSelector<'_>,
    ) -> MerakiResult<()> {
        self.wireless_mut(serial)?.ssid_mut(selector)?.disable().await
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.info.name, self.info.id)
    }
}
