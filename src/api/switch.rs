use std::collections::HashMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

use reqwest::Method;

use crate::api::device::Device;
use crate::models::{DeviceInfo, PortType, SwitchClient, SwitchPort, SwitchPortStatus, SwitchPortUpdate};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// A switch (MS) device with its port configuration cached.
///
/// Construction fetches the port table and the live port statuses alongside
/// the device record. Port mutations go through
/// [`update_port`](Switch::update_port), which reloads the port table after
/// the PUT so the snapshot matches the server.
///
/// Derefs to [`Device`] for the shared device operations.
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &meraki_client::MerakiClient) -> meraki_client::MerakiResult<()> {
/// use meraki_client::Switch;
///
/// let mut switch = Switch::connect(client, "Q2SW-XXXX-XXXX").await?;
/// for port_id in switch.trunk_ports() {
///     println!("trunk port: {port_id}");
/// }
///
/// switch.update_port_vlan("7", 120).await?;
/// # Ok(())
/// # }
/// ```
pub struct Switch {
    device: Device,
    ports: HashMap<String, SwitchPort>,
    port_statuses: HashMap<String, SwitchPortStatus>,
}

impl Switch {
    /// Fetches the device record, port table, and port statuses for
    /// `serial`.
    pub async fn connect(client: &MerakiClient, serial: &str) -> MerakiResult<Self> {
        Self::load(Device::connect(client, serial).await?).await
    }

    /// Wraps an already-fetched device record, fetching only the port
    /// table and statuses.
    pub(crate) async fn from_info(client: &MerakiClient, info: DeviceInfo) -> MerakiResult<Self> {
        Self::load(Device::from_info(client, info)).await
    }

    async fn load(device: Device) -> MerakiResult<Self> {
        let ports = Self::fetch_ports(&device).await?;
        let port_statuses = Self::fetch_port_statuses(&device).await?;
        Ok(Self {
            device,
            ports,
            port_statuses,
        })
    }

    async fn fetch_ports(device: &Device) -> MerakiResult<HashMap<String, SwitchPort>> {
        let endpoint = format!("devices/{}/switch/ports", device.serial());
        let ports: Vec<SwitchPort> =
            device.client().request(Method::GET, &endpoint, None::<()>).await?;
        Ok(ports.into_iter().map(|port| (port.port_id.clone(), port)).collect())
    }

    async fn fetch_port_statuses(
        device: &Device,
    ) -> MerakiResult<HashMap<String, SwitchPortStatus>> {
        let endpoint = format!("devices/{}/switch/ports/statuses", device.serial());
        let statuses: Vec<SwitchPortStatus> =
            device.client().request(Method::GET, &endpoint, None::<()>).await?;
        Ok(statuses.into_iter().map(|status| (status.port_id.clone(), status)).collect())
    }

    /// The cached port table, keyed by port id.
    pub fn ports(&self) -> &HashMap<String, SwitchPort> {
        &self.ports
    }

    /// The cached live port statuses, keyed by port id.
    pub fn port_statuses(&self) -> &HashMap<String, SwitchPortStatus> {
        &self.port_statuses
    }

    /// Ids of all ports configured as trunks, in port order.
    pub fn trunk_ports(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .ports
            .values()
            .filter(|port| port.port_type == PortType::Trunk)
            .map(|port| port.port_id.clone())
            .collect();
        // Port ids are usually numeric strings; sort them as numbers when
        // they are.
        ids.sort_by(|a, b| match (a.parse::<u32>(), b.parse::<u32>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => a.cmp(b),
        });
        ids
    }

    /// Reconfigures a port as an access port.
    pub async fn set_port_access(&mut self, port_id: &str) -> MerakiResult<()> {
        self.update_port(port_id, &SwitchPortUpdate::new().port_type(PortType::Access)).await
    }

    /// Reconfigures a port as a trunk port.
    pub async fn set_port_trunk(&mut self, port_id: &str) -> MerakiResult<()> {
        self.update_port(port_id, &SwitchPortUpdate::new().port_type(PortType::Trunk)).await
    }

    /// Changes the access VLAN of a port.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::InvalidArgument` if the addressed port is a
    /// trunk port, and `MerakiError::NotFound` if the port id is not in the
    /// cached port table.
    pub async fn update_port_vlan(&mut self, port_id: &str, vlan: u16) -> MerakiResult<()> {
        let port = self
            .ports
            .get(port_id)
            .ok_or_else(|| MerakiError::NotFound(format!("switch port {port_id}")))?;
        if port.port_type == PortType::Trunk {
            return Err(MerakiError::InvalidArgument(format!(
                "port {port_id} is a trunk port"
            )));
        }
        self.update_port(port_id, &SwitchPortUpdate::new().vlan(vlan)).await
    }

    /// Fetches the clients observed on this switch, skipping any seen on
    /// the given ports (typically the trunk ports, to hide neighboring
    /// infrastructure).
    pub async fn clients(&self, exclude_ports: &[String]) -> MerakiResult<Vec<SwitchClient>> {
        let endpoint = format!("devices/{}/clients", self.device.serial());
        let clients: Vec<SwitchClient> =
            self.device.client().request(Method::GET, &endpoint, None::<()>).await?;

        Ok(clients
            .into_iter()
            .filter(|client| {
                client
                    .switchport
                    .as_deref()
                    .map_or(true, |port| !exclude_ports.iter().any(|excluded| excluded == port))
            })
            .collect())
    }

    /// Updates a port's configuration, then reloads the port table so the
    /// snapshot matches the server.
    pub async fn update_port(
        &mut self,
        port_id: &str,
        update: &SwitchPortUpdate,
    ) -> MerakiResult<()> {
        let endpoint = format!("devices/{}/switch/ports/{}", self.device.serial(), port_id);
        self.device.client().request_status(Method::PUT, &endpoint, Some(update)).await?;
        self.ports = Self::fetch_ports(&self.device).await?;
        Ok(())
    }
}

impl Deref for Switch {
    type Target = Device;

    fn deref(&self) -> &Device {
        &self.device
    }
}

impl DerefMut for Switch {
    fn deref_mut(&mut self) -> &mut Device {
        &mut self.device
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.device.serial(), self.device.name().unwrap_or("unnamed"))
    }
}
