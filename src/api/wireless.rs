use std::ops::{Deref, DerefMut};

use reqwest::Method;

use crate::api::device::Device;
use crate::api::ssid::{Ssid, SsidSelector};
use crate::models::{DeviceInfo, SsidInfo, SsidUpdate};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// A wireless access point (MR) device with its network's SSID slots
/// cached.
///
/// Derefs to [`Device`] for the shared device operations.
pub struct Wireless {
    device: Device,
    ssids: Vec<Ssid>,
}

impl Wireless {
    /// Fetches the device record and the SSID slots of its network.
    pub async fn connect(client: &MerakiClient, serial: &str) -> MerakiResult<Self> {
        Self::load(Device::connect(client, serial).await?).await
    }

    /// Wraps an already-fetched device record, fetching only the SSID
    /// slots.
    pub(crate) async fn from_info(client: &MerakiClient, info: DeviceInfo) -> MerakiResult<Self> {
        Self::load(Device::from_info(client, info)).await
    }

    async fn load(device: Device) -> MerakiResult<Self> {
        let network_id = device
            .network_id()
            .ok_or_else(|| {
                MerakiError::InvalidArgument(format!(
                    "wireless device {} is not claimed into a network",
                    device.serial()
                ))
            })?
            .to_string();

        let endpoint = format!("networks/{network_id}/wireless/ssids");
        let infos: Vec<SsidInfo> =
            device.client().request(Method::GET, &endpoint, None::<()>).await?;
        let ssids = infos
            .into_iter()
            .map(|info| Ssid::from_info(device.client(), &network_id, info))
            .collect();

        Ok(Self { device, ssids })
    }

    /// The cached SSID slots.
    pub fn ssids(&self) -> &[Ssid] {
        &self.ssids
    }

    /// Looks up an SSID slot in the cache.
    pub fn ssid(&self, selector: SsidSelector<'_>) -> Option<&Ssid> {
        self.ssids.iter().find(|ssid| selector.matches(ssid))
    }

    pub(crate) fn ssid_mut(&mut self, selector: SsidSelector<'_>) -> MerakiResult<&mut Ssid> {
        self.ssids
            .iter_mut()
            .find(|ssid| selector.matches(ssid))
            .ok_or_else(|| MerakiError::SsidNotFound(selector.to_string()))
    }

    /// Updates the selected SSID slot.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::SsidNotFound` if no cached slot matches the
    /// selector.
    pub async fn update_ssid(
        &mut self,
        selector: SsidSelector<'_>,
        update: &SsidUpdate,
    ) -> MerakiResult<()> {
        self.ssid_mut(selector)?.update(update).await
    }
}

impl Deref for Wireless {
    type Target = Device;

    fn deref(&self) -> &Device {
        &self.device
    }
}

impl DerefMut for Wireless {
    fn deref_mut(&mut self) -> &mut Device {
        &mut self.device
    }
}
