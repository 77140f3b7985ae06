use std::collections::HashMap;
use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::models::{DeviceInfo, DeviceUpdate};
use crate::{MerakiClient, MerakiResult};

/// A device claimed into the dashboard, identified by its serial number.
///
/// The object holds a snapshot of the device's attributes taken at
/// construction or last refresh; nothing invalidates the snapshot except an
/// explicit [`refresh`](Device::refresh) or a mutating call.
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &meraki_client::MerakiClient) -> meraki_client::MerakiResult<()> {
/// use meraki_client::{Device, DeviceUpdate};
///
/// let mut device = Device::connect(client, "Q2XX-XXXX-XXXX").await?;
/// println!("{} is model {}", device.serial(), device.model());
///
/// device.update(&DeviceUpdate::new().name("lobby-ap")).await?;
/// # Ok(())
/// # }
/// ```
pub struct Device {
    client: MerakiClient,
    info: DeviceInfo,
}

impl Device {
    /// Fetches the device record for `serial` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::NotFound` if no device with that serial is
    /// visible to the API key.
    pub async fn connect(client: &MerakiClient, serial: &str) -> MerakiResult<Self> {
        let endpoint = format!("devices/{serial}");
        let info: DeviceInfo = client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(Self::from_info(client, info))
    }

    /// Wraps an already-fetched device record without another API call.
    pub fn from_info(client: &MerakiClient, info: DeviceInfo) -> Self {
        Self {
            client: client.clone(),
            info,
        }
    }

    /// The device serial number.
    pub fn serial(&self) -> &str {
        &self.info.serial
    }

    /// The device name, if one has been assigned.
    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    /// The hardware model.
    pub fn model(&self) -> &str {
        &self.info.model
    }

    /// Dashboard URL of the device.
    pub fn url(&self) -> Option<&str> {
        self.info.url.as_deref()
    }

    /// The network the device is claimed into, if any.
    pub fn network_id(&self) -> Option<&str> {
        self.info.network_id.as_deref()
    }

    /// Attributes beyond the ones this crate models.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.info.attributes
    }

    /// The cached device record.
    pub fn info(&self) -> &DeviceInfo {
        &self.info
    }

    pub(crate) fn client(&self) -> &MerakiClient {
        &self.client
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.info.url = Some(url);
    }

    /// Re-fetches the device record from the dashboard.
    pub async fn refresh(&mut self) -> MerakiResult<()> {
        let endpoint = format!("devices/{}", self.info.serial);
        self.info = self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(())
    }

    /// Updates the device attributes, then re-fetches the record so the
    /// local snapshot matches the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the update is rejected or either request fails.
    pub async fn update(&mut self, update: &DeviceUpdate) -> MerakiResult<()> {
        let endpoint = format!("devices/{}", self.info.serial);
        self.client.request_status(Method::PUT, &endpoint, Some(update)).await?;
        self.refresh().await
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.info.serial, self.info.model)
    }
}
