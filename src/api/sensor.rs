use std::ops::{Deref, DerefMut};

use reqwest::Method;
use serde_json::Value;

use crate::api::device::Device;
use crate::models::DeviceInfo;
use crate::{MerakiClient, MerakiError, MerakiResult};

/// A sensor (MT) device.
///
/// Derefs to [`Device`] for the shared device operations.
pub struct Sensor {
    device: Device,
}

impl Sensor {
    /// Fetches the device record for `serial` and wraps it as a sensor.
    pub async fn connect(client: &MerakiClient, serial: &str) -> MerakiResult<Self> {
        Ok(Self {
            device: Device::connect(client, serial).await?,
        })
    }

    pub(crate) fn from_info(client: &MerakiClient, info: DeviceInfo) -> Self {
        Self {
            device: Device::from_info(client, info),
        }
    }

    /// Fetches the current alert overview, by metric, for the sensor's
    /// network.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::InvalidArgument` if the sensor is not claimed
    /// into a network.
    pub async fn metrics(&self) -> MerakiResult<Value> {
        let network_id = self.device.network_id().ok_or_else(|| {
            MerakiError::InvalidArgument(format!(
                "sensor {} is not claimed into a network",
                self.device.serial()
            ))
        })?;
        let endpoint = format!("networks/{network_id}/sensor/alerts/current/overview/byMetric");
        self.device.client().request(Method::GET, &endpoint, None::<()>).await
    }
}

impl Deref for Sensor {
    type Target = Device;

    fn deref(&self) -> &Device {
        &self.device
    }
}

impl DerefMut for Sensor {
    fn deref_mut(&mut self) -> &mut Device {
        &mut self.device
    }
}
