use std::ops::{Deref, DerefMut};

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::api::device::Device;
use crate::models::DeviceInfo;
use crate::{MerakiClient, MerakiResult};

/// A camera (MV) device.
///
/// Derefs to [`Device`] for the shared device operations.
pub struct Camera {
    device: Device,
}

#[derive(Deserialize)]
struct VideoLink {
    url: String,
}

impl Camera {
    /// Fetches the device record for `serial` and wraps it as a camera.
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

    /// Fetches the URL of the camera's video stream and caches it as the
    /// device URL.
    pub async fn video_link(&mut self) -> MerakiResult<String> {
        let endpoint = format!("devices/{}/camera/videoLink", self.device.serial());
        let link: VideoLink = self.device.client().request(Method::GET, &endpoint, None::<()>).await?;
        self.device.set_url(link.url.clone());
        Ok(link.url)
    }

    /// Fetches the camera's analytics overview.
    pub async fn analytics_overview(&self) -> MerakiResult<Value> {
        let endpoint = format!("devices/{}/camera/analytics/overview", self.device.serial());
        self.device.client().request(Method::GET, &endpoint, None::<()>).await
    }
}

impl Deref for Camera {
    type Target = Device;

    fn deref(&self) -> &Device {
        &self.device
    }
}

impl DerefMut for Camera {
    fn deref_mut(&mut self) -> &mut Device {
        &mut self.device
    }
}
