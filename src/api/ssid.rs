use std::collections::HashMap;
use std::fmt;

use reqwest::Method;
use serde_json::Value;

use crate::models::{SsidInfo, SsidUpdate};
use crate::{MerakiClient, MerakiError, MerakiResult};

/// Selects one SSID slot on a wireless network.
#[derive(Debug, Clone, Copy)]
pub enum SsidSelector<'a> {
    /// By slot number (0-15).
    Number(u8),
    /// By SSID name.
    Name(&'a str),
}

impl SsidSelector<'_> {
    pub(crate) fn matches(&self, ssid: &Ssid) -> bool {
        match self {
            SsidSelector::Number(number) => ssid.number() == *number,
            SsidSelector::Name(name) => ssid.name() == *name,
        }
    }
}

impl fmt::Display for SsidSelector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SsidSelector::Number(number) => write!(f, "slot {number}"),
            SsidSelector::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// One of the 16 SSID slots of a wireless network.
///
/// The object holds the snapshot taken when the owning
/// [`Wireless`](crate::Wireless) device was constructed or when this SSID
/// was last refreshed. Every mutating call PUTs the change and then
/// re-fetches the slot.
pub struct Ssid {
    client: MerakiClient,
    network_id: String,
    info: SsidInfo,
}

impl Ssid {
    pub(crate) fn from_info(client: &MerakiClient, network_id: &str, info: SsidInfo) -> Self {
        Self {
            client: client.clone(),
            network_id: network_id.to_string(),
            info,
        }
    }

    /// The SSID slot number (0-15).
    pub fn number(&self) -> u8 {
        self.info.number
    }

    /// The SSID name.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Whether the SSID is broadcast.
    pub fn enabled(&self) -> bool {
        self.info.enabled
    }

    /// Pre-shared key, present only for PSK auth modes.
    pub fn psk(&self) -> Option<&str> {
        self.info.psk.as_deref()
    }

    /// VLAN the SSID tags client traffic into, if VLAN tagging is on.
    pub fn default_vlan_id(&self) -> Option<u16> {
        self.info.default_vlan_id
    }

    /// Attributes beyond the ones this crate models.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.info.attributes
    }

    fn endpoint(&self) -> String {
        format!("networks/{}/wireless/ssids/{}", self.network_id, self.info.number)
    }

    /// Re-fetches the SSID slot from the dashboard.
    pub async fn refresh(&mut self) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.info = self.client.request(Method::GET, &endpoint, None::<()>).await?;
        Ok(())
    }

    /// Updates the SSID, then re-fetches the slot so the local snapshot
    /// matches the server.
    pub async fn update(&mut self, update: &SsidUpdate) -> MerakiResult<()> {
        let endpoint = self.endpoint();
        self.client.request_status(Method::PUT, &endpoint, Some(update)).await?;
        self.refresh().await
    }

    /// Starts broadcasting the SSID.
    pub async fn enable(&mut self) -> MerakiResult<()> {
        self.update(&SsidUpdate::new().enabled(true)).await
    }

    /// Stops broadcasting the SSID.
    pub async fn disable(&mut self) -> MerakiResult<()> {
        self.update(&SsidUpdate::new().enabled(false)).await
    }

    /// Changes the VLAN the SSID tags client traffic into.
    pub async fn set_vlan(&mut self, vlan_id: u16) -> MerakiResult<()> {
        self.update(&SsidUpdate::new().vlan_id(vlan_id)).await
    }

    /// Changes the pre-shared key.
    ///
    /// # Errors
    ///
    /// Returns `MerakiError::InvalidArgument` if the SSID's auth mode does
    /// not use a pre-shared key.
    pub async fn set_psk(&mut self, psk: impl Into<String>) -> MerakiResult<()> {
        if self.info.psk.is_none() {
            return Err(MerakiError::InvalidArgument(format!(
                "SSID '{}' does not use a pre-shared key",
                self.info.name
            )));
        }
        self.update(&SsidUpdate::new().psk(psk)).await
    }

    /// Renames the SSID.
    pub async fn rename(&mut self, name: impl Into<String>) -> MerakiResult<()> {
        self.update(&SsidUpdate::new().name(name)).await
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)
    }
}
