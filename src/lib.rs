//! # meraki-client
//!
//! A Rust client library for the Cisco Meraki Dashboard API.
//!
//! This crate provides a typed, async object model over the dashboard:
//! resource objects for organizations, networks, and devices fetch their
//! server-side state at construction, cache it, and mutate it through
//! convenience methods that issue the HTTP calls and re-fetch afterwards.
//!
//! ## Features
//!
//! - 🔑 API-key authentication on every request
//! - 🏢 Organizations, networks, and device inventory
//! - 🧱 VLANs, L3 firewall rules, policy objects, and groups
//! - 📡 SSIDs and switch port management
//! - 🛡️ Typed errors for every dashboard status code
//!
//! ## Example
//!
//! ```rust,no_run
//! use meraki_client::{MerakiClient, Network, SsidSelector, VlanSelector};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client
//!     let client = MerakiClient::builder()
//!         .api_key_from_env("MERAKI_API_KEY")
//!         .build()?;
//!
//!     // Connect to a network by organization and name
//!     let mut network = Network::find(&client, "org_123", "Branch Office").await?;
//!
//!     // Renumber the second octet of every VLAN
//!     network.change_vlan_octet(VlanSelector::All, 2, 20).await?;
//!
//!     // Enable the guest SSID on one access point
//!     network.enable_ssid("Q2MR-XXXX-XXXX", SsidSelector::Name("Guest WiFi")).await?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod models;

pub use api::appliance::Appliance;
pub use api::camera::Camera;
pub use api::device::Device;
pub use api::firewall::L3Firewall;
pub use api::network::{Network, NetworkDevice};
pub use api::organization::Organization;
pub use api::policy_object::PolicyObject;
pub use api::policy_object_group::PolicyObjectGroup;
pub use api::sensor::Sensor;
pub use api::ssid::{Ssid, SsidSelector};
pub use api::switch::Switch;
pub use api::vlan::{Vlan, VlanSelector};
pub use api::wireless::Wireless;
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{MerakiClient, MerakiClientBuilder, DEFAULT_BASE_URL};
pub use error::{MerakiError, MerakiResult};
pub use models::{
    ConfigTemplate, DeviceInfo, DeviceKind, DeviceUpdate, FirewallRule, FirewallRuleBuilder,
    FirewallRuleSet, NetworkConfig, NetworkConfigBuilder, NetworkInfo, OrganizationSummary,
    PolicyObjectGroupInfo, PolicyObjectInfo, PolicyObjectKind, PortType, ProductType,
    ReservedIpRange, RulePolicy, RuleProtocol, SsidInfo, SsidUpdate, SwitchClient, SwitchPort,
    SwitchPortStatus, SwitchPortUpdate, VlanConfig, VlanInfo, VlanSettings, VlanUpdate,
};
