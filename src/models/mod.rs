pub mod device;
pub mod firewall;
pub mod network;
pub mod organization;
pub mod policy_object;
pub mod ssid;
pub mod switch_port;
pub mod template;
pub mod vlan;

pub use device::{DeviceInfo, DeviceKind, DeviceUpdate};
pub use firewall::{FirewallRule, FirewallRuleBuilder, FirewallRuleSet, RulePolicy, RuleProtocol};
pub use network::{NetworkConfig, NetworkConfigBuilder, NetworkInfo, ProductType};
pub use organization::OrganizationSummary;
pub use policy_object::{PolicyObjectGroupInfo, PolicyObjectInfo, PolicyObjectKind};
pub use ssid::{SsidInfo, SsidUpdate};
pub use switch_port::{PortType, SwitchClient, SwitchPort, SwitchPortStatus, SwitchPortUpdate};
pub use template::ConfigTemplate;
pub use vlan::{ReservedIpRange, VlanConfig, VlanInfo, VlanSettings, VlanUpdate};
