// Export submodules
pub mod appliance;
pub mod camera;
pub mod device;
pub mod firewall;
pub mod network;
pub mod organization;
pub mod policy_object;
pub mod policy_object_group;
pub mod sensor;
pub mod ssid;
pub mod switch;
pub mod vlan;
pub mod wireless;
