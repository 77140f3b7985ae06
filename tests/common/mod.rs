#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meraki_client::MerakiClient;

pub const TEST_API_KEY: &str = "test-api-key";

pub const ORG_ID: &str = "org_123";
pub const NETWORK_ID: &str = "N_1";
pub const APPLIANCE_NETWORK_ID: &str = "N_2";
pub const SWITCH_SERIAL: &str = "Q2SW-AAAA-0001";
pub const AP_SERIAL: &str = "Q2MR-BBBB-0002";
pub const CAMERA_SERIAL: &str = "Q2MV-CCCC-0003";

/// Set up a test client pointed at the mock server's versioned base path.
pub fn setup_test_client(mock_server_uri: &str) -> MerakiClient {
    let _ = env_logger::builder().is_test(true).try_init();
    MerakiClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(format!("{mock_server_uri}/api/v1/"))
        .build()
        .expect("Failed to build MerakiClient")
}

pub fn branch_network_json() -> serde_json::Value {
    json!({
        "id": NETWORK_ID,
        "name": "Branch Office",
        "organizationId": ORG_ID,
        "productTypes": ["camera", "switch", "wireless"],
        "timeZone": "America/New_York",
        "tags": ["branch"],
        "url": "https://dashboard.example.com/n/1",
        "notes": ""
    })
}

pub fn appliance_network_json() -> serde_json::Value {
    json!({
        "id": APPLIANCE_NETWORK_ID,
        "name": "HQ",
        "organizationId": ORG_ID,
        "productTypes": ["appliance"],
        "timeZone": "America/New_York",
        "tags": [],
        "url": "https://dashboard.example.com/n/2",
        "notes": ""
    })
}

pub fn branch_devices_json() -> serde_json::Value {
    json!([
        {
            "serial": SWITCH_SERIAL,
            "name": "branch-sw-01",
            "model": "MS225-48LP",
            "networkId": NETWORK_ID,
            "url": "https://dashboard.example.com/d/1"
        },
        {
            "serial": AP_SERIAL,
            "name": "branch-ap-01",
            "model": "MR36",
            "networkId": NETWORK_ID,
            "url": "https://dashboard.example.com/d/2"
        },
        {
            "serial": CAMERA_SERIAL,
            "name": "lobby-cam",
            "model": "MV12W",
            "networkId": NETWORK_ID,
            "url": "https://dashboard.example.com/d/3"
        }
    ])
}

pub fn switch_ports_json() -> serde_json::Value {
    json!([
        { "portId": "1", "name": "uplink", "type": "trunk", "vlan": 1 },
        { "portId": "7", "name": "desk", "type": "access", "vlan": 10 },
        { "portId": "10", "name": null, "type": "trunk", "vlan": 1 }
    ])
}

pub fn switch_port_statuses_json() -> serde_json::Value {
    json!([
        { "portId": "1", "enabled": true, "status": "Connected" },
        { "portId": "7", "enabled": true, "status": "Connected" },
        { "portId": "10", "enabled": false, "status": "Disconnected" }
    ])
}

pub fn ssids_json() -> serde_json::Value {
    json!([
        {
            "number": 0,
            "name": "Corp WiFi",
            "enabled": true,
            "psk": "hunter22",
            "defaultVlanId": 10,
            "authMode": "psk"
        },
        {
            "number": 1,
            "name": "Guest WiFi",
            "enabled": false,
            "authMode": "open"
        }
    ])
}

/// Mounts every endpoint touched when constructing the branch network:
/// the organization's network listing, the network record, its device
/// inventory, the switch's port tables, and the wireless SSID slots.
pub async fn mount_branch_network(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/organizations/{ORG_ID}/networks")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([branch_network_json()])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(branch_network_json()))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/devices")))
        .respond_with(ResponseTemplate::new(200).set_body_json(branch_devices_json()))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/devices/{SWITCH_SERIAL}/switch/ports")))
        .respond_with(ResponseTemplate::new(200).set_body_json(switch_ports_json()))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/devices/{SWITCH_SERIAL}/switch/ports/statuses")))
        .respond_with(ResponseTemplate::new(200).set_body_json(switch_port_statuses_json()))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ssids_json()))
        .mount(mock_server)
        .await;
}

pub fn vlan_json() -> serde_json::Value {
    json!({
        "id": 10,
        "name": "Data",
        "subnet": "10.10.10.0/24",
        "applianceIp": "10.10.10.1",
        "reservedIpRanges": [
            { "start": "10.10.10.2", "end": "10.10.10.19", "comment": "infra" }
        ]
    })
}

pub fn firewall_rules_json() -> serde_json::Value {
    json!({
        "rules": [
            {
                "comment": "deny guest to corp",
                "policy": "deny",
                "protocol": "tcp",
                "srcPort": "any",
                "srcCidr": "10.20.0.0/24",
                "destPort": "any",
                "destCidr": "10.0.0.0/16",
                "syslogEnabled": false
            }
        ]
    })
}

/// Mounts every endpoint touched when constructing the appliance network:
/// the network record, firewall rules, VLAN settings (enabled), the VLAN
/// collection, and an empty device inventory.
pub async fn mount_appliance_network(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{APPLIANCE_NETWORK_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(appliance_network_json()))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/api/v1/networks/{APPLIANCE_NETWORK_ID}/appliance/firewall/l3FirewallRules"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(firewall_rules_json()))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{APPLIANCE_NETWORK_ID}/appliance/vlans/settings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "vlansEnabled": true })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{APPLIANCE_NETWORK_ID}/appliance/vlans")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([vlan_json()])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{APPLIANCE_NETWORK_ID}/devices")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(mock_server)
        .await;
}
