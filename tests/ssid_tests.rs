use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{mount_branch_network, setup_test_client, AP_SERIAL, NETWORK_ID, ORG_ID};
use meraki_client::{MerakiError, Network, SsidSelector, SsidUpdate};

#[tokio::test]
async fn test_ssids_cached_with_wireless_device() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    let client = setup_test_client(&mock_server.uri());
    let network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    let corp = network.ssid(AP_SERIAL, SsidSelector::Number(0)).unwrap();
    assert_eq!(corp.name(), "Corp WiFi");
    assert!(corp.enabled());
    assert_eq!(corp.psk(), Some("hunter22"));
    assert_eq!(corp.default_vlan_id(), Some(10));

    let guest = network.ssid(AP_SERIAL, SsidSelector::Name("Guest WiFi")).unwrap();
    assert_eq!(guest.number(), 1);
    assert!(!guest.enabled());
}

#[tokio::test]
async fn test_enable_ssid_puts_and_refreshes() {
    // What it tests: Enabling an SSID PUTs {"enabled": true} to the slot
    // endpoint and re-fetches the slot, so the cached snapshot reflects
    // the server's answer rather than the request.
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids/1")))
        .and(body_json(json!({ "enabled": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 1,
            "name": "Guest WiFi",
            "enabled": true,
            "authMode": "open"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network.enable_ssid(AP_SERIAL, SsidSelector::Name("Guest WiFi")).await.unwrap();

    let guest = network.ssid(AP_SERIAL, SsidSelector::Number(1)).unwrap();
    assert!(guest.enabled());
}

#[tokio::test]
async fn test_change_ssid_vlan() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids/0")))
        .and(body_json(json!({ "vlanId": 42 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids/0")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 0,
            "name": "Corp WiFi",
            "enabled": true,
            "psk": "hunter22",
            "defaultVlanId": 42,
            "authMode": "psk"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network.change_ssid_vlan(AP_SERIAL, SsidSelector::Number(0), 42).await.unwrap();

    let corp = network.ssid(AP_SERIAL, SsidSelector::Number(0)).unwrap();
    assert_eq!(corp.default_vlan_id(), Some(42));
}

#[tokio::test]
async fn test_set_psk_rejected_for_open_ssid() {
    // What it tests: Changing the PSK of an SSID whose auth mode has no
    // pre-shared key fails locally; no PUT is issued.
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    let result = network
        .change_ssid_psk(AP_SERIAL, SsidSelector::Name("Guest WiFi"), "s3cret!")
        .await;
    assert!(matches!(result, Err(MerakiError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_rename_ssid_with_update_builder() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids/1")))
        .and(body_json(json!({ "name": "Visitors", "enabled": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/wireless/ssids/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 1,
            "name": "Visitors",
            "enabled": true,
            "authMode": "open"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    let update = SsidUpdate::new().name("Visitors").enabled(true);
    network.update_ssid(AP_SERIAL, SsidSelector::Number(1), &update).await.unwrap();

    assert!(network.ssid(AP_SERIAL, SsidSelector::Name("Visitors")).is_ok());
}

#[tokio::test]
async fn test_ssid_selector_miss() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    let result = network.enable_ssid(AP_SERIAL, SsidSelector::Number(15)).await;
    assert!(matches!(result, Err(MerakiError::SsidNotFound(_))));

    let result = network.enable_ssid("Q2MR-NOPE-0000", SsidSelector::Number(0)).await;
    assert!(matches!(result, Err(MerakiError::DeviceNotFound(_))));
}
