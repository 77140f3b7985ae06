use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{
    mount_branch_network, setup_test_client, AP_SERIAL, CAMERA_SERIAL, NETWORK_ID, ORG_ID,
    SWITCH_SERIAL,
};
use meraki_client::{
    MerakiError, Network, NetworkConfig, NetworkDevice, PortType, ProductType,
};

#[tokio::test]
async fn test_find_partitions_devices_by_model() {
    // What it tests: Finding a network by name loads its device inventory
    // and partitions it by model prefix into cameras, switches, and
    // wireless access points, with the switch's port table and the SSID
    // slots fetched alongside.
    //
    // Why it's valuable: The partitioning drives every aggregate
    // operation; a device landing in the wrong collection silently
    // disables its convenience methods.
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    let client = setup_test_client(&mock_server.uri());
    let network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    assert_eq!(network.id(), NETWORK_ID);
    assert_eq!(network.cameras().len(), 1);
    assert_eq!(network.switches().len(), 1);
    assert_eq!(network.wireless_devices().len(), 1);
    assert!(network.other_devices().is_empty());
    assert!(network.appliance().is_none());

    let switch = network.switch(SWITCH_SERIAL).unwrap();
    assert_eq!(switch.ports().len(), 3);
    assert_eq!(switch.trunk_ports(), vec!["1", "10"]);

    let ssids = network.ssids(AP_SERIAL).unwrap();
    assert_eq!(ssids.len(), 2);

    match network.device(CAMERA_SERIAL) {
        Some(NetworkDevice::Camera(camera)) => assert_eq!(camera.serial(), CAMERA_SERIAL),
        _ => panic!("Expected the camera collection to hold {CAMERA_SERIAL}"),
    }
}

#[tokio::test]
async fn test_connect_by_id() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    let client = setup_test_client(&mock_server.uri());
    let network = Network::connect(&client, NETWORK_ID).await.unwrap();

    assert_eq!(network.name(), "Branch Office");
    assert_eq!(network.organization_id(), Some(ORG_ID));
    assert!(network.product_types().contains(&ProductType::Wireless));
}

#[tokio::test]
async fn test_find_unknown_name() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    let client = setup_test_client(&mock_server.uri());
    match Network::find(&client, ORG_ID, "No Such Network").await {
        Err(MerakiError::NetworkNotFound(name)) => assert_eq!(name, "No Such Network"),
        _ => panic!("Expected NetworkNotFound"),
    }
}

#[tokio::test]
async fn test_create_network() {
    // What it tests: Creating a network POSTs the vendor's camelCase
    // payload (timeZone, productTypes) and connects to the returned
    // record.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v1/organizations/{ORG_ID}/networks")))
        .and(body_json(json!({
            "name": "New Branch",
            "productTypes": ["switch"],
            "timeZone": "America/New_York",
            "tags": ["staged"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "N_9",
            "name": "New Branch",
            "organizationId": ORG_ID,
            "productTypes": ["switch"],
            "timeZone": "America/New_York",
            "tags": ["staged"],
            "url": "https://dashboard.example.com/n/9",
            "notes": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/networks/N_9/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let config = NetworkConfig::builder()
        .name("New Branch")
        .product_type(ProductType::Switch)
        .tag("staged")
        .build()
        .unwrap();
    let network = Network::create(&client, ORG_ID, &config).await.unwrap();

    assert_eq!(network.id(), "N_9");
    assert!(network.switches().is_empty());
}

#[tokio::test]
async fn test_claim_devices() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/devices/claim")))
        .and(body_json(json!({ "serials": ["Q2ZZ-NEWD-0009"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network.claim_devices(&["Q2ZZ-NEWD-0009"]).await.unwrap();
}

#[tokio::test]
async fn test_remove_devices_reloads_collections() {
    // What it tests: Removing devices POSTs one removal per serial and
    // then re-fetches the device inventory so the collections match the
    // server.
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/devices/remove")))
        .and(body_json(json!({ "serial": CAMERA_SERIAL })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network.remove_devices(&[CAMERA_SERIAL]).await.unwrap();
    // The inventory mock still lists the camera, so the reload keeps it;
    // what matters here is that the removal POST fired and the reload ran.
    assert_eq!(network.cameras().len(), 1);
}

#[tokio::test]
async fn test_bind_template_resolves_name() {
    // What it tests: Binding resolves the template id from the
    // organization's template listing and POSTs it with the auto-bind
    // flag; unbinding posts retainConfigs.
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/organizations/{ORG_ID}/configTemplates")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "T_1", "name": "Standard Branch" }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/bind")))
        .and(body_json(json!({ "configTemplateId": "T_1", "autoBind": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/api/v1/networks/{NETWORK_ID}/unbind")))
        .and(body_json(json!({ "retainConfigs": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network.bind_and_unbind_template("Standard Branch", false).await.unwrap();
}

#[tokio::test]
async fn test_bind_unknown_template() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/organizations/{ORG_ID}/configTemplates")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    match network.bind_template("No Such Template", false).await {
        Err(MerakiError::NotFound(msg)) => assert!(msg.contains("No Such Template")),
        _ => panic!("Expected NotFound"),
    }
}

#[tokio::test]
async fn test_update_location_restricted_to_serials() {
    // What it tests: A bulk location update restricted to one serial PUTs
    // only that device and re-fetches it afterwards; the other devices
    // see no traffic.
    //
    // Why it's valuable: The serial filter is what keeps bulk operations
    // from rewriting every device in the network.
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/devices/{SWITCH_SERIAL}")))
        .and(body_json(json!({ "address": "500 Terry Francine Blvd" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/devices/{SWITCH_SERIAL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serial": SWITCH_SERIAL,
            "name": "branch-sw-01",
            "model": "MS225-48LP",
            "networkId": NETWORK_ID,
            "address": "500 Terry Francine Blvd"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network
        .update_location("500 Terry Francine Blvd", Some(&[SWITCH_SERIAL]))
        .await
        .unwrap();

    let switch = network.switch(SWITCH_SERIAL).unwrap();
    assert_eq!(
        switch.attributes().get("address"),
        Some(&json!("500 Terry Francine Blvd"))
    );
}

#[tokio::test]
async fn test_change_port_type_routes_through_switch() {
    let mock_server = MockServer::start().await;
    mount_branch_network(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/devices/{SWITCH_SERIAL}/switch/ports/7")))
        .and(body_json(json!({ "type": "trunk" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let mut network = Network::find(&client, ORG_ID, "Branch Office").await.unwrap();

    network.change_port_type(SWITCH_SERIAL, "7", PortType::Trunk).await.unwrap();
}
