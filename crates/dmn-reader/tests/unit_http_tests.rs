//! Unit tests for reading metadata over HTTP
//!
//! These tests use mockito to mock the engine's REST API.

use dmn_core::{DefinitionInfo, DefinitionList, DmnXml};
use dmn_reader::{EngineConfig, EngineEndpoint, ErrorKind, JsonResource, SourceConfig};
use mockito::Server;
use std::net::TcpListener;

const DISH_XML: &str = r#"<definitions id="dish" name="Desired Dish"><decision id="decision" name="Dish"><decisionTable id="dt" hitPolicy="FIRST"><input id="i1"><inputExpression id="ie1" typeRef="string"><text>season</text></inputExpression></input><output id="o1" name="desiredDish"/><rule id="r1"><inputEntry id="e1"><text>"Fall"</text></inputEntry><outputEntry id="oe1"><text>"Spareribs"</text></outputEntry></rule></decisionTable></decision></definitions>"#;

/// A URL nothing is listening on
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/decision-definition")
}

#[test]
fn test_read_url_definition_list() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/decision-definition")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"d1","key":"k1","name":"N","version":2}]"#)
        .create();

    let mut list = DefinitionList::new();
    list.read_url(&format!("{}/decision-definition", server.url()))
        .unwrap();

    assert_eq!(list.len(), 1);
    let def = &list.definitions[0];
    assert_eq!(def.id, "d1");
    assert_eq!(def.key, "k1");
    assert_eq!(def.name, "N");
    assert_eq!(def.version, 2);
    assert!(def.category.is_empty());
    assert!(def.deployment_id.is_empty());
}

#[test]
fn test_read_url_sends_plain_get() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/definition")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"id":"d1"}"#)
        .expect(1)
        .create();

    let def = DefinitionInfo::from_url(&format!("{}/definition", server.url())).unwrap();

    assert_eq!(def.id, "d1");
    m.assert();
}

#[test]
fn test_not_found_with_empty_body_is_decode_error() {
    let mut server = Server::new();
    let _m = server.mock("GET", "/missing").with_status(404).create();

    let err = DefinitionList::from_url(&format!("{}/missing", server.url())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_error_status_with_valid_body_still_decodes() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/definition")
        .with_status(500)
        .with_body(r#"{"type":"RestException","message":"boom"}"#)
        .create();

    // Unknown fields only: decodes to the zero value
    let def = DefinitionInfo::from_url(&format!("{}/definition", server.url())).unwrap();
    assert_eq!(def, DefinitionInfo::default());
}

#[test]
fn test_unreachable_host_is_network_error() {
    let url = closed_port_url();
    let err = DefinitionList::from_url(&url).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().contains(&url));
}

#[test]
fn test_invalid_url_is_network_error() {
    let err = DefinitionList::from_url("not a url").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[test]
fn test_failed_read_url_leaves_receiver_unchanged() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/broken")
        .with_status(200)
        .with_body("[{")
        .create();

    let mut xml = DmnXml {
        id: "keep".to_string(),
        dmn_xml: "<definitions/>".to_string(),
    };
    assert!(xml.read_url(&format!("{}/broken", server.url())).is_err());
    assert_eq!(xml.id, "keep");
}

#[test]
fn test_repeated_failures_release_connections() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/missing")
        .with_status(404)
        .expect(200)
        .create();
    let url = format!("{}/missing", server.url());

    for _ in 0..200 {
        let err = DefinitionList::from_url(&url).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    m.assert();
}

#[test]
fn test_source_config_load_url() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/decision-definition")
        .with_status(200)
        .with_body(r#"[{"id":"a"},{"id":"b"}]"#)
        .create();

    let config = SourceConfig::url(format!("{}/decision-definition", server.url()));
    let list: DefinitionList = config.load().unwrap();

    let ids: Vec<&str> = list.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

// =============================================================================
// Engine Endpoint Tests
// =============================================================================

#[test]
fn test_engine_definitions() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/engine-rest/decision-definition")
        .with_status(200)
        .with_body(r#"[{"id":"dish:1","key":"dish","version":1},{"id":"dish:2","key":"dish","version":2}]"#)
        .create();

    let engine = EngineEndpoint::new(format!("{}/engine-rest", server.url()));
    let list = engine.definitions().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list.latest_by_key("dish").unwrap().id, "dish:2");
}

#[test]
fn test_engine_definition_by_key() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/engine-rest/decision-definition/key/dish")
        .with_status(200)
        .with_body(r#"{"id":"dish:2","key":"dish","version":2}"#)
        .create();

    let engine = EngineConfig::new(format!("{}/engine-rest", server.url()))
        .endpoint()
        .unwrap();
    let def = engine.definition_by_key("dish").unwrap();

    assert_eq!(def.id, "dish:2");
    assert_eq!(def.version, 2);
}

#[test]
fn test_engine_document() {
    let mut server = Server::new();
    let body = serde_json::json!({ "id": "dish1", "dmnXml": DISH_XML }).to_string();
    let _m = server
        .mock("GET", "/engine-rest/decision-definition/dish1/xml")
        .with_status(200)
        .with_body(body)
        .create();

    let engine = EngineEndpoint::new(format!("{}/engine-rest", server.url()));

    let xml = engine.dmn_xml("dish1").unwrap();
    assert_eq!(xml.id, "dish1");
    assert_eq!(xml.dmn_xml, DISH_XML);

    let def = engine.document("dish1").unwrap();
    let table = def.decision_table().unwrap();
    assert_eq!(table.hit_policy, "FIRST");
    assert_eq!(table.inputs[0].expression().unwrap().text, "season");
    assert_eq!(table.rules[0].output_entries[0].text, "\"Spareribs\"");
}

#[test]
fn test_engine_document_with_broken_payload() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/engine-rest/decision-definition/bad/xml")
        .with_status(200)
        .with_body(r#"{"id":"bad","dmnXml":"<definitions><decision>"}"#)
        .create();

    let engine = EngineEndpoint::new(format!("{}/engine-rest", server.url()));
    let err = engine.document("bad").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("XML"));
}
