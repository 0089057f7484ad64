//! Shared fixtures for the mock-server tests.

#![allow(dead_code)]

use rc_sdk::{ResourceController, SdkConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TOKEN: &str = "test-bearer-token";
pub const ACCOUNT_ID: &str = "bc2b2fca0af84354a916dc1de6eee42e";
pub const RESOURCE_GROUP_ID: &str = "13aa3ee48c3b44ddb64c05c79f7ab8ef";
pub const PLAN_ID: &str = "a10e4820-3685-11e9-b210-d663bd873d93";

pub const INSTANCE_GUID: &str = "8d7af921-b136-4078-9666-081bd8470d94";
pub const ALIAS_GUID: &str = "0ae6f3d4-5b52-4a2b-a0d7-e1f4a1b7c0e2";
pub const BINDING_GUID: &str = "b54e1a7c-9a35-4f1a-8c2d-6a52fa1be7d1";
pub const KEY_GUID: &str = "23693f48-aaa2-4079-b0c7-334846eff8d0";

/// CRN for a resource; an empty `kind` yields an instance CRN.
pub fn crn(kind: &str, guid: &str) -> String {
    let base = format!("crn:v1:bluemix:public:cloudantnosqldb:global:a/{ACCOUNT_ID}");
    if kind.is_empty() {
        format!("{base}:{guid}::")
    } else {
        format!("{base}:{INSTANCE_GUID}:{kind}:{guid}")
    }
}

/// Starts a mock service and a client pointed at it.
pub async fn setup() -> (MockServer, ResourceController) {
    let server = MockServer::start().await;
    let rc = ResourceController::new(
        SdkConfig::new()
            .with_service_url(server.uri())
            .with_bearer_token(TOKEN),
    )
    .expect("client for mock server");
    (server, rc)
}

pub fn instance_json(name: &str, state: &str, locked: bool, op_type: &str) -> Value {
    let own_crn = crn("", INSTANCE_GUID);
    json!({
        "id": own_crn,
        "guid": INSTANCE_GUID,
        "crn": own_crn,
        "url": format!("/v2/resource_instances/{INSTANCE_GUID}"),
        "name": name,
        "account_id": ACCOUNT_ID,
        "resource_group_id": RESOURCE_GROUP_ID,
        "resource_plan_id": PLAN_ID,
        "target_crn": "crn:v1:bluemix:public:globalcatalog::::deployment:a10e4820",
        "state": state,
        "type": "service_instance",
        "locked": locked,
        "last_operation": {
            "type": op_type,
            "async": false,
            "state": "succeeded"
        },
        "extra_field_from_newer_api": {"ignored": true}
    })
}

pub fn alias_json(name: &str, state: &str) -> Value {
    let own_crn = crn("resource-alias", ALIAS_GUID);
    json!({
        "id": own_crn,
        "guid": ALIAS_GUID,
        "crn": own_crn,
        "name": name,
        "account_id": ACCOUNT_ID,
        "resource_group_id": RESOURCE_GROUP_ID,
        "target_crn": "crn:v1:bluemix:public:cf:us-south:o/d35d4f0e::cf-space:336ba5f3",
        "resource_instance_id": crn("", INSTANCE_GUID),
        "state": state
    })
}

pub fn binding_json(name: &str, state: &str) -> Value {
    let own_crn = crn("resource-binding", BINDING_GUID);
    json!({
        "id": own_crn,
        "guid": BINDING_GUID,
        "crn": own_crn,
        "name": name,
        "account_id": ACCOUNT_ID,
        "resource_group_id": RESOURCE_GROUP_ID,
        "source_crn": crn("resource-alias", ALIAS_GUID),
        "target_crn": "crn:v1:staging:public:cf:us-south:s/336ba5f3::cf-application:bf692181",
        "state": state
    })
}

pub fn key_json(name: &str, state: &str) -> Value {
    let own_crn = crn("resource-key", KEY_GUID);
    json!({
        "id": own_crn,
        "guid": KEY_GUID,
        "crn": own_crn,
        "name": name,
        "account_id": ACCOUNT_ID,
        "resource_group_id": RESOURCE_GROUP_ID,
        "source_crn": crn("", INSTANCE_GUID),
        "state": state,
        "credentials": {"apikey": "redacted"}
    })
}

pub fn reclamation_json(id: &str, instance_guid: &str, state: &str) -> Value {
    json!({
        "id": id,
        "entity_id": instance_guid,
        "resource_instance_id": instance_guid,
        "account_id": ACCOUNT_ID,
        "resource_group_id": RESOURCE_GROUP_ID,
        "state": state
    })
}

pub fn page(rows: Vec<Value>, next_url: Option<&str>) -> Value {
    let mut body = json!({
        "rows_count": rows.len(),
        "resources": rows
    });
    if let Some(next_url) = next_url {
        body["next_url"] = json!(next_url);
    }
    body
}

pub fn error_json(status: u16, message: &str) -> Value {
    json!({
        "message": message,
        "status_code": status,
        "error_code": "RC-TestError",
        "transaction_id": "tx-from-server"
    })
}
