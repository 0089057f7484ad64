mod common;

use common::*;
use rc_sdk::{CreateResourceBindingOptions, ListResourceBindingsOptions, StatusCode};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const APP_CRN: &str = "crn:v1:staging:public:cf:us-south:s/336ba5f3::cf-application:bf692181";

#[tokio::test]
async fn test_create_binding_with_role_and_parameters() {
    let (server, rc) = setup().await;
    let alias_crn = crn("resource-alias", ALIAS_GUID);

    Mock::given(method("POST"))
        .and(path("/v2/resource_bindings"))
        .and(header("Transaction-Id", "rc-sdk-test20"))
        .and(body_json(json!({
            "source": alias_crn,
            "target": APP_CRN,
            "name": "RcSdkBinding1",
            "role": "Writer",
            "parameters": {"service-endpoints": "private"}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(binding_json("RcSdkBinding1", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let parameters = json!({"service-endpoints": "private"})
        .as_object()
        .cloned()
        .unwrap();
    let binding = rc
        .with_transaction_id("rc-sdk-test20")
        .create_resource_binding(
            CreateResourceBindingOptions::new(alias_crn.clone(), APP_CRN)
                .with_name("RcSdkBinding1")
                .with_role("Writer")
                .with_parameters(parameters),
        )
        .await
        .unwrap();

    assert_eq!(binding.status(), StatusCode::CREATED);
    assert_eq!(binding.id, binding.crn);
    assert_eq!(binding.source_crn.as_deref(), Some(alias_crn.as_str()));
    assert_eq!(binding.target_crn.as_deref(), Some(APP_CRN));
}

#[tokio::test]
async fn test_create_binding_without_name_omits_it() {
    let (server, rc) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/resource_bindings"))
        .and(body_json(json!({"source": ALIAS_GUID, "target": APP_CRN})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(binding_json("generated", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;

    rc.create_resource_binding(CreateResourceBindingOptions::new(ALIAS_GUID, APP_CRN))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_rename_and_delete_binding() {
    let (server, rc) = setup().await;
    let binding_path = format!("/v2/resource_bindings/{BINDING_GUID}");

    Mock::given(method("GET"))
        .and(path(binding_path.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(binding_json("RcSdkBinding1", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(binding_path.as_str()))
        .and(body_json(json!({"name": "RcSdkBindingUpdate1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(binding_json("RcSdkBindingUpdate1", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(binding_path.as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let binding = rc.get_resource_binding(BINDING_GUID).await.unwrap();
    assert_eq!(binding.guid.as_deref(), Some(BINDING_GUID));

    let renamed = rc
        .update_resource_binding(BINDING_GUID, "RcSdkBindingUpdate1")
        .await
        .unwrap();
    assert_eq!(renamed.name.as_deref(), Some("RcSdkBindingUpdate1"));

    let deleted = rc.delete_resource_binding(BINDING_GUID).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_bindings_by_name() {
    let (server, rc) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/resource_bindings"))
        .and(query_param("name", "RcSdkBinding1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], None)))
        .expect(1)
        .mount(&server)
        .await;

    let list = rc
        .list_resource_bindings(ListResourceBindingsOptions::new().with_name("RcSdkBinding1"))
        .await
        .unwrap();
    assert_eq!(list.rows_count, Some(0));
    assert!(list.resources.is_empty());
}
