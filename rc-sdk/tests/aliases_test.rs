mod common;

use common::*;
use rc_sdk::{CreateResourceAliasOptions, ListResourceAliasesOptions, PageOptions, StatusCode};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const SPACE_CRN: &str = "crn:v1:bluemix:public:cf:us-south:o/d35d4f0e::cf-space:336ba5f3";

#[tokio::test]
async fn test_create_alias() {
    let (server, rc) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v2/resource_aliases"))
        .and(body_json(json!({
            "name": "RcSdkAlias1",
            "source": INSTANCE_GUID,
            "target": SPACE_CRN
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(alias_json("RcSdkAlias1", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = rc
        .create_resource_alias(CreateResourceAliasOptions::new(
            "RcSdkAlias1",
            INSTANCE_GUID,
            SPACE_CRN,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.id, response.crn);
    assert_eq!(response.guid.as_deref(), Some(ALIAS_GUID));
    assert_eq!(response.state.as_deref(), Some("active"));
    assert_eq!(response.target_crn.as_deref(), Some(SPACE_CRN));
    assert_eq!(
        response.resource_instance_id.as_deref(),
        Some(crn("", INSTANCE_GUID).as_str())
    );
}

#[tokio::test]
async fn test_get_and_rename_alias() {
    let (server, rc) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/resource_aliases/{ALIAS_GUID}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(alias_json("RcSdkAlias1", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(format!("/v2/resource_aliases/{ALIAS_GUID}")))
        .and(body_json(json!({"name": "RcSdkAliasUpdate1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(alias_json("RcSdkAliasUpdate1", "active")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let alias = rc.get_resource_alias(ALIAS_GUID).await.unwrap();
    assert_eq!(alias.name.as_deref(), Some("RcSdkAlias1"));

    let renamed = rc
        .update_resource_alias(ALIAS_GUID, "RcSdkAliasUpdate1")
        .await
        .unwrap();
    assert_eq!(renamed.name.as_deref(), Some("RcSdkAliasUpdate1"));
}

#[tokio::test]
async fn test_list_aliases_filters() {
    let (server, rc) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/resource_aliases"))
        .and(query_param("resource_instance_id", INSTANCE_GUID))
        .and(query_param("resource_group_id", RESOURCE_GROUP_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![alias_json("RcSdkAlias1", "active")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let list = rc
        .list_resource_aliases(
            ListResourceAliasesOptions::new()
                .with_resource_instance_id(INSTANCE_GUID)
                .with_resource_group_id(RESOURCE_GROUP_ID),
        )
        .await
        .unwrap();

    assert_eq!(list.rows_count, Some(1));
    assert_eq!(list.resources[0].guid.as_deref(), Some(ALIAS_GUID));
}

#[tokio::test]
async fn test_list_bindings_for_alias() {
    let (server, rc) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/resource_aliases/{ALIAS_GUID}/resource_bindings")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![binding_json("RcSdkBinding1", "active")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let list = rc
        .list_resource_bindings_for_alias(ALIAS_GUID, PageOptions::new())
        .await
        .unwrap();
    assert_eq!(list.resources.len(), 1);
    assert_eq!(list.resources[0].guid.as_deref(), Some(BINDING_GUID));
}

#[tokio::test]
async fn test_delete_alias_with_bindings_is_rejected() {
    let (server, rc) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v2/resource_aliases/{ALIAS_GUID}")))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(error_json(400, "Alias has bindings and cannot be deleted")),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/v2/resource_aliases/{ALIAS_GUID}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = rc.delete_resource_alias(ALIAS_GUID).await.unwrap_err();
    assert!(err.is_bad_request());

    let deleted = rc.delete_resource_alias(ALIAS_GUID).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
}
