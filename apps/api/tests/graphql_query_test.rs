//! Integration tests for the GraphQL query tree
//!
//! Walks the User → Tenant → EdgeCluster hierarchy through the executable
//! schema, both with the production resolver creator and with a substitute.

mod common;

use common::*;
use edgecloud_api::build_schema;
use rstest::rstest;
use serde_json::json;

#[tokio::test]
async fn test_user_tenant_edge_cluster_tree() {
    let schema = default_schema();
    let response = execute(
        &schema,
        r#"{
            user {
                id
                tenant(tenantId: "t1") {
                    id
                    name
                    edgeClusters {
                        pageInfo { startCursor endCursor hasNextPage hasPreviousPage }
                        edges { cursor }
                        totalCount
                    }
                }
            }
        }"#,
    )
    .await;

    assert_no_errors(&response);
    let user = &response["data"]["user"];
    assert!(!user["id"].as_str().unwrap().is_empty());

    let tenant = &user["tenant"];
    assert_eq!(tenant["id"], "t1");
    assert!(!tenant["name"].as_str().unwrap().is_empty());
    assert_eq!(
        tenant["edgeClusters"],
        json!({
            "pageInfo": {
                "startCursor": "start cursor",
                "endCursor": "End cursor",
                "hasNextPage": true,
                "hasPreviousPage": false
            },
            "edges": [],
            "totalCount": 0
        })
    );
}

#[tokio::test]
async fn test_user_connections_and_lookups() {
    let schema = default_schema();
    let response = execute(
        &schema,
        r#"{
            user {
                tenants(first: 10, tenantIds: ["a", "b"], sortOption: "name") {
                    edges { node { id } }
                    pageInfo { hasNextPage }
                }
                edgeClusters(last: 3, before: "x", edgeClusterIds: ["e"]) {
                    edges { node { id } }
                    totalCount
                }
                edgeCluster(edgeClusterId: "e1") { id name }
                tenant(tenantId: "t2") {
                    edgeCluster(edgeClusterId: "e2") { id }
                }
            }
        }"#,
    )
    .await;

    assert_no_errors(&response);
    let user = &response["data"]["user"];
    assert_eq!(user["tenants"]["edges"], json!([]));
    assert_eq!(user["tenants"]["pageInfo"]["hasNextPage"], true);
    assert_eq!(user["edgeClusters"]["totalCount"], 0);
    assert_eq!(user["edgeCluster"]["id"], "e1");
    assert!(!user["edgeCluster"]["name"].as_str().unwrap().is_empty());
    assert_eq!(user["tenant"]["edgeCluster"]["id"], "e2");
}

#[tokio::test]
async fn test_each_request_gets_a_fresh_user() {
    let schema = default_schema();
    let first = execute(&schema, "{ user { id } }").await;
    let second = execute(&schema, "{ user { id } }").await;

    assert_no_errors(&first);
    assert_ne!(first["data"]["user"]["id"], second["data"]["user"]["id"]);
}

#[rstest]
#[case(r#"{ user { tenant(tenantId: "") { id } } }"#)]
#[case(r#"{ user { tenant(tenantId: "   ") { id } } }"#)]
#[case(r#"{ user { edgeCluster(edgeClusterId: "") { id } } }"#)]
#[case(r#"{ user { tenant(tenantId: "t") { edgeCluster(edgeClusterId: " ") { id } } } }"#)]
#[tokio::test]
async fn test_blank_ids_fail_with_argument_required(#[case] query: &str) {
    let response = execute(&default_schema(), query).await;

    assert_eq!(error_codes(&response), vec!["ARGUMENT_REQUIRED"]);
    assert!(response["data"].is_null());
}

#[rstest]
#[case(r#"{ user { tenants(first: -1) { totalCount } } }"#, "first")]
#[case(r#"{ user { edgeClusters(last: -2) { totalCount } } }"#, "last")]
#[case(r#"{ user { tenant(tenantId: "t") { edgeClusters(first: -3) { totalCount } } } }"#, "first")]
#[tokio::test]
async fn test_negative_page_size_is_rejected(#[case] query: &str, #[case] argument: &str) {
    let response = execute(&default_schema(), query).await;

    assert_eq!(error_codes(&response), vec!["INVALID_ARGUMENT"]);
    assert_eq!(response["errors"][0]["extensions"]["argument"], argument);
}

#[tokio::test]
async fn test_substitute_creator_controls_the_tree() {
    let creator = RecordingCreator::shared();
    let schema = build_schema(creator.clone());

    let response = execute(
        &schema,
        r#"{
            user {
                tenant(tenantId: "t1") {
                    name
                    edgeCluster(edgeClusterId: "e1") { name }
                    edgeClusters { pageInfo { hasNextPage startCursor } }
                }
            }
        }"#,
    )
    .await;

    assert_no_errors(&response);
    let tenant = &response["data"]["user"]["tenant"];
    assert_eq!(tenant["name"], FIXED_TENANT_NAME);
    assert_eq!(tenant["edgeCluster"]["name"], FIXED_EDGE_CLUSTER_NAME);
    assert_eq!(tenant["edgeClusters"]["pageInfo"]["hasNextPage"], false);
    assert_eq!(
        tenant["edgeClusters"]["pageInfo"]["startCursor"],
        "start cursor"
    );

    let calls = creator.calls();
    for expected in [
        "user",
        "tenant:t1",
        "edge_cluster:e1",
        "edge_cluster_connection",
        "page_info",
    ] {
        assert!(
            calls.iter().any(|c| c == expected),
            "missing call {} in {:?}",
            expected,
            calls
        );
    }
}
