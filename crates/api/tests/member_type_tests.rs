mod common;

use common::*;
use serde_json::json;

#[tokio::test]
async fn test_member_types_are_seeded() {
    let (state, schema) = setup_test_db().await;

    let data = execute_ok(
        &schema,
        &state,
        "{ memberTypes { id discount postsLimitPerMonth } }",
        json!({}),
    )
    .await;

    let mut found: Vec<&str> = data["memberTypes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    found.sort();
    assert_eq!(found, vec!["basic", "business"]);
}

#[tokio::test]
async fn test_member_type_by_id() {
    let (state, schema) = setup_test_db().await;

    let data = execute_ok(
        &schema,
        &state,
        "query MemberType($id: MemberTypeId!) { memberType(id: $id) { id postsLimitPerMonth } }",
        json!({ "id": "business" }),
    )
    .await;

    assert_eq!(data["memberType"]["id"], "business");
    assert!(data["memberType"]["postsLimitPerMonth"].is_i64());
}
