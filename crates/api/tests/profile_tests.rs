mod common;

use async_graphql::Variables;
use common::*;
use serde_json::{json, Value};

const CREATE_PROFILE: &str = r#"
    mutation CreateProfile($dto: CreateProfileInput!) {
        createProfile(dto: $dto) { id isMale yearOfBirth memberTypeId userId }
    }
"#;

fn profile_dto(user_id: &str) -> Value {
    json!({ "dto": {
        "isMale": true,
        "yearOfBirth": 1980,
        "memberTypeId": "basic",
        "userId": user_id
    } })
}

#[tokio::test]
async fn test_profile_resolves_user_and_member_type() {
    let (state, schema) = setup_test_db().await;

    let user_id = create_test_user(&schema, &state, "Profiled").await;
    let created = execute_ok(&schema, &state, CREATE_PROFILE, profile_dto(&user_id)).await;
    let profile = &created["createProfile"];
    assert_eq!(profile["isMale"], true);
    assert_eq!(profile["memberTypeId"], "basic");
    assert_eq!(profile["userId"], user_id);
    let profile_id = profile["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &schema,
        &state,
        r#"
        query GetProfile($id: UUID!) {
            profile(id: $id) {
                id
                user { id name }
                memberType { id discount profiles { id } }
            }
        }
        "#,
        json!({ "id": profile_id }),
    )
    .await;

    let profile = &data["profile"];
    assert_eq!(profile["user"]["id"], user_id);
    assert_eq!(profile["user"]["name"], "Profiled");
    assert_eq!(profile["memberType"]["id"], "basic");
    assert!(ids(&profile["memberType"]["profiles"]).contains(&profile_id));
}

#[tokio::test]
async fn test_second_profile_for_same_user_fails() {
    let (state, schema) = setup_test_db().await;

    let user_id = create_test_user(&schema, &state, "One Profile").await;
    execute_ok(&schema, &state, CREATE_PROFILE, profile_dto(&user_id)).await;

    let response = execute_graphql(
        &schema,
        &state,
        CREATE_PROFILE,
        Some(Variables::from_json(profile_dto(&user_id))),
    )
    .await;

    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_change_profile_member_type() {
    let (state, schema) = setup_test_db().await;

    let user_id = create_test_user(&schema, &state, "Upgrader").await;
    let created = execute_ok(&schema, &state, CREATE_PROFILE, profile_dto(&user_id)).await;
    let profile_id = created["createProfile"]["id"].as_str().unwrap().to_string();

    let data = execute_ok(
        &schema,
        &state,
        r#"
        mutation ChangeProfile($id: UUID!, $dto: ChangeProfileInput!) {
            changeProfile(id: $id, dto: $dto) {
                isMale yearOfBirth memberTypeId memberType { id }
            }
        }
        "#,
        json!({ "id": profile_id, "dto": { "memberTypeId": "business" } }),
    )
    .await;

    let profile = &data["changeProfile"];
    assert_eq!(profile["memberTypeId"], "business");
    assert_eq!(profile["memberType"]["id"], "business");
    assert_eq!(profile["isMale"], true);
    assert_eq!(profile["yearOfBirth"], 1980);

    let data = execute_ok(
        &schema,
        &state,
        "mutation DeleteProfile($id: UUID!) { deleteProfile(id: $id) }",
        json!({ "id": profile_id }),
    )
    .await;
    assert_eq!(data["deleteProfile"], true);
}
