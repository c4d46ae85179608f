mod common;

use async_graphql::Variables;
use common::*;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_change_and_delete_post() {
    let (state, schema) = setup_test_db().await;

    let author_id = create_test_user(&schema, &state, "Author").await;
    let post_id = create_test_post(&schema, &state, &author_id, "Draft").await;

    let data = execute_ok(
        &schema,
        &state,
        "query GetPost($id: UUID!) { post(id: $id) { id title content authorId } }",
        json!({ "id": post_id }),
    )
    .await;
    assert_eq!(data["post"]["title"], "Draft");
    assert_eq!(data["post"]["content"], "body");
    assert_eq!(data["post"]["authorId"], author_id);

    let data = execute_ok(
        &schema,
        &state,
        r#"
        mutation ChangePost($id: UUID!, $dto: ChangePostInput!) {
            changePost(id: $id, dto: $dto) { title content }
        }
        "#,
        json!({ "id": post_id, "dto": { "title": "Final" } }),
    )
    .await;
    assert_eq!(data["changePost"]["title"], "Final");
    assert_eq!(data["changePost"]["content"], "body");

    let data = execute_ok(
        &schema,
        &state,
        "mutation DeletePost($id: UUID!) { deletePost(id: $id) }",
        json!({ "id": post_id }),
    )
    .await;
    assert_eq!(data["deletePost"], true);

    let data = execute_ok(
        &schema,
        &state,
        "query GetPost($id: UUID!) { post(id: $id) { id } }",
        json!({ "id": post_id }),
    )
    .await;
    assert!(data["post"].is_null());
}

#[tokio::test]
async fn test_posts_lists_created_post() {
    let (state, schema) = setup_test_db().await;

    let author_id = create_test_user(&schema, &state, "Lister").await;
    let post_id = create_test_post(&schema, &state, &author_id, "Listed").await;

    let data = execute_ok(&schema, &state, "{ posts { id } }", json!({})).await;
    assert!(ids(&data["posts"]).contains(&post_id));
}

#[tokio::test]
async fn test_create_post_for_unknown_author_is_a_field_error() {
    let (state, schema) = setup_test_db().await;

    let response = execute_graphql(
        &schema,
        &state,
        r#"
        mutation CreatePost($dto: CreatePostInput!) {
            createPost(dto: $dto) { id }
        }
        "#,
        Some(Variables::from_json(json!({ "dto": {
            "authorId": Uuid::new_v4().to_string(),
            "title": "Orphan",
            "content": "nobody wrote this"
        } }))),
    )
    .await;

    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Internal database error");
}
