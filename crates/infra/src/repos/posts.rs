use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::PostRow;

#[derive(Debug, Clone)]
pub struct CreatePostData {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePostData {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>("SELECT id, title, content, author_id FROM posts")
        .fetch_all(executor)
        .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        "SELECT id, title, content, author_id FROM posts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_author_ids<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[Uuid],
) -> SqlxResult<Vec<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, title, content, author_id
        FROM posts
        WHERE author_id = ANY($1::uuid[])
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreatePostData) -> SqlxResult<PostRow> {
    sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (author_id, title, content)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, author_id
        "#,
    )
    .bind(data.author_id)
    .bind(&data.title)
    .bind(&data.content)
    .fetch_one(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdatePostData,
) -> SqlxResult<Option<PostRow>> {
    sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET title = COALESCE($2, title),
            content = COALESCE($3, content)
        WHERE id = $1
        RETURNING id, title, content, author_id
        "#,
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.content)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
