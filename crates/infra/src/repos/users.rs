use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{LinkedUserRow, UserRow};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub name: String,
    pub balance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUserData {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>("SELECT id, name, balance FROM users")
        .fetch_all(executor)
        .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>("SELECT id, name, balance FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn list_by_ids<'e>(executor: impl PgExecutor<'e>, ids: &[Uuid]) -> SqlxResult<Vec<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        "SELECT id, name, balance FROM users WHERE id = ANY($1::uuid[])",
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}

/// Authors followed by each of the given subscribers.
/// `linked_id` carries the subscriber id.
pub async fn list_subscribed_to<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_ids: &[Uuid],
) -> SqlxResult<Vec<LinkedUserRow>> {
    sqlx::query_as::<_, LinkedUserRow>(
        r#"
        SELECT s.subscriber_id AS linked_id, u.id, u.name, u.balance
        FROM subscribers_on_authors s
        JOIN users u ON u.id = s.author_id
        WHERE s.subscriber_id = ANY($1::uuid[])
        "#,
    )
    .bind(subscriber_ids)
    .fetch_all(executor)
    .await
}

/// Subscribers of each of the given authors.
/// `linked_id` carries the author id.
pub async fn list_subscribers<'e>(
    executor: impl PgExecutor<'e>,
    author_ids: &[Uuid],
) -> SqlxResult<Vec<LinkedUserRow>> {
    sqlx::query_as::<_, LinkedUserRow>(
        r#"
        SELECT s.author_id AS linked_id, u.id, u.name, u.balance
        FROM subscribers_on_authors s
        JOIN users u ON u.id = s.subscriber_id
        WHERE s.author_id = ANY($1::uuid[])
        "#,
    )
    .bind(author_ids)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: CreateUserData) -> SqlxResult<UserRow> {
    sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (name, balance)
        VALUES ($1, $2)
        RETURNING id, name, balance
        "#,
    )
    .bind(&data.name)
    .bind(data.balance)
    .fetch_one(executor)
    .await
}

/// Apply the supplied fields; `None` keeps the stored value.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    data: UpdateUserData,
) -> SqlxResult<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            balance = COALESCE($3, balance)
        WHERE id = $1
        RETURNING id, name, balance
        "#,
    )
    .bind(id)
    .bind(&data.name)
    .bind(data.balance)
    .fetch_optional(executor)
    .await
}

/// Returns whether a row was removed.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
