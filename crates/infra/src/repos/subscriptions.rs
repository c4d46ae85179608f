use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::SubscriptionRow;

/// Insert a (subscriber, author) edge. Duplicate pairs fail on the unique key.
pub async fn create<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> SqlxResult<SubscriptionRow> {
    sqlx::query_as::<_, SubscriptionRow>(
        r#"
        INSERT INTO subscribers_on_authors (subscriber_id, author_id)
        VALUES ($1, $2)
        RETURNING id, subscriber_id, author_id
        "#,
    )
    .bind(subscriber_id)
    .bind(author_id)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e>(
    executor: impl PgExecutor<'e>,
    subscriber_id: Uuid,
    author_id: Uuid,
) -> SqlxResult<bool> {
    let result = sqlx::query(
        "DELETE FROM subscribers_on_authors WHERE subscriber_id = $1 AND author_id = $2",
    )
    .bind(subscriber_id)
    .bind(author_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected() > 0)
}
