use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{MemberTypeId, MemberTypeRow};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<MemberTypeRow>> {
    sqlx::query_as::<_, MemberTypeRow>(
        r#"
        SELECT id, discount, posts_limit_per_month
        FROM member_types
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: MemberTypeId,
) -> SqlxResult<Option<MemberTypeRow>> {
    sqlx::query_as::<_, MemberTypeRow>(
        r#"
        SELECT id, discount, posts_limit_per_month
        FROM member_types
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_ids<'e>(
    executor: impl PgExecutor<'e>,
    ids: &[MemberTypeId],
) -> SqlxResult<Vec<MemberTypeRow>> {
    sqlx::query_as::<_, MemberTypeRow>(
        r#"
        SELECT id, discount, posts_limit_per_month
        FROM member_types
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
}
