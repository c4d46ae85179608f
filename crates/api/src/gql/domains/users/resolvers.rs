use std::collections::HashMap;

use async_graphql::{Context, Object, Result};
use infra::db::Db;
use infra::models::{MemberTypeId, UserRow};
use infra::repos::{member_types, posts, profiles, users};
use uuid::Uuid;

use super::types::{ChangeUserInput, CreateUserInput, User, UserRelations};
use crate::gql::context::RequestContext;
use crate::gql::domains::member_types::MemberType;
use crate::gql::domains::posts::Post;
use crate::gql::domains::profiles::Profile;
use crate::gql::error::{deleted, GqlError};
use crate::gql::scalars::UuidScalar;

/// Fetch posts and profile-with-member-type for every user in three queries,
/// whatever the number of users.
async fn with_relations(db: &Db, rows: Vec<UserRow>) -> Result<Vec<User>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let (post_rows, profile_rows) = tokio::try_join!(
        posts::list_by_author_ids(db, &ids),
        profiles::list_by_user_ids(db, &ids)
    )
    .map_err(GqlError::from)?;

    let mut member_type_ids: Vec<MemberTypeId> =
        profile_rows.iter().map(|p| p.member_type_id).collect();
    member_type_ids.sort_by_key(|id| id.as_str());
    member_type_ids.dedup();

    let member_type_by_id: HashMap<MemberTypeId, MemberType> = if member_type_ids.is_empty() {
        HashMap::new()
    } else {
        member_types::list_by_ids(db, &member_type_ids)
            .await
            .map_err(GqlError::from)?
            .into_iter()
            .map(|row| (row.id, MemberType::from(row)))
            .collect()
    };

    let mut relations: HashMap<Uuid, UserRelations> = HashMap::new();
    for row in post_rows {
        relations
            .entry(row.author_id)
            .or_default()
            .posts
            .push(Post::from(row));
    }
    for row in profile_rows {
        let user_id = row.user_id;
        let member_type = member_type_by_id.get(&row.member_type_id).cloned();
        relations.entry(user_id).or_default().profile =
            Some(Profile::with_member_type(row, member_type));
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let related = relations.remove(&row.id).unwrap_or_default();
            User::with_relations(row, related)
        })
        .collect())
}

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = users::list(&rc.db).await.map_err(GqlError::from)?;
        with_relations(&rc.db, rows).await
    }

    async fn user(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<Option<User>> {
        let rc = ctx.data::<RequestContext>()?;
        let Some(row) = users::get_by_id(&rc.db, id.uuid())
            .await
            .map_err(GqlError::from)?
        else {
            return Ok(None);
        };

        Ok(with_relations(&rc.db, vec![row]).await?.pop())
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(&self, ctx: &Context<'_>, dto: CreateUserInput) -> Result<User> {
        let rc = ctx.data::<RequestContext>()?;
        let row = users::create(&rc.db, dto.into())
            .await
            .map_err(GqlError::from)?;
        Ok(row.into())
    }

    async fn change_user(
        &self,
        ctx: &Context<'_>,
        id: UuidScalar,
        dto: ChangeUserInput,
    ) -> Result<User> {
        let rc = ctx.data::<RequestContext>()?;
        let row = users::update(&rc.db, id.uuid(), dto.into())
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::not_found("User"))?;
        Ok(row.into())
    }

    /// Removes the user together with their profile, posts and subscription edges.
    async fn delete_user(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<bool> {
        let rc = ctx.data::<RequestContext>()?;
        Ok(deleted("User", users::delete(&rc.db, id.uuid()).await))
    }
}
