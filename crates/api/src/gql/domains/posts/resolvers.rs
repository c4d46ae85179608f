use async_graphql::{Context, Object, Result};
use infra::repos::posts;

use super::types::{ChangePostInput, CreatePostInput, Post};
use crate::gql::context::RequestContext;
use crate::gql::error::{deleted, GqlError};
use crate::gql::scalars::UuidScalar;

#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = posts::list(&rc.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<Option<Post>> {
        let rc = ctx.data::<RequestContext>()?;
        let row = posts::get_by_id(&rc.db, id.uuid())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Post::from))
    }
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(&self, ctx: &Context<'_>, dto: CreatePostInput) -> Result<Post> {
        let rc = ctx.data::<RequestContext>()?;
        let row = posts::create(&rc.db, dto.into())
            .await
            .map_err(GqlError::from)?;
        Ok(row.into())
    }

    /// Only the fields present in `dto` are written.
    async fn change_post(
        &self,
        ctx: &Context<'_>,
        id: UuidScalar,
        dto: ChangePostInput,
    ) -> Result<Post> {
        let rc = ctx.data::<RequestContext>()?;
        let row = posts::update(&rc.db, id.uuid(), dto.into())
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::not_found("Post"))?;
        Ok(row.into())
    }

    async fn delete_post(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<bool> {
        let rc = ctx.data::<RequestContext>()?;
        Ok(deleted("Post", posts::delete(&rc.db, id.uuid()).await))
    }
}
