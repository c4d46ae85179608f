use async_graphql::{Context, Object, Result};
use infra::repos::profiles;

use super::types::{ChangeProfileInput, CreateProfileInput, Profile};
use crate::gql::context::RequestContext;
use crate::gql::error::{deleted, GqlError};
use crate::gql::scalars::UuidScalar;

#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = profiles::list(&rc.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn profile(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<Option<Profile>> {
        let rc = ctx.data::<RequestContext>()?;
        let row = profiles::get_by_id(&rc.db, id.uuid())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Profile::from))
    }
}

#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    /// A second profile for the same user violates `profiles.user_id` uniqueness
    /// and surfaces as a field error.
    async fn create_profile(&self, ctx: &Context<'_>, dto: CreateProfileInput) -> Result<Profile> {
        let rc = ctx.data::<RequestContext>()?;
        let row = profiles::create(&rc.db, dto.into())
            .await
            .map_err(GqlError::from)?;
        Ok(row.into())
    }

    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: UuidScalar,
        dto: ChangeProfileInput,
    ) -> Result<Profile> {
        let rc = ctx.data::<RequestContext>()?;
        let row = profiles::update(&rc.db, id.uuid(), dto.into())
            .await
            .map_err(GqlError::from)?
            .ok_or_else(|| GqlError::not_found("Profile"))?;
        Ok(row.into())
    }

    async fn delete_profile(&self, ctx: &Context<'_>, id: UuidScalar) -> Result<bool> {
        let rc = ctx.data::<RequestContext>()?;
        Ok(deleted("Profile", profiles::delete(&rc.db, id.uuid()).await))
    }
}
