use async_graphql::{Context, Object, Result};
use infra::repos::member_types;

use super::types::{MemberType, MemberTypeId};
use crate::gql::context::RequestContext;
use crate::gql::error::GqlError;

#[derive(Default)]
pub struct MemberTypeQuery;

#[Object]
impl MemberTypeQuery {
    async fn member_types(&self, ctx: &Context<'_>) -> Result<Vec<MemberType>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = member_types::list(&rc.db).await.map_err(GqlError::from)?;
        Ok(rows.into_iter().map(MemberType::from).collect())
    }

    /// `null` when no member type has this id.
    async fn member_type(&self, ctx: &Context<'_>, id: MemberTypeId) -> Result<Option<MemberType>> {
        let rc = ctx.data::<RequestContext>()?;
        let row = member_types::get_by_id(&rc.db, id.into())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(MemberType::from))
    }
}
