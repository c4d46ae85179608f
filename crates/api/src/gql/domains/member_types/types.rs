use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject};
use infra::models::{self, MemberTypeRow};

use crate::gql::context::RequestContext;
use crate::gql::domains::profiles::Profile;
use crate::gql::error::GqlError;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum MemberTypeId {
    #[graphql(name = "basic")]
    Basic,
    #[graphql(name = "business")]
    Business,
}

impl From<models::MemberTypeId> for MemberTypeId {
    fn from(id: models::MemberTypeId) -> Self {
        match id {
            models::MemberTypeId::Basic => MemberTypeId::Basic,
            models::MemberTypeId::Business => MemberTypeId::Business,
        }
    }
}

impl From<MemberTypeId> for models::MemberTypeId {
    fn from(id: MemberTypeId) -> Self {
        match id {
            MemberTypeId::Basic => models::MemberTypeId::Basic,
            MemberTypeId::Business => models::MemberTypeId::Business,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct MemberType {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

impl From<MemberTypeRow> for MemberType {
    fn from(row: MemberTypeRow) -> Self {
        Self {
            id: row.id.into(),
            discount: row.discount,
            posts_limit_per_month: row.posts_limit_per_month,
        }
    }
}

#[ComplexObject]
impl MemberType {
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = rc
            .profiles_by_member_type
            .load_one(self.id.into())
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();

        Ok(rows.into_iter().map(Profile::from).collect())
    }
}
