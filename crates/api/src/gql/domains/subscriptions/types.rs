use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use infra::models::SubscriptionRow;
use uuid::Uuid;

use crate::gql::context::RequestContext;
use crate::gql::domains::users::User;
use crate::gql::error::GqlError;
use crate::gql::scalars::UuidScalar;

/// A follow edge from `subscriber` to `author`.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "SubscribeToType", complex)]
pub struct SubscriptionEdge {
    pub id: UuidScalar,
    pub subscriber_id: UuidScalar,
    pub author_id: UuidScalar,
}

impl From<SubscriptionRow> for SubscriptionEdge {
    fn from(row: SubscriptionRow) -> Self {
        Self {
            id: row.id.into(),
            subscriber_id: row.subscriber_id.into(),
            author_id: row.author_id.into(),
        }
    }
}

async fn load_user(ctx: &Context<'_>, id: Uuid) -> Result<Option<User>> {
    let rc = ctx.data::<RequestContext>()?;
    let row = rc.users.load_one(id).await.map_err(GqlError::from)?;
    Ok(row.map(User::from))
}

#[ComplexObject]
impl SubscriptionEdge {
    async fn subscriber(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        load_user(ctx, self.subscriber_id.uuid()).await
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        load_user(ctx, self.author_id.uuid()).await
    }
}
