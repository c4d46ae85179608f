use async_graphql::{Context, Object, Result};
use infra::repos::subscriptions;

use super::types::SubscriptionEdge;
use crate::gql::context::RequestContext;
use crate::gql::error::{deleted, GqlError};
use crate::gql::scalars::UuidScalar;

#[derive(Default)]
pub struct SubscriptionMutation;

#[Object]
impl SubscriptionMutation {
    /// Make `user_id` follow `author_id`. Following the same author twice is
    /// a field error.
    async fn subscribe_to(
        &self,
        ctx: &Context<'_>,
        user_id: UuidScalar,
        author_id: UuidScalar,
    ) -> Result<SubscriptionEdge> {
        let rc = ctx.data::<RequestContext>()?;
        let row = subscriptions::create(&rc.db, user_id.uuid(), author_id.uuid())
            .await
            .map_err(GqlError::from)?;
        Ok(row.into())
    }

    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        user_id: UuidScalar,
        author_id: UuidScalar,
    ) -> Result<bool> {
        let rc = ctx.data::<RequestContext>()?;
        let outcome = subscriptions::delete(&rc.db, user_id.uuid(), author_id.uuid()).await;
        Ok(deleted("Subscription", outcome))
    }
}
