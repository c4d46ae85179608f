use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use infra::models::UserRow;
use infra::repos::{CreateUserData, UpdateUserData};

use crate::gql::context::RequestContext;
use crate::gql::domains::posts::Post;
use crate::gql::domains::profiles::Profile;
use crate::gql::error::GqlError;
use crate::gql::scalars::UuidScalar;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: UuidScalar,
    pub name: String,
    pub balance: f64,
    #[graphql(skip)]
    pub preloaded: Option<UserRelations>,
}

/// Posts and profile fetched together with the user by `users` / `user(id)`.
#[derive(Clone, Debug, Default)]
pub struct UserRelations {
    pub posts: Vec<Post>,
    pub profile: Option<Profile>,
}

impl User {
    pub fn with_relations(row: UserRow, relations: UserRelations) -> Self {
        Self {
            preloaded: Some(relations),
            ..Self::from(row)
        }
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            balance: row.balance,
            preloaded: None,
        }
    }
}

fn to_users(rows: Vec<UserRow>) -> Vec<User> {
    rows.into_iter().map(User::from).collect()
}

#[ComplexObject]
impl User {
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        if let Some(relations) = &self.preloaded {
            return Ok(relations.profile.clone());
        }

        let rc = ctx.data::<RequestContext>()?;
        let row = rc
            .profile_by_user
            .load_one(self.id.uuid())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(Profile::from))
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        if let Some(relations) = &self.preloaded {
            return Ok(relations.posts.clone());
        }

        let rc = ctx.data::<RequestContext>()?;
        let rows = rc
            .posts_by_author
            .load_one(self.id.uuid())
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();
        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Authors this user follows.
    async fn user_subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = rc
            .subscribed_to
            .load_one(self.id.uuid())
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();
        Ok(to_users(rows))
    }

    /// Users following this one.
    async fn subscribed_to_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let rc = ctx.data::<RequestContext>()?;
        let rows = rc
            .subscribers
            .load_one(self.id.uuid())
            .await
            .map_err(GqlError::from)?
            .unwrap_or_default();
        Ok(to_users(rows))
    }
}

#[derive(InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub balance: f64,
}

impl From<CreateUserInput> for CreateUserData {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            balance: input.balance,
        }
    }
}

#[derive(InputObject)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

impl From<ChangeUserInput> for UpdateUserData {
    fn from(input: ChangeUserInput) -> Self {
        Self {
            name: input.name,
            balance: input.balance,
        }
    }
}
