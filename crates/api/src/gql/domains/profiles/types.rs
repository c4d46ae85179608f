use async_graphql::{ComplexObject, Context, InputObject, Result, SimpleObject};
use infra::models::ProfileRow;
use infra::repos::{CreateProfileData, UpdateProfileData};

use crate::gql::context::RequestContext;
use crate::gql::domains::member_types::{MemberType, MemberTypeId};
use crate::gql::domains::users::User;
use crate::gql::error::GqlError;
use crate::gql::scalars::UuidScalar;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Profile {
    pub id: UuidScalar,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub member_type_id: MemberTypeId,
    pub user_id: UuidScalar,
    /// Filled when the parent query already joined the member type.
    #[graphql(skip)]
    pub preloaded_member_type: Option<MemberType>,
}

impl Profile {
    pub fn with_member_type(row: ProfileRow, member_type: Option<MemberType>) -> Self {
        Self {
            preloaded_member_type: member_type,
            ..Self::from(row)
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id.into(),
            is_male: row.is_male,
            year_of_birth: row.year_of_birth,
            member_type_id: row.member_type_id.into(),
            user_id: row.user_id.into(),
            preloaded_member_type: None,
        }
    }
}

#[ComplexObject]
impl Profile {
    async fn member_type(&self, ctx: &Context<'_>) -> Result<Option<MemberType>> {
        if let Some(member_type) = &self.preloaded_member_type {
            return Ok(Some(member_type.clone()));
        }

        let rc = ctx.data::<RequestContext>()?;
        let row = rc
            .member_types
            .load_one(self.member_type_id.into())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(MemberType::from))
    }

    async fn user(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let rc = ctx.data::<RequestContext>()?;
        let row = rc
            .users
            .load_one(self.user_id.uuid())
            .await
            .map_err(GqlError::from)?;
        Ok(row.map(User::from))
    }
}

#[derive(InputObject)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub member_type_id: MemberTypeId,
    pub user_id: UuidScalar,
}

impl From<CreateProfileInput> for CreateProfileData {
    fn from(input: CreateProfileInput) -> Self {
        Self {
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            member_type_id: input.member_type_id.into(),
            user_id: input.user_id.uuid(),
        }
    }
}

#[derive(InputObject)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_type_id: Option<MemberTypeId>,
}

impl From<ChangeProfileInput> for UpdateProfileData {
    fn from(input: ChangeProfileInput) -> Self {
        Self {
            is_male: input.is_male,
            year_of_birth: input.year_of_birth,
            member_type_id: input.member_type_id.map(Into::into),
        }
    }
}
