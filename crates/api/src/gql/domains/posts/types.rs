use async_graphql::{InputObject, SimpleObject};
use infra::models::PostRow;
use infra::repos::{CreatePostData, UpdatePostData};

use crate::gql::scalars::UuidScalar;

#[derive(SimpleObject, Clone, Debug)]
pub struct Post {
    pub id: UuidScalar,
    pub title: String,
    pub content: String,
    pub author_id: UuidScalar,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id.into(),
            title: row.title,
            content: row.content,
            author_id: row.author_id.into(),
        }
    }
}

#[derive(InputObject)]
pub struct CreatePostInput {
    pub author_id: UuidScalar,
    pub title: String,
    pub content: String,
}

impl From<CreatePostInput> for CreatePostData {
    fn from(input: CreatePostInput) -> Self {
        Self {
            author_id: input.author_id.uuid(),
            title: input.title,
            content: input.content,
        }
    }
}

#[derive(InputObject)]
pub struct ChangePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<ChangePostInput> for UpdatePostData {
    fn from(input: ChangePostInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
        }
    }
}
