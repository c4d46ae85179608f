use async_graphql::dataloader::Loader;
use infra::db::Db;
use infra::models::{LinkedUserRow, MemberTypeId, MemberTypeRow, PostRow, ProfileRow, UserRow};
use infra::repos::{member_types, posts, profiles, users};
use std::{collections::HashMap, future::Future, hash::Hash, sync::Arc};
use uuid::Uuid;

fn group_by<K, V>(rows: Vec<V>, key: impl Fn(&V) -> K) -> HashMap<K, Vec<V>>
where
    K: Eq + Hash,
{
    let mut grouped: HashMap<K, Vec<V>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}

fn group_linked(rows: Vec<LinkedUserRow>) -> HashMap<Uuid, Vec<UserRow>> {
    let mut grouped: HashMap<Uuid, Vec<UserRow>> = HashMap::new();
    for row in rows {
        grouped.entry(row.linked_id).or_default().push(row.user);
    }
    grouped
}

// UserLoader - batch load users by ID
#[derive(Clone)]
pub struct UserLoader {
    pool: Db,
}

impl UserLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for UserLoader {
    type Value = UserRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let ids: Vec<Uuid> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = users::list_by_ids(&pool, &ids).await.map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// MemberTypeLoader - batch load member types by enum id
#[derive(Clone)]
pub struct MemberTypeLoader {
    pool: Db,
}

impl MemberTypeLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<MemberTypeId> for MemberTypeLoader {
    type Value = MemberTypeRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[MemberTypeId],
    ) -> impl Future<Output = std::result::Result<HashMap<MemberTypeId, Self::Value>, Self::Error>>
           + Send {
        let pool = self.pool.clone();
        let ids: Vec<MemberTypeId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = member_types::list_by_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.id, r)).collect())
        }
    }
}

// ProfileByUserLoader - one profile per user id
#[derive(Clone)]
pub struct ProfileByUserLoader {
    pool: Db,
}

impl ProfileByUserLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for ProfileByUserLoader {
    type Value = ProfileRow;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let user_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if user_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = profiles::list_by_user_ids(&pool, &user_ids)
                .await
                .map_err(Arc::new)?;
            Ok(rows.into_iter().map(|r| (r.user_id, r)).collect())
        }
    }
}

// PostsByAuthorLoader - all posts keyed by author id
#[derive(Clone)]
pub struct PostsByAuthorLoader {
    pool: Db,
}

impl PostsByAuthorLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for PostsByAuthorLoader {
    type Value = Vec<PostRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let author_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = posts::list_by_author_ids(&pool, &author_ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.author_id))
        }
    }
}

// ProfilesByMemberTypeLoader - all profiles keyed by member type
#[derive(Clone)]
pub struct ProfilesByMemberTypeLoader {
    pool: Db,
}

impl ProfilesByMemberTypeLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<MemberTypeId> for ProfilesByMemberTypeLoader {
    type Value = Vec<ProfileRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[MemberTypeId],
    ) -> impl Future<Output = std::result::Result<HashMap<MemberTypeId, Self::Value>, Self::Error>>
           + Send {
        let pool = self.pool.clone();
        let ids: Vec<MemberTypeId> = keys.to_vec();

        async move {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = profiles::list_by_member_type_ids(&pool, &ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_by(rows, |r| r.member_type_id))
        }
    }
}

// SubscribedToLoader - authors followed by a subscriber
#[derive(Clone)]
pub struct SubscribedToLoader {
    pool: Db,
}

impl SubscribedToLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for SubscribedToLoader {
    type Value = Vec<UserRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let subscriber_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if subscriber_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = users::list_subscribed_to(&pool, &subscriber_ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_linked(rows))
        }
    }
}

// SubscribersLoader - followers of an author
#[derive(Clone)]
pub struct SubscribersLoader {
    pool: Db,
}

impl SubscribersLoader {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

impl Loader<Uuid> for SubscribersLoader {
    type Value = Vec<UserRow>;
    type Error = Arc<sqlx::Error>;

    fn load(
        &self,
        keys: &[Uuid],
    ) -> impl Future<Output = std::result::Result<HashMap<Uuid, Self::Value>, Self::Error>> + Send
    {
        let pool = self.pool.clone();
        let author_ids: Vec<Uuid> = keys.to_vec();

        async move {
            if author_ids.is_empty() {
                return Ok(HashMap::new());
            }

            let rows = users::list_subscribers(&pool, &author_ids)
                .await
                .map_err(Arc::new)?;
            Ok(group_linked(rows))
        }
    }
}
