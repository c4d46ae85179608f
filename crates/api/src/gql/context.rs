use async_graphql::dataloader::DataLoader;
use infra::db::Db;

use super::loaders::{
    MemberTypeLoader, PostsByAuthorLoader, ProfileByUserLoader, ProfilesByMemberTypeLoader,
    SubscribedToLoader, SubscribersLoader, UserLoader,
};

/// Everything a resolver may touch, built fresh for each request.
///
/// The loaders coalesce lookups issued in the same tick (sibling fields of a
/// list, for instance) into a single `= ANY($1)` query. They carry no cache,
/// so a mutation followed by a read in the same request never sees stale rows.
pub struct RequestContext {
    pub db: Db,
    pub users: DataLoader<UserLoader>,
    pub member_types: DataLoader<MemberTypeLoader>,
    pub profile_by_user: DataLoader<ProfileByUserLoader>,
    pub posts_by_author: DataLoader<PostsByAuthorLoader>,
    pub profiles_by_member_type: DataLoader<ProfilesByMemberTypeLoader>,
    pub subscribed_to: DataLoader<SubscribedToLoader>,
    pub subscribers: DataLoader<SubscribersLoader>,
}

impl RequestContext {
    pub fn new(db: Db) -> Self {
        Self {
            users: DataLoader::new(UserLoader::new(db.clone()), tokio::spawn),
            member_types: DataLoader::new(MemberTypeLoader::new(db.clone()), tokio::spawn),
            profile_by_user: DataLoader::new(ProfileByUserLoader::new(db.clone()), tokio::spawn),
            posts_by_author: DataLoader::new(PostsByAuthorLoader::new(db.clone()), tokio::spawn),
            profiles_by_member_type: DataLoader::new(
                ProfilesByMemberTypeLoader::new(db.clone()),
                tokio::spawn,
            ),
            subscribed_to: DataLoader::new(SubscribedToLoader::new(db.clone()), tokio::spawn),
            subscribers: DataLoader::new(SubscribersLoader::new(db.clone()), tokio::spawn),
            db,
        }
    }
}
