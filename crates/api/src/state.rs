use infra::db::Db;

/// Process-wide handles shared by every request. Per-request data lives in
/// [`crate::gql::RequestContext`].
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}
