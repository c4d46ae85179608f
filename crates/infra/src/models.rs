use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize,
)]
#[sqlx(type_name = "member_type_id", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberTypeId {
    Basic,
    Business,
}

impl MemberTypeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberTypeId::Basic => "basic",
            MemberTypeId::Business => "business",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MemberTypeRow {
    pub id: MemberTypeId,
    pub discount: f64,
    pub posts_limit_per_month: i32,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

/// A user reached through the subscription table, tagged with the id of
/// the user on the other end of the edge.
#[derive(Debug, Clone, FromRow)]
pub struct LinkedUserRow {
    pub linked_id: Uuid,
    #[sqlx(flatten)]
    pub user: UserRow,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PostRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_type_id: MemberTypeId,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubscriptionRow {
    pub id: Uuid,
    pub subscriber_id: Uuid,
    pub author_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgHasArrayType;

    fn binds_as_array<T: PgHasArrayType>() {}

    #[test]
    fn member_type_id_binds_as_postgres_array() {
        // `= ANY($1)` lookups bind `&[MemberTypeId]`.
        binds_as_array::<MemberTypeId>();
    }

    #[test]
    fn member_type_id_names_match_the_enum_labels() {
        assert_eq!(MemberTypeId::Basic.as_str(), "basic");
        assert_eq!(MemberTypeId::Business.as_str(), "business");
    }
}
