use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema. Storage handles are not attached here; every
/// request brings its own [`super::RequestContext`].
pub fn build_schema(introspection: bool) -> AppSchema {
    let mut builder = Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    );

    if !introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// SDL of the full type graph.
pub fn schema_sdl() -> String {
    build_schema(true).sdl()
}
