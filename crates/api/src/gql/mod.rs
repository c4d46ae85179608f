pub mod context;
pub mod depth;
pub mod domains;
pub mod error;
pub mod loaders;
pub mod root;
pub mod scalars;
pub mod schema;

pub use context::RequestContext;
pub use root::mutation_root::MutationRoot;
pub use root::query_root::QueryRoot;
pub use schema::{build_schema, schema_sdl, AppSchema};

use async_graphql::{Request, Response};

use crate::state::AppState;

/// Depth-check `request`, then run it against `schema` with a fresh
/// [`RequestContext`]. Rejected queries never reach a resolver.
pub async fn execute(schema: &AppSchema, state: &AppState, request: Request) -> Response {
    if let Some(rejected) = depth::reject_if_too_deep(&request.query) {
        tracing::warn!(
            operation = request.operation_name.as_deref().unwrap_or(""),
            "Rejected query exceeding maximum depth of {}",
            depth::MAX_DEPTH
        );
        return rejected;
    }

    let context = RequestContext::new(state.db.clone());
    schema.execute(request.data(context)).await
}
