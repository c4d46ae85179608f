//! Static nesting guard run before a query reaches the executor.
//!
//! Depth is counted per field: root fields sit at depth 0, their children at
//! 1, and so on. Fragment spreads and inline fragments are transparent. Any
//! field deeper than the limit rejects the whole operation.

use std::collections::HashMap;

use async_graphql::parser::{
    parse_query,
    types::{FragmentDefinition, Selection, SelectionSet},
};
use async_graphql::{Name, Pos, Positioned, Response, ServerError};

pub const MAX_DEPTH: usize = 5;

/// Parse `query` and collect one error per operation that nests deeper than
/// `max_depth`. A query that does not parse yields its syntax error.
pub fn validate(query: &str, max_depth: usize) -> Vec<ServerError> {
    let document = match parse_query(query) {
        Ok(document) => document,
        Err(e) => return vec![e.into()],
    };

    let mut errors = Vec::new();
    for (name, operation) in document.operations.iter() {
        let mut walker = DepthWalker {
            fragments: &document.fragments,
            max_depth,
            visiting: Vec::new(),
        };
        if let Some(pos) = walker.first_violation(&operation.node.selection_set.node, 0) {
            let name = name.map(|n| n.as_str()).unwrap_or("");
            errors.push(ServerError::new(
                format!("'{name}' exceeds maximum operation depth of {max_depth}"),
                Some(pos),
            ));
        }
    }
    errors
}

/// Run [`validate`] with [`MAX_DEPTH`] and, on any violation, produce the
/// `{ data: null, errors }` response to send instead of executing.
pub fn reject_if_too_deep(query: &str) -> Option<Response> {
    let errors = validate(query, MAX_DEPTH);
    if errors.is_empty() {
        None
    } else {
        Some(Response::from_errors(errors))
    }
}

struct DepthWalker<'a> {
    fragments: &'a HashMap<Name, Positioned<FragmentDefinition>>,
    max_depth: usize,
    // Fragments currently being expanded; a repeat means a cycle.
    visiting: Vec<&'a Name>,
}

impl<'a> DepthWalker<'a> {
    fn first_violation(&mut self, set: &'a SelectionSet, depth: usize) -> Option<Pos> {
        for selection in &set.items {
            let found = match &selection.node {
                Selection::Field(field) => {
                    if depth > self.max_depth {
                        return Some(field.pos);
                    }
                    // Introspection subtrees are not counted.
                    if field.node.name.node.as_str().starts_with("__") {
                        continue;
                    }
                    self.first_violation(&field.node.selection_set.node, depth + 1)
                }
                Selection::FragmentSpread(spread) => {
                    let name = &spread.node.fragment_name.node;
                    if self.visiting.contains(&name) {
                        continue;
                    }
                    let Some(fragment) = self.fragments.get(name) else {
                        continue;
                    };
                    self.visiting.push(name);
                    let found = self.first_violation(&fragment.node.selection_set.node, depth);
                    self.visiting.pop();
                    found
                }
                Selection::InlineFragment(inline) => {
                    self.first_violation(&inline.node.selection_set.node, depth)
                }
            };
            if found.is_some() {
                return found;
            }
        }
        None
    }
}
