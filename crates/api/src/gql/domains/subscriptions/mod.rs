pub mod resolvers;
pub mod types;

pub use resolvers::SubscriptionMutation;
pub use types::SubscriptionEdge;
