pub mod resolvers;
pub mod types;

pub use resolvers::{ProfileMutation, ProfileQuery};
pub use types::{ChangeProfileInput, CreateProfileInput, Profile};
