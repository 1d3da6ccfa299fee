//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - unauthenticated account operations
//! - [`ResourceApi`] - bearer-authenticated collection listing

mod auth;
mod resources;

pub use auth::AuthApi;
pub use resources::ResourceApi;
