pub mod client;
pub mod error;
pub mod model;

pub use client::AuthApi;
pub use error::AuthError;
pub use model::User;
