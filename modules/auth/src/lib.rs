// === PUBLIC CONTRACT ===
// Other modules (notes) consume authentication only through the contract.
pub mod contract;

pub use contract::{client, error, model};

// === MODULE DEFINITION ===
pub mod module;
pub use module::AuthModule;

// Bearer gate for routes owned by other modules.
pub use api::rest::middleware::{bearer_token, require_bearer};

// === INTERNAL MODULES ===
// Exposed for tests and the server binary; external consumers should use `contract`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
