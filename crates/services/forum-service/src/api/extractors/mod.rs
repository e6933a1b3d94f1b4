//! Custom axum extractors.

mod access_token;
mod deferred_json;

pub use access_token::AccessToken;
pub use deferred_json::DeferredJson;
