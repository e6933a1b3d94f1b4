//! HTTP request handlers.

pub mod admin_handler;
pub mod answer_handler;
pub mod profile_handler;

pub use admin_handler::admin_routes;
pub use answer_handler::answer_routes;
pub use profile_handler::profile_routes;
