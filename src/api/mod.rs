//! HTTP surface of the gateway

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::build_router;
