//! HTTP server assembly.
//!
//! Mounts one resource router per resource kind, a health endpoint, and a
//! CORS layer, and serves the combined router over a Tokio TCP listener.

mod config;
mod resource_routes;
mod server;

pub use config::HttpServerConfig;
pub use resource_routes::{resource_routes, ResourceState};
pub use server::HttpServer;
