//! spacebook - a self-hostable space reservation service
//!
//! CRUD for spaces and reservations over a generic keyed record table with
//! sparse secondary indexes, served over HTTP.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod resource;
pub mod store;
pub mod validation;
