//! REST operation layer.
//!
//! One [`ResourceHandler`] per resource kind composes the request decoder,
//! the required-field validator, and the record table into the four CRUD
//! pipelines. Handlers hold no per-request state; the only shared object is
//! the table handle.

mod errors;
mod handler;
mod query;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handler::ResourceHandler;
pub use query::ReadTarget;
pub use request::{decode_object, decode_single_field, query_param};
pub use response::{CreateResponse, DeleteResponse, ListResponse, UpdateResponse};
