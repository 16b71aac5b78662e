//! Response shaping.
//!
//! Typed response bodies for the CRUD pipelines. All of them serialize to
//! JSON at the HTTP boundary.

use serde::Serialize;
use serde_json::Value;

use crate::store::Record;

/// Create response carrying the server-assigned primary key
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub id: String,
}

impl CreateResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// List response for reads; point lookups return a list of zero or one
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Update response echoing the replaced field and its new value
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub updated: Record,
}

impl UpdateResponse {
    pub fn single(field: impl Into<String>, value: Value) -> Self {
        let mut updated = Record::new();
        updated.insert(field.into(), value);
        Self { updated }
    }
}

/// Delete response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { deleted: true }
    }
}
