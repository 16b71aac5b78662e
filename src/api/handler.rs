//! CRUD pipelines.
//!
//! Each operation is a pure request-to-response transformation: decode,
//! validate, one store call, encode. The handler keeps no state across
//! invocations beyond its resource descriptor and the shared table handle.

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::resource::ResourceSpec;
use crate::store::RecordTable;
use crate::validation::validate_required;

use super::errors::{ApiError, ApiResult};
use super::query::ReadTarget;
use super::request::{decode_object, decode_single_field, query_param};
use super::response::{CreateResponse, DeleteResponse, ListResponse, UpdateResponse};

/// CRUD operations for one resource kind over its table
pub struct ResourceHandler {
    spec: ResourceSpec,
    table: Arc<dyn RecordTable>,
}

impl ResourceHandler {
    pub fn new(spec: ResourceSpec, table: Arc<dyn RecordTable>) -> Self {
        Self { spec, table }
    }

    /// The resource descriptor this handler serves
    pub fn spec(&self) -> &ResourceSpec {
        &self.spec
    }

    /// Create a record.
    ///
    /// The primary key is always server-assigned; a client-supplied value for
    /// it is discarded before the fresh key is attached. Required fields are
    /// checked before any storage call.
    pub fn create(&self, body: Value) -> ApiResult<CreateResponse> {
        let mut record = decode_object(body)?;
        record.remove(self.spec.primary_key);

        let id = Uuid::new_v4().to_string();
        record.insert(self.spec.primary_key.to_string(), Value::String(id.clone()));

        validate_required(&record, self.spec.required_fields)?;
        self.table.put(record)?;

        Ok(CreateResponse::new(id))
    }

    /// Read records, dispatching on the classified query target.
    pub fn read(&self, params: &[(String, String)]) -> ApiResult<ListResponse<Value>> {
        let records = match ReadTarget::classify(self.spec.primary_key, params) {
            ReadTarget::All => self.table.scan_all()?,
            ReadTarget::ByPrimaryKey(id) => self.table.get_by_primary_key(&id)?,
            ReadTarget::BySecondaryKey { attribute, value } => {
                self.table.get_by_secondary_key(&attribute, &value)?
            }
        };

        Ok(ListResponse::new(
            records.into_iter().map(Value::Object).collect(),
        ))
    }

    /// Replace exactly one field on the record named by the primary key
    /// query parameter.
    pub fn update(&self, params: &[(String, String)], body: Value) -> ApiResult<UpdateResponse> {
        let id = query_param(params, self.spec.primary_key)
            .ok_or_else(|| ApiError::MissingParam(self.spec.primary_key.to_string()))?;
        let (field, value) = decode_single_field(body)?;

        let updated = self.table.update_field(id, &field, value)?;
        Ok(UpdateResponse::single(field, updated))
    }

    /// Delete by primary key; succeeds whether or not the record existed.
    pub fn delete(&self, params: &[(String, String)]) -> ApiResult<DeleteResponse> {
        let id = query_param(params, self.spec.primary_key)
            .ok_or_else(|| ApiError::MissingParam(self.spec.primary_key.to_string()))?;

        self.table.delete(id)?;
        Ok(DeleteResponse::success())
    }
}
