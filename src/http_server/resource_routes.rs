//! Resource HTTP routes
//!
//! One router per resource kind, mounted at the resource's path. All four
//! operations live on the mount root and key off method plus query string,
//! matching the upstream gateway surface.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use crate::api::{
    ApiError, CreateResponse, DeleteResponse, ListResponse, ResourceHandler, UpdateResponse,
};

/// Shared state for one resource router
pub struct ResourceState {
    pub handler: ResourceHandler,
}

impl ResourceState {
    pub fn new(handler: ResourceHandler) -> Self {
        Self { handler }
    }
}

/// Create the routes for one resource
pub fn resource_routes(state: Arc<ResourceState>) -> Router {
    Router::new()
        .route(
            "/",
            post(create_handler)
                .get(read_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .with_state(state)
}

async fn create_handler(
    State(state): State<Arc<ResourceState>>,
    Json(body): Json<Value>,
) -> Result<Json<CreateResponse>, ApiError> {
    state.handler.create(body).map(Json)
}

async fn read_handler(
    State(state): State<Arc<ResourceState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ListResponse<Value>>, ApiError> {
    state.handler.read(&params).map(Json)
}

async fn update_handler(
    State(state): State<Arc<ResourceState>>,
    Query(params): Query<Vec<(String, String)>>,
    Json(body): Json<Value>,
) -> Result<Json<UpdateResponse>, ApiError> {
    state.handler.update(&params, body).map(Json)
}

async fn delete_handler(
    State(state): State<Arc<ResourceState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.handler.delete(&params).map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::SPACES;
    use crate::store::MemoryTable;

    #[test]
    fn test_resource_router_builds() {
        let handler =
            ResourceHandler::new(SPACES, Arc::new(MemoryTable::new(SPACES.table_schema())));
        let _router = resource_routes(Arc::new(ResourceState::new(handler)));
    }
}
