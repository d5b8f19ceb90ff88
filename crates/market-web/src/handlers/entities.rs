//! Generic entity CRUD handlers
//!
//! One set of handlers serves every admin resource: the path segment
//! picks the entity type out of the registry, the session middleware
//! supplies the bearer token, and the backend does the rest.

use crate::auth::SessionToken;
use crate::error::ApiError;
use crate::resources::AdminResource;
use crate::state::AppState;
use axum::Extension;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use market_client::{FilterState, ListQuery};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

/// Query parameters for list endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct ListParams {
    /// Page number (1-based), passed through to the backend
    #[validate(range(min = 1, max = 10000))]
    pub page: Option<u32>,

    /// Items per page, passed through to the backend
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u32>,

    /// Search needle applied server-side with the entity's text fields
    #[validate(length(max = 255))]
    pub search: Option<String>,

    /// Status facet selection; omit for "all"
    #[validate(length(max = 64))]
    pub status: Option<String>,
}

fn resolve(resource: &str) -> Result<AdminResource, ApiError> {
    AdminResource::from_path(resource)
        .ok_or_else(|| ApiError::not_found(format!("unknown resource: {resource}")))
}

/// List a resource with optional search and status filtering
///
/// # Errors
///
/// Responds 404 for unknown resources, 400 for invalid parameters, and
/// maps backend failures to their status.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<SessionToken>,
    Path(resource): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>, ApiError> {
    params.validate()?;
    let resource = resolve(&resource)?;

    let query = ListQuery {
        page: params.page,
        limit: params.limit,
    };

    let mut filter_state = FilterState::new();
    if let Some(search) = params.search {
        filter_state.set_search(search);
    }
    if let Some(status) = params.status {
        filter_state.select("status", status);
    }

    let client = state.api_client.clone().with_token(token.0);
    let data = resource
        .fetch_filtered(&client, &query, &filter_state)
        .await
        .map_err(|e| {
            error!(resource = resource.path(), "list failed: {e}");
            ApiError::from(e)
        })?;

    Ok(Json(json!({"success": true, "data": data})))
}

/// Create an entity
///
/// # Errors
///
/// Responds 404 for unknown resources and maps backend failures.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<SessionToken>,
    Path(resource): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let resource = resolve(&resource)?;

    let client = state.api_client.clone().with_token(token.0);
    let created: Value = client.create(resource.path(), &payload).await?;

    Ok(Json(json!({"success": true, "data": created})))
}

/// Update an entity with a partial body.
///
/// An empty body is a no-op success: nothing is sent to the backend,
/// mirroring the diff short-circuit in the client.
///
/// # Errors
///
/// Responds 400 when the body is not a JSON object, 404 for unknown
/// resources, and maps backend failures.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<SessionToken>,
    Path((resource, id)): Path<(String, String)>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let resource = resolve(&resource)?;

    let Value::Object(changes) = payload else {
        return Err(ApiError::bad_request("update body must be a JSON object"));
    };

    if changes.is_empty() {
        return Ok(Json(json!({
            "success": true,
            "data": null,
            "message": "no changes"
        })));
    }

    let client = state.api_client.clone().with_token(token.0);
    let updated: Value = client.update(resource.path(), &id, &changes).await?;

    Ok(Json(json!({"success": true, "data": updated})))
}

/// Delete an entity by identifier
///
/// # Errors
///
/// Responds 404 for unknown resources and maps backend failures.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Extension(token): Extension<SessionToken>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let resource = resolve(&resource)?;

    let client = state.api_client.clone().with_token(token.0);
    client.delete(resource.path(), &id).await?;

    Ok(Json(json!({"success": true, "data": null})))
}
