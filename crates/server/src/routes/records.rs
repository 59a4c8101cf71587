use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use models::{Record, RecordId, Resource};
use serde::Deserialize;
use service::SharedStore;
use tracing::info;

use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

/// GET: every record in insertion order; `[]` when the collection is empty.
pub async fn list<R: Resource>(State(store): State<SharedStore<R>>) -> Json<Vec<Record<R>>> {
    let records = store.list().await;
    info!(resource = R::NAME, count = records.len(), "listing records");
    Json(records)
}

/// POST: decode the body as `R`'s input schema and append it.
///
/// The body is taken as raw bytes so that a missing or wrong `Content-Type`
/// still goes through the same decoder and fails with 400, not 415.
pub async fn create<R: Resource>(
    State(store): State<SharedStore<R>>,
    body: Bytes,
) -> Result<Json<Record<R>>, ApiError> {
    let payload = R::decode(&body)?;
    let record = store.create(payload).await;
    info!(resource = R::NAME, id = record.id, payload = ?record.payload, "record created");
    Ok(Json(record))
}

/// DELETE `?id=<n>`: 200 with empty body when removed.
pub async fn delete<R: Resource>(
    State(store): State<SharedStore<R>>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, ApiError> {
    let raw = query
        .id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing id".into()))?;
    let id: i64 = raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid id: {raw}")))?;

    // zero and negative ids parse fine but can never have been issued
    let removed = match RecordId::try_from(id) {
        Ok(id) => store.delete(id).await,
        Err(_) => false,
    };
    if !removed {
        return Err(ApiError::NotFound(format!("{} record {id} not found", R::NAME)));
    }

    let remaining = store.len().await;
    info!(resource = R::NAME, id, remaining, "record deleted");
    Ok(StatusCode::OK)
}

/// Fallback for verbs a known path does not support.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
