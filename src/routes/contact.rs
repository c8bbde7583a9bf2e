//! Contact-request workflow: a two-state flag on each owner. A tenant
//! sets it, the owner clears it. Last writer wins; there is no queue
//! and no audit trail.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthSubject;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub tenant_id: Uuid,
}

/// A tenant asks an owner to get in touch. The token must belong to
/// the tenant named in the body; a second request overwrites the first.
pub async fn request(
    auth: AuthSubject,
    State(state): State<SharedState>,
    Path(owner_id): Path<Uuid>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_tenant(req.tenant_id)?;

    db::owners::find_by_id(&state.pool, owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property owner not found".to_string()))?;

    db::owners::set_contact_request(&state.pool, owner_id, req.tenant_id).await?;

    tracing::info!(%owner_id, tenant_id = %req.tenant_id, "contact request recorded");

    Ok(Json(serde_json::json!({ "message": "Contact request sent" })))
}

/// The owner acknowledges the pending request, returning the flag to
/// its empty state.
pub async fn approve(
    auth: AuthSubject,
    State(state): State<SharedState>,
    Path(owner_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    auth.require_owner(owner_id)?;

    let owner = db::owners::find_by_id(&state.pool, owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property owner not found".to_string()))?;

    if owner.contact_requested_by.is_none() {
        return Err(AppError::BadRequest(
            "No contact request pending".to_string(),
        ));
    }

    db::owners::clear_contact_request(&state.pool, owner_id).await?;

    Ok(Json(serde_json::json!({ "message": "Contact request approved" })))
}
