use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::db::properties::{NewProperty, PropertyChanges};
use crate::error::AppError;
use crate::models::property::{STATUS_AVAILABLE, STATUS_OCCUPIED};
use crate::models::Property;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperty {
    pub owner_id: Uuid,
    pub rent: i64,
    pub contact: String,
    pub area: String,
    pub place: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreateOwnerProperty {
    pub rent: i64,
    pub contact: String,
    pub area: String,
    pub place: String,
    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateProperty {
    pub rent: Option<i64>,
    pub contact: Option<String>,
    pub area: Option<String>,
    pub place: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub status: Option<String>,
}

impl UpdateProperty {
    fn changes(&self) -> Result<PropertyChanges<'_>, AppError> {
        if let Some(status) = self.status.as_deref() {
            if status != STATUS_AVAILABLE && status != STATUS_OCCUPIED {
                return Err(AppError::BadRequest(format!(
                    "status must be '{STATUS_AVAILABLE}' or '{STATUS_OCCUPIED}'"
                )));
            }
        }
        Ok(PropertyChanges {
            rent: self.rent,
            contact: self.contact.as_deref(),
            area: self.area.as_deref(),
            place: self.place.as_deref(),
            amenities: self.amenities.as_deref(),
            status: self.status.as_deref(),
        })
    }
}

fn validate_fields(contact: &str, area: &str, place: &str) -> Result<(), AppError> {
    if contact.is_empty() || area.is_empty() || place.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }
    Ok(())
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Property>>, AppError> {
    let properties = db::properties::list_all(&state.pool).await?;
    Ok(Json(properties))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Property>, AppError> {
    let property = db::properties::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;
    Ok(Json(property))
}

/// Create a listing against an explicit owner id. The owner must exist
/// before anything is written.
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProperty>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    validate_fields(&req.contact, &req.area, &req.place)?;

    let owner = db::owners::find_by_id(&state.pool, req.owner_id).await?;
    if owner.is_none() {
        return Err(AppError::BadRequest("Invalid property owner".to_string()));
    }

    let property = db::properties::create(
        &state.pool,
        NewProperty {
            owner_id: req.owner_id,
            rent: req.rent,
            contact: &req.contact,
            area: &req.area,
            place: &req.place,
            amenities: &req.amenities,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(property)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProperty>,
) -> Result<Json<Property>, AppError> {
    let changes = req.changes()?;
    let property = db::properties::update(&state.pool, id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;
    Ok(Json(property))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Property>, AppError> {
    let property = db::properties::delete(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;
    Ok(Json(property))
}

async fn require_owner_exists(state: &SharedState, owner_id: Uuid) -> Result<(), AppError> {
    db::owners::find_by_id(&state.pool, owner_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound("Property owner not found".to_string()))
}

pub async fn list_by_owner(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Property>>, AppError> {
    require_owner_exists(&state, id).await?;
    let properties = db::properties::list_by_owner(&state.pool, id).await?;
    Ok(Json(properties))
}

pub async fn get_for_owner(
    State(state): State<SharedState>,
    Path((owner_id, property_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Property>, AppError> {
    require_owner_exists(&state, owner_id).await?;
    let property = db::properties::find_by_id_and_owner(&state.pool, property_id, owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;
    Ok(Json(property))
}

pub async fn create_for_owner(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateOwnerProperty>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    validate_fields(&req.contact, &req.area, &req.place)?;
    require_owner_exists(&state, id).await?;

    let property = db::properties::create(
        &state.pool,
        NewProperty {
            owner_id: id,
            rent: req.rent,
            contact: &req.contact,
            area: &req.area,
            place: &req.place,
            amenities: &req.amenities,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(property)))
}

pub async fn update_for_owner(
    State(state): State<SharedState>,
    Path((owner_id, property_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateProperty>,
) -> Result<Json<Property>, AppError> {
    require_owner_exists(&state, owner_id).await?;
    let changes = req.changes()?;
    let property = db::properties::update_for_owner(&state.pool, property_id, owner_id, changes)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;
    Ok(Json(property))
}

pub async fn delete_for_owner(
    State(state): State<SharedState>,
    Path((owner_id, property_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Property>, AppError> {
    require_owner_exists(&state, owner_id).await?;
    let property = db::properties::delete_for_owner(&state.pool, property_id, owner_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;
    Ok(Json(property))
}
