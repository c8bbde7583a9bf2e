use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthSubject;
use crate::auth::jwt::{encode_token, Claims, SubjectKind};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::{Owner, Property};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterOwner {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct OwnerLogin {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateOwner {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize)]
pub struct CurrentOwnerResponse {
    pub owner: Owner,
    pub property: Property,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterOwner>,
) -> Result<(StatusCode, Json<Owner>), AppError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let owner = db::owners::create(&state.pool, &req.name, &req.email, &pw_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::BadRequest("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok((StatusCode::CREATED, Json(owner)))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<OwnerLogin>,
) -> Result<Json<TokenResponse>, AppError> {
    let owner = db::owners::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &owner.password_hash).map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(owner.id, SubjectKind::Owner);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Owner>>, AppError> {
    let owners = db::owners::list_all(&state.pool).await?;
    Ok(Json(owners))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Owner>, AppError> {
    let owner = db::owners::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property owner not found".to_string()))?;
    Ok(Json(owner))
}

/// Administrative create; same shape as registration.
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<RegisterOwner>,
) -> Result<(StatusCode, Json<Owner>), AppError> {
    register(State(state), Json(req)).await
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateOwner>,
) -> Result<Json<Owner>, AppError> {
    let owner = db::owners::update(&state.pool, id, req.name.as_deref(), req.email.as_deref())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::BadRequest("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("Property owner not found".to_string()))?;
    Ok(Json(owner))
}

/// The owner behind the presented token, together with their first
/// listing.
pub async fn current_owner(
    auth: AuthSubject,
    State(state): State<SharedState>,
) -> Result<Json<CurrentOwnerResponse>, AppError> {
    if auth.kind != SubjectKind::Owner {
        return Err(AppError::Unauthorized("Unauthorized".to_string()));
    }

    let owner = db::owners::find_by_id(&state.pool, auth.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property owner not found".to_string()))?;

    let property = db::properties::find_first_by_owner(&state.pool, owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

    Ok(Json(CurrentOwnerResponse { owner, property }))
}
