use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::jwt::{encode_token, Claims, SubjectKind};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::Tenant;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterTenant {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct TenantLogin {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateTenant {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterTenant>,
) -> Result<(StatusCode, Json<Tenant>), AppError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let tenant = db::tenants::create(&state.pool, &req.name, &req.email, &pw_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::BadRequest("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok((StatusCode::CREATED, Json(tenant)))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<TenantLogin>,
) -> Result<Json<TokenResponse>, AppError> {
    let tenant = db::tenants::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid =
        password::verify(&req.password, &tenant.password_hash).map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(tenant.id, SubjectKind::Tenant);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Tenant>>, AppError> {
    let tenants = db::tenants::list_all(&state.pool).await?;
    Ok(Json(tenants))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Tenant>, AppError> {
    let tenant = db::tenants::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tenant not found".to_string()))?;
    Ok(Json(tenant))
}

/// Administrative create; same shape as registration.
pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<RegisterTenant>,
) -> Result<(StatusCode, Json<Tenant>), AppError> {
    register(State(state), Json(req)).await
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTenant>,
) -> Result<Json<Tenant>, AppError> {
    let tenant = db::tenants::update(&state.pool, id, req.name.as_deref(), req.email.as_deref())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::BadRequest("Email already registered".to_string())
            }
            _ => AppError::Database(e),
        })?
        .ok_or_else(|| AppError::NotFound("Tenant not found".to_string()))?;
    Ok(Json(tenant))
}
