use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{encode_token, Claims, SubjectKind};
use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub usertype: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub usertype: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Register a generic account plus its role-specific record. Both rows
/// are written in one transaction so a duplicate email cannot leave an
/// orphan account behind.
pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    if req.username.is_empty() || req.password.is_empty() || req.email.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    if req.usertype != "tenant" && req.usertype != "owner" {
        return Err(AppError::BadRequest(
            "usertype must be 'tenant' or 'owner'".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let mut tx = state.pool.begin().await?;

    let account = db::accounts::create(&mut *tx, &req.username, &pw_hash, &req.usertype).await?;

    let role_write = match req.usertype.as_str() {
        "tenant" => db::tenants::create(&mut *tx, &req.username, &req.email, &pw_hash)
            .await
            .map(|_| ()),
        _ => db::owners::create(&mut *tx, &req.username, &req.email, &pw_hash)
            .await
            .map(|_| ()),
    };

    role_write.map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::BadRequest("Email already registered".to_string())
        }
        _ => AppError::Database(e),
    })?;

    tx.commit().await?;

    let claims = Claims::new(account.id, SubjectKind::User);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let account = db::accounts::find_by_username_and_role(&state.pool, &req.username, &req.usertype)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = password::verify(&req.password, &account.password_hash).map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let claims = Claims::new(account.id, SubjectKind::User);
    let token = encode_token(&claims, &state.config.jwt_secret).map_err(AppError::Internal)?;

    Ok(Json(TokenResponse { token }))
}
