use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt::{self, SubjectKind};
use crate::error::AppError;
use crate::state::SharedState;

/// The verified subject of a bearer token: who is calling, and as what.
#[derive(Debug, Clone)]
pub struct AuthSubject {
    pub id: Uuid,
    pub kind: SubjectKind,
}

impl AuthSubject {
    /// The caller must be a tenant acting as itself.
    pub fn require_tenant(&self, tenant_id: Uuid) -> Result<(), AppError> {
        if self.kind == SubjectKind::Tenant && self.id == tenant_id {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }

    /// The caller must be an owner acting as itself.
    pub fn require_owner(&self, owner_id: Uuid) -> Result<(), AppError> {
        if self.kind == SubjectKind::Owner && self.id == owner_id {
            Ok(())
        } else {
            Err(AppError::Unauthorized("Unauthorized".to_string()))
        }
    }
}

impl FromRequestParts<SharedState> for AuthSubject {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid authorization header".to_string()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication token".to_string()))?;

        let claims = jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

        Ok(AuthSubject {
            id: claims.sub,
            kind: claims.kind,
        })
    }
}
