//! Session cookie authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::api::AppState;
use crate::config::SESSION_COOKIE;
use crate::errors::AppError;

/// Authenticated admin extracted from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentAdmin {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Session authentication middleware.
///
/// Reads the session cookie, verifies the JWT, and injects the
/// CurrentAdmin into the request extensions. Absent, invalid, or expired
/// tokens all fail with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(AppError::Unauthorized)?;

    let claims = state
        .auth_service
        .verify_token(&token)
        .map_err(|_| AppError::Unauthorized)?;

    let current_admin = CurrentAdmin {
        id: claims.sub,
        email: claims.email,
        name: claims.name,
        role: claims.role,
    };

    request.extensions_mut().insert(current_admin);

    Ok(next.run(request).await)
}
