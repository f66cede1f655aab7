//! Authentication middleware
//!
//! Resolves the caller's role from a static bearer token and injects it as
//! a request extension. The rest of the service treats the role as an
//! opaque input; only this module knows how it was derived.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::error::{BannerError, Result};

/// Bearer token granting user-level access.
pub const USER_TOKEN: &str = "user_token";
/// Bearer token granting admin-level access.
pub const ADMIN_TOKEN: &str = "admin_token";

// == Role ==
/// Caller role resolved from the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// Resolves the role from the Authorization header.
fn resolve_role(headers: &HeaderMap) -> Result<Role> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start_matches("Bearer "))
        .ok_or(BannerError::Unauthorized)?;

    match token {
        ADMIN_TOKEN => Ok(Role::Admin),
        USER_TOKEN => Ok(Role::User),
        _ => Err(BannerError::Unauthorized),
    }
}

// == Middleware ==
/// Rejects requests without a recognized token; otherwise stores the
/// caller's [`Role`] in the request extensions for handlers to extract.
pub async fn authenticate(mut req: Request, next: Next) -> Result<Response> {
    let role = resolve_role(req.headers())?;
    req.extensions_mut().insert(role);
    Ok(next.run(req).await)
}

/// Admin gate for the CRUD routes; runs after [`authenticate`].
pub async fn require_admin(req: Request, next: Next) -> Result<Response> {
    match req.extensions().get::<Role>() {
        Some(Role::Admin) => Ok(next.run(req).await),
        Some(Role::User) => Err(BannerError::Forbidden),
        None => Err(BannerError::Unauthorized),
    }
}
