use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use recanto_core::domain::authentication::{ports::AuthenticationService, value_objects::Identity};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Bearer middleware: verifies the token and stores the resolved
/// [`Identity`] in the request extensions. Requests without a valid token
/// pass through; handlers that need a caller use [`RequiredIdentity`].
pub async fn auth(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(header) = req.headers().get(AUTHORIZATION)
        && let Ok(header) = header.to_str()
        && let Some(token) = header.strip_prefix("Bearer ")
        && !token.is_empty()
    {
        match state.service.authenticate(token).await {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
            }
            Err(e) => {
                tracing::debug!("Authentication failed: {}", e);
            }
        }
    }

    next.run(req).await
}

/// Extractor that rejects the request when the auth middleware did not
/// resolve an identity.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| ApiError::Unauthorized("Autenticação necessária".to_string()))
    }
}
