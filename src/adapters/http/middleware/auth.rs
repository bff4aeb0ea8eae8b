//! Owner-resolution extractor.
//!
//! Authentication proper lives outside this service: an upstream gateway
//! resolves the caller and forwards the owner identifier in the
//! `x-user-id` header. The extractor only checks that the header is
//! present and non-blank; every core operation is then scoped to that
//! owner explicitly.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::domain::foundation::UserId;

/// Header carrying the resolved owner identifier.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires a resolved owner identity.
///
/// Rejects with 401 when the header is missing, non-UTF-8, or blank.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::new(value).ok())
            .map(RequireAuth)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::unauthorized(format!(
                        "Missing or empty {} header",
                        USER_ID_HEADER
                    ))),
                )
                    .into_response()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<RequireAuth, Response> {
        let (mut parts, _) = request.into_parts();
        RequireAuth::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn accepts_a_valid_header() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "user-42")
            .body(())
            .unwrap();

        let RequireAuth(user) = extract(request).await.unwrap();
        assert_eq!(user.as_str(), "user-42");
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let request = Request::builder().body(()).unwrap();
        let rejection = extract(request).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_blank_header() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "   ")
            .body(())
            .unwrap();

        let rejection = extract(request).await.unwrap_err();
        assert_eq!(rejection.status(), StatusCode::UNAUTHORIZED);
    }
}
