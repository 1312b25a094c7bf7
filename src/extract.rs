//! Extractors whose rejections come back in the JSON error envelope.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
};

use crate::error::AppError;

/// `axum::Json` with an [`AppError`] rejection.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with an [`AppError`] rejection.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejection_to_error(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| rejection_to_error(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}

// Missing path params is a routing bug, not a client error.
fn rejection_to_error(status: StatusCode, text: String) -> AppError {
    if status.is_server_error() {
        AppError::Internal(anyhow::anyhow!(text))
    } else {
        tracing::warn!(%status, reason = %text, "request rejected");
        AppError::BadRequest(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rejections_become_bad_requests() {
        let err = rejection_to_error(StatusCode::UNPROCESSABLE_ENTITY, "missing field".into());
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "missing field"));

        let err = rejection_to_error(StatusCode::INTERNAL_SERVER_ERROR, "no params".into());
        assert!(matches!(err, AppError::Internal(_)));
    }
}
