//! HTTP-facing error type.
//!
//! Every service error maps to exactly one [`AppError`], and every
//! [`AppError`] renders as a JSON body of the form `{"error": "<message>"}`.
//! User errors (`InvalidUrl`, `NotFound`) keep the `200 OK` status clients of
//! this API expect; server-side failures use 5xx codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::{ResolveError, ShortenError};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid url")]
    InvalidUrl,

    #[error("The short url does not exist!")]
    NotFound,

    #[error("could not assign a short url, please retry")]
    Conflict,

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::NotFound => StatusCode::OK,
            AppError::Conflict => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidUrl(reason) => {
                tracing::debug!(%reason, "Rejected URL");
                AppError::InvalidUrl
            }
            ShortenError::Conflict { attempts } => {
                tracing::error!(attempts, "Short url assignment exhausted its retries");
                AppError::Conflict
            }
            ShortenError::Store(e) => {
                tracing::error!(error = %e, "Store failure while shortening");
                AppError::Internal
            }
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(_) => AppError::NotFound,
            ResolveError::Store(e) => {
                tracing::error!(error = %e, "Store failure while resolving");
                AppError::Internal
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        tracing::debug!(errors = %e, "Request validation failed");
        AppError::InvalidUrl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StoreError;
    use crate::utils::url_parser::UrlValidationError;

    #[test]
    fn test_error_messages_match_api_contract() {
        assert_eq!(AppError::InvalidUrl.to_string(), "invalid url");
        assert_eq!(
            AppError::NotFound.to_string(),
            "The short url does not exist!"
        );
    }

    #[test]
    fn test_user_errors_keep_ok_status() {
        assert_eq!(AppError::InvalidUrl.status(), StatusCode::OK);
        assert_eq!(AppError::NotFound.status(), StatusCode::OK);
        assert_eq!(
            AppError::Internal.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::Conflict.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_shorten_error_mapping() {
        let invalid = ShortenError::InvalidUrl(UrlValidationError::MissingHost);
        assert!(matches!(AppError::from(invalid), AppError::InvalidUrl));

        let conflict = ShortenError::Conflict { attempts: 6 };
        assert!(matches!(AppError::from(conflict), AppError::Conflict));

        let store = ShortenError::Store(StoreError::Unavailable(sqlx::Error::PoolClosed));
        assert!(matches!(AppError::from(store), AppError::Internal));

        let vanished = ShortenError::Store(StoreError::DuplicateOriginalUrl(
            "https://example.com".to_string(),
        ));
        assert_eq!(AppError::from(vanished).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_resolve_error_mapping() {
        assert!(matches!(
            AppError::from(ResolveError::NotFound(3)),
            AppError::NotFound
        ));
        assert!(matches!(
            AppError::from(ResolveError::Store(StoreError::Unavailable(
                sqlx::Error::PoolTimedOut
            ))),
            AppError::Internal
        ));
    }
}
