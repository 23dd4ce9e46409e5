//! Unified error handling with consistent API response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::card::StatsEndpoint;

/// Error detail in the API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Consistent JSON envelope for all API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            data: Some(data),
            error: None,
        })
    }

    /// Wrap an error in the envelope.
    pub fn error(code: &str, message: &str) -> Json<Self> {
        Json(Self {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }
}

/// Why a dashboard fetch cycle did not produce a view model.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("No token found in local storage")]
    MissingCredential,

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: StatsEndpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with status {status}")]
    Status {
        endpoint: StatsEndpoint,
        status: u16,
    },

    #[error("Unreadable response from {endpoint}: {source}")]
    Decode {
        endpoint: StatsEndpoint,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The endpoint that rejected, if the cycle got far enough to send requests.
    pub fn endpoint(&self) -> Option<StatsEndpoint> {
        match self {
            Self::MissingCredential => None,
            Self::Transport { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(*endpoint),
        }
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Fetch cycle failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Fetch(FetchError::MissingCredential) => (
                StatusCode::UNAUTHORIZED,
                "MISSING_CREDENTIAL",
                FetchError::MissingCredential.to_string(),
            ),
            AppError::Fetch(e) => {
                tracing::error!(error = %e, "Dashboard fetch cycle failed");
                (StatusCode::BAD_GATEWAY, "FETCH_FAILED", e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ApiResponse::<()> {
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message,
            }),
        };

        (status, Json(body)).into_response()
    }
}
