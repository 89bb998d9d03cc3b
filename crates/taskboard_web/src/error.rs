//! HTTP error mapping.
//!
//! Record-not-found is handled by redirects in the handlers and never
//! reaches this type.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use taskboard_core::ServiceError;

use crate::views;

/// Request-fatal failure.
#[derive(Debug)]
pub enum AppError {
    Service(ServiceError),
    /// The blocking store task panicked or was cancelled.
    Join(tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::MissingField(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::Store(_)) | Self::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::Join(err) => write!(f, "store task failed: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Join(err) => Some(err),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Service(ServiceError::MissingField(_)) => {
                warn!("event=http_error module=web status={} error={}", status.as_u16(), self);
                self.to_string()
            }
            _ => {
                error!("event=http_error module=web status={} error={}", status.as_u16(), self);
                // Store paths and OS errors stay in the log only.
                "internal server error".to_string()
            }
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}
