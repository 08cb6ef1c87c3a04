//! Error types for notesd

use axum::{
    extract::rejection::BytesRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Methods served on `/notes`, as advertised in the `Allow` header.
pub const NOTES_ALLOW: &str = "GET, POST";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid JSON: {0}")]
    MalformedInput(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Method not allowed")]
    MethodNotSupported,
}

impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedInput(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Error::StoreUnavailable(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            Error::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::StoreUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedInput(err.to_string())
    }
}

impl From<BytesRejection> for Error {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge(rejection.body_text())
        } else {
            Error::MalformedInput(rejection.body_text())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %body, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %body, "request rejected");
        }

        match self {
            Error::MethodNotSupported => (
                status,
                [
                    (header::ALLOW, NOTES_ALLOW),
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                ],
                body,
            )
                .into_response(),
            _ => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response(),
        }
    }
}
