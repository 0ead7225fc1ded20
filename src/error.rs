use crate::{repository, store};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("auth error: missing role")]
    MissingRole,

    ///
    /// Transient infrastructure failure. Callers may retry;
    /// it must never be reported as a rejected ticket.
    ///
    #[error("key-value store error: {0}")]
    Store(#[from] store::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("malformed stored record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::MissingRole => StatusCode::FORBIDDEN,
            Error::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::MalformedRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}
