use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("gesture label must not be empty")]
    EmptyLabel,

    #[error("unknown gesture: {0}")]
    UnknownGesture(String),

    #[error("invalid date key: {0} (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    #[error("unsupported month span: {0} (expected 1, 2, 3 or 6)")]
    InvalidMonthSpan(u32),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::EmptyLabel
            | JournalError::InvalidDateKey(_)
            | JournalError::InvalidMonthSpan(_) => Self::bad_request(err.to_string()),
            JournalError::UnknownGesture(_) => Self::not_found(err.to_string()),
            JournalError::Io(_) | JournalError::Json(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
