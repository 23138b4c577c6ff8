use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("member `{0}` already exists")]
    DuplicateMember(String),
    #[error("unknown member `{0}`")]
    UnknownMember(String),
    #[error("chapters must be a whole number of at least 1 (got {0})")]
    InvalidChapters(String),
    #[error("member name must not be empty")]
    InvalidMemberName,
    #[error("month must look like YYYY-MM (got `{0}`)")]
    InvalidMonth(String),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        let status = match err {
            TrackerError::DuplicateMember(_) => StatusCode::CONFLICT,
            TrackerError::UnknownMember(_) => StatusCode::NOT_FOUND,
            TrackerError::InvalidChapters(_)
            | TrackerError::InvalidMemberName
            | TrackerError::InvalidMonth(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
