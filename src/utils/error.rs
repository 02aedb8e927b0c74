use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DuplicateEmail,
    DuplicatePseudo,
    InvalidCredentials,
    MissingUserInfo,
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateEmail => write!(f, "This email is already in use"),
            AppError::DuplicatePseudo => write!(f, "This pseudo is already in use"),
            AppError::InvalidCredentials => write!(f, "Incorrect email or password"),
            AppError::MissingUserInfo => write!(f, "Missing user information"),
            AppError::Io(e) => write!(f, "Datastore I/O error: {}", e),
            AppError::Parse(e) => write!(f, "Datastore parse error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Parse(e)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail
            | AppError::DuplicatePseudo
            | AppError::MissingUserInfo => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // Datastore failures are unexpected: surface a generic failure
            AppError::Io(_) | AppError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Io(_) | AppError::Parse(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": message
        }))
    }
}
