//! Error responses.
//!
//! # Responsibilities
//! - Map handler failures to HTTP status codes
//! - Render every error as `{"error": message}`
//!
//! # Design Decisions
//! - Validation problems are 400
//! - Any Riot API failure is a plain 500; callers get the error text, not the kind

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::riot::RiotError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Riot(RiotError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Riot(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RiotError> for ApiError {
    fn from(e: RiotError) -> Self {
        Self::Riot(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::BadRequest(message) => message,
            Self::Riot(e) => e.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);

        let upstream = ApiError::from(RiotError::Upstream {
            status: 404,
            body: "not found".into(),
        });
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
