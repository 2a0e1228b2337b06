use axum::{ http::StatusCode, response::{ IntoResponse, Response }, Json };
use thiserror::Error;

use crate::models::api::ErrorResponse;

pub const MISSING_INPUT_MESSAGE: &str = "Either message or document_text is required";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Provider returned {status}: {body}")]
    Api {
        status: u16,
        body: String,
    },
    #[error("No completion choices in provider response")]
    EmptyChoices,
}

#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,
    #[error(transparent)]
    Upstream(#[from] LlmError),
    #[error("{0}")]
    Other(String),
}

impl InterpretError {
    pub fn status(&self) -> StatusCode {
        match self {
            InterpretError::MissingInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InterpretError {
    fn into_response(self) -> Response {
        let body = match &self {
            InterpretError::MissingInput =>
                ErrorResponse {
                    error: MISSING_INPUT_MESSAGE.to_string(),
                    details: None,
                },
            other =>
                ErrorResponse {
                    error: GENERIC_FAILURE_MESSAGE.to_string(),
                    details: Some(other.to_string()),
                },
        };
        (self.status(), Json(body)).into_response()
    }
}
