use actix_web::{http::StatusCode, HttpResponse};
use application::error::AppError;
use log::debug;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestfulError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Not found")]
    RouteNotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl actix_web::error::ResponseError for RestfulError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::App(err) => match err {
                AppError::InvalidInput(_)
                | AppError::Conflict(_)
                | AppError::AlreadyExists(_)
                | AppError::FailedPrecondition(_) => StatusCode::BAD_REQUEST,
                AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
                AppError::Unauthorized(_) => StatusCode::FORBIDDEN,
                AppError::NotFound(_) => StatusCode::NOT_FOUND,
            },
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let message = self.to_string();
        debug!("request failed with {}: {}", self.status_code(), message);
        HttpResponse::build(self.status_code()).json(ErrorResponse { message })
    }
}
