use actix_web::{
    dev::ServiceResponse,
    error::ResponseError,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    HttpResponse,
};
use chrono::Local;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error, PartialEq)]
pub enum BankingError {
    #[error("Customer with id {0} does not exist")]
    CustomerNotFound(i32),

    #[error("A server error occurred")]
    DatabaseError,
}

/// Body returned to clients for a missing customer
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub message: String,
    pub timestamp: String,
    pub path: String,
}

impl ErrorPayload {
    pub fn new(message: String, path: &str) -> Self {
        Self {
            message,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Message {
    message: String,
}

impl ResponseError for BankingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The path and timestamp are attached by `error_translator` once
            // the request is available
            Self::CustomerNotFound(_) => HttpResponse::NotFound().json(Message {
                message: self.to_string(),
            }),
            Self::DatabaseError => HttpResponse::InternalServerError().finish(),
        }
    }
}

impl From<sqlx::Error> for BankingError {
    fn from(e: sqlx::Error) -> BankingError {
        error!(err = ?e, "SQLx error occurred");
        BankingError::DatabaseError
    }
}

/// Middleware rewriting every `CustomerNotFound` response into an
/// [`ErrorPayload`]. Other 404s (unknown routes, unparsable ids) pass through.
pub fn error_translator<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::NOT_FOUND, render_not_found)
}

fn render_not_found<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let message = res
        .response()
        .error()
        .and_then(|e| e.as_error::<BankingError>())
        .filter(|e| matches!(e, BankingError::CustomerNotFound(_)))
        .map(|e| e.to_string());

    let message = match message {
        Some(message) => message,
        None => return Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    };

    warn!(path = %res.request().path(), %message, "customer lookup failed");
    let payload = ErrorPayload::new(message, res.request().path());
    let (req, _) = res.into_parts();
    let res = ServiceResponse::new(req, HttpResponse::NotFound().json(payload));
    Ok(ErrorHandlerResponse::Response(res.map_into_right_body()))
}
