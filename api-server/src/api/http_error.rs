use rocket::catch;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use thiserror::Error;

/// Generic JSON error body; provider internals never appear here.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Route-level errors mapped onto HTTP statuses.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl HttpError {
    fn status(&self) -> Status {
        match self {
            HttpError::BadRequest(_) => Status::BadRequest,
            HttpError::NotFound(_) => Status::NotFound,
        }
    }
}

impl<'r> Responder<'r, 'static> for HttpError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let mut response = Json(ErrorBody {
            error: self.to_string(),
        })
        .respond_to(request)?;
        response.set_status(status);
        Ok(response)
    }
}

#[catch(404)]
pub fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "Not found".to_string(),
    })
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorBody> {
    Json(ErrorBody {
        error: "Internal server error".to_string(),
    })
}
