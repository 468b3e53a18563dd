use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{catch, Request};
use travel_core::service::error::QueryError;

use super::model::ErrorBody;

#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ApiError {
    #[from]
    #[display("{source}")]
    Query { source: QueryError },
    #[display("missing or malformed query parameter '{name}'")]
    MissingParameter { name: &'static str },
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Query {
                source: QueryError::InvalidArgument { .. },
            } => Status::BadRequest,
            ApiError::Query {
                source: QueryError::NotFound { .. },
            } => Status::NotFound,
            ApiError::Query {
                source: QueryError::BackendUnavailable { .. },
            } => Status::ServiceUnavailable,
            ApiError::MissingParameter { .. } => Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.code >= 500 {
            log::error!("{} {} failed: {:?}", req.method(), req.uri(), self);
        }
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).respond_to(req)
    }
}

#[catch(404)]
pub fn not_found(req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: format!("no resource at {}", req.uri()),
    })
}

#[catch(422)]
pub fn unprocessable(req: &Request) -> Json<ErrorBody> {
    Json(ErrorBody {
        error: format!("malformed request {}", req.uri()),
    })
}
