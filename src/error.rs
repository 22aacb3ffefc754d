use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("data must be json")]
    NotJson,
    #[error("{0}")]
    BadRequest(String),
    #[error("field \"{0}\" is required")]
    MissingField(&'static str),
    #[error("a movie titled \"{0}\" already exists")]
    DuplicateTitle(String),
    #[error("no movie with id {0}")]
    NotFound(i32),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => AppError::NotJson,
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// `axum::Json` with rejections reported in the same shape as every other
/// error this service produces.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotJson => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DuplicateTitle(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
