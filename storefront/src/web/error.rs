use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use super::templates::page::RenderPage;
use super::templates::pages::error_page::ErrorPage;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Db Error {0}")]
    DbError(#[from] storefront_db::DbError),
    #[error("Generic error {0}")]
    AnyhowError(#[from] anyhow::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::DbError(_) | WebError::AnyhowError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // full detail goes to the log, the client only gets the generic page
        error!("Error returned {self:?}");
        (self.as_status_code(), RenderPage(ErrorPage {})).into_response()
    }
}
