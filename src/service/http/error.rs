use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Any service failure, reported as a 500 with the error chain as body.
#[derive(Debug)]
pub struct HttpError(anyhow::Error);

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", self.0)).into_response()
    }
}

impl<E> From<E> for HttpError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
