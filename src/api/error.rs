use rouille::Response;
use tracing::{error, warn};

/// Faults a request can end in. Each maps onto one response.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request body already consumed")]
    BodyConsumed,
    #[error("error decoding movie: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("error encoding movies: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("catalog error: {0}")]
    Catalog(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("cannot find movie with id {0:?}")]
    NotFound(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BodyConsumed | ApiError::Decode(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Encode(_) | ApiError::Catalog(_) => 500,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::BodyConsumed | ApiError::Decode(_) => "Invalid movie payload",
            ApiError::NotFound(_) => "No movie with this ID",
            ApiError::Encode(_) | ApiError::Catalog(_) => "Internal server error",
        }
    }

    /// Logs the fault once and turns it into the client facing response.
    pub fn into_response(self) -> Response {
        let status = self.status_code();
        if status >= 500 {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        Response::text(self.message()).with_status_code(status)
    }
}
