use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use tracing::error;

use crate::users::{dto::Envelope, repo::StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Op {
    fn failure_message(self) -> &'static str {
        match self {
            Op::Create => "Error occurred while creating user, Please contact with support team.",
            Op::List => "Error occurred while fetching list of users, Please contact with support team.",
            Op::Get => "Error occurred while fetching user details, Please contact with support team.",
            Op::Update => "Error occurred while updating user, Please contact with support team.",
            Op::Delete => "Error occurred while deleting user, Please contact with support team.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body did not bind to the user shape; the message goes back verbatim.
    #[error("{0}")]
    Validation(String),
    #[error("{op:?} failed: {source}")]
    Persistence {
        op: Op,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Logs the store failure and wraps it; the detail never reaches the client.
    pub fn persistence(op: Op) -> impl FnOnce(StoreError) -> Self {
        move |source| {
            error!(error = %source, ?op, "user store call failed");
            ApiError::Persistence { op, source }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store failures go out as HTTP 400 while the body reports 502; existing
        // clients depend on this pairing.
        let envelope = match self {
            ApiError::Validation(message) => {
                Envelope::message(StatusCode::BAD_REQUEST.as_u16(), message)
            }
            ApiError::Persistence { op, .. } => {
                Envelope::message(StatusCode::BAD_GATEWAY.as_u16(), op.failure_message())
            }
        };
        (StatusCode::BAD_REQUEST, Json(envelope)).into_response()
    }
}
