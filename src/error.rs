use crate::{dto::output, repository};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{slot} slot has reached its capacity of {max_tickets} groups")]
    SlotCapacityReached { slot: String, max_tickets: u64 },

    #[error("ticket creation failed: {0}")]
    TicketCreation(#[source] repository::Error),

    #[error("ticket call failed: {0}")]
    TicketCall(#[source] repository::Error),

    #[error("ticket enter failed: {0}")]
    TicketEnter(#[source] repository::Error),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let (status, detail) = match self {
            Error::SlotCapacityReached { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::TicketCreation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ticket creation failed".to_string(),
            ),
            Error::TicketCall(_) => (StatusCode::INTERNAL_SERVER_ERROR, "call failed".to_string()),
            Error::TicketEnter(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "update failed".to_string(),
            ),
            Error::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database error".to_string(),
            ),
        };

        (status, Json(output::ErrorDetail { detail })).into_response()
    }
}
