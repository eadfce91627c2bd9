use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Json, Router,
};
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/", get(get_root))
        .route("/tickets", post(create_ticket))
        .route("/tickets/slots-usage", get(get_slots_usage))
        .route("/tickets/waiting-count", get(get_waiting_count))
        .route("/tickets/calling-now", get(get_calling_now))
        .route("/tickets/:ticket_id/call", patch(call_ticket))
        .route("/tickets/:ticket_id/enter", patch(enter_ticket))
        .route("/admin/tickets", get(get_admin_tickets))
}

async fn get_root() -> Json<output::Message> {
    Json(output::Message {
        message: "haunted house API is running",
    })
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Json(ticket): Json<input::Ticket>,
) -> Result<Json<output::TicketsMessage>, Error> {
    let data = tickets_service.create_ticket(ticket).await?;

    Ok(Json(output::TicketsMessage {
        message: "Success",
        data,
    }))
}

// Display endpoints below always answer 200, a failure is logged and
// replaced with a value the guest screens can render.

async fn get_slots_usage(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Json<output::SlotsUsage> {
    let usage = tickets_service
        .find_slots_usage()
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "slots usage unavailable");
            output::SlotsUsage::default()
        });

    Json(usage)
}

async fn get_waiting_count(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Json<output::WaitingCount> {
    let waiting_count = tickets_service
        .find_waiting_count()
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "waiting count unavailable");
            output::WaitingCount::default()
        });

    Json(waiting_count)
}

async fn get_calling_now(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Json<output::CallingNow> {
    let calling_now = tickets_service
        .find_calling_now()
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "calling ticket unavailable");
            output::CallingNow::unreachable()
        });

    Json(calling_now)
}

async fn get_admin_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Json<Vec<output::AdminTicket>> {
    let tickets = tickets_service
        .find_active_tickets()
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "active tickets unavailable");
            Vec::new()
        });

    Json(tickets)
}

async fn call_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<output::TicketsMessage>, Error> {
    let data = tickets_service.call_ticket(&ticket_id).await?;

    Ok(Json(output::TicketsMessage {
        message: "Called",
        data,
    }))
}

async fn enter_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<String>,
) -> Result<Json<output::TicketsMessage>, Error> {
    let data = tickets_service.enter_ticket(&ticket_id).await?;

    Ok(Json(output::TicketsMessage {
        message: "Updated",
        data,
    }))
}
