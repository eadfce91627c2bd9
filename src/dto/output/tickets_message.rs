use super::Ticket;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketsMessage {
    pub message: &'static str,
    pub data: Vec<Ticket>,
}
