use crate::{dto::input, repository::TicketStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketInsertEntity {
    pub guest_name: Option<String>,
    pub adult_count: u32,
    pub child_count: u32,
    pub scheduled_time: String,
    pub status: TicketStatus,
    pub secret_word: String,
}

impl From<input::Ticket> for TicketInsertEntity {
    /// New tickets always start in the queue
    fn from(value: input::Ticket) -> Self {
        Self {
            guest_name: value.guest_name,
            adult_count: value.adult_count,
            child_count: value.child_count,
            scheduled_time: value.scheduled_time,
            status: TicketStatus::Waiting,
            secret_word: value.secret_word,
        }
    }
}
