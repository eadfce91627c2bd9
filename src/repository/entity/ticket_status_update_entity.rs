use crate::repository::TicketStatus;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketStatusUpdateEntity {
    pub status: TicketStatus,
}
