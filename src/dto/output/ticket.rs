use crate::repository::{self, TicketStatus};
use serde::Serialize;
use serde_json::{Map, Value};

///
/// Ticket as stored, returned by endpoints that change tickets
///
#[derive(Debug, Serialize)]
pub struct Ticket {
    pub id: String,
    pub display_id: i64,
    pub guest_name: Option<String>,
    pub adult_count: u32,
    pub child_count: u32,
    pub scheduled_time: String,
    pub status: TicketStatus,
    pub secret_word: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            display_id: value.display_id,
            guest_name: value.guest_name,
            adult_count: value.adult_count,
            child_count: value.child_count,
            scheduled_time: value.scheduled_time,
            status: value.status,
            secret_word: value.secret_word,
            extra: value.extra,
        }
    }
}
