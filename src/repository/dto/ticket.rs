use super::TicketStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

///
/// Row of the `tickets` table as returned by the store
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub display_id: i64,

    pub guest_name: Option<String>,
    pub adult_count: u32,
    pub child_count: u32,

    pub scheduled_time: String,
    pub status: TicketStatus,
    pub secret_word: String,

    /// Columns the service does not interpret, e.g. `created_at`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
