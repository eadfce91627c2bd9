use super::guest_name_or_anonymous;
use crate::repository;
use serde::Serialize;

/// Shown when nobody is being called
pub const NOBODY_CALLING_NAME: &str = "waiting";

/// Shown when the ticket store could not be reached
pub const COMMUNICATING_NAME: &str = "communicating...";

#[derive(Debug, PartialEq, Serialize)]
pub struct CallingNow {
    pub calling_id: i64,
    pub calling_name: String,
}

impl CallingNow {
    pub fn nobody() -> Self {
        Self {
            calling_id: 0,
            calling_name: NOBODY_CALLING_NAME.to_string(),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            calling_id: 0,
            calling_name: COMMUNICATING_NAME.to_string(),
        }
    }
}

impl From<repository::Ticket> for CallingNow {
    fn from(value: repository::Ticket) -> Self {
        Self {
            calling_id: value.display_id,
            calling_name: guest_name_or_anonymous(value.guest_name),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dto::output::ANONYMOUS_GUEST_NAME, repository::TicketStatus};

    #[test]
    fn calling_now_empty_name_anonymous() {
        let ticket = repository::Ticket {
            id: "a4".to_string(),
            display_id: 4,
            guest_name: Some(String::new()),
            adult_count: 1,
            child_count: 1,
            scheduled_time: "13:00".to_string(),
            status: TicketStatus::Calling,
            secret_word: "fog".to_string(),
            extra: Default::default(),
        };

        let calling_now = CallingNow::from(ticket);

        assert_eq!(calling_now.calling_id, 4);
        assert_eq!(calling_now.calling_name, ANONYMOUS_GUEST_NAME);
    }
}
