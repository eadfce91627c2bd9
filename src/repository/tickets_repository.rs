use super::{error::Error, Ticket, TicketInsertEntity, TicketStatus};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket.
    ///
    /// ### Returns
    /// Inserted rows with store-generated `id` and `display_id`
    ///
    async fn insert(&self, ticket: TicketInsertEntity) -> Result<Vec<Ticket>, Error>;

    ///
    /// Counts tickets with status
    ///
    async fn count_by_status(&self, status: TicketStatus) -> Result<u64, Error>;

    ///
    /// Counts tickets with status that are scheduled for the slot
    ///
    async fn count_by_status_in_slot(
        &self,
        status: TicketStatus,
        scheduled_time: &str,
    ) -> Result<u64, Error>;

    ///
    /// Finds slot labels of all tickets with status.
    /// One entry per ticket, so labels repeat.
    ///
    async fn find_many_scheduled_times(&self, status: TicketStatus) -> Result<Vec<String>, Error>;

    ///
    /// Finds tickets with any of the statuses
    ///
    /// ### Returns
    /// Tickets ordered by `scheduled_time` and then by `display_id`, both ascending
    ///
    async fn find_many_by_statuses(&self, statuses: &[TicketStatus]) -> Result<Vec<Ticket>, Error>;

    ///
    /// Finds ticket with status that has the greatest `display_id`
    ///
    async fn find_latest_by_status(&self, status: TicketStatus) -> Result<Option<Ticket>, Error>;

    ///
    /// Overwrites status of the ticket regardless of its current status.
    ///
    /// ### Returns
    /// Updated rows. Empty when ticket with id does not exist
    ///
    async fn update_status(&self, id: &str, status: TicketStatus) -> Result<Vec<Ticket>, Error>;
}
