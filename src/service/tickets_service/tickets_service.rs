use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Creates new waiting ticket.
    ///
    /// The capacity check and the insert are two separate store requests,
    /// concurrent creations can therefore overfill a slot.
    ///
    /// ### Returns
    /// Inserted tickets
    ///
    /// ### Errors
    /// - [Error::SlotCapacityReached] when slot already has the maximum
    ///   number of waiting tickets
    /// - [Error::TicketCreation] when the store fails
    ///
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// Counts waiting tickets in every slot
    ///
    async fn find_slots_usage(&self) -> Result<output::SlotsUsage, Error>;

    ///
    /// Counts all waiting tickets
    ///
    async fn find_waiting_count(&self) -> Result<output::WaitingCount, Error>;

    ///
    /// Finds the most recently called ticket (greatest display_id among calling tickets)
    ///
    /// ### Returns
    /// [output::CallingNow::nobody] when no ticket is being called
    ///
    async fn find_calling_now(&self) -> Result<output::CallingNow, Error>;

    ///
    /// Finds waiting and calling tickets ordered by slot and display_id
    ///
    async fn find_active_tickets(&self) -> Result<Vec<output::AdminTicket>, Error>;

    ///
    /// Marks ticket as calling whatever its current status is
    ///
    /// ### Errors
    /// - [Error::TicketCall] when the store fails
    ///
    async fn call_ticket(&self, id: &str) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// Marks ticket as entered whatever its current status is
    ///
    /// ### Errors
    /// - [Error::TicketEnter] when the store fails
    ///
    async fn enter_ticket(&self, id: &str) -> Result<Vec<output::Ticket>, Error>;
}
