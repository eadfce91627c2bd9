use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{TicketInsertEntity, TicketStatus, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(config: TicketsServiceConfig, repository: Arc<dyn TicketsRepository>) -> Self {
        Self { config, repository }
    }

    async fn validate_slot_not_full(&self, scheduled_time: &str) -> Result<(), Error> {
        if scheduled_time == self.config.immediate_entry_slot {
            return Ok(());
        }

        let waiting = self
            .repository
            .count_by_status_in_slot(TicketStatus::Waiting, scheduled_time)
            .await
            .map_err(Error::TicketCreation)?;
        tracing::debug!(waiting, scheduled_time, "counted waiting tickets in slot");

        if waiting >= self.config.max_tickets_per_slot {
            return Err(Error::SlotCapacityReached {
                slot: scheduled_time.to_string(),
                max_tickets: self.config.max_tickets_per_slot,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!(scheduled_time = %ticket.scheduled_time, "creating ticket");
        tracing::trace!(?ticket);

        self.validate_slot_not_full(&ticket.scheduled_time).await?;

        let tickets = self
            .repository
            .insert(TicketInsertEntity::from(ticket))
            .await
            .map_err(Error::TicketCreation)?;

        let display_ids = tickets.iter().map(|t| t.display_id).collect::<Vec<_>>();
        tracing::info!(?display_ids, "created ticket");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn find_slots_usage(&self) -> Result<output::SlotsUsage, Error> {
        tracing::info!("finding slots usage");

        let scheduled_times = self
            .repository
            .find_many_scheduled_times(TicketStatus::Waiting)
            .await?;
        tracing::info!(count = scheduled_times.len(), "found waiting tickets");

        Ok(scheduled_times.into_iter().collect())
    }

    async fn find_waiting_count(&self) -> Result<output::WaitingCount, Error> {
        tracing::info!("counting waiting tickets");

        let waiting_count = self
            .repository
            .count_by_status(TicketStatus::Waiting)
            .await?;
        tracing::info!(waiting_count, "counted waiting tickets");

        Ok(output::WaitingCount { waiting_count })
    }

    async fn find_calling_now(&self) -> Result<output::CallingNow, Error> {
        tracing::info!("finding calling ticket");

        let calling_now = self
            .repository
            .find_latest_by_status(TicketStatus::Calling)
            .await?
            .map(output::CallingNow::from)
            .unwrap_or_else(output::CallingNow::nobody);
        tracing::info!(calling_id = calling_now.calling_id, "found calling ticket");

        Ok(calling_now)
    }

    async fn find_active_tickets(&self) -> Result<Vec<output::AdminTicket>, Error> {
        tracing::info!("finding active tickets");

        let tickets = self
            .repository
            .find_many_by_statuses(&[TicketStatus::Waiting, TicketStatus::Calling])
            .await?;
        tracing::info!(count = tickets.len(), "found active tickets");

        Ok(tickets.into_iter().map(output::AdminTicket::from).collect())
    }

    async fn call_ticket(&self, id: &str) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!(id, "calling ticket");

        let tickets = self
            .repository
            .update_status(id, TicketStatus::Calling)
            .await
            .map_err(Error::TicketCall)?;
        tracing::info!(id, updated = tickets.len(), "called ticket");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }

    async fn enter_ticket(&self, id: &str) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!(id, "entering ticket");

        let tickets = self
            .repository
            .update_status(id, TicketStatus::Entered)
            .await
            .map_err(Error::TicketEnter)?;
        tracing::info!(id, updated = tickets.len(), "entered ticket");

        Ok(tickets.into_iter().map(output::Ticket::from).collect())
    }
}
