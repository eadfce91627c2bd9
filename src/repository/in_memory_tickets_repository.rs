use super::{Error, Ticket, TicketInsertEntity, TicketStatus, TicketsRepository};
use axum::async_trait;
use serde_json::Map;
use tokio::sync::RwLock;
use uuid::Uuid;

///
/// Process-local stand-in for the hosted `tickets` table.
///
/// Generates `id` and `display_id` on insert the way the database does,
/// so it can replace [super::TicketsRepositoryImpl] in tests and local runs.
///
#[derive(Default)]
pub struct InMemoryTicketsRepository {
    tickets: RwLock<Vec<Ticket>>,
}

impl InMemoryTicketsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketsRepository for InMemoryTicketsRepository {
    async fn insert(&self, ticket: TicketInsertEntity) -> Result<Vec<Ticket>, Error> {
        let mut tickets = self.tickets.write().await;

        let display_id = tickets
            .iter()
            .map(|ticket| ticket.display_id)
            .max()
            .unwrap_or(0)
            + 1;
        let ticket = Ticket {
            id: Uuid::new_v4().to_string(),
            display_id,
            guest_name: ticket.guest_name,
            adult_count: ticket.adult_count,
            child_count: ticket.child_count,
            scheduled_time: ticket.scheduled_time,
            status: ticket.status,
            secret_word: ticket.secret_word,
            extra: Map::new(),
        };
        tickets.push(ticket.clone());

        Ok(vec![ticket])
    }

    async fn count_by_status(&self, status: TicketStatus) -> Result<u64, Error> {
        let tickets = self.tickets.read().await;
        let count = tickets
            .iter()
            .filter(|ticket| ticket.status == status)
            .count();

        Ok(count as u64)
    }

    async fn count_by_status_in_slot(
        &self,
        status: TicketStatus,
        scheduled_time: &str,
    ) -> Result<u64, Error> {
        let tickets = self.tickets.read().await;
        let count = tickets
            .iter()
            .filter(|ticket| ticket.status == status && ticket.scheduled_time == scheduled_time)
            .count();

        Ok(count as u64)
    }

    async fn find_many_scheduled_times(&self, status: TicketStatus) -> Result<Vec<String>, Error> {
        let tickets = self.tickets.read().await;
        let scheduled_times = tickets
            .iter()
            .filter(|ticket| ticket.status == status)
            .map(|ticket| ticket.scheduled_time.clone())
            .collect();

        Ok(scheduled_times)
    }

    async fn find_many_by_statuses(&self, statuses: &[TicketStatus]) -> Result<Vec<Ticket>, Error> {
        let tickets = self.tickets.read().await;
        let mut found = tickets
            .iter()
            .filter(|ticket| statuses.contains(&ticket.status))
            .cloned()
            .collect::<Vec<_>>();
        found.sort_by(|a, b| {
            a.scheduled_time
                .cmp(&b.scheduled_time)
                .then(a.display_id.cmp(&b.display_id))
        });

        Ok(found)
    }

    async fn find_latest_by_status(&self, status: TicketStatus) -> Result<Option<Ticket>, Error> {
        let tickets = self.tickets.read().await;
        let ticket = tickets
            .iter()
            .filter(|ticket| ticket.status == status)
            .max_by_key(|ticket| ticket.display_id)
            .cloned();

        Ok(ticket)
    }

    async fn update_status(&self, id: &str, status: TicketStatus) -> Result<Vec<Ticket>, Error> {
        let mut tickets = self.tickets.write().await;
        let updated = tickets
            .iter_mut()
            .filter(|ticket| ticket.id == id)
            .map(|ticket| {
                ticket.status = status;
                ticket.clone()
            })
            .collect();

        Ok(updated)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn insert_entity(scheduled_time: &str) -> TicketInsertEntity {
        TicketInsertEntity {
            guest_name: Some("Morticia".to_string()),
            adult_count: 2,
            child_count: 0,
            scheduled_time: scheduled_time.to_string(),
            status: TicketStatus::Waiting,
            secret_word: "cobweb".to_string(),
        }
    }

    async fn insert(repository: &InMemoryTicketsRepository, scheduled_time: &str) -> Ticket {
        repository
            .insert(insert_entity(scheduled_time))
            .await
            .unwrap()
            .remove(0)
    }

    #[tokio::test]
    async fn insert_generates_increasing_display_ids() {
        let repository = InMemoryTicketsRepository::new();

        let first = insert(&repository, "13:00").await;
        let second = insert(&repository, "13:00").await;

        assert_ne!(first.id, second.id);
        assert!(first.display_id < second.display_id);
    }

    #[tokio::test]
    async fn count_by_status_in_slot_ignores_other_slots_and_statuses() {
        let repository = InMemoryTicketsRepository::new();
        insert(&repository, "13:00").await;
        insert(&repository, "13:30").await;
        let called = insert(&repository, "13:00").await;
        repository
            .update_status(&called.id, TicketStatus::Calling)
            .await
            .unwrap();

        let count = repository
            .count_by_status_in_slot(TicketStatus::Waiting, "13:00")
            .await
            .unwrap();

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn find_many_by_statuses_ordered_by_slot_then_display_id() {
        let repository = InMemoryTicketsRepository::new();
        let late = insert(&repository, "18:00").await;
        let early_1 = insert(&repository, "17:00").await;
        let early_2 = insert(&repository, "17:00").await;
        let entered = insert(&repository, "16:00").await;
        repository
            .update_status(&entered.id, TicketStatus::Entered)
            .await
            .unwrap();

        let tickets = repository
            .find_many_by_statuses(&[TicketStatus::Waiting, TicketStatus::Calling])
            .await
            .unwrap();

        let ids = tickets.into_iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, [early_1.id, early_2.id, late.id]);
    }

    #[tokio::test]
    async fn find_latest_by_status_greatest_display_id() {
        let repository = InMemoryTicketsRepository::new();
        let first = insert(&repository, "13:00").await;
        let second = insert(&repository, "13:00").await;
        repository
            .update_status(&second.id, TicketStatus::Calling)
            .await
            .unwrap();
        repository
            .update_status(&first.id, TicketStatus::Calling)
            .await
            .unwrap();

        let latest = repository
            .find_latest_by_status(TicketStatus::Calling)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(latest.id, second.id);
    }

    #[tokio::test]
    async fn update_status_not_exist_empty() {
        let repository = InMemoryTicketsRepository::new();
        insert(&repository, "13:00").await;

        let updated = repository
            .update_status("not-an-id", TicketStatus::Entered)
            .await
            .unwrap();

        assert!(updated.is_empty());
    }
}
