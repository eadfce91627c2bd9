use super::ApplicationEnv;
use crate::{
    repository::TicketsRepositoryImpl,
    service::tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
};
use axum::extract::FromRef;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(&env.supabase_url, &env.supabase_key)?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let config = TicketsServiceConfig {
        max_tickets_per_slot: env.max_tickets_per_slot,
        immediate_entry_slot: env.immediate_entry_slot.clone(),
    };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    Ok(ApplicationState { tickets_service })
}
