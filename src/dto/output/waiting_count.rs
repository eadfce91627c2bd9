use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct WaitingCount {
    pub waiting_count: u64,
}
