use serde::Deserialize;

#[derive(Deserialize)]
pub struct ScheduledTimeFindEntity {
    pub scheduled_time: String,
}
