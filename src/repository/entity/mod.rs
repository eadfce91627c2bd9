mod scheduled_time_find_entity;
mod ticket_insert_entity;
mod ticket_status_update_entity;

pub use scheduled_time_find_entity::*;
pub use ticket_insert_entity::*;
pub use ticket_status_update_entity::*;
