mod ticket;
mod ticket_status;

pub use ticket::*;
pub use ticket_status::*;
