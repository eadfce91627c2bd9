mod admin_ticket;
mod calling_now;
mod error_detail;
mod message;
mod slots_usage;
mod ticket;
mod tickets_message;
mod waiting_count;

pub use admin_ticket::*;
pub use calling_now::*;
pub use error_detail::*;
pub use message::*;
pub use slots_usage::*;
pub use ticket::*;
pub use tickets_message::*;
pub use waiting_count::*;

/// Shown instead of a missing guest name
pub const ANONYMOUS_GUEST_NAME: &str = "(anonymous)";

/// Empty names are treated as missing
fn guest_name_or_anonymous(guest_name: Option<String>) -> String {
    guest_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ANONYMOUS_GUEST_NAME.to_string())
}
