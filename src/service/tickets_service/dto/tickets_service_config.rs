pub struct TicketsServiceConfig {
    /// Waiting tickets allowed in one slot
    pub max_tickets_per_slot: u64,

    /// Slot label meaning "enter now", never capacity checked
    pub immediate_entry_slot: String,
}
