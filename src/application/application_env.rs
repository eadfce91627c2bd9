use anyhow::anyhow;
use std::net::SocketAddr;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub supabase_url: String,
    pub supabase_key: String,

    pub max_tickets_per_slot: u64,
    /// Slot label exempt from the capacity check
    pub immediate_entry_slot: String,

    pub max_http_content_len: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("HAUNTED_HOUSE_API_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("HAUNTED_HOUSE_API_LOG_FILENAME")?;
        let bind_address = Self::env_var("HAUNTED_HOUSE_API_BIND_ADDRESS")?.parse()?;
        let supabase_url = Self::env_var("HAUNTED_HOUSE_API_SUPABASE_URL")?;
        let supabase_key = Self::env_var("HAUNTED_HOUSE_API_SUPABASE_KEY")?;
        let max_tickets_per_slot =
            Self::env_var("HAUNTED_HOUSE_API_MAX_TICKETS_PER_SLOT")?.parse()?;
        let immediate_entry_slot = Self::env_var("HAUNTED_HOUSE_API_IMMEDIATE_ENTRY_SLOT")?;
        let max_http_content_len =
            Self::env_var("HAUNTED_HOUSE_API_MAX_HTTP_CONTENT_LEN")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            supabase_url,
            supabase_key,
            max_tickets_per_slot,
            immediate_entry_slot,
            max_http_content_len,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
