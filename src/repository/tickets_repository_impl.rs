use super::{
    entity::{ScheduledTimeFindEntity, TicketStatusUpdateEntity},
    Ticket, TicketInsertEntity, TicketStatus, TicketsRepository,
};
use crate::repository::Error;
use axum::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_RANGE},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;

const TICKETS: &str = "tickets";

const PREFER: &str = "prefer";
const PREFER_COUNT_EXACT: &str = "count=exact";
const PREFER_RETURN_REPRESENTATION: &str = "return=representation";

///
/// Tickets stored in a table exposed through a PostgREST API
/// (the REST interface of a hosted Supabase project)
///
pub struct TicketsRepositoryImpl {
    client: Client,
    tickets_url: String,
}

impl TicketsRepositoryImpl {
    pub fn new(url: &str, key: &str) -> Result<Self, Error> {
        let mut api_key = HeaderValue::from_str(key)?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder().default_headers(headers).build()?;
        let tickets_url = format!("{}/rest/v1/{TICKETS}", url.trim_end_matches('/'));
        tracing::debug!(%tickets_url, "created tickets repository");

        Ok(Self {
            client,
            tickets_url,
        })
    }

    async fn send(request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatus { status, body });
        }

        Ok(response)
    }

    async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Error> {
        let response = Self::send(request).await?;
        let rows = response.json::<T>().await?;

        Ok(rows)
    }

    async fn count(&self, filters: &[(&str, String)]) -> Result<u64, Error> {
        let request = self
            .client
            .head(&self.tickets_url)
            .header(PREFER, PREFER_COUNT_EXACT)
            .query(&[("select", "id")])
            .query(filters);

        let response = Self::send(request).await?;
        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .ok_or_else(|| Error::InvalidContentRange("header missing".to_string()))?
            .to_str()
            .map_err(|err| Error::InvalidContentRange(err.to_string()))?;

        parse_content_range_total(content_range)
    }
}

///
/// Extracts total from `Content-Range` header value e.g. `0-4/17` or `*/0`
///
fn parse_content_range_total(content_range: &str) -> Result<u64, Error> {
    content_range
        .rsplit_once('/')
        .and_then(|(_, total)| total.parse().ok())
        .ok_or_else(|| Error::InvalidContentRange(content_range.to_string()))
}

fn eq(value: impl AsRef<str>) -> String {
    format!("eq.{}", value.as_ref())
}

fn in_statuses(statuses: &[TicketStatus]) -> String {
    let statuses = statuses
        .iter()
        .map(TicketStatus::as_ref)
        .collect::<Vec<_>>()
        .join(",");

    format!("in.({statuses})")
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: TicketInsertEntity) -> Result<Vec<Ticket>, Error> {
        let request = self
            .client
            .post(&self.tickets_url)
            .header(PREFER, PREFER_RETURN_REPRESENTATION)
            .json(&ticket);

        Self::fetch(request).await
    }

    async fn count_by_status(&self, status: TicketStatus) -> Result<u64, Error> {
        self.count(&[("status", eq(status))]).await
    }

    async fn count_by_status_in_slot(
        &self,
        status: TicketStatus,
        scheduled_time: &str,
    ) -> Result<u64, Error> {
        self.count(&[
            ("scheduled_time", eq(scheduled_time)),
            ("status", eq(status)),
        ])
        .await
    }

    async fn find_many_scheduled_times(&self, status: TicketStatus) -> Result<Vec<String>, Error> {
        let request = self
            .client
            .get(&self.tickets_url)
            .query(&[
                ("select", "scheduled_time".to_string()),
                ("status", eq(status)),
            ]);

        let entities = Self::fetch::<Vec<ScheduledTimeFindEntity>>(request).await?;
        let scheduled_times = entities
            .into_iter()
            .map(|entity| entity.scheduled_time)
            .collect();

        Ok(scheduled_times)
    }

    async fn find_many_by_statuses(&self, statuses: &[TicketStatus]) -> Result<Vec<Ticket>, Error> {
        let request = self.client.get(&self.tickets_url).query(&[
            ("select", "*".to_string()),
            ("status", in_statuses(statuses)),
            ("order", "scheduled_time.asc,display_id.asc".to_string()),
        ]);

        Self::fetch(request).await
    }

    async fn find_latest_by_status(&self, status: TicketStatus) -> Result<Option<Ticket>, Error> {
        let request = self.client.get(&self.tickets_url).query(&[
            ("select", "*".to_string()),
            ("status", eq(status)),
            ("order", "display_id.desc".to_string()),
            ("limit", "1".to_string()),
        ]);

        let tickets = Self::fetch::<Vec<Ticket>>(request).await?;

        Ok(tickets.into_iter().next())
    }

    async fn update_status(&self, id: &str, status: TicketStatus) -> Result<Vec<Ticket>, Error> {
        let request = self
            .client
            .patch(&self.tickets_url)
            .header(PREFER, PREFER_RETURN_REPRESENTATION)
            .query(&[("id", eq(id))])
            .json(&TicketStatusUpdateEntity { status });

        Self::fetch(request).await
    }
}
