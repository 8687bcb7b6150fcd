use crate::components::carousel::Event;
use crate::config::Config;
use crate::error::{fetch_error, CarouselResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

/// Supplies the event list the carousel pages through
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the full event list once
    async fn fetch_events(&self) -> CarouselResult<Vec<Event>>;
}

/// Fetches events with a plain GET against a JSON endpoint
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: Client,
    endpoint: Url,
}

impl HttpEventSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Use a preconfigured client
    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Build a source for the configured endpoint
    pub fn from_config(config: &Config) -> CarouselResult<Self> {
        Ok(Self::new(config.endpoint_url()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> CarouselResult<Vec<Event>> {
        info!("Fetching events from {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| fetch_error(&format!("Failed to fetch events: {}", e)))?;

        // The status is not checked; only the body decides success
        let status = response.status();
        if !status.is_success() {
            warn!("Events endpoint answered HTTP {}, decoding body anyway", status);
        }

        let events: Vec<Event> = response
            .json()
            .await
            .map_err(|e| fetch_error(&format!("Failed to parse events response: {}", e)))?;

        debug!("Fetched {} events", events.len());

        Ok(events)
    }
}
