mod actor;
mod handle;
pub mod models;
pub mod render;
pub mod swipe;
pub mod widget;

pub use actor::CarouselSnapshot;
pub use handle::CarouselHandle;
pub use models::{Description, DisplayFields, Event};
pub use widget::{Control, EventCarousel, Input, Surface};

use crate::components::event_source::{EventSource, HttpEventSource};
use crate::config::Config;
use crate::error::{component_error, CarouselResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

/// Carousel component: owns the widget actor and runs the startup fetch
pub struct Carousel<S: Surface + Send + 'static> {
    surface: Mutex<Option<S>>,
    source: Option<Arc<dyn EventSource>>,
    handle: RwLock<Option<CarouselHandle>>,
}

impl<S: Surface + Send + 'static> Carousel<S> {
    /// Create a new carousel component rendering into `surface`
    pub fn new(surface: S) -> Self {
        Self {
            surface: Mutex::new(Some(surface)),
            source: None,
            handle: RwLock::new(None),
        }
    }

    /// Fetch from `source` instead of the configured HTTP endpoint
    pub fn with_source(mut self, source: Arc<dyn EventSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Get the handle if it exists
    pub async fn get_handle(&self) -> Option<CarouselHandle> {
        let handle_lock = self.handle.read().await;
        handle_lock.clone()
    }
}

#[async_trait]
impl<S: Surface + Send + 'static> super::Component for Carousel<S> {
    fn name(&self) -> &'static str {
        "carousel"
    }

    async fn init(&self, config: Arc<RwLock<Config>>) -> CarouselResult<()> {
        let mut handle_lock = self.handle.write().await;
        if handle_lock.is_some() {
            return Ok(());
        }

        let source: Arc<dyn EventSource> = match &self.source {
            Some(source) => Arc::clone(source),
            None => {
                let config_read = config.read().await;
                let source = HttpEventSource::from_config(&config_read)?;
                info!("Carousel will fetch events from {}", source.endpoint());
                Arc::new(source)
            }
        };

        let surface = self
            .surface
            .lock()
            .await
            .take()
            .ok_or_else(|| component_error("Carousel surface already taken"))?;

        let handle = CarouselHandle::new(surface);
        *handle_lock = Some(handle.clone());

        // One fetch per lifetime; the widget stays inert until it resolves
        tokio::spawn(async move {
            if let Err(e) = handle.fetch_from(source.as_ref()).await {
                error!("Failed to deliver fetched events: {:?}", e);
            } else {
                info!("Startup fetch delivered");
            }
        });

        Ok(())
    }

    async fn shutdown(&self) -> CarouselResult<()> {
        let handle_lock = self.handle.read().await;
        if let Some(handle) = &*handle_lock {
            handle.shutdown().await?;
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
