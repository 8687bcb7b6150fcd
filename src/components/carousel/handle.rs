use super::actor::{CarouselActor, CarouselActorHandle, CarouselSnapshot};
use super::models::Event;
use super::widget::{Control, Input, Surface};
use crate::components::event_source::EventSource;
use crate::error::CarouselResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the carousel actor
#[derive(Clone)]
pub struct CarouselHandle {
    actor_handle: CarouselActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CarouselHandle {
    /// Create a new CarouselHandle and spawn the actor
    pub fn new<S: Surface + Send + 'static>(surface: S) -> Self {
        // Create the actor and get its handle
        let (mut actor, handle) = CarouselActor::new(surface);

        // Spawn a task to run the actor
        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Fetch once from `source` and hand the outcome to the carousel
    pub async fn fetch_from(&self, source: &dyn EventSource) -> CarouselResult<()> {
        let result = source.fetch_events().await;
        self.load(result).await
    }

    /// Hand a fetch outcome to the carousel
    pub async fn load(&self, result: CarouselResult<Vec<Event>>) -> CarouselResult<()> {
        self.actor_handle.load(result).await
    }

    pub async fn previous(&self) -> CarouselResult<()> {
        self.actor_handle.input(Input::Activate(Control::Previous)).await
    }

    pub async fn next(&self) -> CarouselResult<()> {
        self.actor_handle.input(Input::Activate(Control::Next)).await
    }

    pub async fn touch_start(&self, x: f64) -> CarouselResult<()> {
        self.actor_handle.input(Input::TouchStart { x }).await
    }

    pub async fn touch_end(&self, x: f64) -> CarouselResult<()> {
        self.actor_handle.input(Input::TouchEnd { x }).await
    }

    /// Deliver any host input
    pub async fn input(&self, input: Input) -> CarouselResult<()> {
        self.actor_handle.input(input).await
    }

    /// Current list length and index
    pub async fn snapshot(&self) -> CarouselResult<CarouselSnapshot> {
        self.actor_handle.snapshot().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> CarouselResult<()> {
        self.actor_handle.shutdown().await
    }
}
