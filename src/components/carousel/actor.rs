use super::models::Event;
use super::widget::{EventCarousel, Input, Surface};
use crate::error::{component_error, CarouselResult};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Observable carousel state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub len: usize,
    pub current: usize,
}

/// Commands that can be sent to the carousel actor
pub enum CarouselCommand {
    Load(CarouselResult<Vec<Event>>),
    Input(Input),
    Snapshot(mpsc::Sender<CarouselSnapshot>),
    Shutdown,
}

/// The carousel actor that owns the widget and applies commands in order
pub struct CarouselActor<S: Surface> {
    carousel: EventCarousel<S>,
    command_rx: mpsc::Receiver<CarouselCommand>,
}

/// Handle for communicating with the carousel actor
#[derive(Clone)]
pub struct CarouselActorHandle {
    command_tx: mpsc::Sender<CarouselCommand>,
}

impl CarouselActorHandle {
    async fn send(&self, command: CarouselCommand) -> CarouselResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| component_error(&format!("Actor mailbox error: {}", e)))
    }

    /// Deliver the fetch outcome
    pub async fn load(&self, result: CarouselResult<Vec<Event>>) -> CarouselResult<()> {
        self.send(CarouselCommand::Load(result)).await
    }

    /// Deliver one host input
    pub async fn input(&self, input: Input) -> CarouselResult<()> {
        self.send(CarouselCommand::Input(input)).await
    }

    /// Read the current state once all earlier commands are applied
    pub async fn snapshot(&self) -> CarouselResult<CarouselSnapshot> {
        let (response_tx, mut response_rx) = mpsc::channel(1);
        self.send(CarouselCommand::Snapshot(response_tx)).await?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| component_error("Response channel closed"))
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> CarouselResult<()> {
        let _ = self.command_tx.send(CarouselCommand::Shutdown).await;
        Ok(())
    }
}

impl<S: Surface> CarouselActor<S> {
    /// Create a new actor and return its handle
    pub fn new(surface: S) -> (Self, CarouselActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);

        let actor = Self {
            carousel: EventCarousel::new(surface),
            command_rx,
        };

        (actor, CarouselActorHandle { command_tx })
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Carousel actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CarouselCommand::Load(Ok(events)) => {
                    info!("Showing {} events", events.len());
                    self.carousel.load(events);
                }
                CarouselCommand::Load(Err(e)) => {
                    error!("Could not load events: {:?}", e);
                    self.carousel.show_load_failure();
                }
                CarouselCommand::Input(input) => self.carousel.handle_input(input),
                CarouselCommand::Snapshot(response_tx) => {
                    let snapshot = CarouselSnapshot {
                        len: self.carousel.len(),
                        current: self.carousel.current(),
                    };
                    let _ = response_tx.send(snapshot).await;
                }
                CarouselCommand::Shutdown => {
                    info!("Carousel actor shutting down");
                    break;
                }
            }
        }

        info!("Carousel actor shut down");
    }
}
