use crate::components::carousel::Carousel;
use crate::components::{CarouselHandle, ComponentManager};
use crate::config::Config;
use crate::error::{component_error, other_error, CarouselResult, Error};
use crate::shutdown::{self, StopReason};
use crate::utils::terminal::{parse_input_line, HostCommand, TerminalSurface};
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub async fn load_config() -> miette::Result<Arc<RwLock<Config>>> {
    match Config::load() {
        Ok(config) => {
            info!("Events endpoint: {}", config.events_endpoint);
            Ok(Arc::new(RwLock::new(config)))
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Start the carousel on the terminal and run until quit or a signal
pub async fn start_carousel(config: Arc<RwLock<Config>>) -> miette::Result<()> {
    let mut component_manager = ComponentManager::new(Arc::clone(&config));
    component_manager.register(Carousel::new(TerminalSurface::new()));
    let component_manager = Arc::new(component_manager);

    component_manager.init_all().await?;

    let carousel = component_manager
        .get_component::<Carousel<TerminalSurface>>("carousel")
        .ok_or_else(|| component_error("Carousel component not registered"))?;
    let handle = carousel
        .get_handle()
        .await
        .ok_or_else(|| component_error("Carousel component did not start"))?;

    // Create shutdown channel
    let (stop_send, stop_recv) = oneshot::channel();

    let signal_components = Arc::clone(&component_manager);
    tokio::spawn(async move {
        shutdown::handle_signals(stop_send, signal_components).await;
    });

    info!("Commands: prev, next, touchstart <x>, touchend <x>, swipe <x1> <x2>, quit");

    let lines = spawn_stdin_reader();

    tokio::select! {
        result = run_input_loop(lines, &handle) => {
            shutdown::stop_components(&component_manager, StopReason::InputClosed).await;
            result?;
            Ok(())
        }
        Ok(reason) = stop_recv => {
            info!("Carousel stopped by {}", reason);
            Ok(())
        }
    }
}

/// Read stdin lines on a plain thread so a pending read never holds up
/// runtime shutdown
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (line_tx, line_rx) = mpsc::channel(32);

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
    });

    line_rx
}

/// Forward parsed input lines to the carousel until quit or end of input
pub async fn run_input_loop(
    mut lines: mpsc::Receiver<String>,
    handle: &CarouselHandle,
) -> CarouselResult<()> {
    while let Some(line) = lines.recv().await {
        match parse_input_line(&line) {
            Ok(Some(HostCommand::Send(inputs))) => {
                for input in inputs {
                    handle.input(input).await?;
                }
            }
            Ok(Some(HostCommand::Quit)) => break,
            Ok(None) => {}
            Err(Error::Input(message)) => warn!("{}", message),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
