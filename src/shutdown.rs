use crate::components::ComponentManager;
use std::fmt;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info};

/// Why the carousel host is stopping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Termination signal from the OS
    Signal(&'static str),
    /// `quit` typed or stdin closed
    InputClosed,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Signal(name) => write!(f, "{}", name),
            StopReason::InputClosed => write!(f, "end of input"),
        }
    }
}

/// Stop the carousel actor and every other component.
///
/// Component errors are logged, never returned; a stopped host has nothing
/// left to report to.
pub async fn stop_components(component_manager: &ComponentManager, reason: StopReason) {
    info!("Stopping carousel: {}", reason);

    if let Err(e) = component_manager.shutdown_all().await {
        error!("Error shutting down components: {:?}", e);
    }
}

/// Wait for a termination signal, stop the components, then notify the host
pub async fn handle_signals(
    stop_send: oneshot::Sender<StopReason>,
    component_manager: Arc<ComponentManager>,
) {
    let reason = match wait_for_signal().await {
        Ok(name) => StopReason::Signal(name),
        Err(e) => {
            // Without signals the host still stops on quit or end of input
            error!("Signal handling unavailable: {}", e);
            return;
        }
    };

    stop_components(&component_manager, reason).await;
    let _ = stop_send.send(reason);
}

#[cfg(unix)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let name = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    Ok(name)
}

#[cfg(windows)]
async fn wait_for_signal() -> std::io::Result<&'static str> {
    use tokio::signal::windows::{ctrl_break, ctrl_c};

    let mut ctrlc = ctrl_c()?;
    let mut ctrlbreak = ctrl_break()?;

    let name = tokio::select! {
        _ = ctrlc.recv() => "Ctrl+C",
        _ = ctrlbreak.recv() => "Ctrl+Break",
    };

    Ok(name)
}
