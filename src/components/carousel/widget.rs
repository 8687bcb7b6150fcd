use super::models::Event;
use super::render::{event_markup, message_markup, LOAD_FAILURE_MESSAGE, NO_EVENTS_MESSAGE};
use super::swipe::SwipeTracker;
use tracing::{debug, error, warn};

/// Host content container the carousel renders into
pub trait Surface {
    /// Replace everything shown in the container with `markup`
    fn replace_content(&mut self, markup: &str);
}

/// The two paging controls the host provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

impl Control {
    /// Index step taken when the control is activated
    pub fn step(self) -> isize {
        match self {
            Control::Previous => -1,
            Control::Next => 1,
        }
    }
}

/// Input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Activate(Control),
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
}

/// Pages through a list of events one at a time.
///
/// Owns the event list and the current index; `current < events.len()`
/// whenever the list is non-empty.
pub struct EventCarousel<S: Surface> {
    surface: S,
    events: Vec<Event>,
    current: usize,
    swipe: SwipeTracker,
}

impl<S: Surface> EventCarousel<S> {
    /// Create an empty carousel bound to its content surface
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            events: Vec::new(),
            current: 0,
            swipe: SwipeTracker::new(),
        }
    }

    /// Replace the event list and show the first event
    pub fn load(&mut self, events: Vec<Event>) {
        debug!("Loaded {} events", events.len());
        self.events = events;
        self.current = 0;
        self.render(self.current);
    }

    /// Show the fetch failure message. The event list stays empty.
    pub fn show_load_failure(&mut self) {
        self.events.clear();
        self.current = 0;
        self.show_message(LOAD_FAILURE_MESSAGE);
    }

    /// Render the event at `index`, or the empty message
    pub fn render(&mut self, index: usize) {
        if self.events.is_empty() {
            self.show_message(NO_EVENTS_MESSAGE);
            return;
        }

        let rendered = match self.events.get(index) {
            Some(event) => event_markup(event),
            None => {
                warn!("Render index {} out of range for {} events", index, self.events.len());
                return;
            }
        };

        match rendered {
            Ok(markup) => self.surface.replace_content(&markup),
            Err(e) => error!("Failed to render event {}: {:?}", index, e),
        }
    }

    /// Move `step` positions, wrapping at both ends, and render.
    /// Does nothing while the list is empty.
    pub fn advance(&mut self, step: isize) {
        if self.events.is_empty() {
            return;
        }

        let len = self.events.len() as isize;
        self.current = (self.current as isize + step).rem_euclid(len) as usize;
        self.render(self.current);
    }

    /// Act on a control activation
    pub fn activate(&mut self, control: Control) {
        self.advance(control.step());
    }

    /// Dispatch one host input
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input::Activate(control) => self.activate(control),
            Input::TouchStart { x } => self.swipe.touch_start(x),
            Input::TouchEnd { x } => {
                if let Some(control) = self.swipe.touch_end(x) {
                    debug!("Swipe mapped to {:?}", control);
                    self.activate(control);
                }
            }
        }
    }

    fn show_message(&mut self, message: &str) {
        match message_markup(message) {
            Ok(markup) => self.surface.replace_content(&markup),
            Err(e) => error!("Failed to render message: {:?}", e),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
