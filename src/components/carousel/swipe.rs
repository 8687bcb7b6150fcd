use super::widget::Control;

/// Horizontal displacement a swipe must exceed to count
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Tracks one touch-start/touch-end pair on the content surface
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the touch began
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
    }

    /// Classify the gesture ending at `x`.
    ///
    /// Swiping right maps to the previous control, swiping left to next.
    /// Displacements of at most [`SWIPE_THRESHOLD`] are ignored.
    pub fn touch_end(&self, x: f64) -> Option<Control> {
        if x - self.start_x > SWIPE_THRESHOLD {
            Some(Control::Previous)
        } else if self.start_x - x > SWIPE_THRESHOLD {
            Some(Control::Next)
        } else {
            None
        }
    }
}
