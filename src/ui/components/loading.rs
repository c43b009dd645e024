//! Loading indicator component.
//!
//! Animated spinner shown while catalog requests are in flight.

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A loading indicator with an animated spinner.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message to display.
    message: String,
    /// Current spinner frame index.
    spinner_state: usize,
    /// Whether the loading indicator is active.
    active: bool,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator {
    /// Create a new loading indicator.
    pub fn new() -> Self {
        Self::with_message("Loading...")
    }

    /// Create a loading indicator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spinner_state: 0,
            active: false,
        }
    }

    /// Get the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Start the loading indicator.
    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.spinner_state = 0;
        }
    }

    /// Start with a specific message.
    pub fn start_with_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.start();
    }

    /// Stop the loading indicator.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Start or stop to follow `active`.
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Check if the loading indicator is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the spinner animation.
    ///
    /// This should be called on each tick event.
    pub fn tick(&mut self) {
        if self.active {
            self.spinner_state = (self.spinner_state + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_state]
    }

    /// Get the formatted loading text (for embedding in other widgets).
    pub fn text(&self) -> String {
        if self.active {
            format!("{} {}", self.spinner_frame(), self.message)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_indicator_new() {
        let loader = LoadingIndicator::new();
        assert_eq!(loader.message(), "Loading...");
        assert!(!loader.is_active());
    }

    #[test]
    fn test_loading_indicator_start_stop() {
        let mut loader = LoadingIndicator::new();
        loader.start();
        assert!(loader.is_active());
        loader.stop();
        assert!(!loader.is_active());
    }

    #[test]
    fn test_start_with_message() {
        let mut loader = LoadingIndicator::new();
        loader.start_with_message("Selecting 15 artworks...");
        assert!(loader.is_active());
        assert_eq!(loader.message(), "Selecting 15 artworks...");
    }

    #[test]
    fn test_tick_wraps() {
        let mut loader = LoadingIndicator::new();
        loader.start();
        for _ in 0..SPINNER_FRAMES.len() {
            loader.tick();
        }
        assert_eq!(loader.spinner_frame(), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_tick_inactive_does_not_advance() {
        let mut loader = LoadingIndicator::new();
        loader.tick();
        assert_eq!(loader.spinner_frame(), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_set_active_keeps_frame_while_running() {
        let mut loader = LoadingIndicator::new();
        loader.set_active(true);
        loader.tick();
        loader.set_active(true);
        assert_eq!(loader.spinner_frame(), SPINNER_FRAMES[1]);
        loader.set_active(false);
        assert!(!loader.is_active());
    }

    #[test]
    fn test_text() {
        let mut loader = LoadingIndicator::with_message("Loading artworks...");
        assert_eq!(loader.text(), "");
        loader.start();
        assert_eq!(loader.text(), "⠋ Loading artworks...");
    }
}
