//! Polite, atomic live region for screen reader announcements.

use super::Announcer;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct RegionState {
    text: String,
    generation: u64,
}

/// In-memory live region.
///
/// `announce` replaces the text and schedules it to be cleared after the
/// configured delay. A newer announcement resets the schedule: an older
/// timer never clears a newer message.
///
/// Clearing needs a tokio runtime. Outside one, the text stays until the
/// next announcement.
#[derive(Debug, Clone)]
pub struct LiveRegion {
    state: Arc<Mutex<RegionState>>,
    clear_after: Duration,
}

impl LiveRegion {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(RegionState::default())),
            clear_after,
        }
    }

    /// The `aria-live` value.
    pub fn politeness(&self) -> &'static str {
        "polite"
    }

    /// The `aria-atomic` value.
    pub fn is_atomic(&self) -> bool {
        true
    }

    /// Current text of the region.
    pub fn text(&self) -> String {
        self.state
            .lock()
            .map(|state| state.text.clone())
            .unwrap_or_default()
    }
}

impl Announcer for LiveRegion {
    fn announce(&self, message: &str) {
        let generation = match self.state.lock() {
            Ok(mut state) => {
                state.text = message.to_string();
                state.generation += 1;
                state.generation
            }
            Err(_) => return,
        };

        tracing::debug!(message = %message, "Live region announcement");

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No runtime available, live region will not auto-clear");
            return;
        };

        let state = Arc::clone(&self.state);
        let delay = self.clear_after;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Ok(mut state) = state.lock() {
                if state.generation == generation {
                    state.text.clear();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_announcement_clears_after_delay() {
        let region = LiveRegion::new(Duration::from_secs(1));
        region.announce("Message sent successfully");
        assert_eq!(region.text(), "Message sent successfully");

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(region.text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_announcement_survives_older_timer() {
        let region = LiveRegion::new(Duration::from_secs(1));
        region.announce("first");

        tokio::time::sleep(Duration::from_millis(600)).await;
        region.announce("second");

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(region.text(), "second");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(region.text(), "");
    }

    #[test]
    fn test_without_runtime_text_stays() {
        let region = LiveRegion::new(Duration::from_millis(1));
        region.announce("hello");
        assert_eq!(region.text(), "hello");
        assert_eq!(region.politeness(), "polite");
        assert!(region.is_atomic());
    }
}
