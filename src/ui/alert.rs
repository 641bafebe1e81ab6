//! Auto-expiring form alerts.
//!
//! Alerts disappear after a fixed TTL. Expired entries are ignored by reads
//! and dropped on the next write, so no timer task is needed.

use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::time::Instant;

/// Heading shown above the list of error messages.
pub const ALERT_HEADING: &str = "Please correct the following errors:";

/// Identifies one alert on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

/// A visible alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub heading: &'static str,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
struct AlertEntry {
    alert: Alert,
    inserted_at: Instant,
}

#[derive(Debug, Default)]
struct Board {
    next_id: u64,
    entries: Vec<AlertEntry>,
}

/// A thread-safe stack of alerts with time-based expiration.
///
/// The newest alert is first, matching an alert inserted at the top of the
/// form. Clones share the same board.
#[derive(Clone)]
pub struct AlertBoard {
    board: Arc<RwLock<Board>>,
    ttl: Duration,
}

impl AlertBoard {
    /// Create a board whose alerts expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            board: Arc::new(RwLock::new(Board::default())),
            ttl,
        }
    }

    /// Push an alert carrying `messages`. Returns `None` when `messages` is
    /// empty, since an empty alert is never shown.
    pub fn push(&self, messages: &[String]) -> Option<AlertId> {
        if messages.is_empty() {
            return None;
        }

        let now = Instant::now();
        let ttl = self.ttl;
        let mut board = self.board.write().ok()?;
        board
            .entries
            .retain(|entry| now.duration_since(entry.inserted_at) < ttl);

        let id = AlertId(board.next_id);
        board.next_id += 1;
        board.entries.insert(
            0,
            AlertEntry {
                alert: Alert {
                    id,
                    heading: ALERT_HEADING,
                    messages: messages.to_vec(),
                },
                inserted_at: now,
            },
        );

        Some(id)
    }

    /// Alerts that have not expired, newest first.
    pub fn active(&self) -> Vec<Alert> {
        let now = Instant::now();

        match self.board.read() {
            Ok(board) => board
                .entries
                .iter()
                .filter(|entry| now.duration_since(entry.inserted_at) < self.ttl)
                .map(|entry| entry.alert.clone())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Remove one alert before it expires.
    pub fn dismiss(&self, id: AlertId) {
        if let Ok(mut board) = self.board.write() {
            board.entries.retain(|entry| entry.alert.id != id);
        }
    }

    /// Remove all alerts.
    pub fn clear(&self) {
        if let Ok(mut board) = self.board.write() {
            board.entries.clear();
        }
    }

    /// Whether any unexpired alert is showing.
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl std::fmt::Debug for AlertBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertBoard")
            .field("ttl", &self.ttl)
            .field("active", &self.active().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_expires_after_ttl() {
        let board = AlertBoard::new(Duration::from_secs(10));
        board.push(&messages(&["Name is required"])).unwrap();

        tokio::time::advance(Duration::from_millis(9_999)).await;
        assert_eq!(board.active().len(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(board.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newest_alert_first() {
        let board = AlertBoard::new(Duration::from_secs(10));
        let first = board.push(&messages(&["one"])).unwrap();
        let second = board.push(&messages(&["two"])).unwrap();

        let active = board.active();
        assert_eq!(active[0].id, second);
        assert_eq!(active[1].id, first);
        assert_eq!(active[0].heading, ALERT_HEADING);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_and_clear() {
        let board = AlertBoard::new(Duration::from_secs(10));
        let first = board.push(&messages(&["one"])).unwrap();
        board.push(&messages(&["two"])).unwrap();

        board.dismiss(first);
        assert_eq!(board.active().len(), 1);

        board.clear();
        assert!(board.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_messages_are_not_shown() {
        let board = AlertBoard::new(Duration::from_secs(10));
        assert!(board.push(&[]).is_none());
        assert!(board.is_empty());
    }
}
