//! Current-view tracking and redirects

use std::sync::Mutex;
use tracing::debug;

use super::routes::HOME;

/// Tracks which view is showing and moves between views.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Navigator keeping the view history in memory.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::starting_at(HOME)
    }

    pub fn starting_at(path: &str) -> Self {
        Self {
            history: Mutex::new(vec![path.to_string()]),
        }
    }

    /// Every view visited, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|h| h.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.history
            .lock()
            .ok()
            .and_then(|h| h.last().cloned())
            .unwrap_or_else(|| HOME.to_string())
    }

    fn navigate(&self, path: &str) {
        if let Ok(mut history) = self.history.lock() {
            if history.last().map(String::as_str) != Some(path) {
                debug!(from = ?history.last(), to = %path, "Navigating");
                history.push(path.to_string());
            }
        }
    }
}
