//! Timestamped game log kept by the turn controller.
//!
//! Entries stay in memory; the binary dumps them to stderr under `--verbose`.

use chrono::{DateTime, Local};

#[derive(Debug, Clone)]
pub struct GameLog {
    started: DateTime<Local>,
    entries: Vec<String>,
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLog {
    pub fn new() -> Self {
        let started = Local::now();
        let mut log = Self {
            started,
            entries: Vec::new(),
        };
        log.log(&format!(
            "game started {}",
            started.format("%Y-%m-%d %H:%M:%S")
        ));
        log
    }

    /// Record a message stamped with wall-clock time and time since start.
    pub fn log(&mut self, message: &str) {
        let now = Local::now();
        let elapsed_ms = (now - self.started).num_milliseconds();
        let entry = format!(
            "[{} +{:>6}ms] {}",
            now.format("%H:%M:%S"),
            elapsed_ms,
            message
        );
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// All entries, one per line.
    pub fn dump(&self) -> String {
        self.entries.join("\n")
    }
}
