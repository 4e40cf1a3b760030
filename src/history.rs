use crate::models::CheckIn;
use crate::storage::{load_entries, persist_entries, StorageError};
use chrono::{Local, TimeZone};
use std::path::{Path, PathBuf};

pub const HISTORY_CAP: usize = 30;
pub const EMPTY_HISTORY_LINE: &str = "No check-ins yet";

/// Newest-first, at most [`HISTORY_CAP`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<CheckIn>,
}

impl HistoryLog {
    pub fn from_entries(mut entries: Vec<CheckIn>) -> Self {
        entries.truncate(HISTORY_CAP);
        Self { entries }
    }

    pub fn record(&mut self, check_in: CheckIn) {
        self.entries.insert(0, check_in);
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn entries(&self) -> &[CheckIn] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines_in(&Local)
    }

    pub fn lines_in<Tz: TimeZone>(&self, tz: &Tz) -> Vec<String>
    where
        Tz::Offset: std::fmt::Display,
    {
        if self.entries.is_empty() {
            return vec![EMPTY_HISTORY_LINE.to_string()];
        }
        self.entries
            .iter()
            .map(|check_in| format_line(check_in, tz))
            .collect()
    }
}

pub fn format_line<Tz: TimeZone>(check_in: &CheckIn, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let when = match tz.timestamp_millis_opt(check_in.ts).single() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "Invalid Date".to_string(),
    };
    let mut line = format!("{when} — {}", check_in.mood);
    if !check_in.note.is_empty() {
        line.push_str(" — ");
        line.push_str(&check_in.note);
    }
    line
}

/// A [`HistoryLog`] bound to its persisted slot.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    log: HistoryLog,
}

impl HistoryStore {
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let log = HistoryLog::from_entries(load_entries(&path).await);
        Self { path, log }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self) -> &HistoryLog {
        &self.log
    }

    /// The in-memory log is updated even when the write fails.
    pub async fn record(&mut self, check_in: CheckIn) -> Result<(), StorageError> {
        self.log.record(check_in);
        persist_entries(&self.path, self.log.entries()).await
    }
}
