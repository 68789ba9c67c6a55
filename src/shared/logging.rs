use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

pub fn append_event_log(path: &Path, level: LogLevel, event: &str, message: &str) {
    let payload = serde_json::json!({
        "timestamp": super::time::now_rfc3339(),
        "level": level.as_str(),
        "event": event,
        "message": message,
    });

    let Ok(line) = serde_json::to_string(&payload) else {
        return;
    };

    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}

/// Handle passed into wizard sessions. A disabled log drops every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn info(&self, event: &str, message: &str) {
        self.emit(LogLevel::Info, event, message);
    }

    pub fn warn(&self, event: &str, message: &str) {
        self.emit(LogLevel::Warn, event, message);
    }

    pub fn error(&self, event: &str, message: &str) {
        self.emit(LogLevel::Error, event, message);
    }

    fn emit(&self, level: LogLevel, event: &str, message: &str) {
        if let Some(path) = &self.path {
            append_event_log(path, level, event, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_event_log_writes_one_json_object_per_line() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("logs/events.log");
        let log = EventLog::to_file(&path);

        log.info("wizard.advance", "step=2");
        log.warn("clipboard.copy_failed", "no clipboard");

        let raw = fs::read_to_string(&path).expect("read log");
        let lines: Vec<serde_json::Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "info");
        assert_eq!(lines[0]["event"], "wizard.advance");
        assert_eq!(lines[1]["level"], "warn");
        assert_eq!(lines[1]["message"], "no clipboard");
        assert!(lines[0]["timestamp"].as_str().is_some());
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let log = EventLog::disabled();
        log.error("anything", "ignored");
        assert!(log.path().is_none());
    }
}
