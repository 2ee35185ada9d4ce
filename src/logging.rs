use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

/// Human-readable log lines on stderr, plus an optional JSONL event stream
/// for build dashboards. Everything goes to stderr: stdout belongs to the
/// emitted definitions.
pub struct Logger {
    json_file: Option<File>,
}

impl Logger {
    pub fn from_env() -> Result<Self> {
        let json_path = std::env::var("WIFI_PROVISION_LOG_JSON_PATH")
            .ok()
            .map(PathBuf::from);
        Self::new(json_path)
    }

    pub fn new(json_path: Option<PathBuf>) -> Result<Self> {
        let json_file = match json_path {
            Some(path) => {
                ensure_parent_dir(&path)?;
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&path)
                    .with_context(|| format!("failed to open log file {}", path.display()))?;
                Some(file)
            }
            None => None,
        };
        Ok(Self { json_file })
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        eprintln!("{}", message.as_ref());
        self.write_json("info", message.as_ref());
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        eprintln!("warning: {}", message.as_ref());
        self.write_json("warn", message.as_ref());
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        eprintln!("error: {}", message.as_ref());
        self.write_json("error", message.as_ref());
    }

    fn write_json(&mut self, level: &str, msg: &str) {
        let Some(file) = self.json_file.as_mut() else {
            return;
        };
        let ts_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let line = serde_json::json!({ "ts_ms": ts_ms, "level": level, "msg": msg });
        let _ = writeln!(file, "{line}");
    }
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_stream_appends_one_record_per_event() {
        let dir = tempfile::tempdir().expect("tempdir");
        let log_path = dir.path().join("logs/provision.jsonl");

        let mut logger = Logger::new(Some(log_path.clone())).expect("logger");
        logger.info("first");
        logger.warn("second");

        let raw = std::fs::read_to_string(&log_path).expect("read log");
        let records: Vec<serde_json::Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json line"))
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["level"], "info");
        assert_eq!(records[0]["msg"], "first");
        assert_eq!(records[1]["level"], "warn");
        assert!(records[1]["ts_ms"].is_number());
    }

    #[test]
    fn without_json_path_logging_is_stderr_only() {
        let mut logger = Logger::new(None).expect("logger");
        logger.info("no sink configured");
    }
}
