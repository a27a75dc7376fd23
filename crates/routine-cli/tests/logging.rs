//! Subscriber installation with a JSON log file.

use std::fs::{self, File};
use std::sync::Mutex;

use routine_cli::logging::{LogConfig, LogFormat, init_logging_with_writer, redact_value};
use serde_json::Value;
use tracing::level_filters::LevelFilter;

#[test]
fn json_log_file_receives_filtered_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("convert.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        with_timestamps: false,
        with_target: true,
        with_ansi: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        log_data: true,
    };
    let writer = Mutex::new(File::create(&path).unwrap());
    init_logging_with_writer(&config, writer).unwrap();

    tracing::info!(record_count = 3, "ingest complete");
    tracing::debug!("below the configured level");
    assert_eq!(redact_value("Alice"), "Alice");

    let second = init_logging_with_writer(&config, std::io::sink);
    assert!(second.is_err());

    let contents = fs::read_to_string(&path).unwrap();
    let events: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(events.len(), 1, "{contents}");
    let event = &events[0];
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "ingest complete");
    assert_eq!(event["fields"]["record_count"], 3);
    assert_eq!(event["target"], "logging");
    assert!(event.get("timestamp").is_none());
}
