use satcmd::config::{LogConfig, LogLevel};
use satcmd::*;
use std::fs;

fn log_config(dir: &tempfile::TempDir, level: LogLevel) -> LogConfig {
    LogConfig {
        path: dir.path().join("logs").join("satellite.log"),
        level,
    }
}

#[test]
fn test_events_are_written_with_timestamp_level_and_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = log_config(&dir, LogLevel::Info);

    let subscriber = logging::subscriber(&config).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        let mut dispatcher = CommandDispatcher::new();
        let mut satellite = Satellite::new();
        satellite.rotate("East").unwrap();
        satellite.activate_panels().unwrap();
        satellite.activate_panels().unwrap();
        satellite.collect_data().unwrap();

        let cmd = dispatcher
            .protocol_handler()
            .build_command(protocol::CommandToken::CollectData, None)
            .unwrap();
        dispatcher.execute(cmd);
    });

    let contents = fs::read_to_string(&config.path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("Satellite initialized.")));
    assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("Rotated to East.")));
    assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("Solar panels activated.")));
    assert!(lines.iter().any(|l| l.contains("WARN")
        && l.contains("Transient Error: Solar panels are already active.")));
    assert!(lines.iter().any(|l| l.contains("INFO") && l.contains("Data collected.")));
    assert!(lines.iter().any(|l| l.contains("ERROR")
        && l.contains("Error: Cannot collect data with inactive solar panels.")));

    // Every line starts with an RFC 3339 timestamp and carries no ANSI escapes
    for line in &lines {
        assert!(line.chars().next().is_some_and(|c| c.is_ascii_digit()), "line: {}", line);
        assert!(line.contains('T'));
        assert!(!line.contains('\u{1b}'));
    }
}

#[test]
fn test_log_file_is_append_only() {
    let dir = tempfile::tempdir().unwrap();
    let config = log_config(&dir, LogLevel::Info);

    for direction in ["West", "South"] {
        let subscriber = logging::subscriber(&config).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            Satellite::new().rotate(direction).unwrap();
        });
    }

    let contents = fs::read_to_string(&config.path).unwrap();
    let west = contents.find("Rotated to West.").expect("first run logged");
    let south = contents.find("Rotated to South.").expect("second run logged");
    assert!(west < south);
}

#[test]
fn test_level_filters_events() {
    let dir = tempfile::tempdir().unwrap();
    let config = log_config(&dir, LogLevel::Error);

    let subscriber = logging::subscriber(&config).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        let mut satellite = Satellite::new();
        satellite.rotate("East").unwrap();
        satellite.deactivate_panels().unwrap();
    });

    let contents = fs::read_to_string(&config.path).unwrap();
    assert!(!contents.contains("Rotated to East."));
    assert!(!contents.contains("Transient Error"));
}

#[test]
fn test_configured_level_ignores_rust_log() {
    // Only `logging::init` consults RUST_LOG
    std::env::set_var("RUST_LOG", "trace");

    let dir = tempfile::tempdir().unwrap();
    let config = log_config(&dir, LogLevel::Warn);

    let subscriber = logging::subscriber(&config).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        let mut satellite = Satellite::new();
        satellite.rotate("South").unwrap();
        satellite.deactivate_panels().unwrap();
    });

    let contents = fs::read_to_string(&config.path).unwrap();
    assert!(!contents.contains("Rotated to South."));
    assert!(contents.contains("WARN"));
    assert!(contents.contains("Transient Error: Solar panels are already inactive."));
}

#[test]
fn test_unwritable_log_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogConfig {
        // A directory cannot be opened as the log file
        path: dir.path().to_path_buf(),
        level: LogLevel::Info,
    };

    let err = logging::subscriber(&config).err().expect("opening a directory must fail");
    assert!(err.to_string().starts_with("cannot open log file"));
}
