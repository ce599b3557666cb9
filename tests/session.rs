use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use env_logger::{Target, WriteStyle};
use log::LevelFilter;
use logworks::{
    Channel, ConsoleSink, ConsoleTarget, Layout, LogConfig, Logger, LoggerOptions, Severity,
};
use pretty_assertions::assert_eq;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn colored_config_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("logworks.json");
    fs::write(
        &path,
        r#"{ "colorize": true,
             "colors": { "debug": 37, "info": 34, "ok": 32, "warning": 33, "error": 31 } }"#,
    )
    .unwrap();
    path
}

#[test]
fn console_session_writes_timestamp_label_and_message() {
    let buffer = SharedBuffer::default();
    let mut channel = Channel::new("e2e", LevelFilter::Info);
    channel.attach(Box::new(ConsoleSink::with_target(
        LevelFilter::Info,
        Layout::console(),
        Target::Pipe(Box::new(buffer.clone())),
        WriteStyle::Auto,
    )));
    let logger = Logger::with_backend(LogConfig::builtin(), false, Box::new(channel));

    logger.emit(Severity::Info, "ready");
    logger.close();

    let output = buffer.contents();
    let line = output.lines().next().unwrap();
    assert!(line.ends_with("ready"));
    assert!(line.contains("[INFO]"));
    assert!(NaiveDateTime::parse_from_str(&line[..19], "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn console_options_session_writes_to_injected_target() {
    let buffer = SharedBuffer::default();
    let logger = Logger::new(LoggerOptions {
        console_target: ConsoleTarget::Writer(buffer.0.clone()),
        ..LoggerOptions::console_only()
    })
    .unwrap();

    logger.debug("details");
    logger.info("ready");
    logger.close();

    let output = buffer.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[DEBUG]") && lines[0].ends_with("details"));
    assert!(lines[1].contains("[INFO]") && lines[1].ends_with("ready"));
    assert!(NaiveDateTime::parse_from_str(&lines[1][..19], "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn file_only_session_never_writes_escape_sequences() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("app.log");

    let logger = Logger::new(LoggerOptions {
        config_path: Some(colored_config_file(&dir)),
        log_file: Some(log_file.clone()),
        ..LoggerOptions::file_only()
    })
    .unwrap();
    assert!(logger.config().colorize);
    assert!(!logger.use_colors());

    for severity in Severity::all() {
        logger.emit(*severity, "message");
    }
    logger.emit(Severity::Ok, None::<&str>);
    logger.close();

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(!content.contains('\x1b'));

    let levels: Vec<&str> = content
        .lines()
        .map(|line| line[20..].split(' ').next().unwrap())
        .collect();
    assert_eq!(
        levels,
        ["[DEBUG]", "[INFO]", "[INFO]", "[WARNING]", "[ERROR]", "[INFO]"]
    );
}

#[test]
fn file_sink_ignores_colorize_even_when_colors_enabled() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("both.log");

    let logger = Logger::new(LoggerOptions {
        config_path: Some(colored_config_file(&dir)),
        console: false,
        file: true,
        log_file: Some(log_file.clone()),
        ..LoggerOptions::default()
    })
    .unwrap();
    assert!(logger.use_colors());
    logger.warning("still plain");
    logger.close();

    let content = fs::read_to_string(&log_file).unwrap();
    assert!(content.trim_end().ends_with("[WARNING] still plain"));
    assert!(!content.contains('\x1b'));
}

#[test]
fn log_file_falls_back_to_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("from-config.log");
    let config = dir.path().join("conf.json");
    fs::write(
        &config,
        format!(r#"{{ "logfile": {} }}"#, serde_json::to_string(&log_file).unwrap()),
    )
    .unwrap();

    let logger = Logger::new(LoggerOptions {
        config_path: Some(config),
        ..LoggerOptions::file_only()
    })
    .unwrap();
    logger.info("via config");
    logger.close();

    assert!(fs::read_to_string(&log_file).unwrap().contains("[INFO] via config"));
}

#[test]
fn empty_log_file_option_uses_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("configured.log");
    let config = dir.path().join("conf.json");
    fs::write(
        &config,
        format!(r#"{{ "logfile": {} }}"#, serde_json::to_string(&log_file).unwrap()),
    )
    .unwrap();

    let logger = Logger::new(LoggerOptions {
        config_path: Some(config),
        log_file: Some(PathBuf::new()),
        ..LoggerOptions::file_only()
    })
    .unwrap();
    logger.ok("empty option ignored");
    logger.close();

    assert!(fs::read_to_string(&log_file)
        .unwrap()
        .contains("[INFO] empty option ignored"));
}

#[test]
fn empty_logfile_in_config_is_not_opened() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("explicit.log");
    let config = dir.path().join("conf.json");
    fs::write(&config, r#"{ "logfile": "" }"#).unwrap();

    let logger = Logger::new(LoggerOptions {
        config_path: Some(config),
        log_file: Some(log_file.clone()),
        ..LoggerOptions::file_only()
    })
    .unwrap();
    assert_eq!(logger.config().log_file_path, Some(PathBuf::new()));
    logger.info("written");
    logger.close();

    assert!(fs::read_to_string(&log_file).unwrap().contains("written"));
}

#[test]
fn unopenable_log_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("no-such-dir").join("app.log");

    let err = Logger::file(Some(log_file.as_path())).unwrap_err();

    assert!(err.downcast_ref::<io::Error>().is_some());
    assert!(format!("{err:#}").contains("app.log"));
}

#[test]
fn threshold_applies_to_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("threshold.log");

    let logger = Logger::new(LoggerOptions {
        level: LevelFilter::Warn,
        log_file: Some(log_file.clone()),
        ..LoggerOptions::file_only()
    })
    .unwrap();
    logger.debug("no");
    logger.info("no");
    logger.ok("no");
    logger.warning("yes");
    logger.error("yes");
    drop(logger);

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(!content.contains("no"));
}
