//! Host logging when another logger already owns the process

use log::{Log, Metadata, Record};
use touch::ffi::{FfiLogLevel, LogCallback, TouchServiceError, initialize_logging};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("{}", record.args());
    }

    fn flush(&self) {}
}

static OTHER_LOGGER: StderrLogger = StderrLogger;

struct Ignore;

impl LogCallback for Ignore {
    fn on_log(&self, _: FfiLogLevel, _: String, _: String) {}
}

#[test]
fn test_initialize_logging_fails_when_logger_taken() {
    log::set_logger(&OTHER_LOGGER).unwrap();

    let result = initialize_logging(Box::new(Ignore), FfiLogLevel::Trace);
    assert!(matches!(result, Err(TouchServiceError::Logging { .. })));
}
