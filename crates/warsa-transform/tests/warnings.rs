//! Dropped or trimmed field content must show up in the log.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::Level;

use warsa_transform::{convert_date, extract_inline_sources, parse_leading_int};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `action` with a plain-text subscriber and return everything it logged.
fn captured<T>(action: impl FnOnce() -> T) -> (T, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, action);
    let bytes = capture.0.lock().expect("log buffer").clone();
    (result, String::from_utf8(bytes).expect("utf-8 log"))
}

#[test]
fn trailing_content_after_sources_is_logged() {
    let (extracted, log) = captured(|| extract_inline_sources("Helsinki (Smith) extra"));
    assert_eq!(extracted.value, "Helsinki");
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("found content after sources"), "{log}");
    assert!(log.contains("trailing=\"extra\""), "{log}");
}

#[test]
fn clean_sources_do_not_warn() {
    let (_, log) = captured(|| extract_inline_sources("Helsinki (Smith)"));
    assert!(!log.contains("WARN"), "{log}");
    assert!(log.contains("found sources"), "{log}");
}

#[test]
fn unparseable_date_is_logged() {
    let (value, log) = captured(|| convert_date("unknown"));
    assert_eq!(value, None);
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("invalid value for date conversion"), "{log}");
    assert!(log.contains("value=unknown"), "{log}");
}

#[test]
fn missing_date_is_not_a_warning() {
    let (value, log) = captured(|| convert_date("  "));
    assert_eq!(value, None);
    assert!(!log.contains("WARN"), "{log}");
    assert!(log.contains("no date"), "{log}");
}

#[test]
fn non_numeric_count_is_logged() {
    let (value, log) = captured(|| parse_leading_int("unknown"));
    assert_eq!(value, None);
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("invalid value for integer conversion"), "{log}");
    assert!(log.contains("value=\"unknown\""), "{log}");
}

#[test]
fn dash_count_is_not_a_warning() {
    let (value, log) = captured(|| parse_leading_int("-"));
    assert_eq!(value, None);
    assert!(!log.contains("WARN"), "{log}");
}
