//! Header warnings emitted while reading.

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use routine_ingest::read_records_from;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn read_with_logs(text: &str) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        read_records_from(text.as_bytes(), Path::new("logged.csv")).unwrap();
    });
    logs.text()
}

#[test]
fn header_problems_are_logged_as_warnings() {
    let unknown = read_with_logs("person,favourite_colour,alcohol\nDana,blue,false\n");
    assert!(unknown.contains("WARN"), "{unknown}");
    assert!(unknown.contains("ignoring unknown columns"), "{unknown}");
    assert!(unknown.contains("favourite_colour"), "{unknown}");
    assert!(!unknown.contains("none of the expected columns"), "{unknown}");
    assert!(!unknown.contains("default to empty"), "{unknown}");

    let unrelated = read_with_logs("name,colour\nDana,blue\n");
    assert!(
        unrelated.contains("header names none of the expected columns"),
        "{unrelated}"
    );
    assert!(unrelated.contains("logged.csv"), "{unrelated}");

    let clean = read_with_logs("person,alcohol\nDana,false\n");
    assert!(clean.is_empty(), "{clean}");
}
