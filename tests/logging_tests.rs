// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use riphus::engine::budgets::TracingNotifier;
use riphus::store::Session;
use serde_json::Value;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(level: Level, f: impl FnOnce()) -> Vec<Value> {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(level)
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn field<'a>(line: &'a Value, name: &str) -> Option<&'a str> {
    line.get("fields")?.get(name)?.as_str()
}

#[test]
fn budget_alerts_are_logged_as_warnings() {
    let session = Session::demo();
    let lines = capture(Level::WARN, || {
        session.budget_alerts(Some("2025-12".parse().unwrap()), &mut TracingNotifier);
    });

    assert_eq!(lines.len(), 4);
    let first = &lines[0];
    assert_eq!(first.get("level").and_then(|v| v.as_str()), Some("WARN"));
    assert_eq!(field(first, "message"), Some("budget alert"));
    assert_eq!(field(first, "category"), Some("logement"));
    assert_eq!(field(first, "level"), Some("warning"));
    assert_eq!(field(first, "spent"), Some("900"));

    let categories: Vec<&str> = lines.iter().filter_map(|l| field(l, "category")).collect();
    assert_eq!(
        categories,
        vec!["logement", "alimentation", "transport", "investissement"]
    );
}

#[test]
fn session_load_is_logged_with_counts() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"watchlists": [{{"id": "1", "name": "Core", "color": "bg-blue-500"}}]}}"#)
        .unwrap();

    let lines = capture(Level::INFO, || {
        Session::load(file.path()).unwrap();
    });
    let loaded = lines
        .iter()
        .find(|l| field(l, "message") == Some("session loaded"))
        .unwrap();
    assert_eq!(loaded.get("level").and_then(|v| v.as_str()), Some("INFO"));
    let watchlists = loaded.get("fields").and_then(|f| f.get("watchlists"));
    assert_eq!(watchlists.and_then(Value::as_u64), Some(1));
}

#[test]
fn warn_filter_hides_debug_events() {
    let lines = capture(Level::WARN, || {
        let mut gate = riphus::engine::analyzer::SearchGate::new();
        gate.begin();
        gate.begin();
    });
    assert!(lines.is_empty());
}
