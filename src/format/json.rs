//! JSON-Lines formatter: one object per event, whole lines only.

use std::io::{self, Write};

use serde::Serialize;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::event::{SyscallEvent, Value};
use crate::format::EventSink;
use crate::syscalls::Category;

/// ISO 8601 with microseconds and offset.
const TS_FORMAT: &[FormatItem<'_>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6][offset_hour \
     sign:mandatory]:[offset_minute]"
);

#[derive(Serialize)]
struct ArgRecord<'a> {
    name: &'a str,
    value: &'a Value,
}

#[derive(Serialize)]
struct EventRecord<'a> {
    ts: String,
    dur_us: u64,
    tid: u64,
    syscall: &'a str,
    category: Category,
    args: Vec<ArgRecord<'a>>,
    retval: i64,
    retval_decoded: &'a str,
    error: bool,
}

#[derive(Default)]
pub struct JsonSink;

impl JsonSink {
    pub fn new() -> Self {
        Self
    }

    pub fn render(event: &SyscallEvent) -> serde_json::Result<String> {
        let record = EventRecord {
            ts: event
                .started
                .format(&TS_FORMAT)
                .unwrap_or_else(|_| event.started.to_string()),
            dur_us: event.duration_us,
            tid: event.tid,
            syscall: &event.name,
            category: event.category,
            args: event
                .visible_args()
                .map(|(name, value)| ArgRecord { name, value })
                .collect(),
            retval: event.retval,
            retval_decoded: &event.retval_decoded,
            error: event.error,
        };
        serde_json::to_string(&record)
    }
}

impl EventSink for JsonSink {
    fn event(&mut self, event: &SyscallEvent, out: &mut dyn Write) -> io::Result<()> {
        let line = Self::render(event).map_err(io::Error::other)?;
        // One write per event keeps lines atomic: either a full record
        // reaches the sink or nothing does.
        writeln!(out, "{line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn event() -> SyscallEvent {
        SyscallEvent {
            number: 3,
            name: "read".into(),
            category: Category::File,
            args: vec![
                ("fd", Value::Fd(0)),
                (
                    "buf",
                    Value::Buffer {
                        preview: b"hi".to_vec(),
                        total: 2,
                        cap: 32,
                    },
                ),
                ("nbyte", Value::Uint(1024)),
            ],
            retval: 2,
            retval_decoded: "2".into(),
            error: false,
            started: OffsetDateTime::UNIX_EPOCH,
            duration_us: 7,
            tid: 42,
            unfinished: false,
        }
    }

    #[test]
    fn record_round_trips_through_a_parser() {
        let line = JsonSink::render(&event()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["syscall"], "read");
        assert_eq!(parsed["category"], "file");
        assert_eq!(parsed["tid"], 42);
        assert_eq!(parsed["dur_us"], 7);
        assert_eq!(parsed["retval"], 2);
        assert_eq!(parsed["error"], false);
        let args = parsed["args"].as_array().unwrap();
        assert_eq!(args.len(), 3);
        assert_eq!(args[0]["name"], "fd");
        assert_eq!(args[0]["value"], "0");
        assert_eq!(args[1]["value"], "\"hi\"");
    }

    #[test]
    fn timestamp_is_iso8601_with_microseconds() {
        let line = JsonSink::render(&event()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["ts"], "1970-01-01T00:00:00.000000+00:00");
    }
}
