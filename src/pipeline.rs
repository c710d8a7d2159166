//! The event pipeline: ordered delivery of completed events to the
//! configured sinks and flush-on-shutdown.

use std::io::Write;
use std::time::Instant;

use crate::errors::{Result, TraceError};
use crate::event::SyscallEvent;
use crate::format::EventSink;

pub struct EventPipeline {
    out: Box<dyn Write>,
    sinks: Vec<Box<dyn EventSink>>,
    started: Instant,
    emitted: u64,
}

impl EventPipeline {
    pub fn new(out: Box<dyn Write>, sinks: Vec<Box<dyn EventSink>>) -> Self {
        Self {
            out,
            sinks,
            started: Instant::now(),
            emitted: 0,
        }
    }

    /// Deliver one event to every sink, in registration order. A sink I/O
    /// failure is fatal: the trace stream has lost integrity.
    pub fn deliver(&mut self, event: &SyscallEvent) -> Result<()> {
        for sink in &mut self.sinks {
            sink.event(event, &mut self.out).map_err(TraceError::SinkIo)?;
        }
        self.emitted += 1;
        Ok(())
    }

    /// Flush the sinks (summary table, buffered lines) at shutdown.
    pub fn shutdown(&mut self) -> Result<()> {
        let total = self.started.elapsed();
        for sink in &mut self.sinks {
            sink.finish(total, &mut self.out).map_err(TraceError::SinkIo)?;
        }
        self.out.flush().map_err(TraceError::SinkIo)
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Value;
    use crate::format::text::TextSink;
    use crate::syscalls::Category;
    use std::sync::{Arc, Mutex};
    use time::OffsetDateTime;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn events_flow_to_sinks_in_order() {
        let buf = SharedBuf::default();
        let mut pipeline = EventPipeline::new(
            Box::new(buf.clone()),
            vec![Box::new(TextSink::new(false, false))],
        );
        for (name, ret) in [("open", 3i64), ("close", 0)] {
            let event = SyscallEvent {
                number: 0,
                name: name.into(),
                category: Category::File,
                args: vec![("fd", Value::Fd(3))],
                retval: ret,
                retval_decoded: ret.to_string(),
                error: false,
                started: OffsetDateTime::UNIX_EPOCH,
                duration_us: 1,
                tid: 1,
                unfinished: false,
            };
            pipeline.deliver(&event).unwrap();
        }
        pipeline.shutdown().unwrap();
        let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["open(3) = 3", "close(3) = 0"]);
        assert_eq!(pipeline.emitted(), 2);
    }
}
