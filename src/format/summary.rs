//! The summary aggregator: per-syscall call/error/elapsed counters and the
//! strace `-c` table rendered at shutdown.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Duration;

use prettytable::format::{Alignment, FormatBuilder, LinePosition, LineSeparator};
use prettytable::{Cell, Row, Table};

use crate::event::SyscallEvent;
use crate::format::EventSink;

#[derive(Debug, Default, Clone)]
struct Counters {
    calls: u64,
    errors: u64,
    elapsed: Duration,
}

#[derive(Default)]
pub struct SummarySink {
    stats: HashMap<String, Counters>,
}

impl SummarySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_calls(&self) -> u64 {
        self.stats.values().map(|c| c.calls).sum()
    }

    /// Render the table: rows sorted by cumulative elapsed time, `% time`
    /// computed over the total time spent in syscalls so the column sums to
    /// 100.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        let format = FormatBuilder::new()
            .column_separator(' ')
            .separator(LinePosition::Title, LineSeparator::new('-', ' ', ' ', ' '))
            .padding(1, 1)
            .build();
        table.set_format(format);
        table.set_titles(Row::new(vec![
            Cell::new_align("% time", Alignment::RIGHT),
            Cell::new_align("seconds", Alignment::RIGHT),
            Cell::new_align("usecs/call", Alignment::RIGHT),
            Cell::new_align("calls", Alignment::RIGHT),
            Cell::new_align("errors", Alignment::RIGHT),
            Cell::new_align("syscall", Alignment::LEFT),
        ]));

        let total_elapsed: Duration = self.stats.values().map(|c| c.elapsed).sum();
        let total_calls = self.total_calls();
        let total_errors: u64 = self.stats.values().map(|c| c.errors).sum();

        let mut rows: Vec<(&String, &Counters)> = self.stats.iter().collect();
        rows.sort_by(|a, b| b.1.elapsed.cmp(&a.1.elapsed).then(a.0.cmp(b.0)));

        for (name, counters) in rows {
            let percent = if total_elapsed.is_zero() {
                0.0
            } else {
                counters.elapsed.as_secs_f64() / total_elapsed.as_secs_f64() * 100.0
            };
            let per_call = counters.elapsed.as_micros() as u64 / counters.calls.max(1);
            table.add_row(Row::new(vec![
                Cell::new_align(&format!("{percent:6.2}"), Alignment::RIGHT),
                Cell::new_align(
                    &format!("{:.6}", counters.elapsed.as_secs_f64()),
                    Alignment::RIGHT,
                ),
                Cell::new_align(&per_call.to_string(), Alignment::RIGHT),
                Cell::new_align(&counters.calls.to_string(), Alignment::RIGHT),
                Cell::new_align(
                    &if counters.errors > 0 {
                        counters.errors.to_string()
                    } else {
                        String::new()
                    },
                    Alignment::RIGHT,
                ),
                Cell::new_align(name, Alignment::LEFT),
            ]));
        }

        table.add_row(Row::new(vec![
            Cell::new_align("------", Alignment::RIGHT),
            Cell::new_align("-----------", Alignment::RIGHT),
            Cell::new_align("-----------", Alignment::RIGHT),
            Cell::new_align("---------", Alignment::RIGHT),
            Cell::new_align("---------", Alignment::RIGHT),
            Cell::new_align("----------------", Alignment::LEFT),
        ]));
        table.add_row(Row::new(vec![
            Cell::new_align("100.00", Alignment::RIGHT),
            Cell::new_align(&format!("{:.6}", total_elapsed.as_secs_f64()), Alignment::RIGHT),
            Cell::new_align("", Alignment::RIGHT),
            Cell::new_align(&total_calls.to_string(), Alignment::RIGHT),
            Cell::new_align(&total_errors.to_string(), Alignment::RIGHT),
            Cell::new_align("total", Alignment::LEFT),
        ]));

        table.to_string()
    }
}

impl EventSink for SummarySink {
    fn event(&mut self, event: &SyscallEvent, _out: &mut dyn Write) -> io::Result<()> {
        let counters = self.stats.entry(event.name.clone()).or_default();
        counters.calls += 1;
        if event.error {
            counters.errors += 1;
        }
        counters.elapsed += Duration::from_micros(event.duration_us);
        Ok(())
    }

    fn finish(&mut self, _total: Duration, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Value;
    use crate::syscalls::Category;
    use time::OffsetDateTime;

    fn event(name: &str, retval: i64, error: bool, dur_us: u64) -> SyscallEvent {
        SyscallEvent {
            number: 0,
            name: name.into(),
            category: Category::File,
            args: vec![("fd", Value::Fd(0))],
            retval,
            retval_decoded: retval.to_string(),
            error,
            started: OffsetDateTime::UNIX_EPOCH,
            duration_us: dur_us,
            tid: 1,
            unfinished: false,
        }
    }

    #[test]
    fn counts_calls_and_errors() {
        let mut sink = SummarySink::new();
        let mut out = Vec::new();
        sink.event(&event("read", 10, false, 5), &mut out).unwrap();
        sink.event(&event("read", -1, true, 3), &mut out).unwrap();
        sink.event(&event("close", 0, false, 1), &mut out).unwrap();
        assert_eq!(sink.total_calls(), 3);
        let rendered = sink.render();
        assert!(rendered.contains("read"), "{rendered}");
        assert!(rendered.contains("close"), "{rendered}");
        assert!(rendered.contains("total"), "{rendered}");
    }

    #[test]
    fn percent_column_sums_to_100() {
        let mut sink = SummarySink::new();
        let mut out = Vec::new();
        sink.event(&event("read", 1, false, 30), &mut out).unwrap();
        sink.event(&event("write", 1, false, 70), &mut out).unwrap();
        let rendered = sink.render();
        let sum: f64 = rendered
            .lines()
            .skip(2)
            .filter(|l| l.contains("read") || l.contains("write"))
            .filter_map(|l| l.split_whitespace().next()?.parse::<f64>().ok())
            .sum();
        assert!((sum - 100.0).abs() < 0.1, "sum was {sum}:\n{rendered}");
    }
}
