//! strace-style text rendering, optionally colored.

use std::io::{self, Write};

use nu_ansi_term::Color;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::event::{SyscallEvent, Value};
use crate::format::EventSink;

const TIME_FORMAT: &[FormatItem<'_>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:6]");

pub struct TextSink {
    colored: bool,
    timestamps: bool,
}

impl TextSink {
    pub fn new(colored: bool, timestamps: bool) -> Self {
        Self { colored, timestamps }
    }

    fn paint_value(&self, value: &Value) -> String {
        let plain = value.to_string();
        if !self.colored {
            return plain;
        }
        let color = match value {
            Value::Str { .. } | Value::Buffer { .. } => Some(Color::Yellow),
            Value::Int(_) | Value::Uint(_) | Value::Octal(_) => Some(Color::Magenta),
            Value::Fd(_) => Some(Color::Green),
            Value::Pointer(_) | Value::Unreadable(_) => Some(Color::Blue),
            Value::Sym(_) | Value::Flags(_) => Some(Color::Cyan),
            _ => None,
        };
        match color {
            Some(c) => c.paint(plain).to_string(),
            None => plain,
        }
    }

    fn paint_name(&self, name: &str) -> String {
        if self.colored {
            Color::White.bold().paint(name).to_string()
        } else {
            name.to_string()
        }
    }

    fn paint_return(&self, event: &SyscallEvent) -> String {
        let text = if event.unfinished {
            "?".to_string()
        } else {
            event.retval_decoded.clone()
        };
        if !self.colored {
            return text;
        }
        if event.error {
            Color::Red.bold().paint(text).to_string()
        } else {
            Color::Green.bold().paint(text).to_string()
        }
    }

    /// `name(arg, arg, ...) = ret` with the optional time prefix.
    pub fn render(&self, event: &SyscallEvent) -> String {
        let mut line = String::new();
        if self.timestamps {
            if let Ok(stamp) = event.started.format(&TIME_FORMAT) {
                line.push_str(&stamp);
                line.push(' ');
            }
        }
        line.push_str(&self.paint_name(&event.name));
        line.push('(');
        let args: Vec<String> = event
            .visible_args()
            .map(|(_, value)| self.paint_value(value))
            .collect();
        line.push_str(&args.join(", "));
        line.push_str(") = ");
        line.push_str(&self.paint_return(event));
        line
    }
}

impl EventSink for TextSink {
    fn event(&mut self, event: &SyscallEvent, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.render(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syscalls::Category;
    use time::OffsetDateTime;

    fn event() -> SyscallEvent {
        SyscallEvent {
            number: 5,
            name: "open".into(),
            category: Category::File,
            args: vec![
                (
                    "path",
                    Value::Str {
                        text: "/etc/hosts".into(),
                        truncated: false,
                    },
                ),
                ("flags", Value::Flags("O_RDONLY".into())),
                ("mode", Value::Skipped),
            ],
            retval: 3,
            retval_decoded: "3".into(),
            error: false,
            started: OffsetDateTime::UNIX_EPOCH,
            duration_us: 12,
            tid: 1,
            unfinished: false,
        }
    }

    #[test]
    fn renders_strace_line_without_skipped_args() {
        let sink = TextSink::new(false, false);
        assert_eq!(
            sink.render(&event()),
            "open(\"/etc/hosts\", O_RDONLY) = 3"
        );
    }

    #[test]
    fn error_return_renders_decoded_form() {
        let sink = TextSink::new(false, false);
        let mut ev = event();
        ev.retval = -2;
        ev.error = true;
        ev.retval_decoded = "-1 ENOENT (No such file or directory)".into();
        assert!(sink
            .render(&ev)
            .ends_with("= -1 ENOENT (No such file or directory)"));
    }

    #[test]
    fn unfinished_renders_question_mark() {
        let sink = TextSink::new(false, false);
        let mut ev = event();
        ev.unfinished = true;
        assert!(sink.render(&ev).ends_with("= ?"));
    }

    #[test]
    fn timestamp_prefix_present_when_enabled() {
        let sink = TextSink::new(false, true);
        let line = sink.render(&event());
        assert!(line.starts_with("00:00:00.000000 "), "{line}");
    }
}
