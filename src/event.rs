//! The structured records the tracer emits.
//!
//! A [`Value`] is one rendered syscall argument, tagged by display class so
//! the text formatter can color it and the JSON formatter can stringify it
//! uniformly. A [`SyscallEvent`] is one completed (or unfinished) syscall.

use std::fmt;

use serde::{Serialize, Serializer};
use time::OffsetDateTime;

use crate::decode::quote::{quote_buffer, quote_cstr};
use crate::syscalls::Category;

/// One rendered argument, tagged with its display class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer (sizes, counts).
    Uint(u64),
    /// File descriptor.
    Fd(i64),
    /// Raw address; zero renders as `NULL`.
    Pointer(u64),
    /// Symbolic constant (`SEEK_SET`, `AT_FDCWD`, ...).
    Sym(String),
    /// Flag bit-set (`O_WRONLY|O_CREAT`).
    Flags(String),
    /// NUL-terminated string, quoted on display.
    Str { text: String, truncated: bool },
    /// Bounded buffer preview plus the buffer's real length.
    Buffer {
        preview: Vec<u8>,
        total: usize,
        cap: usize,
    },
    /// Pre-rendered struct body (`{st_mode=..., ...}`).
    Struct(String),
    /// Pre-rendered array body (`[...]`).
    Array(String),
    /// Octal-rendered mode.
    Octal(u32),
    /// Argument suppressed from display (unused variadic slot).
    Skipped,
    /// Pointer argument whose referent could not be read.
    Unreadable(u64),
    /// Not decodable at all.
    Unknown,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Uint(v) => write!(f, "{v}"),
            Value::Fd(v) => write!(f, "{v}"),
            Value::Pointer(0) => write!(f, "NULL"),
            Value::Pointer(addr) => write!(f, "{addr:#x}"),
            Value::Sym(s) | Value::Flags(s) => write!(f, "{s}"),
            Value::Str { text, truncated } => write!(f, "{}", quote_cstr(text, *truncated)),
            Value::Buffer {
                preview,
                total,
                cap,
            } => write!(f, "{}", quote_buffer(preview, *total, *cap)),
            Value::Struct(body) | Value::Array(body) => write!(f, "{body}"),
            Value::Octal(mode) => write!(f, "0{mode:o}"),
            Value::Skipped => Ok(()),
            Value::Unreadable(addr) => write!(f, "{addr:#x}=<unreadable>"),
            Value::Unknown => write!(f, "?"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One completed syscall observation, or an unfinished one when the return
/// was never seen (thread died, process exited mid-call).
#[derive(Debug, Clone)]
pub struct SyscallEvent {
    pub number: u64,
    pub name: String,
    pub category: Category,
    /// `(parameter name, rendered value)` in declared order.
    pub args: Vec<(&'static str, Value)>,
    pub retval: i64,
    pub retval_decoded: String,
    pub error: bool,
    pub started: OffsetDateTime,
    pub duration_us: u64,
    pub tid: u64,
    /// True when the exit was never observed; `retval` is meaningless then.
    pub unfinished: bool,
}

impl SyscallEvent {
    /// Argument list as the text formatter shows it, skipping suppressed
    /// slots.
    pub fn visible_args(&self) -> impl Iterator<Item = &(&'static str, Value)> {
        self.args.iter().filter(|(_, v)| *v != Value::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_pointer_renders_null() {
        assert_eq!(Value::Pointer(0).to_string(), "NULL");
        assert_eq!(Value::Pointer(0x1f00).to_string(), "0x1f00");
    }

    #[test]
    fn unreadable_renders_address_and_marker() {
        assert_eq!(Value::Unreadable(0x10).to_string(), "0x10=<unreadable>");
    }

    #[test]
    fn values_serialize_as_rendered_strings() {
        let v = Value::Str {
            text: "/etc/hosts".into(),
            truncated: false,
        };
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            "\"\\\"/etc/hosts\\\"\""
        );
    }
}
