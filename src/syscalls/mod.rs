//! The syscall schema model: parameter descriptors, decoder dispatch, and
//! the per-category definition tables the registry ingests.

pub mod defs;
pub mod numbers;
pub mod params;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::decode::DecodeCtx;
use crate::event::Value;

/// Closed category set, compatible with strace's `-e trace=` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    File,
    Network,
    Process,
    Memory,
    Signal,
    Ipc,
    Thread,
    Time,
    Sysinfo,
    Security,
    Debug,
    Misc,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::File,
        Category::Network,
        Category::Process,
        Category::Memory,
        Category::Signal,
        Category::Ipc,
        Category::Thread,
        Category::Time,
        Category::Sysinfo,
        Category::Security,
        Category::Debug,
        Category::Misc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::File => "file",
            Category::Network => "network",
            Category::Process => "process",
            Category::Memory => "memory",
            Category::Signal => "signal",
            Category::Ipc => "ipc",
            Category::Thread => "thread",
            Category::Time => "time",
            Category::Sysinfo => "sysinfo",
            Category::Security => "security",
            Category::Debug => "debug",
            Category::Misc => "misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or(())
    }
}

/// Direction of parameter flow relative to the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// Decoder dispatch, closed over the capability set. `Scalar` and
/// `PreCallMem` run at entry; `PostCallMem` runs at exit on success;
/// `Composite` runs at exit and may consult the return value (buffers sized
/// by it).
#[derive(Clone, Copy)]
pub enum Decoder {
    Scalar(fn(&DecodeCtx) -> Value),
    PreCallMem(fn(&DecodeCtx) -> Value),
    PostCallMem(fn(&DecodeCtx) -> Value),
    Composite(fn(&DecodeCtx) -> Value),
}

impl Decoder {
    pub fn runs_at_entry(&self) -> bool {
        matches!(self, Decoder::Scalar(_) | Decoder::PreCallMem(_))
    }

    pub fn runs_at_exit(&self) -> bool {
        matches!(self, Decoder::PostCallMem(_) | Decoder::Composite(_))
    }

    pub fn call(&self, ctx: &DecodeCtx) -> Value {
        match self {
            Decoder::Scalar(f)
            | Decoder::PreCallMem(f)
            | Decoder::PostCallMem(f)
            | Decoder::Composite(f) => f(ctx),
        }
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Decoder::Scalar(_) => "Scalar",
            Decoder::PreCallMem(_) => "PreCallMem",
            Decoder::PostCallMem(_) => "PostCallMem",
            Decoder::Composite(_) => "Composite",
        };
        f.write_str(kind)
    }
}

/// One parameter of a syscall schema.
pub struct Param {
    pub name: &'static str,
    /// Declared C type, for documentation and JSON consumers.
    pub ty: &'static str,
    pub dir: Direction,
    pub decoder: Decoder,
}

impl Param {
    pub const fn new(
        name: &'static str,
        ty: &'static str,
        dir: Direction,
        decoder: Decoder,
    ) -> Self {
        Self {
            name,
            ty,
            dir,
            decoder,
        }
    }
}

/// How the return value renders on success. Errors always go through the
/// errno decoder.
#[derive(Clone, Copy)]
pub enum ReturnKind {
    /// Plain integer.
    Int,
    /// An address (mmap, shmat): lowercase hex.
    Pointer,
    /// Syscall-specific rendering, e.g. fcntl(F_GETFL) flag words.
    Custom(fn(i64, &DecodeCtx) -> String),
}

/// One syscall schema: immutable once the registry is built.
pub struct SyscallDef {
    pub number: u64,
    pub name: &'static str,
    pub params: &'static [Param],
    pub ret: ReturnKind,
}

impl SyscallDef {
    pub const fn new(number: u64, name: &'static str, params: &'static [Param]) -> Self {
        Self {
            number,
            name,
            params,
            ret: ReturnKind::Int,
        }
    }

    pub const fn returning(
        number: u64,
        name: &'static str,
        params: &'static [Param],
        ret: ReturnKind,
    ) -> Self {
        Self {
            number,
            name,
            params,
            ret,
        }
    }
}
