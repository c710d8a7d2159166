//! Error kinds for the tracer core.
//!
//! Setup failures (attach, launch, symbol resolution, initial breakpoint
//! install) are fatal and map to distinct exit codes. Failures inside the
//! event loop are recovered locally by the session and never surface here,
//! with the exception of sink I/O, which is fatal because the trace stream
//! has lost integrity.

use std::io;

pub type Result<T> = std::result::Result<T, TraceError>;

#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    #[error("{0}")]
    Usage(String),

    #[error("could not attach to pid {pid}: {reason}")]
    Attach { pid: i32, reason: String },

    #[error("could not launch `{command}`: {reason}")]
    Launch { command: String, reason: String },

    #[error("no syscall trampoline symbol found in the target (tried {})", .tried.join(", "))]
    SymbolResolution { tried: Vec<String> },

    #[error("could not install breakpoint at {addr:#x}: {reason}")]
    BreakpointInstall { addr: u64, reason: String },

    #[error("target memory at {addr:#x} is unreadable: {reason}")]
    MemoryRead { addr: u64, reason: String },

    #[error("debugger event error: {0}")]
    DebuggerEvent(String),

    #[error("trace sink error")]
    SinkIo(#[from] io::Error),

    #[error("interrupted")]
    Interrupted,
}

impl TraceError {
    /// Process exit code for a fatal error, per the documented contract:
    /// 2 for usage errors, 3 for symbol resolution, 130 for interrupt,
    /// 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            TraceError::Usage(_) => 2,
            TraceError::SymbolResolution { .. } => 3,
            TraceError::Interrupted => 130,
            _ => 1,
        }
    }

    /// Stable kind name, used in the one-line stderr report.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceError::Usage(_) => "usage error",
            TraceError::Attach { .. } => "attach error",
            TraceError::Launch { .. } => "launch error",
            TraceError::SymbolResolution { .. } => "symbol resolution error",
            TraceError::BreakpointInstall { .. } => "breakpoint install error",
            TraceError::MemoryRead { .. } => "memory read error",
            TraceError::DebuggerEvent(_) => "debugger event error",
            TraceError::SinkIo(_) => "sink I/O error",
            TraceError::Interrupted => "interrupted",
        }
    }
}
