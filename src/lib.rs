//! strace for macOS: traces BSD system calls through the platform debugger
//! engine, with System Integrity Protection left on.
//!
//! The library exposes two entry points mirroring the CLI: [`trace_command`]
//! spawns and traces a command, [`trace_attach`] attaches to a pid. Both are
//! configured through [`TraceOptions`]. Everything between the debugger and
//! the output sinks (registry, decoders, pairing, filtering, formatting) is
//! host-independent; only the LLDB driver is macOS-only.

#[macro_use]
extern crate lazy_static;

pub mod arch;
pub mod decode;
pub mod errors;
pub mod event;
pub mod filter;
pub mod format;
pub mod interpose;
pub mod memory;
pub mod pairing;
pub mod pipeline;
pub mod registry;
pub mod session;
pub mod syscalls;

use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use tracing::debug;

use crate::errors::{Result, TraceError};
use crate::filter::Filter;
use crate::format::json::JsonSink;
use crate::format::summary::SummarySink;
use crate::format::text::TextSink;
use crate::format::{ColorMode, EventSink};
use crate::pipeline::EventPipeline;
use crate::registry::SyscallRegistry;
use crate::session::{Debugger, Session, SessionConfig};

/// Configuration consumed from the CLI layer.
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Event stream destination; stderr when absent.
    pub output: Option<PathBuf>,
    /// JSON-Lines instead of strace-style text.
    pub json: bool,
    /// Coloring policy for the text formatter.
    pub color: ColorMode,
    /// Replace per-event output with the summary table.
    pub summary_only: bool,
    /// `-e trace=` expression, if any.
    pub trace_filter: Option<String>,
    /// Render flag integers as raw hex instead of symbols.
    pub no_abbrev: bool,
    /// Display cap for strings and buffers.
    pub string_limit: usize,
    /// Prefix text lines with wall-clock timestamps.
    pub timestamps: bool,
    /// Set the interposition sentinel so spawned children stop for attach.
    pub follow_spawn: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            output: None,
            json: false,
            color: ColorMode::Auto,
            summary_only: false,
            trace_filter: None,
            no_abbrev: false,
            string_limit: 32,
            timestamps: false,
            follow_spawn: false,
        }
    }
}

lazy_static! {
    static ref INTERRUPTED: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
}

extern "C" fn on_interrupt(_signum: i32) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Install SIGINT/SIGTERM handlers that request a clean shutdown of the
/// session loop. Idempotent.
pub fn install_interrupt_handlers() {
    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for sig in [Signal::SIGINT, Signal::SIGTERM] {
        // Failure only costs graceful interrupt; keep going.
        if unsafe { signal::sigaction(sig, &action) }.is_err() {
            debug!(?sig, "failed to install signal handler");
        }
    }
}

/// Run a [`Session`] over any driver. Public so scripted drivers can
/// exercise the full loop in tests.
pub fn run_with_driver(
    driver: Box<dyn Debugger>,
    options: &TraceOptions,
    attached: bool,
) -> Result<i32> {
    let registry = SyscallRegistry::new();
    let filter = match &options.trace_filter {
        Some(expr) => Filter::parse(expr, &registry)?,
        None => Filter::all(),
    };

    let (out, is_tty): (Box<dyn Write>, bool) = match &options.output {
        Some(path) => (Box::new(File::create(path)?), false),
        None => (Box::new(io::stderr()), io::stderr().is_terminal()),
    };

    let sinks: Vec<Box<dyn EventSink>> = if options.summary_only {
        vec![Box::new(SummarySink::new())]
    } else if options.json {
        vec![Box::new(JsonSink::new())]
    } else {
        vec![Box::new(TextSink::new(
            options.color.enabled(is_tty),
            options.timestamps,
        ))]
    };

    let pipeline = EventPipeline::new(out, sinks);
    let config = SessionConfig {
        filter,
        no_abbrev: options.no_abbrev,
        string_limit: options.string_limit,
        attached,
    };

    let mut session = Session::new(driver, registry, config, pipeline, INTERRUPTED.clone());
    session.run()
}

/// Spawn `command` under the debugger and trace it to completion. Returns
/// the target's exit code.
#[cfg(target_os = "macos")]
pub fn trace_command(command: &[String], options: &TraceOptions) -> Result<i32> {
    use crate::session::lldb::{resolve_binary, LldbDebugger};

    let program = command
        .first()
        .ok_or_else(|| TraceError::Usage("must have PROG [ARGS] or -p PID".to_string()))?;
    let resolved = resolve_binary(program).ok_or_else(|| TraceError::Launch {
        command: program.clone(),
        reason: "binary not found".into(),
    })?;

    let mut full = vec![resolved.to_string_lossy().into_owned()];
    full.extend_from_slice(&command[1..]);

    let extra_env = if options.follow_spawn {
        interpose::child_stop_env()
    } else {
        Vec::new()
    };

    install_interrupt_handlers();
    let driver = LldbDebugger::launch(&full, &extra_env)?;
    run_with_driver(Box::new(driver), options, false)
}

/// Attach to `pid` and trace until interrupted or the target exits. The
/// target is detached, not killed, on interrupt.
#[cfg(target_os = "macos")]
pub fn trace_attach(pid: i32, options: &TraceOptions) -> Result<i32> {
    use crate::session::lldb::LldbDebugger;

    if pid <= 0 {
        return Err(TraceError::Usage(format!("invalid pid {pid}")));
    }
    install_interrupt_handlers();
    let driver = LldbDebugger::attach(pid)?;
    run_with_driver(Box::new(driver), options, true)
}

/// The debugger engine this tracer drives only exists on macOS.
#[cfg(not(target_os = "macos"))]
pub fn trace_command(command: &[String], _options: &TraceOptions) -> Result<i32> {
    Err(TraceError::Launch {
        command: command.first().cloned().unwrap_or_default(),
        reason: "this tracer drives the macOS debugger engine and only runs on macOS".into(),
    })
}

/// See [`trace_command`].
#[cfg(not(target_os = "macos"))]
pub fn trace_attach(pid: i32, _options: &TraceOptions) -> Result<i32> {
    Err(TraceError::Attach {
        pid,
        reason: "this tracer drives the macOS debugger engine and only runs on macOS".into(),
    })
}
