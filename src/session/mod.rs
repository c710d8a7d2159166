//! The debugger session: scoped ownership of the platform debugger and the
//! single-threaded stop-event loop that drives capture.
//!
//! All platform knowledge sits behind the [`Debugger`] trait; the loop, the
//! pairing table, and event assembly are host-independent and are tested
//! against a scripted driver. Breakpoint callbacks never mutate shared
//! state directly: the driver reports intent records ([`StopEvent`]) and the
//! loop routes them through the controller and the pairing table it owns.

pub mod controller;
#[cfg(target_os = "macos")]
pub mod lldb;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use time::OffsetDateTime;
use tracing::{debug, trace, warn};

use crate::arch::{Arch, Registers};
use crate::decode::symbols::errno::decode_errno;
use crate::decode::DecodeCtx;
use crate::errors::{Result, TraceError};
use crate::event::{SyscallEvent, Value};
use crate::filter::Filter;
use crate::memory::MemoryRead;
use crate::pairing::{EntrySnapshot, PairingTable};
use crate::pipeline::EventPipeline;
use crate::registry::{Entry, SyscallRegistry};
use crate::session::controller::{BreakpointController, Hit};
use crate::syscalls::{Category, ReturnKind};

pub type BreakpointId = u64;

/// Argument names for syscalls the registry does not know.
const RAW_ARG_NAMES: [&'static str; 6] = ["arg0", "arg1", "arg2", "arg3", "arg4", "arg5"];

/// A stop translated out of the platform debugger's event stream.
#[derive(Debug)]
pub enum StopEvent {
    BreakpointHit { tid: u64, pc: u64, regs: Registers },
    SignalStop { tid: u64, signal: i32 },
    ThreadGone { tid: u64 },
    ProcessExited { code: i32 },
    /// Wait timeout with nothing to report; lets the loop poll for
    /// interrupts.
    Idle,
}

/// How the session lets go of the target at shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownMode {
    /// Launched target: terminate it.
    Kill,
    /// Attached target: detach and leave it running.
    Detach,
}

/// The seam between the tracer core and the platform debugger engine.
/// Implementations own the debugger handle, target, and process, and are
/// responsible for signal forwarding when resuming.
pub trait Debugger: MemoryRead {
    fn arch(&self) -> Arch;

    /// The target's memory, as the decode layer consumes it. Implementors
    /// return `self`.
    fn as_memory(&self) -> &dyn MemoryRead;

    /// Load addresses of `name` in the target (several when the symbol is in
    /// more than one module).
    fn resolve_symbol(&self, name: &str) -> Vec<u64>;

    fn install_breakpoint(&mut self, addr: u64, one_shot: bool) -> Result<BreakpointId>;

    fn remove_breakpoint(&mut self, id: BreakpointId);

    /// Resume the target if needed and block until the next stop.
    fn next_stop(&mut self) -> Result<StopEvent>;

    fn shutdown(&mut self, mode: ShutdownMode) -> Result<()>;
}

pub struct SessionConfig {
    pub filter: Filter,
    pub no_abbrev: bool,
    pub string_limit: usize,
    /// True when the target was attached rather than launched: shutdown
    /// detaches instead of killing.
    pub attached: bool,
}

pub struct Session {
    driver: Box<dyn Debugger>,
    arch: Arch,
    registry: SyscallRegistry,
    config: SessionConfig,
    controller: BreakpointController,
    pairing: PairingTable,
    pipeline: EventPipeline,
    interrupted: Arc<AtomicBool>,
}

impl Session {
    pub fn new(
        driver: Box<dyn Debugger>,
        registry: SyscallRegistry,
        config: SessionConfig,
        pipeline: EventPipeline,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        let arch = driver.arch();
        Self {
            driver,
            arch,
            registry,
            config,
            controller: BreakpointController::new(),
            pairing: PairingTable::new(),
            pipeline,
            interrupted,
        }
    }

    /// Install breakpoints and run the capture loop to completion. Returns
    /// the target's exit code (0 when the session was interrupted or the
    /// target was left running after detach).
    pub fn run(&mut self) -> Result<i32> {
        self.controller.install_entry(self.driver.as_mut(), self.arch)?;

        let mut consecutive_errors = 0u32;
        let exit_code = loop {
            if self.interrupted.load(Ordering::SeqCst) {
                debug!("interrupt observed; shutting down");
                let mode = if self.config.attached {
                    ShutdownMode::Detach
                } else {
                    ShutdownMode::Kill
                };
                self.driver.shutdown(mode)?;
                self.flush_unfinished()?;
                self.pipeline.shutdown()?;
                return Err(TraceError::Interrupted);
            }

            match self.driver.next_stop() {
                Ok(stop) => {
                    consecutive_errors = 0;
                    match stop {
                        StopEvent::BreakpointHit { tid, pc, regs } => {
                            match self.controller.classify(tid, pc) {
                                Hit::Entry => self.on_entry(tid, &regs)?,
                                Hit::Exit => self.on_exit(tid, &regs)?,
                                Hit::Foreign => trace!(tid, pc, "foreign breakpoint stop"),
                            }
                        }
                        StopEvent::SignalStop { tid, signal } => {
                            // The driver forwards the signal on resume; the
                            // loop only records it.
                            debug!(tid, signal, "signal delivered to target");
                        }
                        StopEvent::ThreadGone { tid } => {
                            self.controller.disarm_exit(self.driver.as_mut(), tid);
                            if let Some(snapshot) = self.pairing.thread_gone(tid) {
                                self.emit_unfinished(snapshot)?;
                            }
                        }
                        StopEvent::ProcessExited { code } => break code,
                        StopEvent::Idle => {}
                    }
                }
                Err(e) => {
                    // One bad stop is logged and skipped; a run of them
                    // means the target is not coming back.
                    consecutive_errors += 1;
                    if consecutive_errors >= 5 {
                        return Err(e);
                    }
                    warn!(error = %e, "debugger event error; continuing");
                }
            }
        };

        self.flush_unfinished()?;
        self.pipeline.shutdown()?;
        Ok(exit_code)
    }

    /// Entry-hit: filter, snapshot registers, materialize IN arguments, arm
    /// the exit breakpoint.
    fn on_entry(&mut self, tid: u64, regs: &Registers) -> Result<()> {
        let number = self.arch.syscall_number(regs);
        let schema = self.registry.lookup(number);

        if let Some(entry) = schema {
            if !self.config.filter.accepts(entry.def.name, entry.category) {
                return Ok(());
            }
        } else if !self.config.filter.accepts("", Category::Misc) {
            // An active filter can never match a nameless syscall.
            return Ok(());
        }

        let mut args = [0u64; 6];
        for (i, slot) in args.iter_mut().enumerate() {
            *slot = self.arch.arg(i, regs);
        }

        let rendered = self.render_entry(schema, &args);

        let return_address = match self.arch.return_address(regs, self.driver.as_memory())
        {
            Ok(addr) => addr,
            Err(e) => {
                // No way to observe the return; flush what we have.
                warn!(error = %e, tid, number, "no return address; emitting unfinished");
                let snapshot = self.snapshot(number, schema, args, rendered, tid, 0);
                return self.emit_unfinished(snapshot);
            }
        };

        let snapshot = self.snapshot(number, schema, args, rendered, tid, return_address);

        if let Err(e) = self
            .controller
            .arm_exit(self.driver.as_mut(), tid, return_address)
        {
            warn!(error = %e, tid, "exit breakpoint install failed; emitting unfinished");
            return self.emit_unfinished(snapshot);
        }

        if let Some(displaced) = self.pairing.arm(snapshot) {
            // Two entries without an exit on one thread: the later wins.
            warn!(tid, "duplicate entry-hit; flushing earlier syscall as unfinished");
            self.emit_unfinished(displaced)?;
        }
        Ok(())
    }

    /// Exit-hit: read the return, re-decode OUT/INOUT arguments, emit.
    fn on_exit(&mut self, tid: u64, regs: &Registers) -> Result<()> {
        self.controller.exit_fired(tid);
        let Some(snapshot) = self.pairing.complete(tid) else {
            trace!(tid, "exit-hit with no pending entry");
            return Ok(());
        };

        let raw_ret = self.arch.return_value(regs);
        let error = self.arch.error_indicator(regs);
        // With the carry flag set the register holds a positive errno.
        let retval = if error { -raw_ret } else { raw_ret };

        let event = self.assemble(snapshot, retval, error);
        self.pipeline.deliver(&event)
    }

    fn snapshot(
        &self,
        number: u64,
        schema: Option<Entry>,
        args: [u64; 6],
        rendered: Vec<(&'static str, Value)>,
        tid: u64,
        return_address: u64,
    ) -> EntrySnapshot {
        EntrySnapshot {
            number,
            schema,
            args,
            rendered,
            started: OffsetDateTime::now_utc(),
            t0: Instant::now(),
            tid,
            return_address,
        }
    }

    /// Entry-pass rendering: scalars and pre-call materializations; OUT
    /// parameters hold their raw pointer until the exit pass.
    fn render_entry(&self, schema: Option<Entry>, args: &[u64; 6]) -> Vec<(&'static str, Value)> {
        let Some(entry) = schema else {
            return RAW_ARG_NAMES
                .iter()
                .zip(args.iter())
                .map(|(name, &raw)| (*name, Value::Flags(format!("{raw:#x}"))))
                .collect();
        };

        let mem = self.driver.as_memory();
        entry
            .def
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                let ctx = DecodeCtx {
                    mem,
                    raw: args[i],
                    args,
                    retval: None,
                    no_abbrev: self.config.no_abbrev,
                    string_limit: self.config.string_limit,
                };
                let value = if param.decoder.runs_at_entry() {
                    param.decoder.call(&ctx)
                } else {
                    Value::Pointer(args[i])
                };
                (param.name, value)
            })
            .collect()
    }

    /// Exit-pass: decode the return value and re-render OUT/INOUT params now
    /// that the kernel has filled them in.
    fn assemble(&self, snapshot: EntrySnapshot, retval: i64, error: bool) -> SyscallEvent {
        let duration_us = snapshot.elapsed_us();
        let mem = self.driver.as_memory();
        let mut rendered = snapshot.rendered;

        let (name, category) = match snapshot.schema {
            Some(entry) => (entry.def.name.to_string(), entry.category),
            None => (format!("syscall_{}", snapshot.number), Category::Misc),
        };

        let retval_decoded = if error {
            if self.config.no_abbrev {
                retval.to_string()
            } else {
                decode_errno(retval)
            }
        } else if let Some(entry) = snapshot.schema {
            let ctx = DecodeCtx {
                mem,
                raw: retval as u64,
                args: &snapshot.args,
                retval: Some(retval),
                no_abbrev: self.config.no_abbrev,
                string_limit: self.config.string_limit,
            };
            match entry.def.ret {
                ReturnKind::Int => retval.to_string(),
                ReturnKind::Pointer => format!("{retval:#x}"),
                ReturnKind::Custom(f) => f(retval, &ctx),
            }
        } else {
            retval.to_string()
        };

        if !error && retval >= 0 {
            if let Some(entry) = snapshot.schema {
                for (i, param) in entry.def.params.iter().enumerate() {
                    if !param.decoder.runs_at_exit() {
                        continue;
                    }
                    let ctx = DecodeCtx {
                        mem,
                        raw: snapshot.args[i],
                        args: &snapshot.args,
                        retval: Some(retval),
                        no_abbrev: self.config.no_abbrev,
                        string_limit: self.config.string_limit,
                    };
                    rendered[i] = (param.name, param.decoder.call(&ctx));
                }
            }
        }

        SyscallEvent {
            number: snapshot.number,
            name,
            category,
            args: rendered,
            retval,
            retval_decoded,
            error,
            started: snapshot.started,
            duration_us,
            tid: snapshot.tid,
            unfinished: false,
        }
    }

    fn emit_unfinished(&mut self, snapshot: EntrySnapshot) -> Result<()> {
        let duration_us = snapshot.elapsed_us();
        let (name, category) = match snapshot.schema {
            Some(entry) => (entry.def.name.to_string(), entry.category),
            None => (format!("syscall_{}", snapshot.number), Category::Misc),
        };
        let event = SyscallEvent {
            number: snapshot.number,
            name,
            category,
            args: snapshot.rendered,
            retval: 0,
            retval_decoded: "?".to_string(),
            error: false,
            started: snapshot.started,
            duration_us,
            tid: snapshot.tid,
            unfinished: true,
        };
        self.pipeline.deliver(&event)
    }

    /// On process exit or interrupt, syscalls still awaiting their exit are
    /// flushed as unfinished (e.g. `exit` itself never returns).
    fn flush_unfinished(&mut self) -> Result<()> {
        let mut pending = self.pairing.drain();
        pending.sort_by_key(|s| s.tid);
        for snapshot in pending {
            self.emit_unfinished(snapshot)?;
        }
        Ok(())
    }
}
