//! The LLDB-backed [`Debugger`] implementation.
//!
//! Mirrors what the platform debugger is actually good at: synchronous mode,
//! so `continue` blocks until the next stop and the event loop never races
//! the target. Raw `lldb-sys` calls fill the few gaps the safe wrappers do
//! not cover (launch arguments/environment, one-shot breakpoints, register
//! reads).

use std::ffi::CString;
use std::path::Path;

use lldb::{
    lldb_addr_t, SBBreakpoint, SBDebugger, SBError, SBLaunchInfo, SBListener, SBProcess, SBTarget,
    StateType,
};
use tracing::{debug, warn};

use crate::arch::{Arch, Registers};
use crate::errors::{Result, TraceError};
use crate::memory::MemoryRead;
use crate::session::{BreakpointId, Debugger, ShutdownMode, StopEvent};

/// LLDB stop-reason codes (`lldb::StopReason` in the C++ API).
const STOP_REASON_BREAKPOINT: u32 = 3;
const STOP_REASON_SIGNAL: u32 = 2;
const STOP_REASON_EXEC: u32 = 9;

/// The signal LLDB reports for the initial attach stop.
const SIGSTOP_NUM: i32 = 17;

pub struct LldbDebugger {
    debugger: SBDebugger,
    target: SBTarget,
    process: SBProcess,
    arch: Arch,
    /// The target must be resumed before the next wait; false right after a
    /// stop has been delivered but not yet handled.
    needs_resume: bool,
    attach_stop_seen: bool,
    attached: bool,
}

impl LldbDebugger {
    /// Launch `command` under the debugger, stopped at the entry breakpoints
    /// the session will install. `extra_env` carries the interposition
    /// sentinel when follow-spawn is on.
    pub fn launch(command: &[String], extra_env: &[(String, String)]) -> Result<Self> {
        SBDebugger::initialize();
        let debugger = SBDebugger::create(false);
        debugger.set_asynchronous(false);

        let exe = &command[0];
        let target = debugger
            .create_target(exe, None, None, true)
            .map_err(|e| TraceError::Launch {
                command: exe.clone(),
                reason: sb_error_string(&e),
            })?;

        let arch = detect_arch(&target).ok_or_else(|| TraceError::Launch {
            command: exe.clone(),
            reason: "unsupported architecture".into(),
        })?;

        let launch_info = SBLaunchInfo::new();
        set_launch_arguments(&launch_info, &command[1..]);
        set_launch_environment(&launch_info, extra_env);

        let process = target.launch(launch_info).map_err(|e| TraceError::Launch {
            command: exe.clone(),
            reason: sb_error_string(&e),
        })?;
        debug!(pid = process.process_id(), "target launched");

        Ok(Self {
            debugger,
            target,
            process,
            arch,
            needs_resume: false,
            attach_stop_seen: true,
            attached: false,
        })
    }

    /// Attach to a running process by pid.
    pub fn attach(pid: i32) -> Result<Self> {
        SBDebugger::initialize();
        let debugger = SBDebugger::create(false);
        debugger.set_asynchronous(false);

        let target = debugger
            .create_target("", None, None, false)
            .map_err(|e| TraceError::Attach {
                pid,
                reason: sb_error_string(&e),
            })?;

        let process = attach_to_pid(&target, pid as u64).map_err(|e| TraceError::Attach {
            pid,
            reason: sb_error_string(&e),
        })?;

        let arch = detect_arch(&target).ok_or_else(|| TraceError::Attach {
            pid,
            reason: "unsupported architecture".into(),
        })?;
        debug!(pid, "attached");

        Ok(Self {
            debugger,
            target,
            process,
            arch,
            needs_resume: true,
            attach_stop_seen: false,
            attached: true,
        })
    }

    fn capture_registers(&self, tid: u64) -> Registers {
        let mut regs = Registers::new();
        let Some(thread) = self.process.thread_by_id(tid) else {
            return regs;
        };
        let frame = thread.frames().next();
        let Some(frame) = frame else { return regs };

        for group in frame.registers().iter() {
            for reg in group.children() {
                if let Some(name) = reg.name() {
                    let wanted = self.arch.capture_set().contains(&name)
                        || name == "pc"
                        || name == "lr"
                        || name == "sp";
                    if wanted {
                        let value =
                            unsafe { lldb::sys::SBValueGetValueAsUnsigned2(reg.raw, 0) };
                        regs.set(name, value);
                    }
                }
            }
        }
        regs
    }

    fn classify_stop(&mut self) -> Result<StopEvent> {
        match self.process.state() {
            StateType::Exited => {
                return Ok(StopEvent::ProcessExited {
                    code: self.process.exit_status(),
                })
            }
            StateType::Crashed => {
                warn!("target crashed");
                return Ok(StopEvent::ProcessExited { code: 1 });
            }
            StateType::Detached => return Ok(StopEvent::ProcessExited { code: 0 }),
            StateType::Stopped => {}
            other => {
                return Err(TraceError::DebuggerEvent(format!(
                    "unexpected process state {other:?}"
                )))
            }
        }

        // Find the thread that caused the stop.
        for thread in self.process.threads() {
            let reason = unsafe { lldb::sys::SBThreadGetStopReason(thread.raw) as u32 };
            let tid = thread.thread_id() as u64;
            match reason {
                STOP_REASON_BREAKPOINT => {
                    let pc = thread
                        .frames()
                        .next()
                        .map(|f| f.pc_address().load_address(&self.target))
                        .unwrap_or(0);
                    let regs = self.capture_registers(tid);
                    return Ok(StopEvent::BreakpointHit { tid, pc, regs });
                }
                STOP_REASON_SIGNAL => {
                    let signal = unsafe {
                        lldb::sys::SBThreadGetStopReasonDataAtIndex(thread.raw, 0) as i32
                    };
                    if !self.attach_stop_seen && signal == SIGSTOP_NUM {
                        // The synthetic stop that completes an attach.
                        self.attach_stop_seen = true;
                        return Ok(StopEvent::Idle);
                    }
                    return Ok(StopEvent::SignalStop { tid, signal });
                }
                STOP_REASON_EXEC => return Ok(StopEvent::Idle),
                _ => continue,
            }
        }
        Ok(StopEvent::Idle)
    }
}

impl MemoryRead for LldbDebugger {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if !self.process.is_alive() {
            return Err(TraceError::MemoryRead {
                addr,
                reason: "target process is gone".into(),
            });
        }
        let error = SBError::default();
        let n = unsafe {
            lldb::sys::SBProcessReadMemory(
                self.process.raw,
                addr as lldb_addr_t,
                buf.as_mut_ptr() as *mut std::ffi::c_void,
                buf.len(),
                error.raw,
            )
        };
        if error.is_failure() {
            // Unmapped address: soft failure, the caller renders truncation.
            return Ok(0);
        }
        Ok(n)
    }
}

impl Debugger for LldbDebugger {
    fn arch(&self) -> Arch {
        self.arch
    }

    fn as_memory(&self) -> &dyn MemoryRead {
        self
    }

    fn resolve_symbol(&self, name: &str) -> Vec<u64> {
        let mut addrs = Vec::new();
        let context_list = self.target.find_functions(name, 2 /* eFunctionNameTypeBase */);
        for context in context_list.iter() {
            if let Some(symbol) = context.symbol() {
                let addr = symbol.start_address().load_address(&self.target);
                if addr != u64::MAX {
                    addrs.push(addr);
                }
            }
        }
        addrs.sort_unstable();
        addrs.dedup();
        addrs
    }

    fn install_breakpoint(&mut self, addr: u64, one_shot: bool) -> Result<BreakpointId> {
        let bp: SBBreakpoint = self.target.breakpoint_create_by_address(addr as lldb_addr_t);
        if !bp.is_valid() {
            return Err(TraceError::BreakpointInstall {
                addr,
                reason: "breakpoint_create_by_address returned invalid".into(),
            });
        }
        if one_shot {
            unsafe { lldb::sys::SBBreakpointSetOneShot(bp.raw, true) };
        }
        Ok(bp.id() as BreakpointId)
    }

    fn remove_breakpoint(&mut self, id: BreakpointId) {
        self.target.delete_breakpoint(id as i32);
    }

    fn next_stop(&mut self) -> Result<StopEvent> {
        if self.needs_resume {
            self.process.continue_execution().map_err(|e| {
                TraceError::DebuggerEvent(format!("continue failed: {}", sb_error_string(&e)))
            })?;
        }
        self.needs_resume = true;
        self.classify_stop()
    }

    fn shutdown(&mut self, mode: ShutdownMode) -> Result<()> {
        let result = match mode {
            ShutdownMode::Detach => self.process.detach(),
            ShutdownMode::Kill => {
                if self.process.is_alive() {
                    self.process.kill()
                } else {
                    Ok(())
                }
            }
        };
        result.map_err(|e| TraceError::DebuggerEvent(sb_error_string(&e)))
    }
}

impl Drop for LldbDebugger {
    fn drop(&mut self) {
        // Detached/killed by shutdown() on the normal paths; this covers
        // early-error unwinds.
        if self.process.is_alive() {
            let _ = if self.attached {
                self.process.detach()
            } else {
                self.process.kill()
            };
        }
        self.debugger.delete_target(&self.target);
    }
}

fn detect_arch(target: &SBTarget) -> Option<Arch> {
    let triple = unsafe {
        let ptr = lldb::sys::SBTargetGetTriple(target.raw);
        if ptr.is_null() {
            return None;
        }
        std::ffi::CStr::from_ptr(ptr).to_string_lossy().into_owned()
    };
    Arch::detect(&triple)
}

fn attach_to_pid(target: &SBTarget, pid: u64) -> std::result::Result<SBProcess, SBError> {
    let listener = SBListener::new();
    let error = SBError::default();
    let process = SBProcess {
        raw: unsafe { lldb::sys::SBTargetAttachToProcessWithID(target.raw, listener.raw, pid, error.raw) },
    };
    if error.is_failure() || !process.is_valid() {
        Err(error)
    } else {
        Ok(process)
    }
}

fn set_launch_arguments(launch_info: &SBLaunchInfo, args: &[String]) {
    if args.is_empty() {
        return;
    }
    let cstrings: Vec<CString> = args
        .iter()
        .map(|a| CString::new(a.as_str()).unwrap_or_default())
        .collect();
    let mut ptrs: Vec<*const std::os::raw::c_char> =
        cstrings.iter().map(|c| c.as_ptr()).collect();
    ptrs.push(std::ptr::null());
    unsafe { lldb::sys::SBLaunchInfoSetArguments(launch_info.raw, ptrs.as_ptr(), false) };
}

/// Pass the tracer's own environment through, plus the interposition
/// sentinel entries when requested.
fn set_launch_environment(launch_info: &SBLaunchInfo, extra: &[(String, String)]) {
    let entries: Vec<CString> = std::env::vars()
        .chain(extra.iter().cloned())
        .map(|(k, v)| CString::new(format!("{k}={v}")).unwrap_or_default())
        .collect();
    // Keep the working directory of the tracer.
    if let Ok(cwd) = std::env::current_dir() {
        if let Some(cwd) = cwd.to_str() {
            if let Ok(c) = CString::new(cwd) {
                unsafe { lldb::sys::SBLaunchInfoSetWorkingDirectory(launch_info.raw, c.as_ptr()) };
            }
        }
    }
    let mut ptrs: Vec<*const std::os::raw::c_char> =
        entries.iter().map(|c| c.as_ptr()).collect();
    ptrs.push(std::ptr::null());
    unsafe { lldb::sys::SBLaunchInfoSetEnvironmentEntries(launch_info.raw, ptrs.as_ptr(), false) };
}

fn sb_error_string(error: &SBError) -> String {
    error
        .error_string()
        .map(str::to_string)
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Resolve a binary name against PATH the way the shell would, so `strace
/// ls` works without an absolute path.
pub fn resolve_binary(name: &str) -> Option<std::path::PathBuf> {
    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return candidate.exists().then(|| candidate.to_path_buf());
    }
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|p| p.is_file())
}
