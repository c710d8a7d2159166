//! A scripted debugger driver: replays a fixed sequence of syscalls against
//! the session loop, with a flat in-memory view of the "target".
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use strace_macos::arch::{Arch, Registers};
use strace_macos::errors::Result;
use strace_macos::memory::MemoryRead;
use strace_macos::session::{BreakpointId, Debugger, ShutdownMode, StopEvent};

/// Address the fake trampoline symbol resolves to.
pub const ENTRY_ADDR: u64 = 0x1_0000;
/// Return sites, one per scripted call.
pub const EXIT_BASE: u64 = 0x2_0000;

const CPSR_CARRY: u64 = 1 << 29;

/// One scripted syscall observation.
#[derive(Debug, Clone)]
pub struct Call {
    pub number: u64,
    pub args: [u64; 6],
    pub ret: i64,
    /// When true, `ret` is a positive errno and the carry flag is set at
    /// exit.
    pub errno: bool,
    pub tid: u64,
    /// When false the exit stop is never delivered (syscall never returns).
    pub returns: bool,
}

impl Call {
    pub fn new(number: u64, args: [u64; 6], ret: i64) -> Self {
        Call {
            number,
            args,
            ret,
            errno: false,
            tid: 1,
            returns: true,
        }
    }

    pub fn failing(number: u64, args: [u64; 6], errno: i64) -> Self {
        Call {
            number,
            args,
            ret: errno,
            errno: true,
            tid: 1,
            returns: true,
        }
    }

    pub fn on_thread(mut self, tid: u64) -> Self {
        self.tid = tid;
        self
    }

    pub fn never_returns(mut self) -> Self {
        self.returns = false;
        self
    }
}

/// What the driver records about the session's breakpoint traffic, for
/// assertions after the run.
#[derive(Default)]
pub struct DriverLog {
    pub installed: Vec<(u64, bool)>,
    pub removed: Vec<BreakpointId>,
    pub shutdown: Option<ShutdownMode>,
}

pub struct ScriptedDebugger {
    script: VecDeque<StopEvent>,
    exit_code: i32,
    memory: Vec<(u64, Vec<u8>)>,
    symbols: HashMap<&'static str, Vec<u64>>,
    next_id: BreakpointId,
    pub log: Arc<Mutex<DriverLog>>,
    /// Set after `interrupt_after` stops have been delivered, when armed.
    interrupt_flag: Option<(Arc<AtomicBool>, usize)>,
    delivered: usize,
}

impl ScriptedDebugger {
    pub fn new(calls: &[Call], exit_code: i32) -> Self {
        let mut script = VecDeque::new();
        for (i, call) in calls.iter().enumerate() {
            let return_address = EXIT_BASE + (i as u64) * 16;

            let mut entry = Registers::new();
            entry.set("x16", call.number);
            for (j, &arg) in call.args.iter().enumerate() {
                entry.set(&format!("x{j}"), arg);
            }
            entry.set("lr", return_address);
            entry.set("sp", 0);
            entry.set("cpsr", 0);
            script.push_back(StopEvent::BreakpointHit {
                tid: call.tid,
                pc: ENTRY_ADDR,
                regs: entry,
            });

            if call.returns {
                let mut exit = Registers::new();
                exit.set("x0", call.ret as u64);
                exit.set("cpsr", if call.errno { CPSR_CARRY } else { 0 });
                exit.set("lr", 0);
                exit.set("sp", 0);
                script.push_back(StopEvent::BreakpointHit {
                    tid: call.tid,
                    pc: return_address,
                    regs: exit,
                });
            }
        }

        let mut symbols = HashMap::new();
        symbols.insert("__syscall", vec![ENTRY_ADDR]);

        ScriptedDebugger {
            script,
            exit_code,
            memory: Vec::new(),
            symbols,
            next_id: 1,
            log: Arc::new(Mutex::new(DriverLog::default())),
            interrupt_flag: None,
            delivered: 0,
        }
    }

    /// Map `data` into the fake target at `addr`.
    pub fn map(mut self, addr: u64, data: &[u8]) -> Self {
        self.memory.push((addr, data.to_vec()));
        self
    }

    /// Raise `flag` after `after` stops, simulating Ctrl-C mid-trace.
    pub fn interrupt(mut self, flag: Arc<AtomicBool>, after: usize) -> Self {
        self.interrupt_flag = Some((flag, after));
        self
    }

    /// Drop the trampoline symbol so resolution fails.
    pub fn without_symbols(mut self) -> Self {
        self.symbols.clear();
        self
    }

    /// Reorder the script so every entry stop is delivered before any exit
    /// stop, with exits in reverse order: concurrent syscalls on different
    /// threads, completing out of entry order.
    pub fn interleave_pairs(mut self) -> Self {
        let (entries, mut exits): (Vec<_>, Vec<_>) =
            self.script.drain(..).partition(|stop| match stop {
                StopEvent::BreakpointHit { pc, .. } => *pc == ENTRY_ADDR,
                _ => false,
            });
        exits.reverse();
        self.script = entries.into_iter().chain(exits).collect();
        self
    }
}

impl MemoryRead for ScriptedDebugger {
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<usize> {
        for (base, data) in &self.memory {
            if addr >= *base && addr < *base + data.len() as u64 {
                let off = (addr - *base) as usize;
                let n = buf.len().min(data.len() - off);
                buf[..n].copy_from_slice(&data[off..off + n]);
                return Ok(n);
            }
        }
        Ok(0)
    }
}

impl Debugger for ScriptedDebugger {
    fn arch(&self) -> Arch {
        Arch::Arm64
    }

    fn as_memory(&self) -> &dyn MemoryRead {
        self
    }

    fn resolve_symbol(&self, name: &str) -> Vec<u64> {
        self.symbols.get(name).cloned().unwrap_or_default()
    }

    fn install_breakpoint(&mut self, addr: u64, one_shot: bool) -> Result<BreakpointId> {
        self.log.lock().unwrap().installed.push((addr, one_shot));
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    fn remove_breakpoint(&mut self, id: BreakpointId) {
        self.log.lock().unwrap().removed.push(id);
    }

    fn next_stop(&mut self) -> Result<StopEvent> {
        if let Some((flag, after)) = &self.interrupt_flag {
            if self.delivered >= *after {
                flag.store(true, Ordering::SeqCst);
                // The session notices before its next wait.
                return Ok(StopEvent::Idle);
            }
        }
        self.delivered += 1;
        match self.script.pop_front() {
            Some(stop) => Ok(stop),
            None => Ok(StopEvent::ProcessExited {
                code: self.exit_code,
            }),
        }
    }

    fn shutdown(&mut self, mode: ShutdownMode) -> Result<()> {
        self.log.lock().unwrap().shutdown = Some(mode);
        Ok(())
    }
}

/// Build a session around the scripted driver with output captured in a
/// shared buffer. Returns (session, buffer).
pub mod harness {
    use std::sync::{Arc, Mutex};

    use strace_macos::filter::Filter;
    use strace_macos::format::EventSink;
    use strace_macos::pipeline::EventPipeline;
    use strace_macos::registry::SyscallRegistry;
    use strace_macos::session::{Session, SessionConfig};

    use super::ScriptedDebugger;

    #[derive(Clone, Default)]
    pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        pub fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl std::io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    pub struct SessionBuilder {
        pub filter: Filter,
        pub no_abbrev: bool,
        pub string_limit: usize,
        pub attached: bool,
        pub interrupted: Arc<std::sync::atomic::AtomicBool>,
    }

    impl Default for SessionBuilder {
        fn default() -> Self {
            Self {
                filter: Filter::all(),
                no_abbrev: false,
                string_limit: 32,
                attached: false,
                interrupted: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            }
        }
    }

    impl SessionBuilder {
        pub fn build(
            self,
            driver: ScriptedDebugger,
            sinks: Vec<Box<dyn EventSink>>,
        ) -> (Session, SharedBuf) {
            let buf = SharedBuf::default();
            let pipeline = EventPipeline::new(Box::new(buf.clone()), sinks);
            let config = SessionConfig {
                filter: self.filter,
                no_abbrev: self.no_abbrev,
                string_limit: self.string_limit,
                attached: self.attached,
            };
            let session = Session::new(
                Box::new(driver),
                SyscallRegistry::new(),
                config,
                pipeline,
                self.interrupted,
            );
            (session, buf)
        }
    }
}
