//! Breakpoint bookkeeping: the entry breakpoints on the syscall trampoline
//! and the one-shot, thread-scoped exit breakpoints.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::arch::Arch;
use crate::errors::{Result, TraceError};
use crate::session::{BreakpointId, Debugger};

/// How a breakpoint stop relates to the tracer's own breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The trampoline entry breakpoint.
    Entry,
    /// The one-shot exit breakpoint this thread armed at entry.
    Exit,
    /// Not ours (another tool's breakpoint, or a stale stop).
    Foreign,
}

#[derive(Default)]
pub struct BreakpointController {
    entry_addrs: HashSet<u64>,
    /// Armed exit breakpoints keyed by thread id.
    exits: HashMap<u64, (BreakpointId, u64)>,
}

impl BreakpointController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the entry breakpoint at every trampoline symbol that
    /// resolves. Failing to resolve any candidate is fatal: there is nothing
    /// to trace.
    pub fn install_entry(&mut self, driver: &mut dyn Debugger, arch: Arch) -> Result<()> {
        let candidates = arch.entry_symbols();
        for &symbol in candidates {
            for addr in driver.resolve_symbol(symbol) {
                driver
                    .install_breakpoint(addr, false)
                    .map_err(|e| TraceError::BreakpointInstall {
                        addr,
                        reason: e.to_string(),
                    })?;
                debug!(symbol, addr, "entry breakpoint set");
                self.entry_addrs.insert(addr);
            }
            if !self.entry_addrs.is_empty() {
                // The first resolving name wins; older spellings are only
                // fallbacks for older libsystem builds.
                break;
            }
        }
        if self.entry_addrs.is_empty() {
            return Err(TraceError::SymbolResolution {
                tried: candidates.iter().map(|s| s.to_string()).collect(),
            });
        }
        Ok(())
    }

    pub fn classify(&self, tid: u64, pc: u64) -> Hit {
        if let Some(&(_, addr)) = self.exits.get(&tid) {
            if addr == pc {
                return Hit::Exit;
            }
        }
        if self.entry_addrs.contains(&pc) {
            return Hit::Entry;
        }
        Hit::Foreign
    }

    /// Arm the one-shot exit breakpoint for `tid` at `addr`. A leftover
    /// breakpoint from a displaced entry is evicted first.
    pub fn arm_exit(&mut self, driver: &mut dyn Debugger, tid: u64, addr: u64) -> Result<()> {
        self.disarm_exit(driver, tid);
        let id = driver
            .install_breakpoint(addr, true)
            .map_err(|e| TraceError::BreakpointInstall {
                addr,
                reason: e.to_string(),
            })?;
        self.exits.insert(tid, (id, addr));
        Ok(())
    }

    /// The exit breakpoint fired (the backend deletes one-shots itself);
    /// drop the bookkeeping.
    pub fn exit_fired(&mut self, tid: u64) {
        self.exits.remove(&tid);
    }

    /// Remove a still-armed exit breakpoint, if any.
    pub fn disarm_exit(&mut self, driver: &mut dyn Debugger, tid: u64) {
        if let Some((id, addr)) = self.exits.remove(&tid) {
            warn!(tid, addr, "evicting orphaned exit breakpoint");
            driver.remove_breakpoint(id);
        }
    }

    pub fn armed_exits(&self) -> usize {
        self.exits.len()
    }
}
