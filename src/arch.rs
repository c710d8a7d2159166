//! Architecture adapters for the two supported macOS ABIs.
//!
//! All architecture-specific knowledge lives here: which register carries the
//! syscall number at the trampoline, the argument register order of the
//! kernel calling convention, how the kernel flags an errno return, and where
//! the return address of the in-flight call can be found. The rest of the
//! tracer only ever speaks in terms of "argument i" and "the return value".

use std::collections::HashMap;

use crate::errors::{Result, TraceError};
use crate::memory::{read_u64, MemoryRead};

/// ARM64 CPSR carry bit; the kernel sets it when the return is a negated errno.
const CPSR_CARRY: u64 = 1 << 29;
/// x86-64 RFLAGS carry bit, same contract.
const RFLAGS_CARRY: u64 = 1 << 0;

/// A point-in-time snapshot of the registers the tracer cares about,
/// captured at a breakpoint stop. Keys are lowercase register names.
#[derive(Debug, Clone, Default)]
pub struct Registers {
    values: HashMap<String, u64>,
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: u64) {
        self.values.insert(name.to_ascii_lowercase(), value);
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.values.get(name).copied()
    }

    fn get_or_zero(&self, name: &str) -> u64 {
        self.get(name).unwrap_or(0)
    }
}

impl FromIterator<(String, u64)> for Registers {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut regs = Registers::new();
        for (name, value) in iter {
            regs.set(&name, value);
        }
        regs
    }
}

/// The supported architectures. Variants, not a trait: the capability set is
/// closed and tiny, and exhaustive matching keeps decoders free of
/// per-architecture branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Arm64,
    X86_64,
}

impl Arch {
    /// Detect the architecture from an LLDB target triple such as
    /// `arm64-apple-macosx14.0.0` or `x86_64-apple-macosx12.0.0`.
    pub fn detect(triple: &str) -> Option<Arch> {
        match triple.split('-').next()? {
            "arm64" | "arm64e" | "aarch64" => Some(Arch::Arm64),
            "x86_64" => Some(Arch::X86_64),
            _ => None,
        }
    }

    /// Ordered candidate symbol names for the BSD syscall trampoline in
    /// libsystem. The name has varied across macOS releases, so the
    /// controller tries each in order and installs on every one that
    /// resolves.
    pub fn entry_symbols(self) -> &'static [&'static str] {
        // Identical on both ABIs today; kept per-arch because they have
        // diverged before and the adapter is the only place allowed to know.
        &["__syscall", "_syscall", "syscall"]
    }

    /// Register names the session must capture on every stop for this
    /// architecture. Superset of what the accessor methods consume.
    pub fn capture_set(self) -> &'static [&'static str] {
        match self {
            Arch::Arm64 => &[
                "x0", "x1", "x2", "x3", "x4", "x5", "x16", "lr", "sp", "cpsr",
            ],
            Arch::X86_64 => &[
                "rdi", "rsi", "rdx", "r10", "r8", "r9", "rax", "rsp", "rflags",
            ],
        }
    }

    /// The syscall number at trampoline entry: x16 on ARM64, rax on x86-64.
    pub fn syscall_number(self, regs: &Registers) -> u64 {
        match self {
            Arch::Arm64 => regs.get_or_zero("x16"),
            Arch::X86_64 => regs.get_or_zero("rax"),
        }
    }

    /// Argument `i` (0-based, i < 6) in the kernel calling convention.
    pub fn arg(self, i: usize, regs: &Registers) -> u64 {
        let name = match self {
            Arch::Arm64 => ["x0", "x1", "x2", "x3", "x4", "x5"].get(i).copied(),
            Arch::X86_64 => ["rdi", "rsi", "rdx", "r10", "r8", "r9"].get(i).copied(),
        };
        name.map(|n| regs.get_or_zero(n)).unwrap_or(0)
    }

    /// The integer return value at the exit breakpoint, sign-extended.
    pub fn return_value(self, regs: &Registers) -> i64 {
        let raw = match self {
            Arch::Arm64 => regs.get_or_zero("x0"),
            Arch::X86_64 => regs.get_or_zero("rax"),
        };
        raw as i64
    }

    /// Whether the kernel flagged the return as a negated errno. Both ABIs
    /// use a carry-style bit in the status register.
    pub fn error_indicator(self, regs: &Registers) -> bool {
        match self {
            Arch::Arm64 => regs.get_or_zero("cpsr") & CPSR_CARRY != 0,
            Arch::X86_64 => regs.get_or_zero("rflags") & RFLAGS_CARRY != 0,
        }
    }

    /// The address the trampoline will return to, used to arm the one-shot
    /// exit breakpoint. The link register on ARM64; the word at the top of
    /// the stack on x86-64 (the `call` pushed it).
    pub fn return_address(self, regs: &Registers, mem: &dyn MemoryRead) -> Result<u64> {
        match self {
            Arch::Arm64 => regs.get("lr").ok_or(TraceError::DebuggerEvent(
                "link register missing from stop snapshot".into(),
            )),
            Arch::X86_64 => {
                let sp = regs.get("rsp").ok_or(TraceError::DebuggerEvent(
                    "stack pointer missing from stop snapshot".into(),
                ))?;
                read_u64(mem, sp)?.ok_or(TraceError::MemoryRead {
                    addr: sp,
                    reason: "return address slot not mapped".into(),
                })
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRead;

    struct FlatMemory(Vec<u8>);

    impl MemoryRead for FlatMemory {
        fn read(&self, addr: u64, buf: &mut [u8]) -> Result<usize> {
            let start = addr as usize;
            if start >= self.0.len() {
                return Ok(0);
            }
            let n = buf.len().min(self.0.len() - start);
            buf[..n].copy_from_slice(&self.0[start..start + n]);
            Ok(n)
        }
    }

    #[test]
    fn detects_darwin_triples() {
        assert_eq!(Arch::detect("arm64-apple-macosx14.0.0"), Some(Arch::Arm64));
        assert_eq!(Arch::detect("arm64e-apple-macosx13.0.0"), Some(Arch::Arm64));
        assert_eq!(
            Arch::detect("x86_64-apple-macosx12.0.0"),
            Some(Arch::X86_64)
        );
        assert_eq!(Arch::detect("riscv64-unknown-linux"), None);
    }

    #[test]
    fn arm64_reads_number_args_and_carry() {
        let mut regs = Registers::new();
        regs.set("x16", 5);
        regs.set("x0", 42);
        regs.set("x1", 43);
        regs.set("cpsr", CPSR_CARRY);
        assert_eq!(Arch::Arm64.syscall_number(&regs), 5);
        assert_eq!(Arch::Arm64.arg(0, &regs), 42);
        assert_eq!(Arch::Arm64.arg(1, &regs), 43);
        assert_eq!(Arch::Arm64.arg(5, &regs), 0);
        assert!(Arch::Arm64.error_indicator(&regs));
    }

    #[test]
    fn x86_return_address_comes_from_stack() {
        let mut stack = vec![0u8; 64];
        stack[8..16].copy_from_slice(&0x1000_2000u64.to_le_bytes());
        let mem = FlatMemory(stack);
        let mut regs = Registers::new();
        regs.set("rsp", 8);
        let addr = Arch::X86_64.return_address(&regs, &mem).unwrap();
        assert_eq!(addr, 0x1000_2000);
    }

    #[test]
    fn arm64_return_address_is_lr() {
        let mut regs = Registers::new();
        regs.set("lr", 0xdead_beef);
        let mem = FlatMemory(Vec::new());
        assert_eq!(
            Arch::Arm64.return_address(&regs, &mem).unwrap(),
            0xdead_beef
        );
    }

    #[test]
    fn negative_returns_sign_extend() {
        let mut regs = Registers::new();
        regs.set("rax", (-2i64) as u64);
        assert_eq!(Arch::X86_64.return_value(&regs), -2);
    }
}
