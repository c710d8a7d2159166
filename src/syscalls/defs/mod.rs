//! Per-category syscall definition tables.
//!
//! These are data, not logic: each table row names a syscall, its Darwin
//! number, and the decoders for its parameters in declared order. The
//! registry ingests all twelve tables at session start.

pub mod debug;
pub mod file;
pub mod ipc;
pub mod memory;
pub mod misc;
pub mod network;
pub mod process;
pub mod security;
pub mod signal;
pub mod sysinfo;
pub mod thread;
pub mod time;

use crate::syscalls::{Category, SyscallDef};

/// Every definition table paired with its category tag.
pub fn all_tables() -> [(&'static [SyscallDef], Category); 12] {
    [
        (file::FILE_SYSCALLS, Category::File),
        (network::NETWORK_SYSCALLS, Category::Network),
        (process::PROCESS_SYSCALLS, Category::Process),
        (memory::MEMORY_SYSCALLS, Category::Memory),
        (signal::SIGNAL_SYSCALLS, Category::Signal),
        (ipc::IPC_SYSCALLS, Category::Ipc),
        (thread::THREAD_SYSCALLS, Category::Thread),
        (time::TIME_SYSCALLS, Category::Time),
        (sysinfo::SYSINFO_SYSCALLS, Category::Sysinfo),
        (security::SECURITY_SYSCALLS, Category::Security),
        (debug::DEBUG_SYSCALLS, Category::Debug),
        (misc::MISC_SYSCALLS, Category::Misc),
    ]
}
