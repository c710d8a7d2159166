//! Debugging and kernel-tracing syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::Scalar;
use crate::syscalls::Direction::In;
use crate::syscalls::{Param, SyscallDef};

pub const DEBUG_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_ptrace,
        "ptrace",
        &[
            Param::new("req", "int", In, Scalar(p::ptrace_request)),
            Param::new("pid", "pid_t", In, Scalar(p::int)),
            Param::new("addr", "caddr_t", In, Scalar(p::ptr)),
            Param::new("data", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_kdebug_trace,
        "kdebug_trace",
        &[
            Param::new("code", "uint32_t", In, Scalar(p::hex)),
            Param::new("arg1", "u_long", In, Scalar(p::hex)),
            Param::new("arg2", "u_long", In, Scalar(p::hex)),
            Param::new("arg3", "u_long", In, Scalar(p::hex)),
            Param::new("arg4", "u_long", In, Scalar(p::hex)),
        ],
    ),
];
