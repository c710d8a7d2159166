//! Signal syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PostCallMem, PreCallMem, Scalar};
use crate::syscalls::Direction::{In, Out};
use crate::syscalls::{Param, SyscallDef};

pub const SIGNAL_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_kill,
        "kill",
        &[
            Param::new("pid", "pid_t", In, Scalar(p::int)),
            Param::new("signum", "int", In, Scalar(p::signal)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sigaction,
        "sigaction",
        &[
            Param::new("signum", "int", In, Scalar(p::signal)),
            Param::new("nsa", "const struct sigaction *", In, PreCallMem(p::sigaction_in)),
            Param::new("osa", "struct sigaction *", Out, PostCallMem(p::sigaction_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sigprocmask,
        "sigprocmask",
        &[
            Param::new("how", "int", In, Scalar(p::sigprocmask_how)),
            Param::new("mask", "const sigset_t *", In, PreCallMem(p::sigset_ptr)),
            Param::new("omask", "sigset_t *", Out, PostCallMem(p::sigset_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sigpending,
        "sigpending",
        &[Param::new("set", "sigset_t *", Out, PostCallMem(p::sigset_out))],
    ),
    SyscallDef::new(
        n::SYS_sigsuspend,
        "sigsuspend",
        &[Param::new("mask", "const sigset_t *", In, PreCallMem(p::sigset_ptr))],
    ),
    SyscallDef::new(
        n::SYS_sigaltstack,
        "sigaltstack",
        &[
            Param::new("nss", "const stack_t *", In, Scalar(p::ptr)),
            Param::new("oss", "stack_t *", Out, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sigreturn,
        "sigreturn",
        &[
            Param::new("uctx", "struct ucontext *", In, Scalar(p::ptr)),
            Param::new("infostyle", "int", In, Scalar(p::int)),
        ],
    ),
];
