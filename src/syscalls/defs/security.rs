//! Security and code-signing syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PreCallMem, Scalar};
use crate::syscalls::Direction::{In, Out};
use crate::syscalls::{Param, SyscallDef};

pub const SECURITY_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_csops,
        "csops",
        &[
            Param::new("pid", "pid_t", In, Scalar(p::int)),
            Param::new("ops", "uint32_t", In, Scalar(p::csops_op)),
            Param::new("useraddr", "void *", Out, Scalar(p::ptr)),
            Param::new("usersize", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_csops_audittoken,
        "csops_audittoken",
        &[
            Param::new("pid", "pid_t", In, Scalar(p::int)),
            Param::new("ops", "uint32_t", In, Scalar(p::csops_op)),
            Param::new("useraddr", "void *", Out, Scalar(p::ptr)),
            Param::new("usersize", "size_t", In, Scalar(p::uint)),
            Param::new("uaudittoken", "audit_token_t *", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mac_syscall,
        "__mac_syscall",
        &[
            Param::new("policy", "char *", In, PreCallMem(p::path)),
            Param::new("call", "int", In, Scalar(p::int)),
            Param::new("arg", "void *", In, Scalar(p::ptr)),
        ],
    ),
];
