//! Miscellaneous syscall definitions: mounts, accounting, reboot.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PreCallMem, Scalar};
use crate::syscalls::Direction::{In, Out};
use crate::syscalls::{Param, SyscallDef};

pub const MISC_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_mount,
        "mount",
        &[
            Param::new("type", "const char *", In, PreCallMem(p::path)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flags", "int", In, Scalar(p::hex)),
            Param::new("data", "caddr_t", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_unmount,
        "unmount",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flags", "int", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getfsstat,
        "getfsstat",
        &[
            Param::new("buf", "struct statfs *", Out, Scalar(p::ptr)),
            Param::new("bufsize", "int", In, Scalar(p::int)),
            Param::new("flags", "int", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_acct,
        "acct",
        &[Param::new("path", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_reboot,
        "reboot",
        &[
            Param::new("opt", "int", In, Scalar(p::hex)),
            Param::new("msg", "char *", In, PreCallMem(p::path)),
        ],
    ),
    SyscallDef::new(
        n::SYS_revoke,
        "revoke",
        &[Param::new("path", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_quotactl,
        "quotactl",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("cmd", "int", In, Scalar(p::hex)),
            Param::new("uid", "int", In, Scalar(p::int)),
            Param::new("arg", "caddr_t", In, Scalar(p::ptr)),
        ],
    ),
];
