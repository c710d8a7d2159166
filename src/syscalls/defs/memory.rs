//! Memory-management syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::Scalar;
use crate::syscalls::Direction::{In, Out};
use crate::syscalls::{Param, ReturnKind, SyscallDef};

pub const MEMORY_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::returning(
        n::SYS_mmap,
        "mmap",
        &[
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("prot", "int", In, Scalar(p::prot_flags)),
            Param::new("flags", "int", In, Scalar(p::map_flags)),
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("pos", "off_t", In, Scalar(p::int)),
        ],
        ReturnKind::Pointer,
    ),
    SyscallDef::new(
        n::SYS_munmap,
        "munmap",
        &[
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mprotect,
        "mprotect",
        &[
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("prot", "int", In, Scalar(p::prot_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_madvise,
        "madvise",
        &[
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("behav", "int", In, Scalar(p::madvise_advice)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mincore,
        "mincore",
        &[
            Param::new("addr", "caddr_t", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("vec", "char *", Out, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_msync,
        "msync",
        &[
            Param::new("addr", "caddr_t", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("flags", "int", In, Scalar(p::msync_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mlock,
        "mlock",
        &[
            Param::new("addr", "caddr_t", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_munlock,
        "munlock",
        &[
            Param::new("addr", "caddr_t", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mlockall,
        "mlockall",
        &[Param::new("how", "int", In, Scalar(p::hex))],
    ),
    SyscallDef::new(n::SYS_munlockall, "munlockall", &[]),
    SyscallDef::new(
        n::SYS_minherit,
        "minherit",
        &[
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("inherit", "int", In, Scalar(p::minherit_value)),
        ],
    ),
];
