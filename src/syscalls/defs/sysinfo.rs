//! System-information syscall definitions: identity getters, sysctl,
//! resource usage and limits.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PostCallMem, PreCallMem, Scalar};
use crate::syscalls::Direction::{In, InOut, Out};
use crate::syscalls::{Param, SyscallDef};

pub const SYSINFO_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(n::SYS_getpid, "getpid", &[]),
    SyscallDef::new(n::SYS_getppid, "getppid", &[]),
    SyscallDef::new(n::SYS_getuid, "getuid", &[]),
    SyscallDef::new(n::SYS_geteuid, "geteuid", &[]),
    SyscallDef::new(n::SYS_getgid, "getgid", &[]),
    SyscallDef::new(n::SYS_getegid, "getegid", &[]),
    SyscallDef::new(n::SYS_getdtablesize, "getdtablesize", &[]),
    SyscallDef::new(n::SYS_issetugid, "issetugid", &[]),
    SyscallDef::new(
        n::SYS_getgroups,
        "getgroups",
        &[
            Param::new("gidsetsize", "u_int", In, Scalar(p::uint)),
            Param::new("gidset", "gid_t *", Out, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getlogin,
        "getlogin",
        &[
            Param::new("namebuf", "char *", Out, PostCallMem(p::cstring_out)),
            Param::new("namelen", "u_int", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sysctl,
        "sysctl",
        &[
            Param::new("name", "int *", In, Scalar(p::ptr)),
            Param::new("namelen", "u_int", In, Scalar(p::uint)),
            Param::new("old", "void *", Out, Scalar(p::ptr)),
            Param::new("oldlenp", "size_t *", InOut, Scalar(p::ptr)),
            Param::new("new", "const void *", In, Scalar(p::ptr)),
            Param::new("newlen", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sysctlbyname,
        "sysctlbyname",
        &[
            Param::new("name", "const char *", In, PreCallMem(p::path)),
            Param::new("namelen", "size_t", In, Scalar(p::uint)),
            Param::new("old", "void *", Out, Scalar(p::ptr)),
            Param::new("oldlenp", "size_t *", InOut, Scalar(p::ptr)),
            Param::new("new", "const void *", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getrusage,
        "getrusage",
        &[
            Param::new("who", "int", In, Scalar(p::rusage_who)),
            Param::new("rusage", "struct rusage *", Out, PostCallMem(p::rusage_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getrlimit,
        "getrlimit",
        &[
            Param::new("which", "u_int", In, Scalar(p::rlimit_resource)),
            Param::new("rlp", "struct rlimit *", Out, PostCallMem(p::rlimit_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setrlimit,
        "setrlimit",
        &[
            Param::new("which", "u_int", In, Scalar(p::rlimit_resource)),
            Param::new("rlp", "const struct rlimit *", In, PreCallMem(p::rlimit_in)),
        ],
    ),
    SyscallDef::new(
        n::SYS_gethostuuid,
        "gethostuuid",
        &[
            Param::new("uuid_buf", "unsigned char *", Out, Scalar(p::ptr)),
            Param::new("timeout", "const struct timespec *", In, PreCallMem(p::timespec_in)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getentropy,
        "getentropy",
        &[
            Param::new("buffer", "void *", Out, Scalar(p::ptr)),
            Param::new("size", "size_t", In, Scalar(p::uint)),
        ],
    ),
];
