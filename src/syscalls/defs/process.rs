//! Process lifecycle and identity syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PostCallMem, PreCallMem, Scalar};
use crate::syscalls::Direction::{In, Out};
use crate::syscalls::{Param, SyscallDef};

pub const PROCESS_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_exit,
        "exit",
        &[Param::new("rval", "int", In, Scalar(p::int))],
    ),
    SyscallDef::new(n::SYS_fork, "fork", &[]),
    SyscallDef::new(n::SYS_vfork, "vfork", &[]),
    SyscallDef::new(
        n::SYS_wait4,
        "wait4",
        &[
            Param::new("pid", "int", In, Scalar(p::int)),
            Param::new("status", "int *", Out, PostCallMem(p::pid_out)),
            Param::new("options", "int", In, Scalar(p::wait_options)),
            Param::new("rusage", "struct rusage *", Out, PostCallMem(p::rusage_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_execve,
        "execve",
        &[
            Param::new("fname", "const char *", In, PreCallMem(p::path)),
            Param::new("argp", "char *const *", In, PreCallMem(p::string_vector)),
            Param::new("envp", "char *const *", In, PreCallMem(p::string_vector)),
        ],
    ),
    SyscallDef::new(
        n::SYS_posix_spawn,
        "posix_spawn",
        &[
            Param::new("pid", "pid_t *", Out, PostCallMem(p::pid_out)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("adesc", "const posix_spawn_file_actions_t *", In, Scalar(p::ptr)),
            Param::new("attr", "const posix_spawnattr_t *", In, Scalar(p::ptr)),
            Param::new("argv", "char *const *", In, PreCallMem(p::string_vector)),
            Param::new("envp", "char *const *", In, PreCallMem(p::string_vector)),
        ],
    ),
    SyscallDef::new(
        n::SYS_waitid,
        "waitid",
        &[
            Param::new("idtype", "idtype_t", In, Scalar(p::idtype)),
            Param::new("id", "id_t", In, Scalar(p::int)),
            Param::new("infop", "siginfo_t *", Out, Scalar(p::ptr)),
            Param::new("options", "int", In, Scalar(p::wait_options)),
        ],
    ),
    SyscallDef::new(n::SYS_setsid, "setsid", &[]),
    SyscallDef::new(
        n::SYS_getpgid,
        "getpgid",
        &[Param::new("pid", "pid_t", In, Scalar(p::int))],
    ),
    SyscallDef::new(n::SYS_getpgrp, "getpgrp", &[]),
    SyscallDef::new(
        n::SYS_setpgid,
        "setpgid",
        &[
            Param::new("pid", "pid_t", In, Scalar(p::int)),
            Param::new("pgid", "pid_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setuid,
        "setuid",
        &[Param::new("uid", "uid_t", In, Scalar(p::int))],
    ),
    SyscallDef::new(
        n::SYS_setgid,
        "setgid",
        &[Param::new("gid", "gid_t", In, Scalar(p::int))],
    ),
    SyscallDef::new(
        n::SYS_seteuid,
        "seteuid",
        &[Param::new("euid", "uid_t", In, Scalar(p::int))],
    ),
    SyscallDef::new(
        n::SYS_setegid,
        "setegid",
        &[Param::new("egid", "gid_t", In, Scalar(p::int))],
    ),
    SyscallDef::new(
        n::SYS_setreuid,
        "setreuid",
        &[
            Param::new("ruid", "uid_t", In, Scalar(p::int)),
            Param::new("euid", "uid_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setregid,
        "setregid",
        &[
            Param::new("rgid", "gid_t", In, Scalar(p::int)),
            Param::new("egid", "gid_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setgroups,
        "setgroups",
        &[
            Param::new("gidsetsize", "u_int", In, Scalar(p::uint)),
            Param::new("gidset", "gid_t *", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setpriority,
        "setpriority",
        &[
            Param::new("which", "int", In, Scalar(p::prio_which)),
            Param::new("who", "id_t", In, Scalar(p::int)),
            Param::new("prio", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getpriority,
        "getpriority",
        &[
            Param::new("which", "int", In, Scalar(p::prio_which)),
            Param::new("who", "id_t", In, Scalar(p::int)),
        ],
    ),
];
