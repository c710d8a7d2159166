//! IPC syscall definitions: pipes, POSIX shared memory and semaphores.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PreCallMem, Scalar};
use crate::syscalls::Direction::In;
use crate::syscalls::{Param, SyscallDef};

pub const IPC_SYSCALLS: &[SyscallDef] = &[
    // Darwin pipe() returns both descriptors in registers; the pointer the
    // wrapper passes is filled in user space, so only the raw argument is
    // shown.
    SyscallDef::new(
        n::SYS_pipe,
        "pipe",
        &[Param::new("fildes", "int *", In, Scalar(p::ptr))],
    ),
    SyscallDef::new(
        n::SYS_shm_open,
        "shm_open",
        &[
            Param::new("name", "const char *", In, PreCallMem(p::path)),
            Param::new("oflag", "int", In, Scalar(p::posix_ipc_oflags)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_shm_unlink,
        "shm_unlink",
        &[Param::new("name", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_sem_open,
        "sem_open",
        &[
            Param::new("name", "const char *", In, PreCallMem(p::path)),
            Param::new("oflag", "int", In, Scalar(p::posix_ipc_oflags)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
            Param::new("value", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sem_close,
        "sem_close",
        &[Param::new("sem", "sem_t *", In, Scalar(p::ptr))],
    ),
    SyscallDef::new(
        n::SYS_sem_unlink,
        "sem_unlink",
        &[Param::new("name", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_sem_wait,
        "sem_wait",
        &[Param::new("sem", "sem_t *", In, Scalar(p::ptr))],
    ),
    SyscallDef::new(
        n::SYS_sem_trywait,
        "sem_trywait",
        &[Param::new("sem", "sem_t *", In, Scalar(p::ptr))],
    ),
    SyscallDef::new(
        n::SYS_sem_post,
        "sem_post",
        &[Param::new("sem", "sem_t *", In, Scalar(p::ptr))],
    ),
];
