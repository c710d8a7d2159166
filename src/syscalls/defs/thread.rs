//! Thread and pthread-kernel-support syscall definitions. Most take opaque
//! kernel pointers; they are traced mainly so thread-heavy targets do not
//! fill the output with raw `syscall_NNN` lines.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PreCallMem, Scalar};
use crate::syscalls::Direction::In;
use crate::syscalls::{Param, SyscallDef};

pub const THREAD_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_bsdthread_create,
        "bsdthread_create",
        &[
            Param::new("func", "void *", In, Scalar(p::ptr)),
            Param::new("func_arg", "void *", In, Scalar(p::ptr)),
            Param::new("stack", "void *", In, Scalar(p::ptr)),
            Param::new("pthread", "void *", In, Scalar(p::ptr)),
            Param::new("flags", "uint32_t", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_bsdthread_terminate,
        "bsdthread_terminate",
        &[
            Param::new("stackaddr", "void *", In, Scalar(p::ptr)),
            Param::new("freesize", "size_t", In, Scalar(p::uint)),
            Param::new("port", "uint32_t", In, Scalar(p::uint)),
            Param::new("sem", "uint32_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_bsdthread_register,
        "bsdthread_register",
        &[
            Param::new("threadstart", "void *", In, Scalar(p::ptr)),
            Param::new("wqthread", "void *", In, Scalar(p::ptr)),
            Param::new("flags", "int", In, Scalar(p::hex)),
            Param::new("stack_addr_hint", "void *", In, Scalar(p::ptr)),
            Param::new("targetconc_ptr", "void *", In, Scalar(p::ptr)),
            Param::new("dispatchqueue_offset", "uint32_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(n::SYS_thread_selfid, "thread_selfid", &[]),
    SyscallDef::new(
        n::SYS_pthread_kill,
        "__pthread_kill",
        &[
            Param::new("thread_port", "int", In, Scalar(p::int)),
            Param::new("sig", "int", In, Scalar(p::signal)),
        ],
    ),
    SyscallDef::new(
        n::SYS_pthread_sigmask,
        "__pthread_sigmask",
        &[
            Param::new("how", "int", In, Scalar(p::sigprocmask_how)),
            Param::new("set", "const sigset_t *", In, PreCallMem(p::sigset_ptr)),
            Param::new("oset", "sigset_t *", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(n::SYS_workq_open, "workq_open", &[]),
    SyscallDef::new(
        n::SYS_workq_kernreturn,
        "workq_kernreturn",
        &[
            Param::new("options", "int", In, Scalar(p::int)),
            Param::new("item", "void *", In, Scalar(p::ptr)),
            Param::new("affinity", "int", In, Scalar(p::int)),
            Param::new("prio", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_psynch_mutexwait,
        "psynch_mutexwait",
        &[
            Param::new("mutex", "void *", In, Scalar(p::ptr)),
            Param::new("mgen", "uint32_t", In, Scalar(p::hex)),
            Param::new("ugen", "uint32_t", In, Scalar(p::hex)),
            Param::new("tid", "uint64_t", In, Scalar(p::uint)),
            Param::new("flags", "uint32_t", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_psynch_mutexdrop,
        "psynch_mutexdrop",
        &[
            Param::new("mutex", "void *", In, Scalar(p::ptr)),
            Param::new("mgen", "uint32_t", In, Scalar(p::hex)),
            Param::new("ugen", "uint32_t", In, Scalar(p::hex)),
            Param::new("tid", "uint64_t", In, Scalar(p::uint)),
            Param::new("flags", "uint32_t", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_psynch_cvbroad,
        "psynch_cvbroad",
        &[
            Param::new("cv", "void *", In, Scalar(p::ptr)),
            Param::new("cvlsgen", "uint64_t", In, Scalar(p::hex)),
            Param::new("cvudgen", "uint64_t", In, Scalar(p::hex)),
            Param::new("flags", "uint32_t", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_psynch_cvsignal,
        "psynch_cvsignal",
        &[
            Param::new("cv", "void *", In, Scalar(p::ptr)),
            Param::new("cvlsgen", "uint64_t", In, Scalar(p::hex)),
            Param::new("cvugen", "uint32_t", In, Scalar(p::hex)),
            Param::new("thread_port", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_psynch_cvwait,
        "psynch_cvwait",
        &[
            Param::new("cv", "void *", In, Scalar(p::ptr)),
            Param::new("cvlsgen", "uint64_t", In, Scalar(p::hex)),
            Param::new("cvugen", "uint32_t", In, Scalar(p::hex)),
            Param::new("mutex", "void *", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_ulock_wait,
        "ulock_wait",
        &[
            Param::new("operation", "uint32_t", In, Scalar(p::hex)),
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("value", "uint64_t", In, Scalar(p::uint)),
            Param::new("timeout", "uint32_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_ulock_wake,
        "ulock_wake",
        &[
            Param::new("operation", "uint32_t", In, Scalar(p::hex)),
            Param::new("addr", "void *", In, Scalar(p::ptr)),
            Param::new("wake_value", "uint64_t", In, Scalar(p::uint)),
        ],
    ),
];
