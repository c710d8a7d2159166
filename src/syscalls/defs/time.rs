//! Time and timer syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{PostCallMem, PreCallMem, Scalar};
use crate::syscalls::Direction::{In, Out};
use crate::syscalls::{Param, SyscallDef};

pub const TIME_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_gettimeofday,
        "gettimeofday",
        &[
            Param::new("tp", "struct timeval *", Out, PostCallMem(p::timeval_out)),
            Param::new("tzp", "struct timezone *", Out, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_settimeofday,
        "settimeofday",
        &[
            Param::new("tv", "const struct timeval *", In, PreCallMem(p::timeval_in)),
            Param::new("tzp", "const struct timezone *", In, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getitimer,
        "getitimer",
        &[
            Param::new("which", "int", In, Scalar(p::itimer_which)),
            Param::new("itv", "struct itimerval *", Out, PostCallMem(p::itimerval_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setitimer,
        "setitimer",
        &[
            Param::new("which", "int", In, Scalar(p::itimer_which)),
            Param::new("itv", "const struct itimerval *", In, PreCallMem(p::itimerval_in)),
            Param::new("oitv", "struct itimerval *", Out, PostCallMem(p::itimerval_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_adjtime,
        "adjtime",
        &[
            Param::new("delta", "const struct timeval *", In, PreCallMem(p::timeval_in)),
            Param::new("olddelta", "struct timeval *", Out, PostCallMem(p::timeval_out)),
        ],
    ),
];
