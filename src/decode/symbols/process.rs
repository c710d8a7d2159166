//! Process-management constants: wait options, resource limits, priorities,
//! id types.

use super::{EnumTable, FlagTable};

pub const WAIT_OPTIONS: FlagTable = &[
    (0x01, "WNOHANG"),
    (0x02, "WUNTRACED"),
    (0x08, "WCONTINUED"),
    (0x10, "WNOWAIT"),
    (0x20, "WEXITED"),
    (0x40, "WSTOPPED"),
];

pub const RLIMIT_RESOURCES: EnumTable = &[
    (0, "RLIMIT_CPU"),
    (1, "RLIMIT_FSIZE"),
    (2, "RLIMIT_DATA"),
    (3, "RLIMIT_STACK"),
    (4, "RLIMIT_CORE"),
    (5, "RLIMIT_AS"),
    (6, "RLIMIT_MEMLOCK"),
    (7, "RLIMIT_NPROC"),
    (8, "RLIMIT_NOFILE"),
];

pub const RUSAGE_WHO: EnumTable = &[(0, "RUSAGE_SELF"), (0xffff_ffff_ffff_ffff, "RUSAGE_CHILDREN")];

pub const PRIO_WHICH: EnumTable = &[
    (0, "PRIO_PROCESS"),
    (1, "PRIO_PGRP"),
    (2, "PRIO_USER"),
    (3, "PRIO_DARWIN_THREAD"),
    (4, "PRIO_DARWIN_PROCESS"),
];

pub const IDTYPES: EnumTable = &[(0, "P_ALL"), (1, "P_PID"), (2, "P_PGID")];

pub const CSOPS_OPS: EnumTable = &[
    (0, "CS_OPS_STATUS"),
    (1, "CS_OPS_MARKINVALID"),
    (2, "CS_OPS_MARKHARD"),
    (3, "CS_OPS_MARKKILL"),
    (5, "CS_OPS_PIDOFFSET"),
    (6, "CS_OPS_CDHASH"),
    (7, "CS_OPS_PIDPATH"),
    (8, "CS_OPS_ENTITLEMENTS_BLOB"),
    (9, "CS_OPS_MARKRESTRICT"),
    (10, "CS_OPS_SET_STATUS"),
    (11, "CS_OPS_BLOB"),
    (12, "CS_OPS_IDENTITY"),
    (13, "CS_OPS_CLEARINSTALLER"),
    (14, "CS_OPS_CLEARPLATFORM"),
    (16, "CS_OPS_TEAMID"),
];

pub const PTRACE_REQUESTS: EnumTable = &[
    (0, "PT_TRACE_ME"),
    (1, "PT_READ_I"),
    (2, "PT_READ_D"),
    (3, "PT_READ_U"),
    (4, "PT_WRITE_I"),
    (5, "PT_WRITE_D"),
    (6, "PT_WRITE_U"),
    (7, "PT_CONTINUE"),
    (8, "PT_KILL"),
    (9, "PT_STEP"),
    (10, "PT_ATTACH"),
    (11, "PT_DETACH"),
    (12, "PT_SIGEXC"),
    (13, "PT_THUPDATE"),
    (14, "PT_ATTACHEXC"),
    (30, "PT_FORCEQUOTA"),
    (31, "PT_DENY_ATTACH"),
];
