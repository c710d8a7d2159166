//! System V IPC and POSIX shared-memory constants.

use super::{EnumTable, FlagTable};

pub const IPC_CMDS: EnumTable = &[
    (0, "IPC_RMID"),
    (1, "IPC_SET"),
    (2, "IPC_STAT"),
];

pub const IPC_FLAGS: FlagTable = &[
    (0o001000, "IPC_CREAT"),
    (0o002000, "IPC_EXCL"),
    (0o004000, "IPC_NOWAIT"),
];

pub const SHM_FLAGS: FlagTable = &[
    (0o010000, "SHM_RDONLY"),
    (0o020000, "SHM_RND"),
];

/// `sem_open`/`shm_open` reuse the open(2) flag word; only these bits are
/// meaningful on Darwin.
pub const POSIX_IPC_OFLAGS: FlagTable = &[
    (0x0200, "O_CREAT"),
    (0x0800, "O_EXCL"),
    (0x0001, "O_WRONLY"),
    (0x0002, "O_RDWR"),
];
