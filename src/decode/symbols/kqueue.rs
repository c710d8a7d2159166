//! kqueue/kevent constants.

use super::{EnumTable, FlagTable};

/// Filter identifiers are small negative numbers; the kevent renderer
/// negates before lookup.
pub const EVFILTERS: EnumTable = &[
    (1, "EVFILT_READ"),
    (2, "EVFILT_WRITE"),
    (3, "EVFILT_AIO"),
    (4, "EVFILT_VNODE"),
    (5, "EVFILT_PROC"),
    (6, "EVFILT_SIGNAL"),
    (7, "EVFILT_TIMER"),
    (8, "EVFILT_MACHPORT"),
    (9, "EVFILT_FS"),
    (10, "EVFILT_USER"),
    (12, "EVFILT_VM"),
    (15, "EVFILT_EXCEPT"),
];

pub const EV_FLAGS: FlagTable = &[
    (0x0001, "EV_ADD"),
    (0x0002, "EV_DELETE"),
    (0x0004, "EV_ENABLE"),
    (0x0008, "EV_DISABLE"),
    (0x0010, "EV_ONESHOT"),
    (0x0020, "EV_CLEAR"),
    (0x0040, "EV_RECEIPT"),
    (0x0080, "EV_DISPATCH"),
    (0x0100, "EV_UDATA_SPECIFIC"),
    (0x4000, "EV_ERROR"),
    (0x8000, "EV_EOF"),
];

pub const NOTE_VNODE: FlagTable = &[
    (0x0001, "NOTE_DELETE"),
    (0x0002, "NOTE_WRITE"),
    (0x0004, "NOTE_EXTEND"),
    (0x0008, "NOTE_ATTRIB"),
    (0x0010, "NOTE_LINK"),
    (0x0020, "NOTE_RENAME"),
    (0x0040, "NOTE_REVOKE"),
    (0x0080, "NOTE_NONE"),
    (0x0100, "NOTE_FUNLOCK"),
];

pub const NOTE_PROC: FlagTable = &[
    (0x8000_0000, "NOTE_EXIT"),
    (0x4000_0000, "NOTE_FORK"),
    (0x2000_0000, "NOTE_EXEC"),
    (0x0800_0000, "NOTE_SIGNAL"),
    (0x0400_0000, "NOTE_EXITSTATUS"),
    (0x0200_0000, "NOTE_EXIT_DETAIL"),
];
