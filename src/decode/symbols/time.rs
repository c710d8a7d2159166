//! Timer constants.

use super::EnumTable;

pub const ITIMER_WHICH: EnumTable = &[
    (0, "ITIMER_REAL"),
    (1, "ITIMER_VIRTUAL"),
    (2, "ITIMER_PROF"),
];

/// `clock_gettime` clock ids (Darwin).
pub const CLOCK_IDS: EnumTable = &[
    (0, "CLOCK_REALTIME"),
    (6, "CLOCK_MONOTONIC"),
    (4, "CLOCK_MONOTONIC_RAW"),
    (5, "CLOCK_MONOTONIC_RAW_APPROX"),
    (8, "CLOCK_UPTIME_RAW"),
    (9, "CLOCK_UPTIME_RAW_APPROX"),
    (12, "CLOCK_PROCESS_CPUTIME_ID"),
    (16, "CLOCK_THREAD_CPUTIME_ID"),
];
