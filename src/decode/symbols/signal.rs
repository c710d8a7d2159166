//! Signal names, sigaction flags, sigprocmask operations.

use super::{decode_enum, EnumTable, FlagTable};

pub const SIGNALS: EnumTable = &[
    (1, "SIGHUP"),
    (2, "SIGINT"),
    (3, "SIGQUIT"),
    (4, "SIGILL"),
    (5, "SIGTRAP"),
    (6, "SIGABRT"),
    (7, "SIGEMT"),
    (8, "SIGFPE"),
    (9, "SIGKILL"),
    (10, "SIGBUS"),
    (11, "SIGSEGV"),
    (12, "SIGSYS"),
    (13, "SIGPIPE"),
    (14, "SIGALRM"),
    (15, "SIGTERM"),
    (16, "SIGURG"),
    (17, "SIGSTOP"),
    (18, "SIGTSTP"),
    (19, "SIGCONT"),
    (20, "SIGCHLD"),
    (21, "SIGTTIN"),
    (22, "SIGTTOU"),
    (23, "SIGIO"),
    (24, "SIGXCPU"),
    (25, "SIGXFSZ"),
    (26, "SIGVTALRM"),
    (27, "SIGPROF"),
    (28, "SIGWINCH"),
    (29, "SIGINFO"),
    (30, "SIGUSR1"),
    (31, "SIGUSR2"),
];

pub const SA_FLAGS: FlagTable = &[
    (0x0001, "SA_ONSTACK"),
    (0x0002, "SA_RESTART"),
    (0x0004, "SA_RESETHAND"),
    (0x0008, "SA_NOCLDSTOP"),
    (0x0010, "SA_NODEFER"),
    (0x0020, "SA_NOCLDWAIT"),
    (0x0040, "SA_SIGINFO"),
];

pub const SIGPROCMASK_HOW: EnumTable = &[
    (1, "SIG_BLOCK"),
    (2, "SIG_UNBLOCK"),
    (3, "SIG_SETMASK"),
];

/// Special sigaction handler values.
pub const SIG_DFL: u64 = 0;
pub const SIG_IGN: u64 = 1;

pub fn decode_signal(signo: u64) -> String {
    decode_enum(signo, SIGNALS, "SIG")
}

/// Render a signal mask as the set of blocked signal names, strace style:
/// `[INT TERM]`, `[]`, or `~[RTMIN]`-like full sets as `[ALL]`.
pub fn decode_sigset(mask: u64) -> String {
    if mask == 0 {
        return "[]".to_string();
    }
    if mask == u64::MAX || mask as u32 == u32::MAX {
        return "[ALL]".to_string();
    }
    let names: Vec<&str> = SIGNALS
        .iter()
        .filter(|(signo, _)| mask & (1u64 << (signo - 1)) != 0)
        .map(|(_, name)| name.trim_start_matches("SIG"))
        .collect();
    format!("[{}]", names.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names_decode() {
        assert_eq!(decode_signal(9), "SIGKILL");
        assert_eq!(decode_signal(64), "SIG_64");
    }

    #[test]
    fn sigsets_render_short_names() {
        assert_eq!(decode_sigset(0), "[]");
        let mask = (1u64 << 1) | (1u64 << 14); // SIGINT is 2, SIGTERM is 15
        assert_eq!(decode_sigset(mask), "[INT TERM]");
    }
}
