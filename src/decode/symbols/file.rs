//! File-subsystem constants: open flags, modes, seek, *at() dirfds, fcntl,
//! flock, poll.

use super::{decode_enum, decode_flags, EnumTable, FlagTable};

/// Special dirfd meaning "relative to the current working directory".
pub const AT_FDCWD: i64 = -2;

/// Access-mode mask inside the open flag word.
const O_ACCMODE: u64 = 0x3;

/// Open flags beyond the access mode (Darwin values).
pub const O_FLAGS: FlagTable = &[
    (0x0004, "O_NONBLOCK"),
    (0x0008, "O_APPEND"),
    (0x0010, "O_SHLOCK"),
    (0x0020, "O_EXLOCK"),
    (0x0040, "O_ASYNC"),
    (0x0080, "O_SYNC"),
    (0x0100, "O_NOFOLLOW"),
    (0x0200, "O_CREAT"),
    (0x0400, "O_TRUNC"),
    (0x0800, "O_EXCL"),
    (0x0000_8000, "O_EVTONLY"),
    (0x0002_0000, "O_NOCTTY"),
    (0x0010_0000, "O_DIRECTORY"),
    (0x0020_0000, "O_SYMLINK"),
    (0x0040_0000, "O_DSYNC"),
    (0x0100_0000, "O_CLOEXEC"),
    (0x2000_0000, "O_NOFOLLOW_ANY"),
    (0x4000_0000, "O_EXEC"),
];

/// File-type bits of `st_mode`.
pub const S_IFMT: u32 = 0o170000;

pub const S_FILE_TYPES: EnumTable = &[
    (0o010000, "S_IFIFO"),
    (0o020000, "S_IFCHR"),
    (0o040000, "S_IFDIR"),
    (0o060000, "S_IFBLK"),
    (0o100000, "S_IFREG"),
    (0o120000, "S_IFLNK"),
    (0o140000, "S_IFSOCK"),
];

pub const SEEK_WHENCE: EnumTable = &[
    (0, "SEEK_SET"),
    (1, "SEEK_CUR"),
    (2, "SEEK_END"),
    (3, "SEEK_HOLE"),
    (4, "SEEK_DATA"),
];

pub const AT_FLAGS: FlagTable = &[
    (0x0010, "AT_EACCESS"),
    (0x0020, "AT_SYMLINK_NOFOLLOW"),
    (0x0040, "AT_SYMLINK_FOLLOW"),
    (0x0080, "AT_REMOVEDIR"),
];

pub const ACCESS_MODES: FlagTable = &[
    (0, "F_OK"),
    (1, "X_OK"),
    (2, "W_OK"),
    (4, "R_OK"),
];

pub const FCNTL_COMMANDS: EnumTable = &[
    (0, "F_DUPFD"),
    (1, "F_GETFD"),
    (2, "F_SETFD"),
    (3, "F_GETFL"),
    (4, "F_SETFL"),
    (5, "F_GETOWN"),
    (6, "F_SETOWN"),
    (7, "F_GETLK"),
    (8, "F_SETLK"),
    (9, "F_SETLKW"),
    (42, "F_PREALLOCATE"),
    (43, "F_SETSIZE"),
    (44, "F_RDADVISE"),
    (45, "F_RDAHEAD"),
    (48, "F_NOCACHE"),
    (49, "F_LOG2PHYS"),
    (50, "F_GETPATH"),
    (51, "F_FULLFSYNC"),
    (59, "F_ADDFILESIGS"),
    (61, "F_GETPROTECTIONCLASS"),
    (62, "F_SETPROTECTIONCLASS"),
    (67, "F_DUPFD_CLOEXEC"),
    (97, "F_BARRIERFSYNC"),
];

pub const FD_FLAGS: FlagTable = &[(1, "FD_CLOEXEC")];

pub const FLOCK_OPS: FlagTable = &[
    (0x01, "LOCK_SH"),
    (0x02, "LOCK_EX"),
    (0x04, "LOCK_NB"),
    (0x08, "LOCK_UN"),
];

pub const POLL_EVENTS: FlagTable = &[
    (0x0001, "POLLIN"),
    (0x0002, "POLLPRI"),
    (0x0004, "POLLOUT"),
    (0x0008, "POLLERR"),
    (0x0010, "POLLHUP"),
    (0x0020, "POLLNVAL"),
    (0x0040, "POLLRDNORM"),
    (0x0080, "POLLRDBAND"),
    (0x0100, "POLLWRBAND"),
    (0x0200, "POLLEXTEND"),
    (0x0400, "POLLATTRIB"),
    (0x0800, "POLLNLINK"),
    (0x1000, "POLLWRITE"),
];

pub const XATTR_FLAGS: FlagTable = &[
    (0x0001, "XATTR_NOFOLLOW"),
    (0x0002, "XATTR_CREATE"),
    (0x0004, "XATTR_REPLACE"),
];

/// Decode an open(2) flag word. The access mode lives in the low two bits
/// and is mutually exclusive, so it is rendered first and the remaining bits
/// go through the generic flag decoder.
pub fn decode_open_flags(flags: u64) -> String {
    let accmode = match flags & O_ACCMODE {
        0 => "O_RDONLY",
        1 => "O_WRONLY",
        2 => "O_RDWR",
        _ => "O_ACCMODE",
    };
    let rest = flags & !O_ACCMODE;
    if rest == 0 {
        return accmode.to_string();
    }
    format!("{accmode}|{}", decode_flags(rest, O_FLAGS))
}

/// Decode `st_mode` (or a mode_t argument that carries type bits) as
/// `S_IFREG|0644`. Plain permission words render as bare octal.
pub fn decode_file_mode(mode: u32) -> String {
    let file_type = mode & S_IFMT;
    let perms = mode & 0o7777;
    if file_type == 0 {
        return format!("0{perms:03o}");
    }
    let type_sym = decode_enum(file_type as u64, S_FILE_TYPES, "S_IFMT");
    format!("{type_sym}|0{perms:03o}")
}

/// Decode the dirfd argument of the *at() family: `AT_FDCWD` or the number.
pub fn decode_dirfd(fd: i64) -> String {
    if fd == AT_FDCWD {
        "AT_FDCWD".to_string()
    } else {
        fd.to_string()
    }
}

/// Decode a Darwin dev_t (8-bit major, 24-bit minor) as `makedev(M, m)`.
pub fn decode_dev(dev: i32) -> String {
    if dev == 0 {
        return "0".to_string();
    }
    let major = (dev >> 24) & 0xff;
    let minor = dev & 0x00ff_ffff;
    format!("makedev({major}, {minor})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_flags_keep_access_mode_first() {
        assert_eq!(decode_open_flags(0), "O_RDONLY");
        assert_eq!(decode_open_flags(0x601), "O_WRONLY|O_CREAT|O_TRUNC");
        assert_eq!(decode_open_flags(0x0100_0002), "O_RDWR|O_CLOEXEC");
    }

    #[test]
    fn file_mode_renders_type_and_octal_permissions() {
        assert_eq!(decode_file_mode(0o100644), "S_IFREG|0644");
        assert_eq!(decode_file_mode(0o040755), "S_IFDIR|0755");
        assert_eq!(decode_file_mode(0o644), "0644");
    }

    #[test]
    fn dirfd_special_cases_at_fdcwd() {
        assert_eq!(decode_dirfd(-2), "AT_FDCWD");
        assert_eq!(decode_dirfd(5), "5");
    }

    #[test]
    fn dev_splits_major_and_minor() {
        assert_eq!(decode_dev(0x0100_0003), "makedev(1, 3)");
        assert_eq!(decode_dev(0), "0");
    }
}
