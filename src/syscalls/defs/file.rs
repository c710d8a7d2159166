//! File I/O syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{Composite, PostCallMem, PreCallMem, Scalar};
use crate::syscalls::Direction::{In, InOut, Out};
use crate::syscalls::{Param, ReturnKind, SyscallDef};

pub const FILE_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_read,
        "read",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "void *", Out, Composite(p::buf_out_ret)),
            Param::new("nbyte", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_write,
        "write",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "const void *", In, PreCallMem(p::buf_in_len2)),
            Param::new("nbyte", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_open,
        "open",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flags", "int", In, Scalar(p::open_flags)),
            Param::new("mode", "mode_t", In, Scalar(p::open_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_close,
        "close",
        &[Param::new("fd", "int", In, Scalar(p::fd))],
    ),
    SyscallDef::new(
        n::SYS_link,
        "link",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("link", "const char *", In, PreCallMem(p::path)),
        ],
    ),
    SyscallDef::new(
        n::SYS_unlink,
        "unlink",
        &[Param::new("path", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_chdir,
        "chdir",
        &[Param::new("path", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_fchdir,
        "fchdir",
        &[Param::new("fd", "int", In, Scalar(p::fd))],
    ),
    SyscallDef::new(
        n::SYS_mknod,
        "mknod",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
            Param::new("dev", "dev_t", In, Scalar(p::dev)),
        ],
    ),
    SyscallDef::new(
        n::SYS_chmod,
        "chmod",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_chown,
        "chown",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("owner", "uid_t", In, Scalar(p::int)),
            Param::new("group", "gid_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_access,
        "access",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("amode", "int", In, Scalar(p::access_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_chflags,
        "chflags",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flags", "u_int", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fchflags,
        "fchflags",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("flags", "u_int", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(n::SYS_sync, "sync", &[]),
    SyscallDef::new(
        n::SYS_dup,
        "dup",
        &[Param::new("fd", "int", In, Scalar(p::fd))],
    ),
    SyscallDef::new(
        n::SYS_ioctl,
        "ioctl",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("request", "u_long", In, Scalar(p::hex)),
            Param::new("arg", "caddr_t", In, Scalar(p::hex)),
        ],
    ),
    SyscallDef::new(
        n::SYS_symlink,
        "symlink",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("link", "const char *", In, PreCallMem(p::path)),
        ],
    ),
    SyscallDef::new(
        n::SYS_readlink,
        "readlink",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("buf", "char *", Out, Composite(p::readlink_buf_ret)),
            Param::new("bufsize", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_umask,
        "umask",
        &[Param::new("numask", "mode_t", In, Scalar(p::octal_mode))],
    ),
    SyscallDef::new(
        n::SYS_chroot,
        "chroot",
        &[Param::new("path", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_dup2,
        "dup2",
        &[
            Param::new("from", "int", In, Scalar(p::fd)),
            Param::new("to", "int", In, Scalar(p::fd)),
        ],
    ),
    SyscallDef::returning(
        n::SYS_fcntl,
        "fcntl",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("cmd", "int", In, Scalar(p::fcntl_cmd)),
            Param::new("arg", "long", In, Scalar(p::hex)),
        ],
        ReturnKind::Custom(p::fcntl_return),
    ),
    SyscallDef::new(
        n::SYS_select,
        "select",
        &[
            Param::new("nd", "int", In, Scalar(p::int)),
            Param::new("in", "fd_set *", InOut, Scalar(p::ptr)),
            Param::new("ou", "fd_set *", InOut, Scalar(p::ptr)),
            Param::new("ex", "fd_set *", InOut, Scalar(p::ptr)),
            Param::new("tv", "struct timeval *", In, PreCallMem(p::timeval_in)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fsync,
        "fsync",
        &[Param::new("fd", "int", In, Scalar(p::fd))],
    ),
    SyscallDef::new(
        n::SYS_readv,
        "readv",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("iovp", "struct iovec *", Out, Composite(p::iovec_out_cnt2)),
            Param::new("iovcnt", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_writev,
        "writev",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("iovp", "struct iovec *", In, PreCallMem(p::iovec_in_cnt2)),
            Param::new("iovcnt", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fchown,
        "fchown",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("owner", "uid_t", In, Scalar(p::int)),
            Param::new("group", "gid_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fchmod,
        "fchmod",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_rename,
        "rename",
        &[
            Param::new("from", "const char *", In, PreCallMem(p::path)),
            Param::new("to", "const char *", In, PreCallMem(p::path)),
        ],
    ),
    SyscallDef::new(
        n::SYS_flock,
        "flock",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("how", "int", In, Scalar(p::flock_op)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mkfifo,
        "mkfifo",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mkdir,
        "mkdir",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_rmdir,
        "rmdir",
        &[Param::new("path", "const char *", In, PreCallMem(p::path))],
    ),
    SyscallDef::new(
        n::SYS_utimes,
        "utimes",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("tptr", "struct timeval *", In, PreCallMem(p::timeval_in)),
        ],
    ),
    SyscallDef::new(
        n::SYS_futimes,
        "futimes",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("tptr", "struct timeval *", In, PreCallMem(p::timeval_in)),
        ],
    ),
    SyscallDef::new(
        n::SYS_pread,
        "pread",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "void *", Out, Composite(p::buf_out_ret)),
            Param::new("nbyte", "size_t", In, Scalar(p::uint)),
            Param::new("offset", "off_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_pwrite,
        "pwrite",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "const void *", In, PreCallMem(p::buf_in_len2)),
            Param::new("nbyte", "size_t", In, Scalar(p::uint)),
            Param::new("offset", "off_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_statfs,
        "statfs",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("buf", "struct statfs *", Out, PostCallMem(p::statfs_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fstatfs,
        "fstatfs",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "struct statfs *", Out, PostCallMem(p::statfs_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_stat,
        "stat",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("ub", "struct stat *", Out, PostCallMem(p::stat_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fstat,
        "fstat",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("ub", "struct stat *", Out, PostCallMem(p::stat_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_lstat,
        "lstat",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("ub", "struct stat *", Out, PostCallMem(p::stat_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_pathconf,
        "pathconf",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("name", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fpathconf,
        "fpathconf",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("name", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getdirentries,
        "getdirentries",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "char *", Out, Scalar(p::ptr)),
            Param::new("count", "u_int", In, Scalar(p::uint)),
            Param::new("basep", "long *", Out, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_lseek,
        "lseek",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("offset", "off_t", In, Scalar(p::int)),
            Param::new("whence", "int", In, Scalar(p::seek_whence)),
        ],
    ),
    SyscallDef::new(
        n::SYS_truncate,
        "truncate",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("length", "off_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_ftruncate,
        "ftruncate",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("length", "off_t", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_poll,
        "poll",
        &[
            Param::new("fds", "struct pollfd *", InOut, PostCallMem(p::pollfd_inout)),
            Param::new("nfds", "u_int", In, Scalar(p::uint)),
            Param::new("timeout", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getxattr,
        "getxattr",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("attrname", "const char *", In, PreCallMem(p::path)),
            Param::new("value", "void *", Out, Composite(p::buf_out_ret)),
            Param::new("size", "size_t", In, Scalar(p::uint)),
            Param::new("position", "u_int32_t", In, Scalar(p::uint)),
            Param::new("options", "int", In, Scalar(p::xattr_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setxattr,
        "setxattr",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("attrname", "const char *", In, PreCallMem(p::path)),
            Param::new("value", "const void *", In, PreCallMem(p::buf_in_len2)),
            Param::new("size", "size_t", In, Scalar(p::uint)),
            Param::new("position", "u_int32_t", In, Scalar(p::uint)),
            Param::new("options", "int", In, Scalar(p::xattr_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_listxattr,
        "listxattr",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("namebuf", "char *", Out, Composite(p::buf_out_ret)),
            Param::new("bufsize", "size_t", In, Scalar(p::uint)),
            Param::new("options", "int", In, Scalar(p::xattr_flags)),
        ],
    ),
    SyscallDef::new(n::SYS_kqueue, "kqueue", &[]),
    SyscallDef::new(
        n::SYS_kevent,
        "kevent",
        &[
            Param::new("kq", "int", In, Scalar(p::fd)),
            Param::new(
                "changelist",
                "const struct kevent *",
                In,
                PreCallMem(p::kevent_changelist_cnt2),
            ),
            Param::new("nchanges", "int", In, Scalar(p::int)),
            Param::new(
                "eventlist",
                "struct kevent *",
                Out,
                Composite(p::kevent_eventlist_ret),
            ),
            Param::new("nevents", "int", In, Scalar(p::int)),
            Param::new("timeout", "const struct timespec *", In, PreCallMem(p::timespec_in)),
        ],
    ),
    SyscallDef::new(
        n::SYS_stat64,
        "stat64",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("ub", "struct stat64 *", Out, PostCallMem(p::stat_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fstat64,
        "fstat64",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("ub", "struct stat64 *", Out, PostCallMem(p::stat_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_lstat64,
        "lstat64",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("ub", "struct stat64 *", Out, PostCallMem(p::stat_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getdirentries64,
        "getdirentries64",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "void *", Out, Scalar(p::ptr)),
            Param::new("bufsize", "size_t", In, Scalar(p::uint)),
            Param::new("position", "off_t *", Out, Scalar(p::ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_statfs64,
        "statfs64",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("buf", "struct statfs64 *", Out, PostCallMem(p::statfs_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fstatfs64,
        "fstatfs64",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "struct statfs64 *", Out, PostCallMem(p::statfs_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_read_nocancel,
        "read_nocancel",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "void *", Out, Composite(p::buf_out_ret)),
            Param::new("nbyte", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_write_nocancel,
        "write_nocancel",
        &[
            Param::new("fd", "int", In, Scalar(p::fd)),
            Param::new("buf", "const void *", In, PreCallMem(p::buf_in_len2)),
            Param::new("nbyte", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_open_nocancel,
        "open_nocancel",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flags", "int", In, Scalar(p::open_flags)),
            Param::new("mode", "mode_t", In, Scalar(p::open_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_close_nocancel,
        "close_nocancel",
        &[Param::new("fd", "int", In, Scalar(p::fd))],
    ),
    SyscallDef::new(
        n::SYS_openat,
        "openat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flags", "int", In, Scalar(p::open_flags)),
            Param::new("mode", "mode_t", In, Scalar(p::openat_mode)),
        ],
    ),
    SyscallDef::new(
        n::SYS_renameat,
        "renameat",
        &[
            Param::new("fromfd", "int", In, Scalar(p::dirfd)),
            Param::new("from", "const char *", In, PreCallMem(p::path)),
            Param::new("tofd", "int", In, Scalar(p::dirfd)),
            Param::new("to", "const char *", In, PreCallMem(p::path)),
        ],
    ),
    SyscallDef::new(
        n::SYS_faccessat,
        "faccessat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("amode", "int", In, Scalar(p::access_mode)),
            Param::new("flag", "int", In, Scalar(p::at_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fchmodat,
        "fchmodat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
            Param::new("flag", "int", In, Scalar(p::at_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fchownat,
        "fchownat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("uid", "uid_t", In, Scalar(p::int)),
            Param::new("gid", "gid_t", In, Scalar(p::int)),
            Param::new("flag", "int", In, Scalar(p::at_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_fstatat64,
        "fstatat64",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("ub", "struct stat64 *", Out, PostCallMem(p::stat_out)),
            Param::new("flag", "int", In, Scalar(p::at_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_linkat,
        "linkat",
        &[
            Param::new("fd1", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("fd2", "int", In, Scalar(p::dirfd)),
            Param::new("link", "const char *", In, PreCallMem(p::path)),
            Param::new("flag", "int", In, Scalar(p::at_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_unlinkat,
        "unlinkat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("flag", "int", In, Scalar(p::at_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_readlinkat,
        "readlinkat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("buf", "char *", Out, Composite(p::readlink_buf_ret)),
            Param::new("bufsize", "size_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_symlinkat,
        "symlinkat",
        &[
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("link", "const char *", In, PreCallMem(p::path)),
        ],
    ),
    SyscallDef::new(
        n::SYS_mkdirat,
        "mkdirat",
        &[
            Param::new("fd", "int", In, Scalar(p::dirfd)),
            Param::new("path", "const char *", In, PreCallMem(p::path)),
            Param::new("mode", "mode_t", In, Scalar(p::octal_mode)),
        ],
    ),
];
