//! Network syscall definitions.

use crate::syscalls::numbers as n;
use crate::syscalls::params as p;
use crate::syscalls::Decoder::{Composite, PostCallMem, PreCallMem, Scalar};
use crate::syscalls::Direction::{In, InOut, Out};
use crate::syscalls::{Param, SyscallDef};

pub const NETWORK_SYSCALLS: &[SyscallDef] = &[
    SyscallDef::new(
        n::SYS_socket,
        "socket",
        &[
            Param::new("domain", "int", In, Scalar(p::socket_family)),
            Param::new("type", "int", In, Scalar(p::socket_type)),
            Param::new("protocol", "int", In, Scalar(p::socket_protocol)),
        ],
    ),
    SyscallDef::new(
        n::SYS_connect,
        "connect",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new(
                "name",
                "const struct sockaddr *",
                In,
                PreCallMem(p::sockaddr_in_len2),
            ),
            Param::new("namelen", "socklen_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_bind,
        "bind",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new(
                "name",
                "const struct sockaddr *",
                In,
                PreCallMem(p::sockaddr_in_len2),
            ),
            Param::new("namelen", "socklen_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_listen,
        "listen",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("backlog", "int", In, Scalar(p::int)),
        ],
    ),
    SyscallDef::new(
        n::SYS_accept,
        "accept",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("name", "struct sockaddr *", Out, PostCallMem(p::sockaddr_out)),
            Param::new("anamelen", "socklen_t *", InOut, PostCallMem(p::socklen_ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getpeername,
        "getpeername",
        &[
            Param::new("fdes", "int", In, Scalar(p::fd)),
            Param::new("asa", "struct sockaddr *", Out, PostCallMem(p::sockaddr_out)),
            Param::new("alen", "socklen_t *", InOut, PostCallMem(p::socklen_ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getsockname,
        "getsockname",
        &[
            Param::new("fdes", "int", In, Scalar(p::fd)),
            Param::new("asa", "struct sockaddr *", Out, PostCallMem(p::sockaddr_out)),
            Param::new("alen", "socklen_t *", InOut, PostCallMem(p::socklen_ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sendto,
        "sendto",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("buf", "const void *", In, PreCallMem(p::buf_in_len2)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("flags", "int", In, Scalar(p::msg_flags)),
            Param::new(
                "to",
                "const struct sockaddr *",
                In,
                PreCallMem(p::sockaddr_in_len5),
            ),
            Param::new("tolen", "socklen_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_recvfrom,
        "recvfrom",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("buf", "void *", Out, Composite(p::buf_out_ret)),
            Param::new("len", "size_t", In, Scalar(p::uint)),
            Param::new("flags", "int", In, Scalar(p::msg_flags)),
            Param::new("from", "struct sockaddr *", Out, PostCallMem(p::sockaddr_out)),
            Param::new("fromlenaddr", "socklen_t *", InOut, PostCallMem(p::socklen_ptr)),
        ],
    ),
    SyscallDef::new(
        n::SYS_sendmsg,
        "sendmsg",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("msg", "const struct msghdr *", In, PreCallMem(p::msghdr_in)),
            Param::new("flags", "int", In, Scalar(p::msg_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_recvmsg,
        "recvmsg",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("msg", "struct msghdr *", Out, PostCallMem(p::msghdr_out)),
            Param::new("flags", "int", In, Scalar(p::msg_flags)),
        ],
    ),
    SyscallDef::new(
        n::SYS_shutdown,
        "shutdown",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("how", "int", In, Scalar(p::shutdown_how)),
        ],
    ),
    SyscallDef::new(
        n::SYS_socketpair,
        "socketpair",
        &[
            Param::new("domain", "int", In, Scalar(p::socket_family)),
            Param::new("type", "int", In, Scalar(p::socket_type)),
            Param::new("protocol", "int", In, Scalar(p::socket_protocol)),
            Param::new("rsv", "int *", Out, PostCallMem(p::fd_pair_out)),
        ],
    ),
    SyscallDef::new(
        n::SYS_setsockopt,
        "setsockopt",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("level", "int", In, Scalar(p::sol_level)),
            Param::new("name", "int", In, Scalar(p::so_option)),
            Param::new("val", "const void *", In, Scalar(p::ptr)),
            Param::new("valsize", "socklen_t", In, Scalar(p::uint)),
        ],
    ),
    SyscallDef::new(
        n::SYS_getsockopt,
        "getsockopt",
        &[
            Param::new("s", "int", In, Scalar(p::fd)),
            Param::new("level", "int", In, Scalar(p::sol_level)),
            Param::new("name", "int", In, Scalar(p::so_option)),
            Param::new("val", "void *", Out, Scalar(p::ptr)),
            Param::new("avalsize", "socklen_t *", InOut, PostCallMem(p::socklen_ptr)),
        ],
    ),
];
