//! Network constants: address families, socket types and options, message
//! flags, protocol numbers.

use super::{decode_enum, decode_flags, EnumTable, FlagTable};

pub const AF_CONSTANTS: EnumTable = &[
    (0, "AF_UNSPEC"),
    (1, "AF_UNIX"),
    (2, "AF_INET"),
    (10, "AF_CCITT"),
    (11, "AF_SNA"),
    (12, "AF_DECnet"),
    (16, "AF_APPLETALK"),
    (17, "AF_ROUTE"),
    (18, "AF_LINK"),
    (27, "AF_NDRV"),
    (28, "AF_ISDN"),
    (30, "AF_INET6"),
    (31, "AF_NATM"),
    (32, "AF_SYSTEM"),
    (33, "AF_NETBIOS"),
    (34, "AF_PPP"),
    (37, "AF_IEEE80211"),
    (38, "AF_UTUN"),
    (40, "AF_VSOCK"),
];

/// Darwin `sa_family_t` values the sockaddr renderer dispatches on.
pub const AF_UNIX: u8 = 1;
pub const AF_INET: u8 = 2;
pub const AF_INET6: u8 = 30;

pub const SOCK_TYPES: EnumTable = &[
    (1, "SOCK_STREAM"),
    (2, "SOCK_DGRAM"),
    (3, "SOCK_RAW"),
    (4, "SOCK_RDM"),
    (5, "SOCK_SEQPACKET"),
];

pub const IPPROTO_CONSTANTS: EnumTable = &[
    (0, "IPPROTO_IP"),
    (1, "IPPROTO_ICMP"),
    (2, "IPPROTO_IGMP"),
    (6, "IPPROTO_TCP"),
    (17, "IPPROTO_UDP"),
    (41, "IPPROTO_IPV6"),
    (50, "IPPROTO_ESP"),
    (51, "IPPROTO_AH"),
    (58, "IPPROTO_ICMPV6"),
    (132, "IPPROTO_SCTP"),
    (255, "IPPROTO_RAW"),
];

pub const MSG_FLAGS: FlagTable = &[
    (0x1, "MSG_OOB"),
    (0x2, "MSG_PEEK"),
    (0x4, "MSG_DONTROUTE"),
    (0x8, "MSG_EOR"),
    (0x10, "MSG_TRUNC"),
    (0x20, "MSG_CTRUNC"),
    (0x40, "MSG_WAITALL"),
    (0x80, "MSG_DONTWAIT"),
    (0x100, "MSG_EOF"),
    (0x400, "MSG_FLUSH"),
    (0x800, "MSG_HOLD"),
    (0x1000, "MSG_SEND"),
    (0x2000, "MSG_HAVEMORE"),
    (0x4000, "MSG_RCVMORE"),
    (0x2_0000, "MSG_NEEDSA"),
    (0x4_0000, "MSG_NOSIGNAL"),
];

pub const SHUTDOWN_HOW: EnumTable = &[(0, "SHUT_RD"), (1, "SHUT_WR"), (2, "SHUT_RDWR")];

pub const SOL_LEVELS: EnumTable = &[
    (0xffff, "SOL_SOCKET"),
    (0, "IPPROTO_IP"),
    (6, "IPPROTO_TCP"),
    (17, "IPPROTO_UDP"),
    (41, "IPPROTO_IPV6"),
];

pub const SO_OPTIONS: EnumTable = &[
    (0x0001, "SO_DEBUG"),
    (0x0002, "SO_ACCEPTCONN"),
    (0x0004, "SO_REUSEADDR"),
    (0x0008, "SO_KEEPALIVE"),
    (0x0010, "SO_DONTROUTE"),
    (0x0020, "SO_BROADCAST"),
    (0x0080, "SO_LINGER"),
    (0x0100, "SO_OOBINLINE"),
    (0x0200, "SO_REUSEPORT"),
    (0x1001, "SO_SNDBUF"),
    (0x1002, "SO_RCVBUF"),
    (0x1003, "SO_SNDLOWAT"),
    (0x1004, "SO_RCVLOWAT"),
    (0x1005, "SO_SNDTIMEO"),
    (0x1006, "SO_RCVTIMEO"),
    (0x1007, "SO_ERROR"),
    (0x1008, "SO_TYPE"),
    (0x1022, "SO_NOSIGPIPE"),
];

/// Darwin allows SOCK_NONBLOCK/SOCK_CLOEXEC-style modifiers only via
/// fcntl, so the socket type argument decodes as a plain enum.
pub fn decode_socket_type(sock_type: u64) -> String {
    decode_enum(sock_type, SOCK_TYPES, "SOCK")
}

pub fn decode_socket_family(family: u64) -> String {
    decode_enum(family, AF_CONSTANTS, "AF")
}

pub fn decode_msg_flags(flags: u64) -> String {
    decode_flags(flags, MSG_FLAGS)
}

pub fn decode_sol_level(level: u64) -> String {
    decode_enum(level, SOL_LEVELS, "SOL")
}

pub fn decode_so_option(opt: u64) -> String {
    decode_enum(opt, SO_OPTIONS, "SO")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_and_types_decode() {
        assert_eq!(decode_socket_family(2), "AF_INET");
        assert_eq!(decode_socket_family(30), "AF_INET6");
        assert_eq!(decode_socket_type(1), "SOCK_STREAM");
        assert_eq!(decode_socket_family(99), "AF_99");
    }

    #[test]
    fn msg_flags_join() {
        assert_eq!(decode_msg_flags(0x50), "MSG_TRUNC|MSG_WAITALL");
        assert_eq!(decode_msg_flags(0), "0");
    }
}
