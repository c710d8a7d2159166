//! Memory-subsystem constants: mmap protections and flags, madvise, msync,
//! mlockall.

use super::{decode_enum, decode_flags, EnumTable, FlagTable};

pub const PROT_FLAGS: FlagTable = &[
    (0x0, "PROT_NONE"),
    (0x1, "PROT_READ"),
    (0x2, "PROT_WRITE"),
    (0x4, "PROT_EXEC"),
];

pub const MAP_FLAGS: FlagTable = &[
    (0x0001, "MAP_SHARED"),
    (0x0002, "MAP_PRIVATE"),
    (0x0010, "MAP_FIXED"),
    (0x0020, "MAP_RENAME"),
    (0x0040, "MAP_NORESERVE"),
    (0x0100, "MAP_NOCACHE"),
    (0x0200, "MAP_JIT"),
    (0x1000, "MAP_ANON"),
    (0x8000, "MAP_RESILIENT_CODESIGN"),
    (0x2_0000, "MAP_TRANSLATED_ALLOW_EXECUTE"),
    (0x4_0000, "MAP_UNIX03"),
];

pub const MADVISE_ADVICE: EnumTable = &[
    (0, "MADV_NORMAL"),
    (1, "MADV_RANDOM"),
    (2, "MADV_SEQUENTIAL"),
    (3, "MADV_WILLNEED"),
    (4, "MADV_DONTNEED"),
    (5, "MADV_FREE"),
    (6, "MADV_ZERO_WIRED_PAGES"),
    (7, "MADV_FREE_REUSABLE"),
    (8, "MADV_FREE_REUSE"),
    (9, "MADV_CAN_REUSE"),
    (10, "MADV_PAGEOUT"),
];

pub const MSYNC_FLAGS: FlagTable = &[
    (0x0001, "MS_ASYNC"),
    (0x0002, "MS_INVALIDATE"),
    (0x0010, "MS_SYNC"),
    (0x0004, "MS_KILLPAGES"),
    (0x0008, "MS_DEACTIVATE"),
];

pub const MLOCKALL_FLAGS: FlagTable = &[(0x1, "MCL_CURRENT"), (0x2, "MCL_FUTURE")];

pub const MINHERIT_VALUES: EnumTable = &[
    (0, "VM_INHERIT_SHARE"),
    (1, "VM_INHERIT_COPY"),
    (2, "VM_INHERIT_NONE"),
    (3, "VM_INHERIT_DONATE_COPY"),
];

pub fn decode_prot(prot: u64) -> String {
    decode_flags(prot, PROT_FLAGS)
}

pub fn decode_map_flags(flags: u64) -> String {
    decode_flags(flags, MAP_FLAGS)
}

pub fn decode_madvise(advice: u64) -> String {
    decode_enum(advice, MADVISE_ADVICE, "MADV")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prot_none_uses_zero_symbol() {
        assert_eq!(decode_prot(0), "PROT_NONE");
        assert_eq!(decode_prot(0x3), "PROT_READ|PROT_WRITE");
    }

    #[test]
    fn map_anon_private_renders_both() {
        assert_eq!(decode_map_flags(0x1002), "MAP_PRIVATE|MAP_ANON");
    }
}
