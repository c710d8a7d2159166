//! Symbol tables and the generic flag/enum decoders over them.
//!
//! Tables are ordered `(mask, symbol)` or `(value, symbol)` slices of Darwin
//! constants, grouped by subsystem the way the syscall definitions consume
//! them.

pub mod errno;
pub mod file;
pub mod ipc;
pub mod kqueue;
pub mod memory;
pub mod network;
pub mod process;
pub mod signal;
pub mod time;

/// An ordered bit-mask table for flag decoding.
pub type FlagTable = &'static [(u64, &'static str)];

/// An exact-value table for enum decoding.
pub type EnumTable = &'static [(u64, &'static str)];

/// Decode a flag word against `table`: matched symbols joined with `|`,
/// residual bits appended as hex. Zero renders as the table's zero symbol if
/// it has one, else `0`.
pub fn decode_flags(value: u64, table: FlagTable) -> String {
    if value == 0 {
        return table
            .iter()
            .find(|(mask, _)| *mask == 0)
            .map(|(_, sym)| (*sym).to_string())
            .unwrap_or_else(|| "0".to_string());
    }

    let mut parts: Vec<&str> = Vec::new();
    let mut rest = value;
    for &(mask, sym) in table {
        if mask != 0 && rest & mask == mask {
            parts.push(sym);
            rest &= !mask;
        }
    }
    if rest != 0 || parts.is_empty() {
        let hex = format!("{rest:#x}");
        return if parts.is_empty() {
            hex
        } else {
            format!("{}|{}", parts.join("|"), hex)
        };
    }
    parts.join("|")
}

/// Decode an exact value against `table`; a miss renders `<PREFIX>_<decimal>`
/// rather than raw hex, to keep lines readable.
pub fn decode_enum(value: u64, table: EnumTable, prefix: &str) -> String {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, sym)| (*sym).to_string())
        .unwrap_or_else(|| format!("{prefix}_{value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: FlagTable = &[(0x1, "A"), (0x2, "B"), (0x8, "C")];

    /// Inverse of `decode_flags` for round-trip checks.
    fn parse_flags(s: &str, table: FlagTable) -> Option<u64> {
        let mut value = 0u64;
        for part in s.split('|') {
            if let Some(hex) = part.strip_prefix("0x") {
                value |= u64::from_str_radix(hex, 16).ok()?;
            } else if part == "0" {
                // zero word
            } else {
                value |= table.iter().find(|(_, sym)| *sym == part)?.0;
            }
        }
        Some(value)
    }

    #[test]
    fn flags_round_trip_over_disjoint_or() {
        for v in [0x1, 0x2, 0x3, 0x8, 0xb, 0x0] {
            let rendered = decode_flags(v, T);
            assert_eq!(parse_flags(&rendered, T), Some(v), "value {v:#x}");
        }
    }

    #[test]
    fn residual_bits_round_trip_via_hex_suffix() {
        let rendered = decode_flags(0x105, T);
        assert_eq!(rendered, "A|0x104");
        assert_eq!(parse_flags(&rendered, T), Some(0x105));
    }

    #[test]
    fn unmatched_value_is_bare_hex() {
        assert_eq!(decode_flags(0x100, T), "0x100");
    }

    #[test]
    fn enum_miss_uses_prefix_and_decimal() {
        const E: EnumTable = &[(0, "SEEK_SET"), (1, "SEEK_CUR")];
        assert_eq!(decode_enum(1, E, "SEEK"), "SEEK_CUR");
        assert_eq!(decode_enum(9, E, "SEEK"), "SEEK_9");
    }
}
