//! Byte-string quoting for terminal-safe buffer display.
//!
//! Follows strace's conventions: printable ASCII as-is, the usual backslash
//! escapes for whitespace, octal escapes for everything else (three digits
//! when the following byte is an octal digit, minimal otherwise), and a cap
//! with an ellipsis plus the untruncated length once the display limit is
//! exceeded.

fn is_printable(byte: u8) -> bool {
    (0x20..0x7f).contains(&byte)
}

/// Escape `data` without surrounding quotes, showing at most `cap` bytes.
pub fn escape_bytes(data: &[u8], cap: usize) -> String {
    let shown = &data[..data.len().min(cap)];
    let mut out = String::with_capacity(shown.len());

    for (i, &byte) in shown.iter().enumerate() {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x0b => out.push_str("\\v"),
            0x0c => out.push_str("\\f"),
            _ if is_printable(byte) => out.push(byte as char),
            _ => {
                // Full 3-digit octal when the next shown byte is an octal
                // digit, otherwise the minimal form.
                let next_is_octal_digit =
                    shown.get(i + 1).is_some_and(|&b| (b'0'..=b'7').contains(&b));
                if next_is_octal_digit {
                    out.push_str(&format!("\\{byte:03o}"));
                } else {
                    out.push_str(&format!("\\{byte:o}"));
                }
            }
        }
    }

    out
}

/// Quote a buffer for display: `"escaped"` when it fits within `cap`,
/// `"escaped"... (N bytes)` when capped. `total_len` is the buffer's real
/// length, which can exceed `data.len()` when the read itself was bounded.
pub fn quote_buffer(data: &[u8], total_len: usize, cap: usize) -> String {
    let escaped = escape_bytes(data, cap);
    if total_len > cap {
        format!("\"{escaped}\"... ({total_len} bytes)")
    } else {
        format!("\"{escaped}\"")
    }
}

/// Quote a NUL-terminated string argument. Truncated strings (no NUL found
/// within the scan limit) render with a trailing ellipsis.
pub fn quote_cstr(text: &str, truncated: bool) -> String {
    let escaped = escape_bytes(text.as_bytes(), usize::MAX);
    if truncated {
        format!("\"{escaped}\"...")
    } else {
        format!("\"{escaped}\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_passes_through() {
        assert_eq!(escape_bytes(b"hello world", 32), "hello world");
    }

    #[test]
    fn whitespace_and_quotes_escape() {
        assert_eq!(escape_bytes(b"a\tb\n\"c\\", 32), "a\\tb\\n\\\"c\\\\");
    }

    #[test]
    fn octal_escape_widens_before_digit() {
        // 0x01 followed by '1' must be \001 to avoid ambiguity; at the end it
        // may be minimal.
        assert_eq!(escape_bytes(&[0x01, b'1'], 32), "\\0011");
        assert_eq!(escape_bytes(&[b'1', 0x01], 32), "1\\1");
    }

    #[test]
    fn buffer_at_cap_has_no_ellipsis() {
        let data = vec![b'x'; 32];
        assert_eq!(quote_buffer(&data, 32, 32), format!("\"{}\"", "x".repeat(32)));
    }

    #[test]
    fn buffer_past_cap_gets_ellipsis_and_length() {
        let data = vec![b'x'; 33];
        assert_eq!(
            quote_buffer(&data, 33, 32),
            format!("\"{}\"... (33 bytes)", "x".repeat(32))
        );
    }

    #[test]
    fn truncated_cstr_gets_ellipsis() {
        assert_eq!(quote_cstr("abc", true), "\"abc\"...");
        assert_eq!(quote_cstr("abc", false), "\"abc\"");
    }
}
