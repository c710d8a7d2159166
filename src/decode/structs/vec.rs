//! `struct iovec` array renderer for vectored I/O.

use crate::decode::quote::quote_buffer;
use crate::decode::structs::Image;
use crate::memory::{read_array, read_bytes, MemoryRead};

/// Entries shown before the vector is elided.
const IOV_DISPLAY_MAX: usize = 8;

/// Render `[{iov_base="...", iov_len=N}, ...]` for `count` iovecs at `addr`.
/// `materialize` controls whether the pointed-to buffers are read (write-side
/// vectors at entry, read-side at exit); when false the bases render as bare
/// pointers. `cap` bounds each buffer preview.
pub fn render_iovec_array(
    mem: &dyn MemoryRead,
    addr: u64,
    count: usize,
    materialize: bool,
    cap: usize,
) -> Option<String> {
    if count == 0 {
        return Some("[]".to_string());
    }
    let shown = count.min(IOV_DISPLAY_MAX);
    let (records, truncated) = read_array(mem, addr, 16, shown).ok()?;
    if records.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(records.len());
    for record in &records {
        let img = Image::new(record);
        let base = img.u64(0);
        let len = img.u64(8) as usize;
        let rendered_base = if !materialize || base == 0 {
            if base == 0 {
                "NULL".to_string()
            } else {
                format!("{base:#x}")
            }
        } else {
            match read_bytes(mem, base, len.min(cap)) {
                Ok(buf) if !buf.data.is_empty() || len == 0 => quote_buffer(&buf.data, len, cap),
                _ => format!("{base:#x}"),
            }
        };
        parts.push(format!("{{iov_base={rendered_base}, iov_len={len}}}"));
    }

    if count > shown || truncated {
        parts.push("...".to_string());
    }
    Some(format!("[{}]", parts.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;

    struct Flat(Vec<u8>);

    impl MemoryRead for Flat {
        fn read(&self, addr: u64, buf: &mut [u8]) -> Result<usize> {
            let off = addr as usize;
            if off >= self.0.len() {
                return Ok(0);
            }
            let n = buf.len().min(self.0.len() - off);
            buf[..n].copy_from_slice(&self.0[off..off + n]);
            Ok(n)
        }
    }

    #[test]
    fn materialized_vector_quotes_buffers() {
        // One iovec at 0 pointing at "hi" stored at 0x100.
        let mut raw = vec![0u8; 0x110];
        raw[0..8].copy_from_slice(&0x100u64.to_le_bytes());
        raw[8..16].copy_from_slice(&2u64.to_le_bytes());
        raw[0x100..0x102].copy_from_slice(b"hi");
        let s = render_iovec_array(&Flat(raw), 0, 1, true, 32).unwrap();
        assert_eq!(s, "[{iov_base=\"hi\", iov_len=2}]");
    }

    #[test]
    fn unmaterialized_vector_keeps_pointers() {
        let mut raw = vec![0u8; 16];
        raw[0..8].copy_from_slice(&0xbeefu64.to_le_bytes());
        raw[8..16].copy_from_slice(&9u64.to_le_bytes());
        let s = render_iovec_array(&Flat(raw), 0, 1, false, 32).unwrap();
        assert_eq!(s, "[{iov_base=0xbeef, iov_len=9}]");
    }

    #[test]
    fn long_vectors_elide() {
        let mut raw = Vec::new();
        for _ in 0..16 {
            raw.extend_from_slice(&0u64.to_le_bytes());
            raw.extend_from_slice(&1u64.to_le_bytes());
        }
        let s = render_iovec_array(&Flat(raw), 0, 16, false, 32).unwrap();
        assert!(s.ends_with(", ...]"), "{s}");
    }
}
