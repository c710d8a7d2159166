//! `struct kevent` array renderer for kevent(2) changelists and eventlists.

use crate::decode::structs::Image;
use crate::decode::symbols::kqueue::{EVFILTERS, EV_FLAGS};
use crate::decode::symbols::{decode_enum, decode_flags};
use crate::memory::{read_array, MemoryRead};

/// 64-bit kevent: ident, filter (i16), flags (u16), fflags (u32), data,
/// udata. 32 bytes.
const KEVENT_SIZE: usize = 32;
const KEVENT_DISPLAY_MAX: usize = 4;

pub fn render_kevent_array(mem: &dyn MemoryRead, addr: u64, count: usize) -> Option<String> {
    if count == 0 {
        return Some("[]".to_string());
    }
    let shown = count.min(KEVENT_DISPLAY_MAX);
    let (records, truncated) = read_array(mem, addr, KEVENT_SIZE, shown).ok()?;
    if records.is_empty() {
        return None;
    }

    let mut parts = Vec::with_capacity(records.len());
    for record in &records {
        let img = Image::new(record);
        let filter = img.i16(8);
        let filter_str = decode_enum((-filter).max(0) as u64, EVFILTERS, "EVFILT");
        parts.push(format!(
            "{{ident={}, filter={}, flags={}, fflags={:#x}, data={}, udata={:#x}}}",
            img.u64(0),
            filter_str,
            decode_flags(img.u16(10) as u64, EV_FLAGS),
            img.u32(12),
            img.i64(16),
            img.u64(24),
        ));
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
    fn read_filter_add_renders_symbolically() {
        let mut raw = vec![0u8; KEVENT_SIZE];
        raw[0..8].copy_from_slice(&3u64.to_le_bytes()); // ident (fd 3)
        raw[8..10].copy_from_slice(&(-1i16).to_le_bytes()); // EVFILT_READ
        raw[10..12].copy_from_slice(&0x0001u16.to_le_bytes()); // EV_ADD
        let s = render_kevent_array(&Flat(raw), 0, 1).unwrap();
        assert_eq!(
            s,
            "[{ident=3, filter=EVFILT_READ, flags=EV_ADD, fflags=0x0, data=0, udata=0x0}]"
        );
    }
}
