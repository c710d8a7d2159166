//! `struct stat` renderer (Darwin layout, 144 bytes, shared by stat64 and
//! friends on modern macOS).

use crate::decode::structs::timeval::render_timespec_parts;
use crate::decode::structs::Image;
use crate::decode::symbols::file::{decode_dev, decode_file_mode};
use crate::memory::{read_bytes, MemoryRead};

pub const STAT_SIZE: usize = 144;

/// Render the struct at `addr`, or `None` when it is unreadable.
pub fn render_stat(mem: &dyn MemoryRead, addr: u64, no_abbrev: bool) -> Option<String> {
    let raw = read_bytes(mem, addr, STAT_SIZE).ok()?;
    if raw.data.len() < STAT_SIZE {
        return None;
    }
    let img = Image::new(&raw.data);

    let mode = img.u16(4) as u32;
    let mode_str = if no_abbrev {
        format!("0{mode:o}")
    } else {
        decode_file_mode(mode)
    };

    Some(format!(
        "{{st_dev={}, st_mode={}, st_nlink={}, st_ino={}, st_uid={}, st_gid={}, \
         st_rdev={}, st_atimespec={}, st_mtimespec={}, st_ctimespec={}, \
         st_birthtimespec={}, st_size={}, st_blocks={}, st_blksize={}, \
         st_flags={}, st_gen={}}}",
        img.i32(0),
        mode_str,
        img.u16(6),
        img.u64(8),
        img.u32(16),
        img.u32(20),
        decode_dev(img.i32(24)),
        render_timespec_parts(img.i64(32), img.i64(40)),
        render_timespec_parts(img.i64(48), img.i64(56)),
        render_timespec_parts(img.i64(64), img.i64(72)),
        render_timespec_parts(img.i64(80), img.i64(88)),
        img.i64(96),
        img.i64(104),
        img.i32(112),
        img.u32(116),
        img.u32(120),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Result;
    use crate::memory::MemoryRead;

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

    fn sample_stat() -> Vec<u8> {
        let mut raw = vec![0u8; STAT_SIZE];
        raw[0..4].copy_from_slice(&1i32.to_le_bytes()); // st_dev
        raw[4..6].copy_from_slice(&(0o100644u16).to_le_bytes()); // st_mode
        raw[6..8].copy_from_slice(&1u16.to_le_bytes()); // st_nlink
        raw[8..16].copy_from_slice(&42u64.to_le_bytes()); // st_ino
        raw[16..20].copy_from_slice(&501u32.to_le_bytes()); // st_uid
        raw[96..104].copy_from_slice(&1024i64.to_le_bytes()); // st_size
        raw
    }

    #[test]
    fn renders_decoded_mode_and_size() {
        let mem = Flat(sample_stat());
        let s = render_stat(&mem, 0, false).unwrap();
        assert!(s.contains("st_mode=S_IFREG|0644"), "{s}");
        assert!(s.contains("st_size=1024"), "{s}");
        assert!(s.contains("st_ino=42"), "{s}");
    }

    #[test]
    fn no_abbrev_keeps_raw_octal_mode() {
        let mem = Flat(sample_stat());
        let s = render_stat(&mem, 0, true).unwrap();
        assert!(s.contains("st_mode=0100644"), "{s}");
    }

    #[test]
    fn unreadable_struct_is_none() {
        let mem = Flat(vec![0u8; 8]);
        assert!(render_stat(&mem, 0, false).is_none());
    }
}
