//! `struct statfs` renderer (Darwin statfs64 layout).

use crate::decode::structs::Image;
use crate::memory::{read_bytes, MemoryRead};

/// Full struct including both 1K name arrays.
const STATFS_SIZE: usize = 2136;

pub fn render_statfs(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, STATFS_SIZE).ok()?;
    // The numeric header plus f_fstypename is enough to render something
    // useful even if the mount-name arrays fall off a mapping edge.
    if raw.data.len() < 88 {
        return None;
    }
    let img = Image::new(&raw.data);

    Some(format!(
        "{{f_bsize={}, f_iosize={}, f_blocks={}, f_bfree={}, f_bavail={}, \
         f_files={}, f_ffree={}, f_type={}, f_flags={:#x}, f_fstypename=\"{}\", \
         f_mntonname=\"{}\", f_mntfromname=\"{}\"}}",
        img.u32(0),
        img.i32(4),
        img.u64(8),
        img.u64(16),
        img.u64(24),
        img.u64(32),
        img.u64(40),
        img.u32(60),
        img.u32(64),
        img.cstr(72, 16),
        img.cstr(88, 1024),
        img.cstr(1112, 1024),
    ))
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
    fn renders_fs_name_and_mount_points() {
        let mut raw = vec![0u8; STATFS_SIZE];
        raw[0..4].copy_from_slice(&4096u32.to_le_bytes());
        raw[8..16].copy_from_slice(&1000u64.to_le_bytes());
        raw[72..76].copy_from_slice(b"apfs");
        raw[88..89].copy_from_slice(b"/");
        let s = render_statfs(&Flat(raw), 0).unwrap();
        assert!(s.contains("f_bsize=4096"), "{s}");
        assert!(s.contains("f_fstypename=\"apfs\""), "{s}");
        assert!(s.contains("f_mntonname=\"/\""), "{s}");
    }
}
