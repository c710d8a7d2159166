//! Safe reads of the target's address space.
//!
//! Every read here is strictly observational and fails softly: an unmapped
//! page or short read yields a partial value carrying a truncation marker,
//! and only a target that cannot be inspected at all (process gone) surfaces
//! as a hard `MemoryRead` error from the backend.

use crate::errors::Result;

/// How strings are scanned for their terminating NUL.
const STRING_CHUNK: usize = 256;

/// Read access to the traced process's memory, implemented by the debugger
/// backend (and by flat test fixtures).
pub trait MemoryRead {
    /// Read up to `buf.len()` bytes at `addr`, returning how many were
    /// actually readable. `Ok(0)` means the address is not mapped; `Err` is
    /// reserved for a target that is gone entirely.
    fn read(&self, addr: u64, buf: &mut [u8]) -> Result<usize>;
}

/// A bounded byte read, possibly cut short by the end of the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemBytes {
    pub data: Vec<u8>,
    pub truncated: bool,
}

/// A NUL-terminated string read, flagged when the terminator was not found
/// within the scan limit or the mapping ended first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemString {
    pub text: String,
    pub truncated: bool,
}

/// Read exactly `len` bytes if mapped, or as many as are.
pub fn read_bytes(mem: &dyn MemoryRead, addr: u64, len: usize) -> Result<MemBytes> {
    let mut data = vec![0u8; len];
    let n = mem.read(addr, &mut data)?;
    data.truncate(n);
    Ok(MemBytes {
        truncated: n < len,
        data,
    })
}

/// Read a NUL-terminated string with a bounded scan. The terminator is not
/// included. Absent a NUL within `max_len`, the result is flagged truncated.
pub fn read_cstring(mem: &dyn MemoryRead, addr: u64, max_len: usize) -> Result<MemString> {
    let mut collected = Vec::new();
    let mut cursor = addr;

    while collected.len() < max_len {
        let want = STRING_CHUNK.min(max_len - collected.len());
        let mut chunk = vec![0u8; want];
        let n = mem.read(cursor, &mut chunk)?;
        if n == 0 {
            // Ran off the mapping before finding a NUL.
            return Ok(MemString {
                text: String::from_utf8_lossy(&collected).into_owned(),
                truncated: true,
            });
        }
        chunk.truncate(n);
        if let Some(nul) = chunk.iter().position(|&b| b == 0) {
            collected.extend_from_slice(&chunk[..nul]);
            return Ok(MemString {
                text: String::from_utf8_lossy(&collected).into_owned(),
                truncated: false,
            });
        }
        collected.extend_from_slice(&chunk);
        cursor += n as u64;
    }

    Ok(MemString {
        text: String::from_utf8_lossy(&collected).into_owned(),
        truncated: true,
    })
}

/// Read `count` records of `elem_size` bytes each. Returns the fully-read
/// records plus a truncation flag if the mapping ended early.
pub fn read_array(
    mem: &dyn MemoryRead,
    addr: u64,
    elem_size: usize,
    count: usize,
) -> Result<(Vec<Vec<u8>>, bool)> {
    let total = elem_size * count;
    let raw = read_bytes(mem, addr, total)?;
    let complete = raw.data.len() / elem_size.max(1);
    let records = raw
        .data
        .chunks_exact(elem_size)
        .take(complete)
        .map(|c| c.to_vec())
        .collect();
    Ok((records, raw.truncated))
}

/// Read one little-endian u64, or None if the slot is not fully mapped.
pub fn read_u64(mem: &dyn MemoryRead, addr: u64) -> Result<Option<u64>> {
    let mut buf = [0u8; 8];
    let n = mem.read(addr, &mut buf)?;
    if n < 8 {
        return Ok(None);
    }
    Ok(Some(u64::from_le_bytes(buf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Memory fixture that maps `data` at `base` and nothing else.
    pub struct FixtureMemory {
        base: u64,
        data: Vec<u8>,
    }

    impl FixtureMemory {
        pub fn new(base: u64, data: Vec<u8>) -> Self {
            Self { base, data }
        }
    }

    impl MemoryRead for FixtureMemory {
        fn read(&self, addr: u64, buf: &mut [u8]) -> Result<usize> {
            if addr < self.base {
                return Ok(0);
            }
            let off = (addr - self.base) as usize;
            if off >= self.data.len() {
                return Ok(0);
            }
            let n = buf.len().min(self.data.len() - off);
            buf[..n].copy_from_slice(&self.data[off..off + n]);
            Ok(n)
        }
    }

    #[test]
    fn cstring_stops_at_nul() {
        let mem = FixtureMemory::new(0x1000, b"/etc/hosts\0junk".to_vec());
        let s = read_cstring(&mem, 0x1000, 4096).unwrap();
        assert_eq!(s.text, "/etc/hosts");
        assert!(!s.truncated);
    }

    #[test]
    fn cstring_without_nul_is_truncated() {
        let mem = FixtureMemory::new(0x1000, vec![b'a'; 512]);
        let s = read_cstring(&mem, 0x1000, 64).unwrap();
        assert_eq!(s.text.len(), 64);
        assert!(s.truncated);
    }

    #[test]
    fn cstring_off_the_mapping_is_truncated_partial() {
        let mem = FixtureMemory::new(0x1000, b"abc".to_vec());
        let s = read_cstring(&mem, 0x1000, 4096).unwrap();
        assert_eq!(s.text, "abc");
        assert!(s.truncated);
    }

    #[test]
    fn short_byte_read_is_flagged() {
        let mem = FixtureMemory::new(0, vec![1, 2, 3]);
        let b = read_bytes(&mem, 0, 8).unwrap();
        assert_eq!(b.data, vec![1, 2, 3]);
        assert!(b.truncated);
    }

    #[test]
    fn array_read_yields_complete_records_only() {
        let mem = FixtureMemory::new(0, vec![0u8; 20]);
        let (records, truncated) = read_array(&mem, 0, 8, 3).unwrap();
        assert_eq!(records.len(), 2);
        assert!(truncated);
    }
}
