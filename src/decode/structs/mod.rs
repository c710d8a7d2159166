//! Struct renderers: one bounded read of the target struct, then
//! field-by-field rendering in source-declared order.
//!
//! Layouts are the Darwin ABI layouts (identical on ARM64 and x86-64 for
//! everything rendered here). Each renderer returns `None` when the struct's
//! memory is unreadable so the caller can degrade the argument to its
//! unreadable form.

pub mod kevent;
pub mod msghdr;
pub mod process_structs;
pub mod sigaction;
pub mod sockaddr;
pub mod stat;
pub mod statfs;
pub mod timeval;
pub mod vec;

/// Little-endian field extraction out of a struct image. Out-of-range reads
/// yield zero, which keeps partially-read structs renderable.
pub(crate) struct Image<'a> {
    bytes: &'a [u8],
}

impl<'a> Image<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    fn take<const N: usize>(&self, off: usize) -> [u8; N] {
        let mut out = [0u8; N];
        if let Some(slice) = self.bytes.get(off..off + N) {
            out.copy_from_slice(slice);
        }
        out
    }

    pub fn u16(&self, off: usize) -> u16 {
        u16::from_le_bytes(self.take(off))
    }

    pub fn u32(&self, off: usize) -> u32 {
        u32::from_le_bytes(self.take(off))
    }

    pub fn u64(&self, off: usize) -> u64 {
        u64::from_le_bytes(self.take(off))
    }

    pub fn i16(&self, off: usize) -> i16 {
        i16::from_le_bytes(self.take(off))
    }

    pub fn i32(&self, off: usize) -> i32 {
        i32::from_le_bytes(self.take(off))
    }

    pub fn i64(&self, off: usize) -> i64 {
        i64::from_le_bytes(self.take(off))
    }

    pub fn u8at(&self, off: usize) -> u8 {
        self.bytes.get(off).copied().unwrap_or(0)
    }

    /// A fixed-size char array rendered up to its NUL.
    pub fn cstr(&self, off: usize, len: usize) -> String {
        let slice = self
            .bytes
            .get(off..(off + len).min(self.bytes.len()))
            .unwrap_or(&[]);
        let end = slice.iter().position(|&b| b == 0).unwrap_or(slice.len());
        String::from_utf8_lossy(&slice[..end]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_fields_read_zero() {
        let img = Image::new(&[1, 0]);
        assert_eq!(img.u16(0), 1);
        assert_eq!(img.u64(0), 0);
        assert_eq!(img.u32(100), 0);
    }

    #[test]
    fn cstr_stops_at_nul() {
        let img = Image::new(b"apfs\0junk");
        assert_eq!(img.cstr(0, 8), "apfs");
    }
}
