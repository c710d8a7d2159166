//! Process-accounting struct renderers: rusage, rlimit, and pollfd arrays
//! (pollfd lives here rather than with the file structs because poll's
//! revents are an exit-side concern like wait status).

use crate::decode::structs::timeval::render_timeval_parts;
use crate::decode::structs::Image;
use crate::decode::symbols::decode_flags;
use crate::decode::symbols::file::POLL_EVENTS;
use crate::memory::{read_array, read_bytes, MemoryRead};

/// Darwin rusage: two timevals then 14 longs.
const RUSAGE_SIZE: usize = 144;
const RLIMIT_SIZE: usize = 16;
const POLLFD_SIZE: usize = 8;
const POLLFD_DISPLAY_MAX: usize = 8;

const RLIM_INFINITY: u64 = 0x7fff_ffff_ffff_ffff;

pub fn render_rusage(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, RUSAGE_SIZE).ok()?;
    if raw.data.len() < RUSAGE_SIZE {
        return None;
    }
    let img = Image::new(&raw.data);

    Some(format!(
        "{{ru_utime={}, ru_stime={}, ru_maxrss={}, ru_ixrss={}, ru_majflt={}, \
         ru_nsignals={}, ru_nvcsw={}, ru_nivcsw={}}}",
        render_timeval_parts(img.i64(0), img.i32(8) as i64),
        render_timeval_parts(img.i64(16), img.i32(24) as i64),
        img.i64(32),
        img.i64(40),
        img.i64(64),
        img.i64(112),
        img.i64(120),
        img.i64(128),
    ))
}

fn rlim_value(value: u64) -> String {
    if value == RLIM_INFINITY {
        "RLIM_INFINITY".to_string()
    } else {
        value.to_string()
    }
}

pub fn render_rlimit(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, RLIMIT_SIZE).ok()?;
    if raw.data.len() < RLIMIT_SIZE {
        return None;
    }
    let img = Image::new(&raw.data);
    Some(format!(
        "{{rlim_cur={}, rlim_max={}}}",
        rlim_value(img.u64(0)),
        rlim_value(img.u64(8)),
    ))
}

/// Render a pollfd array; revents only carries information after the call.
pub fn render_pollfd_array(
    mem: &dyn MemoryRead,
    addr: u64,
    count: usize,
    with_revents: bool,
) -> Option<String> {
    if count == 0 {
        return Some("[]".to_string());
    }
    let shown = count.min(POLLFD_DISPLAY_MAX);
    let (records, truncated) = read_array(mem, addr, POLLFD_SIZE, shown).ok()?;
    if records.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(records.len());
    for record in &records {
        let img = Image::new(record);
        let fd = img.i32(0);
        let events = decode_flags(img.i16(4) as u16 as u64, POLL_EVENTS);
        if with_revents {
            let revents = decode_flags(img.i16(6) as u16 as u64, POLL_EVENTS);
            parts.push(format!("{{fd={fd}, events={events}, revents={revents}}}"));
        } else {
            parts.push(format!("{{fd={fd}, events={events}}}"));
        }
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
    fn infinite_rlimits_render_symbolically() {
        let mut raw = Vec::new();
        raw.extend_from_slice(&256u64.to_le_bytes());
        raw.extend_from_slice(&RLIM_INFINITY.to_le_bytes());
        let s = render_rlimit(&Flat(raw), 0).unwrap();
        assert_eq!(s, "{rlim_cur=256, rlim_max=RLIM_INFINITY}");
    }

    #[test]
    fn pollfd_hides_revents_at_entry() {
        let mut raw = vec![0u8; POLLFD_SIZE];
        raw[0..4].copy_from_slice(&5i32.to_le_bytes());
        raw[4..6].copy_from_slice(&0x1i16.to_le_bytes()); // POLLIN
        raw[6..8].copy_from_slice(&0x1i16.to_le_bytes());
        let entry = render_pollfd_array(&Flat(raw.clone()), 0, 1, false).unwrap();
        assert_eq!(entry, "[{fd=5, events=POLLIN}]");
        let exit = render_pollfd_array(&Flat(raw), 0, 1, true).unwrap();
        assert_eq!(exit, "[{fd=5, events=POLLIN, revents=POLLIN}]");
    }
}
