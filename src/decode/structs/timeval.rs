//! Time struct renderers: timespec, timeval, itimerval.

use crate::decode::structs::Image;
use crate::memory::{read_bytes, MemoryRead};

pub fn render_timespec_parts(sec: i64, nsec: i64) -> String {
    format!("{sec}.{nsec:09}")
}

pub fn render_timeval_parts(sec: i64, usec: i64) -> String {
    format!("{sec}.{usec:06}")
}

/// `struct timespec` at `addr`: `{tv_sec=..., tv_nsec=...}` collapsed to the
/// seconds.nanoseconds form used everywhere else.
pub fn render_timespec(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, 16).ok()?;
    if raw.data.len() < 16 {
        return None;
    }
    let img = Image::new(&raw.data);
    Some(render_timespec_parts(img.i64(0), img.i64(8)))
}

/// `struct timeval` at `addr` (Darwin: i64 seconds, i32 microseconds).
pub fn render_timeval(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, 16).ok()?;
    if raw.data.len() < 12 {
        return None;
    }
    let img = Image::new(&raw.data);
    Some(render_timeval_parts(img.i64(0), img.i32(8) as i64))
}

/// `struct itimerval`: interval and value timevals.
pub fn render_itimerval(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, 32).ok()?;
    if raw.data.len() < 32 {
        return None;
    }
    let img = Image::new(&raw.data);
    Some(format!(
        "{{it_interval={}, it_value={}}}",
        render_timeval_parts(img.i64(0), img.i32(8) as i64),
        render_timeval_parts(img.i64(16), img.i32(24) as i64),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timespec_zero_pads_nanoseconds() {
        assert_eq!(render_timespec_parts(7, 5), "7.000000005");
        assert_eq!(render_timeval_parts(7, 5), "7.000005");
    }
}
