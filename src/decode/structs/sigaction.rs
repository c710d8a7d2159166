//! `struct sigaction` renderer.

use crate::decode::structs::Image;
use crate::decode::symbols::decode_flags;
use crate::decode::symbols::signal::{decode_sigset, SA_FLAGS, SIG_DFL, SIG_IGN};
use crate::memory::{read_bytes, MemoryRead};

/// Darwin sigaction: handler pointer, sa_mask (u32), sa_flags (i32).
const SIGACTION_SIZE: usize = 16;

pub fn render_sigaction(mem: &dyn MemoryRead, addr: u64) -> Option<String> {
    let raw = read_bytes(mem, addr, SIGACTION_SIZE).ok()?;
    if raw.data.len() < SIGACTION_SIZE {
        return None;
    }
    let img = Image::new(&raw.data);

    let handler = img.u64(0);
    let handler_str = match handler {
        SIG_DFL => "SIG_DFL".to_string(),
        SIG_IGN => "SIG_IGN".to_string(),
        other => format!("{other:#x}"),
    };

    Some(format!(
        "{{sa_handler={handler_str}, sa_mask={}, sa_flags={}}}",
        decode_sigset(img.u32(8) as u64),
        decode_flags(img.u32(12) as u64, SA_FLAGS),
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
    fn default_handler_renders_sig_dfl() {
        let mut raw = vec![0u8; SIGACTION_SIZE];
        raw[12..16].copy_from_slice(&0x2u32.to_le_bytes()); // SA_RESTART
        let s = render_sigaction(&Flat(raw), 0).unwrap();
        assert_eq!(s, "{sa_handler=SIG_DFL, sa_mask=[], sa_flags=SA_RESTART}");
    }
}
