//! `struct msghdr` renderer for sendmsg/recvmsg, recursing into the iovec
//! and, when present, the control buffer.

use crate::decode::structs::sockaddr::render_sockaddr;
use crate::decode::structs::vec::render_iovec_array;
use crate::decode::structs::Image;
use crate::decode::symbols::network::decode_msg_flags;
use crate::memory::{read_bytes, MemoryRead};

/// Darwin msghdr: name ptr, namelen, iov ptr, iovlen, control ptr,
/// controllen, flags. 48 bytes with padding.
const MSGHDR_SIZE: usize = 48;
/// Control-buffer preview cap.
const CONTROL_PREVIEW: usize = 16;

pub fn render_msghdr(
    mem: &dyn MemoryRead,
    addr: u64,
    materialize_buffers: bool,
    cap: usize,
) -> Option<String> {
    let raw = read_bytes(mem, addr, MSGHDR_SIZE).ok()?;
    if raw.data.len() < MSGHDR_SIZE {
        return None;
    }
    let img = Image::new(&raw.data);

    let msg_name = img.u64(0);
    let msg_namelen = img.u32(8);
    let msg_iov = img.u64(16);
    let msg_iovlen = img.i32(24).max(0) as usize;
    let msg_control = img.u64(32);
    let msg_controllen = img.u32(40);
    let msg_flags = img.i32(44);

    let name_str = if msg_name == 0 {
        "NULL".to_string()
    } else {
        render_sockaddr(mem, msg_name, msg_namelen as usize)
            .unwrap_or_else(|| format!("{msg_name:#x}"))
    };

    let iov_str = if msg_iov == 0 || msg_iovlen == 0 {
        "[]".to_string()
    } else {
        render_iovec_array(mem, msg_iov, msg_iovlen, materialize_buffers, cap)
            .unwrap_or_else(|| format!("{msg_iov:#x}"))
    };

    let mut out = format!(
        "{{msg_name={name_str}, msg_namelen={msg_namelen}, msg_iov={iov_str}, msg_iovlen={msg_iovlen}"
    );

    if msg_control != 0 && msg_controllen > 0 {
        let preview = read_bytes(mem, msg_control, (msg_controllen as usize).min(CONTROL_PREVIEW))
            .ok()
            .map(|b| {
                b.data
                    .iter()
                    .map(|byte| format!("{byte:02x}"))
                    .collect::<String>()
            })
            .unwrap_or_default();
        out.push_str(&format!(
            ", msg_control=0x{preview}, msg_controllen={msg_controllen}"
        ));
    }

    out.push_str(&format!(
        ", msg_flags={}}}",
        decode_msg_flags(msg_flags as u64)
    ));
    Some(out)
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
    fn minimal_msghdr_renders_iov_and_flags() {
        let mut raw = vec![0u8; 0x200];
        // msghdr at 0: one iovec at 0x100, no name, no control.
        raw[16..24].copy_from_slice(&0x100u64.to_le_bytes());
        raw[24..28].copy_from_slice(&1i32.to_le_bytes());
        // iovec at 0x100 -> "ok" at 0x180
        raw[0x100..0x108].copy_from_slice(&0x180u64.to_le_bytes());
        raw[0x108..0x110].copy_from_slice(&2u64.to_le_bytes());
        raw[0x180..0x182].copy_from_slice(b"ok");
        let s = render_msghdr(&Flat(raw), 0, true, 32).unwrap();
        assert_eq!(
            s,
            "{msg_name=NULL, msg_namelen=0, msg_iov=[{iov_base=\"ok\", iov_len=2}], \
             msg_iovlen=1, msg_flags=0}"
        );
    }
}
