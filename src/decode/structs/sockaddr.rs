//! `struct sockaddr` renderer with family dispatch.
//!
//! Darwin sockaddrs lead with a length byte, then the family byte. AF_UNIX
//! renders the path, AF_INET the dotted IPv4 literal plus port, AF_INET6 the
//! compressed IPv6 literal plus port and scope, anything else falls back to
//! the family symbol and raw bytes.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::decode::structs::Image;
use crate::decode::symbols::network::{decode_socket_family, AF_INET, AF_INET6, AF_UNIX};
use crate::memory::{read_bytes, MemoryRead};

/// Largest sockaddr we ever materialize (sockaddr_un).
const SOCKADDR_MAX: usize = 106;

/// Render the sockaddr at `addr`. `len` is the caller-declared length when
/// known (e.g. the socklen argument); zero means "read the struct's own
/// sa_len".
pub fn render_sockaddr(mem: &dyn MemoryRead, addr: u64, len: usize) -> Option<String> {
    let want = if len == 0 { SOCKADDR_MAX } else { len.min(SOCKADDR_MAX) };
    let raw = read_bytes(mem, addr, want).ok()?;
    if raw.data.len() < 2 {
        return None;
    }
    let img = Image::new(&raw.data);
    let family = img.u8at(1);

    match family {
        AF_UNIX => {
            let path = img.cstr(2, raw.data.len().saturating_sub(2));
            Some(format!("{{sa_family=AF_UNIX, sun_path=\"{path}\"}}"))
        }
        AF_INET => {
            if raw.data.len() < 8 {
                return None;
            }
            // sin_port is in network byte order.
            let port = u16::from_be_bytes([img.u8at(2), img.u8at(3)]);
            let ip = Ipv4Addr::new(img.u8at(4), img.u8at(5), img.u8at(6), img.u8at(7));
            Some(format!(
                "{{sa_family=AF_INET, sin_port={port}, sin_addr=\"{ip}\"}}"
            ))
        }
        AF_INET6 => {
            if raw.data.len() < 28 {
                return None;
            }
            let port = u16::from_be_bytes([img.u8at(2), img.u8at(3)]);
            let mut octets = [0u8; 16];
            for (i, octet) in octets.iter_mut().enumerate() {
                *octet = img.u8at(8 + i);
            }
            let ip = Ipv6Addr::from(octets);
            let scope = img.u32(24);
            Some(format!(
                "{{sa_family=AF_INET6, sin6_port={port}, sin6_addr=\"{ip}\", sin6_scope_id={scope}}}"
            ))
        }
        other => {
            let body: String = raw
                .data
                .iter()
                .skip(2)
                .take(12)
                .map(|b| format!("{b:02x}"))
                .collect();
            Some(format!(
                "{{sa_family={}, sa_data=0x{body}}}",
                decode_socket_family(other as u64)
            ))
        }
    }
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
    fn ipv4_renders_literal_and_port() {
        // sockaddr_in for 127.0.0.1:8080
        let mut raw = vec![16u8, AF_INET];
        raw.extend_from_slice(&8080u16.to_be_bytes());
        raw.extend_from_slice(&[127, 0, 0, 1]);
        raw.extend_from_slice(&[0u8; 8]);
        let s = render_sockaddr(&Flat(raw), 0, 16).unwrap();
        assert_eq!(
            s,
            "{sa_family=AF_INET, sin_port=8080, sin_addr=\"127.0.0.1\"}"
        );
    }

    #[test]
    fn unix_renders_path() {
        let mut raw = vec![106u8, AF_UNIX];
        raw.extend_from_slice(b"/tmp/sock\0");
        raw.resize(106, 0);
        let s = render_sockaddr(&Flat(raw), 0, 106).unwrap();
        assert_eq!(s, "{sa_family=AF_UNIX, sun_path=\"/tmp/sock\"}");
    }

    #[test]
    fn ipv6_loopback_compresses() {
        let mut raw = vec![28u8, AF_INET6];
        raw.extend_from_slice(&443u16.to_be_bytes()); // sin6_port
        raw.extend_from_slice(&[0u8; 4]); // sin6_flowinfo
        let mut addr6 = [0u8; 16];
        addr6[15] = 1;
        raw.extend_from_slice(&addr6);
        raw.extend_from_slice(&2u32.to_le_bytes()); // sin6_scope_id
        let s = render_sockaddr(&Flat(raw), 0, 28).unwrap();
        assert_eq!(
            s,
            "{sa_family=AF_INET6, sin6_port=443, sin6_addr=\"::1\", sin6_scope_id=2}"
        );
    }

    #[test]
    fn unknown_family_falls_back_to_hex() {
        let raw = vec![8u8, 32, 0xab, 0xcd];
        let s = render_sockaddr(&Flat(raw), 0, 4).unwrap();
        assert!(s.starts_with("{sa_family=AF_SYSTEM, sa_data=0xabcd"), "{s}");
    }
}
