//! The parameter decode functions the definition tables point at.
//!
//! Each function is a pure `fn(&DecodeCtx) -> Value` so the tables stay
//! const-constructible. Cross-argument references (buffer lengths, socklen
//! slots) use the fixed argument positions of the syscall families that
//! share the decoder; families with different positions get their own
//! function.

use crate::decode::structs::kevent::render_kevent_array;
use crate::decode::structs::msghdr::render_msghdr;
use crate::decode::structs::process_structs::{
    render_pollfd_array, render_rlimit, render_rusage,
};
use crate::decode::structs::sigaction::render_sigaction;
use crate::decode::structs::sockaddr::render_sockaddr;
use crate::decode::structs::stat::render_stat;
use crate::decode::structs::statfs::render_statfs;
use crate::decode::structs::timeval::{render_itimerval, render_timespec, render_timeval};
use crate::decode::structs::vec::render_iovec_array;
use crate::decode::symbols::file::{
    decode_dirfd, decode_file_mode, decode_open_flags, ACCESS_MODES, AT_FLAGS, FCNTL_COMMANDS,
    FLOCK_OPS, SEEK_WHENCE, XATTR_FLAGS,
};
use crate::decode::symbols::ipc::POSIX_IPC_OFLAGS;
use crate::decode::symbols::memory::{
    decode_madvise, decode_map_flags, decode_prot, MINHERIT_VALUES, MSYNC_FLAGS,
};
use crate::decode::symbols::network::{
    decode_msg_flags, decode_so_option, decode_socket_family, decode_socket_type,
    decode_sol_level, IPPROTO_CONSTANTS, SHUTDOWN_HOW,
};
use crate::decode::symbols::process::{
    CSOPS_OPS, IDTYPES, PRIO_WHICH, PTRACE_REQUESTS, RLIMIT_RESOURCES, RUSAGE_WHO, WAIT_OPTIONS,
};
use crate::decode::symbols::signal::{decode_signal, decode_sigset, SIGPROCMASK_HOW};
use crate::decode::symbols::time::ITIMER_WHICH;
use crate::decode::symbols::{decode_enum, decode_flags, EnumTable, FlagTable};
use crate::decode::DecodeCtx;
use crate::event::Value;
use crate::memory::{read_bytes, read_cstring, read_u64};

/// How many argv/envp entries are materialized before eliding.
const STRING_VECTOR_MAX: usize = 8;

fn flags_value(ctx: &DecodeCtx, table: FlagTable) -> Value {
    if ctx.no_abbrev {
        Value::Flags(format!("{:#x}", ctx.raw))
    } else {
        Value::Flags(decode_flags(ctx.raw, table))
    }
}

fn enum_value(ctx: &DecodeCtx, table: EnumTable, prefix: &str) -> Value {
    if ctx.no_abbrev {
        Value::Flags(format!("{:#x}", ctx.raw))
    } else {
        Value::Sym(decode_enum(ctx.raw, table, prefix))
    }
}

// ---------------------------------------------------------------------------
// Scalars

pub fn int(ctx: &DecodeCtx) -> Value {
    Value::Int(ctx.raw_signed())
}

pub fn uint(ctx: &DecodeCtx) -> Value {
    Value::Uint(ctx.raw)
}

pub fn fd(ctx: &DecodeCtx) -> Value {
    Value::Fd(ctx.raw_signed())
}

pub fn ptr(ctx: &DecodeCtx) -> Value {
    Value::Pointer(ctx.raw)
}

pub fn hex(ctx: &DecodeCtx) -> Value {
    Value::Flags(format!("{:#x}", ctx.raw))
}

pub fn dev(ctx: &DecodeCtx) -> Value {
    Value::Sym(crate::decode::symbols::file::decode_dev(ctx.raw as i32))
}

pub fn octal_mode(ctx: &DecodeCtx) -> Value {
    if ctx.no_abbrev {
        Value::Octal(ctx.raw as u32)
    } else {
        Value::Flags(decode_file_mode(ctx.raw as u32))
    }
}

pub fn open_flags(ctx: &DecodeCtx) -> Value {
    if ctx.no_abbrev {
        Value::Flags(format!("{:#x}", ctx.raw))
    } else {
        Value::Flags(decode_open_flags(ctx.raw))
    }
}

/// open(2)'s mode argument only exists when O_CREAT is in the flag word.
pub fn open_mode(ctx: &DecodeCtx) -> Value {
    const O_CREAT: u64 = 0x0200;
    if ctx.arg(1) & O_CREAT != 0 {
        Value::Octal(ctx.raw as u32 & 0o7777)
    } else {
        Value::Skipped
    }
}

/// openat's mode sits one argument later than open's.
pub fn openat_mode(ctx: &DecodeCtx) -> Value {
    const O_CREAT: u64 = 0x0200;
    if ctx.arg(2) & O_CREAT != 0 {
        Value::Octal(ctx.raw as u32 & 0o7777)
    } else {
        Value::Skipped
    }
}

pub fn dirfd(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_dirfd(ctx.raw_signed()))
}

pub fn at_flags(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, AT_FLAGS)
}

pub fn access_mode(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, ACCESS_MODES)
}

pub fn seek_whence(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, SEEK_WHENCE, "SEEK")
}

pub fn fcntl_cmd(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, FCNTL_COMMANDS, "F")
}

pub fn flock_op(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, FLOCK_OPS)
}

pub fn xattr_flags(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, XATTR_FLAGS)
}

pub fn prot_flags(ctx: &DecodeCtx) -> Value {
    if ctx.no_abbrev {
        Value::Flags(format!("{:#x}", ctx.raw))
    } else {
        Value::Flags(decode_prot(ctx.raw))
    }
}

pub fn map_flags(ctx: &DecodeCtx) -> Value {
    if ctx.no_abbrev {
        Value::Flags(format!("{:#x}", ctx.raw))
    } else {
        Value::Flags(decode_map_flags(ctx.raw))
    }
}

pub fn madvise_advice(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_madvise(ctx.raw))
}

pub fn msync_flags(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, MSYNC_FLAGS)
}

pub fn minherit_value(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, MINHERIT_VALUES, "VM_INHERIT")
}

pub fn signal(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_signal(ctx.raw))
}

pub fn sigprocmask_how(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, SIGPROCMASK_HOW, "SIG")
}

pub fn socket_family(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_socket_family(ctx.raw))
}

pub fn socket_type(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_socket_type(ctx.raw))
}

pub fn socket_protocol(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, IPPROTO_CONSTANTS, "IPPROTO")
}

pub fn msg_flags(ctx: &DecodeCtx) -> Value {
    if ctx.no_abbrev {
        Value::Flags(format!("{:#x}", ctx.raw))
    } else {
        Value::Flags(decode_msg_flags(ctx.raw))
    }
}

pub fn shutdown_how(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, SHUTDOWN_HOW, "SHUT")
}

pub fn sol_level(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_sol_level(ctx.raw))
}

pub fn so_option(ctx: &DecodeCtx) -> Value {
    Value::Sym(decode_so_option(ctx.raw))
}

pub fn wait_options(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, WAIT_OPTIONS)
}

pub fn rlimit_resource(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, RLIMIT_RESOURCES, "RLIMIT")
}

pub fn rusage_who(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, RUSAGE_WHO, "RUSAGE")
}

pub fn prio_which(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, PRIO_WHICH, "PRIO")
}

pub fn idtype(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, IDTYPES, "P")
}

pub fn itimer_which(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, ITIMER_WHICH, "ITIMER")
}

pub fn ptrace_request(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, PTRACE_REQUESTS, "PT")
}

pub fn csops_op(ctx: &DecodeCtx) -> Value {
    enum_value(ctx, CSOPS_OPS, "CS_OPS")
}

pub fn posix_ipc_oflags(ctx: &DecodeCtx) -> Value {
    flags_value(ctx, POSIX_IPC_OFLAGS)
}

// ---------------------------------------------------------------------------
// Pre-call memory

pub fn path(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_cstring(ctx.mem, ctx.raw, 4096) {
        Ok(s) => Value::Str {
            text: s.text,
            truncated: s.truncated,
        },
        Err(_) => Value::Unreadable(ctx.raw),
    }
}

/// Write-side buffer: length in argument 2 (read/write/send/recv family).
pub fn buf_in_len2(ctx: &DecodeCtx) -> Value {
    buf_in(ctx, ctx.arg(2) as usize)
}

fn buf_in(ctx: &DecodeCtx, len: usize) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_bytes(ctx.mem, ctx.raw, len.min(ctx.string_limit)) {
        Ok(buf) if !buf.data.is_empty() || len == 0 => Value::Buffer {
            preview: buf.data,
            total: len,
            cap: ctx.string_limit,
        },
        _ => Value::Unreadable(ctx.raw),
    }
}

/// NULL-terminated string vector (execve argv/envp).
pub fn string_vector(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    let mut parts = Vec::new();
    for i in 0..STRING_VECTOR_MAX {
        let slot = ctx.raw + 8 * i as u64;
        match read_u64(ctx.mem, slot) {
            Ok(Some(0)) => {
                return Value::Array(format!("[{}]", parts.join(", ")));
            }
            Ok(Some(strp)) => match read_cstring(ctx.mem, strp, 4096) {
                Ok(s) => parts.push(crate::decode::quote::quote_cstr(&s.text, s.truncated)),
                Err(_) => parts.push(format!("{strp:#x}")),
            },
            _ => return Value::Unreadable(ctx.raw),
        }
    }
    parts.push("...".to_string());
    Value::Array(format!("[{}]", parts.join(", ")))
}

pub fn iovec_in_cnt2(ctx: &DecodeCtx) -> Value {
    iovec(ctx, ctx.arg(2) as usize, true)
}

fn iovec(ctx: &DecodeCtx, count: usize, materialize: bool) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match render_iovec_array(ctx.mem, ctx.raw, count, materialize, ctx.string_limit) {
        Some(body) => Value::Array(body),
        None => Value::Unreadable(ctx.raw),
    }
}

pub fn sockaddr_in_len2(ctx: &DecodeCtx) -> Value {
    sockaddr(ctx, ctx.arg(2) as usize)
}

/// sendto's destination address sits at argument 4 with its length at 5.
pub fn sockaddr_in_len5(ctx: &DecodeCtx) -> Value {
    sockaddr(ctx, ctx.arg(5) as usize)
}

fn sockaddr(ctx: &DecodeCtx, len: usize) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match render_sockaddr(ctx.mem, ctx.raw, len) {
        Some(body) => Value::Struct(body),
        None => Value::Unreadable(ctx.raw),
    }
}

pub fn msghdr_in(ctx: &DecodeCtx) -> Value {
    msghdr(ctx, true)
}

fn msghdr(ctx: &DecodeCtx, materialize: bool) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match render_msghdr(ctx.mem, ctx.raw, materialize, ctx.string_limit) {
        Some(body) => Value::Struct(body),
        None => Value::Unreadable(ctx.raw),
    }
}

pub fn timespec_in(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_timespec(ctx.mem, ctx.raw))
}

pub fn timeval_in(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_timeval(ctx.mem, ctx.raw))
}

pub fn itimerval_in(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_itimerval(ctx.mem, ctx.raw))
}

pub fn sigaction_in(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_sigaction(ctx.mem, ctx.raw))
}

pub fn rlimit_in(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_rlimit(ctx.mem, ctx.raw))
}

/// Pointer to a sigset_t, readable before the call (sigprocmask set,
/// sigsuspend mask).
pub fn sigset_ptr(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_bytes(ctx.mem, ctx.raw, 4) {
        Ok(buf) if buf.data.len() == 4 => {
            let mask = u32::from_le_bytes([buf.data[0], buf.data[1], buf.data[2], buf.data[3]]);
            Value::Sym(decode_sigset(mask as u64))
        }
        _ => Value::Unreadable(ctx.raw),
    }
}

pub fn kevent_changelist_cnt2(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match render_kevent_array(ctx.mem, ctx.raw, ctx.arg(2) as usize) {
        Some(body) => Value::Array(body),
        None => Value::Unreadable(ctx.raw),
    }
}

fn struct_or_unreadable(ctx: &DecodeCtx, rendered: Option<String>) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match rendered {
        Some(body) => Value::Struct(body),
        None => Value::Unreadable(ctx.raw),
    }
}

// ---------------------------------------------------------------------------
// Post-call memory (run at exit, on success)

pub fn stat_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_stat(ctx.mem, ctx.raw, ctx.no_abbrev))
}

pub fn statfs_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_statfs(ctx.mem, ctx.raw))
}

pub fn rusage_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_rusage(ctx.mem, ctx.raw))
}

pub fn rlimit_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_rlimit(ctx.mem, ctx.raw))
}

pub fn timeval_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_timeval(ctx.mem, ctx.raw))
}

pub fn itimerval_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_itimerval(ctx.mem, ctx.raw))
}

pub fn sigaction_out(ctx: &DecodeCtx) -> Value {
    struct_or_unreadable(ctx, render_sigaction(ctx.mem, ctx.raw))
}

pub fn sigset_out(ctx: &DecodeCtx) -> Value {
    sigset_ptr(ctx)
}

/// The kernel-filled socket address of accept/getpeername/getsockname/
/// recvfrom; the struct's own sa_len bounds the read.
pub fn sockaddr_out(ctx: &DecodeCtx) -> Value {
    sockaddr(ctx, 0)
}

pub fn msghdr_out(ctx: &DecodeCtx) -> Value {
    msghdr(ctx, true)
}

/// An int the kernel writes through a pointer (posix_spawn's pid slot,
/// socketpair's fd pair renders through `fd_pair_out`).
pub fn pid_out(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_bytes(ctx.mem, ctx.raw, 4) {
        Ok(buf) if buf.data.len() == 4 => Value::Array(format!(
            "[{}]",
            i32::from_le_bytes([buf.data[0], buf.data[1], buf.data[2], buf.data[3]])
        )),
        _ => Value::Unreadable(ctx.raw),
    }
}

pub fn fd_pair_out(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_bytes(ctx.mem, ctx.raw, 8) {
        Ok(buf) if buf.data.len() == 8 => {
            let a = i32::from_le_bytes([buf.data[0], buf.data[1], buf.data[2], buf.data[3]]);
            let b = i32::from_le_bytes([buf.data[4], buf.data[5], buf.data[6], buf.data[7]]);
            Value::Array(format!("[{a}, {b}]"))
        }
        _ => Value::Unreadable(ctx.raw),
    }
}

/// A NUL-terminated string the kernel wrote (getlogin's name buffer).
pub fn cstring_out(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_cstring(ctx.mem, ctx.raw, 4096) {
        Ok(s) => Value::Str {
            text: s.text,
            truncated: s.truncated,
        },
        Err(_) => Value::Unreadable(ctx.raw),
    }
}

/// An InOut socklen_t slot: renders the pointed-to length.
pub fn socklen_ptr(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    match read_bytes(ctx.mem, ctx.raw, 4) {
        Ok(buf) if buf.data.len() == 4 => Value::Array(format!(
            "[{}]",
            u32::from_le_bytes([buf.data[0], buf.data[1], buf.data[2], buf.data[3]])
        )),
        _ => Value::Unreadable(ctx.raw),
    }
}

/// poll's fds array: events at entry, events+revents after the call.
pub fn pollfd_inout(ctx: &DecodeCtx) -> Value {
    if ctx.raw == 0 {
        return Value::Pointer(0);
    }
    let with_revents = ctx.retval.is_some();
    match render_pollfd_array(ctx.mem, ctx.raw, ctx.arg(1) as usize, with_revents) {
        Some(body) => Value::Array(body),
        None => Value::Unreadable(ctx.raw),
    }
}

// ---------------------------------------------------------------------------
// Composite (exit-time, consults the return value)

/// Read-side buffer: the kernel wrote `retval` bytes.
pub fn buf_out_ret(ctx: &DecodeCtx) -> Value {
    match ctx.retval {
        Some(ret) if ret >= 0 => buf_in(ctx, ret as usize),
        // Placeholder at entry or on error; the data is not meaningful.
        _ => Value::Pointer(ctx.raw),
    }
}

pub fn iovec_out_cnt2(ctx: &DecodeCtx) -> Value {
    iovec(ctx, ctx.arg(2) as usize, ctx.retval.is_some())
}

/// kevent's eventlist: the return value is the number of events delivered.
pub fn kevent_eventlist_ret(ctx: &DecodeCtx) -> Value {
    match ctx.retval {
        Some(ret) if ret > 0 => match render_kevent_array(ctx.mem, ctx.raw, ret as usize) {
            Some(body) => Value::Array(body),
            None => Value::Unreadable(ctx.raw),
        },
        Some(_) => Value::Array("[]".to_string()),
        None => Value::Pointer(ctx.raw),
    }
}

/// readlink writes `retval` bytes with no NUL.
pub fn readlink_buf_ret(ctx: &DecodeCtx) -> Value {
    match ctx.retval {
        Some(ret) if ret >= 0 => match read_bytes(ctx.mem, ctx.raw, ret as usize) {
            Ok(buf) if buf.data.len() == ret as usize => Value::Str {
                text: String::from_utf8_lossy(&buf.data).into_owned(),
                truncated: false,
            },
            _ => Value::Unreadable(ctx.raw),
        },
        _ => Value::Pointer(ctx.raw),
    }
}

// ---------------------------------------------------------------------------
// Custom return decoders

/// fcntl's return depends on the command argument.
pub fn fcntl_return(ret: i64, ctx: &DecodeCtx) -> String {
    const F_GETFD: u64 = 1;
    const F_GETFL: u64 = 3;
    match ctx.arg(1) {
        F_GETFL if !ctx.no_abbrev => format!("{} ({ret:#x})", decode_open_flags(ret as u64)),
        F_GETFD if !ctx.no_abbrev && ret & 1 != 0 => "FD_CLOEXEC".to_string(),
        _ => ret.to_string(),
    }
}
