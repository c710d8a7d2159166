//! End-to-end scenarios over a scripted debugger: the full loop from
//! breakpoint stops to formatted output, without a real target.

mod support;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use strace_macos::errors::TraceError;
use strace_macos::filter::Filter;
use strace_macos::format::json::JsonSink;
use strace_macos::format::summary::SummarySink;
use strace_macos::format::text::TextSink;
use strace_macos::registry::SyscallRegistry;
use strace_macos::session::ShutdownMode;
use strace_macos::syscalls::numbers as n;

use support::harness::SessionBuilder;
use support::{Call, ScriptedDebugger};

const PATH_ADDR: u64 = 0x5000;

fn text_sink() -> Vec<Box<dyn strace_macos::format::EventSink>> {
    vec![Box::new(TextSink::new(false, false))]
}

#[test]
fn exit_syscall_flushes_as_unfinished_and_mirrors_exit_code() {
    let calls = [Call::new(n::SYS_exit, [0, 0, 0, 0, 0, 0], 0).never_returns()];
    let driver = ScriptedDebugger::new(&calls, 0);
    let (mut session, buf) = SessionBuilder::default().build(driver, text_sink());
    let code = session.run().unwrap();
    assert_eq!(code, 0);
    let out = buf.text();
    assert!(out.contains("exit(0) = ?"), "{out}");
}

#[test]
fn open_renders_path_flags_and_fd() {
    let calls = [Call::new(
        n::SYS_open,
        [PATH_ADDR, 0, 0, 0, 0, 0],
        3,
    )];
    let driver = ScriptedDebugger::new(&calls, 0).map(PATH_ADDR, b"/etc/hostname\0");
    let (mut session, buf) = SessionBuilder::default().build(driver, text_sink());
    session.run().unwrap();
    let out = buf.text();
    assert!(
        out.contains("open(\"/etc/hostname\", O_RDONLY) = 3"),
        "{out}"
    );
}

#[test]
fn filter_admits_only_named_syscalls() {
    let calls = [
        Call::new(n::SYS_open, [PATH_ADDR, 0, 0, 0, 0, 0], 3),
        Call::new(n::SYS_close, [3, 0, 0, 0, 0, 0], 0),
        Call::new(n::SYS_getpid, [0; 6], 42),
    ];
    let registry = SyscallRegistry::new();
    let filter = Filter::parse("open,openat", &registry).unwrap();
    let driver = ScriptedDebugger::new(&calls, 0).map(PATH_ADDR, b"/etc/hostname\0");
    let builder = SessionBuilder {
        filter,
        ..Default::default()
    };
    let (mut session, buf) = builder.build(driver, text_sink());
    session.run().unwrap();
    let out = buf.text();
    assert!(out.contains("open("), "{out}");
    assert!(!out.contains("close("), "{out}");
    assert!(!out.contains("getpid("), "{out}");
}

#[test]
fn failed_open_decodes_enoent_and_exit_code_is_mirrored() {
    let calls = [
        Call::failing(n::SYS_open, [PATH_ADDR, 0, 0, 0, 0, 0], 2),
        Call::new(n::SYS_write, [2, 0, 0, 0, 0, 0], 25),
    ];
    let driver = ScriptedDebugger::new(&calls, 1).map(PATH_ADDR, b"/nonexistent\0");
    let (mut session, buf) = SessionBuilder::default().build(driver, text_sink());
    let code = session.run().unwrap();
    assert_eq!(code, 1);
    let out = buf.text();
    assert!(
        out.contains("open(\"/nonexistent\", O_RDONLY) = -1 ENOENT (No such file or directory)"),
        "{out}"
    );
    assert!(out.contains("write(2, "), "{out}");
}

#[test]
fn read_zero_is_success_and_eagain_is_error() {
    let calls = [
        Call::new(n::SYS_read, [0, 0x6000, 16, 0, 0, 0], 0),
        Call::failing(n::SYS_read, [0, 0x6000, 16, 0, 0, 0], 35),
    ];
    let driver = ScriptedDebugger::new(&calls, 0).map(0x6000, &[0u8; 16]);
    let (mut session, buf) = SessionBuilder::default().build(driver, text_sink());
    session.run().unwrap();
    let out = buf.text();
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].ends_with("= 0"), "{out}");
    assert!(
        lines[1].ends_with("= -1 EAGAIN (Resource temporarily unavailable)"),
        "{out}"
    );
}

#[test]
fn unknown_syscall_number_renders_raw_and_does_not_crash() {
    let calls = [Call::new(9999, [0xab, 0xcd, 0, 0, 0, 0], 7)];
    let driver = ScriptedDebugger::new(&calls, 0);
    let (mut session, buf) = SessionBuilder::default().build(driver, text_sink());
    session.run().unwrap();
    let out = buf.text();
    assert!(out.contains("syscall_9999(0xab, 0xcd, 0x0, 0x0, 0x0, 0x0) = 7"), "{out}");
}

#[test]
fn json_lines_all_parse_with_ordered_args() {
    let calls = [
        Call::new(n::SYS_open, [PATH_ADDR, 0, 0, 0, 0, 0], 3),
        Call::new(n::SYS_close, [3, 0, 0, 0, 0, 0], 0),
    ];
    let driver = ScriptedDebugger::new(&calls, 0).map(PATH_ADDR, b"/etc/hostname\0");
    let (mut session, buf) =
        SessionBuilder::default().build(driver, vec![Box::new(JsonSink::new())]);
    session.run().unwrap();
    let out = buf.text();
    let mut seen = 0;
    for line in out.lines() {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
        for key in ["ts", "dur_us", "tid", "syscall", "category", "args", "retval", "retval_decoded", "error"] {
            assert!(parsed.get(key).is_some(), "missing {key} in {line}");
        }
        assert!(parsed["args"].is_array());
        seen += 1;
    }
    assert_eq!(seen, 2);
    let first: serde_json::Value = serde_json::from_str(out.lines().next().unwrap()).unwrap();
    assert_eq!(first["syscall"], "open");
    assert_eq!(first["category"], "file");
    assert_eq!(first["args"][0]["name"], "path");
    assert_eq!(first["args"][0]["value"], "\"/etc/hostname\"");
    assert_eq!(first["error"], false);
}

#[test]
fn summary_mode_emits_table_instead_of_events() {
    let calls = [
        Call::new(n::SYS_read, [0, 0x6000, 4, 0, 0, 0], 4),
        Call::new(n::SYS_read, [0, 0x6000, 4, 0, 0, 0], 4),
        Call::new(n::SYS_write, [1, 0x6000, 4, 0, 0, 0], 4),
        Call::new(n::SYS_close, [0, 0, 0, 0, 0, 0], 0),
    ];
    let driver = ScriptedDebugger::new(&calls, 0).map(0x6000, b"data");
    let (mut session, buf) =
        SessionBuilder::default().build(driver, vec![Box::new(SummarySink::new())]);
    session.run().unwrap();
    let out = buf.text();
    assert!(!out.contains("read(0,"), "no per-event output expected: {out}");
    for name in ["read", "write", "close", "total"] {
        assert!(out.contains(name), "{out}");
    }
    // The calls column for read shows both calls.
    let read_row = out.lines().find(|l| l.trim().ends_with("read")).unwrap();
    assert!(read_row.split_whitespace().any(|tok| tok == "2"), "{read_row}");
}

#[test]
fn interleaved_threads_pair_independently() {
    let calls = [
        Call::new(n::SYS_getpid, [0; 6], 10).on_thread(1),
        Call::new(n::SYS_getuid, [0; 6], 20).on_thread(2),
    ];
    // Thread 2 enters before thread 1 exits, and completes first.
    let driver = ScriptedDebugger::new(&calls, 0).interleave_pairs();
    let (mut session, buf) = SessionBuilder::default().build(driver, text_sink());
    session.run().unwrap();
    let out = buf.text();
    assert!(out.contains("getpid() = 10"), "{out}");
    assert!(out.contains("getuid() = 20"), "{out}");
}

#[test]
fn interrupt_detaches_an_attached_target_and_reports_130() {
    let calls: Vec<Call> = (0..100)
        .map(|_| Call::new(n::SYS_getpid, [0; 6], 42))
        .collect();
    let flag = Arc::new(AtomicBool::new(false));
    let driver = ScriptedDebugger::new(&calls, 0).interrupt(flag.clone(), 4);
    let log = driver.log.clone();
    let builder = SessionBuilder {
        attached: true,
        interrupted: flag,
        ..Default::default()
    };
    let (mut session, buf) = builder.build(driver, text_sink());
    let err = session.run().unwrap_err();
    assert!(matches!(err, TraceError::Interrupted));
    assert_eq!(err.exit_code(), 130);
    assert_eq!(log.lock().unwrap().shutdown, Some(ShutdownMode::Detach));
    // At least two complete getpid events made it out first.
    assert!(buf.text().matches("getpid() = 42").count() >= 2, "{}", buf.text());
}

#[test]
fn missing_trampoline_symbol_is_fatal_with_exit_3() {
    let driver = ScriptedDebugger::new(&[], 0).without_symbols();
    let (mut session, _buf) = SessionBuilder::default().build(driver, text_sink());
    let err = session.run().unwrap_err();
    assert!(matches!(err, TraceError::SymbolResolution { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn exit_breakpoints_are_one_shot_and_entry_is_persistent() {
    let calls = [
        Call::new(n::SYS_getpid, [0; 6], 1),
        Call::new(n::SYS_getpid, [0; 6], 1),
    ];
    let driver = ScriptedDebugger::new(&calls, 0);
    let log = driver.log.clone();
    let (mut session, _buf) = SessionBuilder::default().build(driver, text_sink());
    session.run().unwrap();
    let installed = log.lock().unwrap().installed.clone();
    // One persistent entry breakpoint plus one one-shot per call.
    assert_eq!(installed.iter().filter(|(_, one_shot)| !one_shot).count(), 1);
    assert_eq!(installed.iter().filter(|(_, one_shot)| *one_shot).count(), 2);
}
