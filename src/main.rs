//! CLI entry point.
//!
//! # Usage
//!
//! ```bash
//! strace-macos /bin/cat /etc/hostname
//! strace-macos -e trace=open,openat -- ls /tmp
//! strace-macos -p 1234
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use strace_macos::format::ColorMode;
use strace_macos::{trace_attach, trace_command, TraceOptions};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const NAME: &str = "strace-macos";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    author,
    name = NAME,
    version,
    about = "Trace BSD system calls on macOS through the LLDB debugger engine (SIP stays on)."
)]
struct Cli {
    #[clap(help = "Program to trace with its arguments, e.g. 'ls /tmp'")]
    command: Vec<String>,

    #[clap(
        short = 'p',
        long = "pid",
        help = "Attach to the process with this PID instead of launching a command"
    )]
    pid: Option<i32>,

    #[clap(
        short = 'o',
        long = "output",
        help = "Send trace output to FILE instead of stderr"
    )]
    output: Option<PathBuf>,

    #[clap(long = "json", help = "Emit JSON-Lines records instead of text")]
    json: bool,

    #[clap(
        long = "color",
        value_enum,
        default_value = "auto",
        help = "When to color text output; 'auto' colors only on a terminal"
    )]
    color: ColorArg,

    #[clap(
        short = 'c',
        long = "summary",
        help = "Count time, calls, and errors per syscall and report a summary instead of events"
    )]
    summary: bool,

    #[clap(
        short = 'e',
        long = "trace",
        value_name = "SPEC",
        help = "Trace only the named syscalls and/or categories, e.g. 'open,openat' or 'trace=file,network'"
    )]
    trace: Option<String>,

    #[clap(
        long = "no-abbrev",
        help = "Print raw flag values without symbolic decoding"
    )]
    no_abbrev: bool,

    #[clap(
        long = "string-limit",
        value_name = "N",
        default_value_t = 32,
        help = "Cap string/buffer rendering at N bytes"
    )]
    string_limit: usize,

    #[arg(
        short = 't',
        long = "timestamps",
        action = ArgAction::SetTrue,
        help = "Prefix each event with the wall-clock time of the call"
    )]
    timestamps: bool,

    #[clap(
        short = 'f',
        long = "follow-spawn",
        help = "Ask the interposition helper (when present) to stop newly spawned children for attach"
    )]
    follow_spawn: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.pid.is_none() && cli.command.is_empty() {
        eprintln!("{NAME}: usage error: must have PROG [ARGS] or -p PID");
        return ExitCode::from(2);
    }
    if cli.pid.is_some() && !cli.command.is_empty() {
        eprintln!("{NAME}: usage error: cannot give both a command and -p PID");
        return ExitCode::from(2);
    }

    let options = TraceOptions {
        output: cli.output,
        json: cli.json,
        color: cli.color.into(),
        summary_only: cli.summary,
        trace_filter: cli.trace,
        no_abbrev: cli.no_abbrev,
        string_limit: cli.string_limit,
        timestamps: cli.timestamps,
        follow_spawn: cli.follow_spawn,
    };

    let result = match cli.pid {
        Some(pid) => trace_attach(pid, &options),
        None => trace_command(&cli.command, &options),
    };

    match result {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(e) => {
            eprintln!("{NAME}: {}: {e}", e.kind());
            ExitCode::from(e.exit_code().clamp(0, 255) as u8)
        }
    }
}
