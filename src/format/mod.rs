//! Output formatting: the sink trait, the text and JSON-Lines formatters,
//! and the summary aggregator.

pub mod json;
pub mod summary;
pub mod text;

use std::io::{self, Write};
use std::time::Duration;

use crate::event::SyscallEvent;

/// Where formatted output goes. Events are delivered synchronously from the
/// debugger event loop; a sink may block on I/O but never on the traced
/// process.
pub trait EventSink {
    fn event(&mut self, event: &SyscallEvent, out: &mut dyn Write) -> io::Result<()>;

    /// Called once at shutdown with the total traced wall-clock time.
    fn finish(&mut self, _total: Duration, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}

/// Coloring policy for the text formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the policy against the terminal and the NO_COLOR convention.
    /// `Always` wins over NO_COLOR because it is an explicit request.
    pub fn enabled(self, sink_is_tty: bool) -> bool {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => sink_is_tty && !no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn auto_needs_a_tty() {
        std::env::remove_var("NO_COLOR");
        assert!(!ColorMode::Auto.enabled(false));
        assert!(ColorMode::Auto.enabled(true));
        assert!(ColorMode::Always.enabled(false));
        assert!(!ColorMode::Never.enabled(true));
    }

    #[test]
    #[serial_test::serial]
    fn no_color_env_disables_auto() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!ColorMode::Auto.enabled(true));
        assert!(ColorMode::Always.enabled(true));
        std::env::remove_var("NO_COLOR");
    }
}
