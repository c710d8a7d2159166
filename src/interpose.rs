//! Cooperation with the optional fork-interposition helper library.
//!
//! The helper interposes the spawn family and SIGSTOPs newly-created
//! children so the tracer can attach before they run. The core only sets
//! the sentinel environment (and the dyld insertion variable when the
//! helper dylib is actually present); it tolerates the helper being absent
//! and never interprets the sentinel's value.

use std::path::PathBuf;

/// Sentinel understood by the helper: children stop themselves when set.
pub const CHILD_STOP_ENV: &str = "STRACE_MACOS_CHILD_STOP";

const HELPER_DYLIB: &str = "libfork_interpose.dylib";

/// Look for the helper next to the tracer binary.
pub fn helper_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let candidate = exe.parent()?.join(HELPER_DYLIB);
    candidate.is_file().then_some(candidate)
}

/// Environment entries to add to the target when follow-spawn is requested.
/// Without the helper on disk only the sentinel is set, which is harmless.
pub fn child_stop_env() -> Vec<(String, String)> {
    let mut env = vec![(CHILD_STOP_ENV.to_string(), "1".to_string())];
    if let Some(dylib) = helper_path() {
        env.push((
            "DYLD_INSERT_LIBRARIES".to_string(),
            dylib.to_string_lossy().into_owned(),
        ));
    }
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_always_present() {
        let env = child_stop_env();
        assert!(env.iter().any(|(k, v)| k == CHILD_STOP_ENV && v == "1"));
    }
}
