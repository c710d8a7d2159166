//! The trace filter: a compiled accept/reject predicate over syscall names
//! and category tags.
//!
//! The expression is the comma-separated body of strace's `-e trace=`: any
//! mix of syscall names and tags from the closed category set. It is parsed
//! once at startup; evaluation at entry-hit is two hash lookups, cheap
//! enough to run before any argument materialization.

use std::collections::HashSet;

use crate::errors::{Result, TraceError};
use crate::registry::SyscallRegistry;
use crate::syscalls::Category;

#[derive(Debug, Default)]
pub struct Filter {
    names: HashSet<String>,
    categories: HashSet<Category>,
    /// True when no expression was given: everything passes.
    pass_all: bool,
}

impl Filter {
    /// The no-op filter.
    pub fn all() -> Self {
        Filter {
            pass_all: true,
            ..Filter::default()
        }
    }

    /// Parse a filter expression. A leading `trace=` prefix is accepted so
    /// both `--trace open,file` and `-e trace=open,file` spellings reach the
    /// same place. Unknown tokens are usage errors, caught before tracing
    /// starts.
    pub fn parse(expr: &str, registry: &SyscallRegistry) -> Result<Self> {
        let body = expr.strip_prefix("trace=").unwrap_or(expr);
        if body.is_empty() {
            return Err(TraceError::Usage("empty trace filter".into()));
        }

        let mut filter = Filter::default();
        for token in body.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Ok(category) = token.parse::<Category>() {
                filter.categories.insert(category);
            } else if registry.knows_name(token) {
                filter.names.insert(token.to_string());
            } else {
                return Err(TraceError::Usage(format!(
                    "unknown syscall or category in trace filter: `{token}`"
                )));
            }
        }

        if filter.names.is_empty() && filter.categories.is_empty() {
            return Err(TraceError::Usage("empty trace filter".into()));
        }
        Ok(filter)
    }

    pub fn accepts(&self, name: &str, category: Category) -> bool {
        self.pass_all || self.categories.contains(&category) || self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_list_accepts_only_those_names() {
        let reg = SyscallRegistry::new();
        let filter = Filter::parse("open,openat", &reg).unwrap();
        assert!(filter.accepts("open", Category::File));
        assert!(filter.accepts("openat", Category::File));
        assert!(!filter.accepts("close", Category::File));
    }

    #[test]
    fn category_accepts_whole_class() {
        let reg = SyscallRegistry::new();
        let filter = Filter::parse("trace=network", &reg).unwrap();
        assert!(filter.accepts("socket", Category::Network));
        assert!(!filter.accepts("open", Category::File));
    }

    #[test]
    fn mixed_names_and_categories() {
        let reg = SyscallRegistry::new();
        let filter = Filter::parse("file,kill", &reg).unwrap();
        assert!(filter.accepts("open", Category::File));
        assert!(filter.accepts("kill", Category::Signal));
        assert!(!filter.accepts("socket", Category::Network));
    }

    #[test]
    fn unknown_token_is_a_usage_error() {
        let reg = SyscallRegistry::new();
        let err = Filter::parse("opne", &reg).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn pass_all_accepts_everything() {
        assert!(Filter::all().accepts("anything", Category::Misc));
    }
}
