//! Argument routing
//!
//! Splits a flat list of command arguments into positional arguments,
//! string-valued flags and boolean flags.

use std::collections::{HashMap, HashSet};
use tracing::debug;

const LONG_PREFIX: &str = "--";
const SHORT_PREFIX: &str = "-";

/// Parsed view over the arguments of a single command invocation
///
/// Built once and read-only afterwards. A flag followed by a token that does
/// not start with `-` takes that token as its value; any other flag is
/// boolean. Both `--name` and `-n` forms are accepted and share one namespace,
/// and the last occurrence of a name decides which view it lands in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgRouter {
    raw: Vec<String>,
    args: Vec<String>,
    flags: HashMap<String, String>,
    bool_flags: HashSet<String>,
}

impl ArgRouter {
    /// Parse the given tokens
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_switches(tokens, &[])
    }

    /// Parse the given tokens, treating the named flags as switches
    ///
    /// A switch never takes a value, so `-a dir` yields the boolean flag `a`
    /// and the positional `dir`. All other flags behave as in [`ArgRouter::new`].
    pub fn with_switches<I, S>(tokens: I, switches: &[&str]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut router = Self {
            raw: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        };
        let mut tokens = router.raw.iter().peekable();

        while let Some(token) = tokens.next() {
            let Some(name) = flag_name(token) else {
                router.args.push(token.clone());
                continue;
            };

            let value = if switches.contains(&name) {
                None
            } else {
                tokens.next_if(|next| !next.starts_with(SHORT_PREFIX))
            };

            match value {
                Some(value) => {
                    router.bool_flags.remove(name);
                    router.flags.insert(name.to_string(), value.clone());
                }
                None => {
                    router.flags.remove(name);
                    router.bool_flags.insert(name.to_string());
                }
            }
        }

        debug!(
            args = ?router.args,
            flags = ?router.flags,
            bool_flags = ?router.bool_flags,
            "Parsed command arguments"
        );
        router
    }

    /// The tokens this router was built from, unchanged
    pub fn raw_args(&self) -> &[String] {
        &self.raw
    }

    /// Non-flag arguments, in the order they were given
    pub fn positional_args(&self) -> &[String] {
        &self.args
    }

    /// Value of a string flag, if one was given
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(String::as_str)
    }

    /// Value of a string flag, or `default` when it is absent
    pub fn flag_or_default<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.flag(name).unwrap_or(default)
    }

    /// Whether a boolean flag was given
    ///
    /// Only flags that were not followed by a value count; `--name Alice`
    /// is a string flag and does not make `has_flag("name")` true.
    pub fn has_flag(&self, name: &str) -> bool {
        self.bool_flags.contains(name)
    }

    /// True when no tokens were parsed at all
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Strip a long or short flag prefix, returning `None` for positional tokens
fn flag_name(token: &str) -> Option<&str> {
    token
        .strip_prefix(LONG_PREFIX)
        .or_else(|| token.strip_prefix(SHORT_PREFIX))
}
