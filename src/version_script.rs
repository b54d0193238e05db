//! Matches symbol names against `--version-script`/`--dynamic-list`
//! pattern lists.
//!
//! Full GNU version-script grammar (version nodes, `global:`/`local:`
//! blocks, `extern "C++" { ... }` demangled blocks, version
//! inheritance) is out of scope; this covers the common case needed by
//! the core — a flat set of glob patterns assigning each matching
//! symbol to `global` or `local` binding/visibility, which is what
//! `--dynamic-list` always is and what most real version scripts
//! reduce to for a single, unversioned `{ global: ...; local: *; }`.

use crate::glob;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Global,
    Local,
}

pub struct VersionScript {
    global_patterns: Vec<String>,
    local_patterns: Vec<String>,
}

impl VersionScript {
    pub fn new() -> Self {
        VersionScript { global_patterns: Vec::new(), local_patterns: Vec::new() }
    }

    pub fn add_global(&mut self, pattern: impl Into<String>) {
        self.global_patterns.push(pattern.into());
    }

    pub fn add_local(&mut self, pattern: impl Into<String>) {
        self.local_patterns.push(pattern.into());
    }

    /// Parses a minimal `{ global: pat1, pat2; local: pat3; };` script,
    /// ignoring version-tag lines and `extern "C++"` blocks (a warning
    /// is the caller's responsibility, not this parser's).
    pub fn parse(text: &str) -> Self {
        let mut script = VersionScript::new();
        let mut section = None;
        for raw in text.split(|c| c == ';' || c == '\n') {
            let token = raw.trim();
            if token.is_empty() || token == "{" || token == "}" {
                continue;
            }
            if let Some(rest) = token.strip_prefix("global:") {
                section = Some(Binding::Global);
                script.add_pattern_list(section, rest);
                continue;
            }
            if let Some(rest) = token.strip_prefix("local:") {
                section = Some(Binding::Local);
                script.add_pattern_list(section, rest);
                continue;
            }
            script.add_pattern_list(section, token);
        }
        script
    }

    fn add_pattern_list(&mut self, section: Option<Binding>, text: &str) {
        for pat in text.split(',') {
            let pat = pat.trim().trim_matches('"');
            if pat.is_empty() {
                continue;
            }
            match section {
                Some(Binding::Global) => self.global_patterns.push(pat.to_string()),
                Some(Binding::Local) => self.local_patterns.push(pat.to_string()),
                None => {}
            }
        }
    }

    /// A name matching any `global:` pattern is exported even if a
    /// broader `local:` pattern (typically the catch-all `*`) would
    /// also match; a name matching neither list, or only `local:`,
    /// stays local.
    pub fn classify(&self, name: &str) -> Binding {
        if self.global_patterns.iter().any(|p| glob::matches(p, name)) {
            return Binding::Global;
        }
        Binding::Local
    }
}

impl Default for VersionScript {
    fn default() -> Self {
        Self::new()
    }
}

/// `--dynamic-list FILE` is a flat, unlabeled pattern list: every
/// matching symbol is exported, unmatched symbols keep whatever
/// visibility they already had.
pub struct DynamicList {
    patterns: Vec<String>,
}

impl DynamicList {
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .split(|c: char| c == ';' || c == '\n' || c == '{' || c == '}')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        DynamicList { patterns }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| glob::matches(p, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_and_local_sections_classify_correctly() {
        let script = VersionScript::parse("{ global: foo*; local: *; };");
        assert_eq!(script.classify("foobar"), Binding::Global);
        assert_eq!(script.classify("bar"), Binding::Local);
    }

    #[test]
    fn unmatched_name_defaults_to_local() {
        let script = VersionScript::parse("{ global: foo*; local: *; };");
        assert_eq!(script.classify("unrelated"), Binding::Local);
    }

    #[test]
    fn dynamic_list_matches_plain_patterns() {
        let list = DynamicList::parse("{ foo; bar_*; };");
        assert!(list.matches("bar_baz"));
        assert!(!list.matches("qux"));
    }
}
