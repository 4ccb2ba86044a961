//! Single compiled pattern line
//!
//! A [`Rule`] is one surviving line from the rule file: negation and
//! directory markers stripped, the remainder normalized and split into
//! `/`-delimited segments. Wildcard segments are compiled to an anchored
//! regex once, at construction; a rule is immutable afterwards.

use regex::Regex;

/// One `/`-delimited component of a compiled pattern.
#[derive(Debug, Clone)]
pub(crate) enum Segment {
    /// Plain text, matched by byte equality.
    Literal(String),
    /// `**`: absorbs zero or more whole path segments.
    AnyDirs,
    /// Contains `*` or `?`; matched by an anchored automaton confined to
    /// one path segment (a `*` never crosses a `/`).
    Wildcard {
        source: String,
        automaton: Option<Regex>,
    },
}

impl Segment {
    fn compile(part: &str) -> Self {
        if part == "**" {
            return Segment::AnyDirs;
        }
        if part.contains('*') || part.contains('?') {
            // A failed compile degrades the segment to literal matching
            // rather than failing the whole rule set.
            return Segment::Wildcard {
                source: part.to_string(),
                automaton: build_automaton(part),
            };
        }
        Segment::Literal(part.to_string())
    }

    /// Match this segment against a single path segment.
    pub(crate) fn matches(&self, part: &str) -> bool {
        match self {
            Segment::Literal(text) => text == part,
            Segment::AnyDirs => true,
            Segment::Wildcard { source, automaton } => match automaton {
                Some(re) => re.is_match(part),
                None => source == part,
            },
        }
    }

    pub(crate) fn is_any_dirs(&self) -> bool {
        matches!(self, Segment::AnyDirs)
    }
}

/// Compile a wildcard segment into an anchored regex: `*` becomes a run of
/// non-separator characters (possibly empty), `?` exactly one, everything
/// else literal and case-sensitive.
fn build_automaton(part: &str) -> Option<Regex> {
    let mut pattern = String::with_capacity(part.len() * 4 + 2);
    pattern.push('^');
    for ch in part.chars() {
        match ch {
            '*' => pattern.push_str("[^/]*"),
            '?' => pattern.push_str("[^/]"),
            _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0u8; 4]))),
        }
    }
    pattern.push('$');
    Regex::new(&pattern).ok()
}

/// Normalize pattern text: collapse `.` components, redundant separators,
/// and resolve `..` against earlier components where possible.
pub(crate) fn clean_pattern(text: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in text.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(&p) if p != "..") {
                    parts.pop();
                } else {
                    parts.push(part);
                }
            }
            _ => parts.push(part),
        }
    }
    parts.join("/")
}

/// One compiled line from the rule file.
#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    negated: bool,
    dir_only: bool,
    exact: bool,
    segments: Vec<Segment>,
    /// Normalized pattern text, used by the exact-equality fast path.
    joined: String,
}

impl Rule {
    /// Compile a single rule line. The line is expected to be trimmed and
    /// non-empty; comment filtering happens in the rule set compiler.
    pub fn parse(line: &str) -> Self {
        let source = line.to_string();
        let mut text = line;

        let negated = text.starts_with('!');
        if negated {
            text = &text[1..];
        }

        let dir_only = text.ends_with('/');
        if dir_only {
            text = &text[..text.len() - 1];
        }

        let joined = clean_pattern(text);
        let segments = joined.split('/').map(Segment::compile).collect();
        let exact = !joined.contains('*') && !joined.contains('?');

        Rule {
            source,
            negated,
            dir_only,
            exact,
            segments,
            joined,
        }
    }

    /// The original rule line as read from the file.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Match this rule against a slash-normalized relative path.
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        // Directory-only rules can never match a file.
        if self.dir_only && !is_dir {
            return false;
        }

        if self.exact {
            return self.joined == path;
        }

        let parts: Vec<&str> = path.split('/').collect();
        match_segments(&self.segments, &parts)
    }
}

/// Recursive segment matching. `**` is realized as "skip the wildcard" or
/// "consume one path segment and keep it", which gives zero-or-more segment
/// absorption with backtracking bounded by path depth. There is no
/// backtracking past a non-`**` segment.
fn match_segments(pattern: &[Segment], path: &[&str]) -> bool {
    let Some((head, rest)) = pattern.split_first() else {
        return path.is_empty();
    };

    if path.is_empty() {
        // Remaining pattern segments must all be `**`.
        return pattern.iter().all(Segment::is_any_dirs);
    }

    if head.is_any_dirs() {
        return match_segments(rest, path) || match_segments(pattern, &path[1..]);
    }

    head.matches(path[0]) && match_segments(rest, &path[1..])
}
