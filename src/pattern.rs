//! Ant-style pattern compilation.
//!
//! A pattern specification is a comma-separated list of patterns. Each pattern is compiled
//! into one or more globs over `/`-separated paths relative to the scan root:
//!
//! - `*` and `?` never cross a `/`, while `**` as a whole segment spans any number of segments;
//! - a path with no wildcard (`out`, `out/dir-a`, `test.bin`) matches itself and anything
//!   beneath it;
//! - a trailing `/` (`out/`, `out/*/`) matches anything beneath, and like Ant's `**` also
//!   the path itself.
//!
//! Patterns are always relative to the root: `\` is read as `/`, and leading `/`, `./`
//! and doubled separators are dropped.

use std::{fmt, slice};

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};

const DELIMITER: char = ',';
const WILDCARDS: &[char] = &['*', '?', '[', '{'];

/// Splits a pattern specification into its trimmed, non-empty patterns.
pub fn split_patterns(spec: &str) -> impl Iterator<Item = &str> {
    spec.split(DELIMITER)
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
}

/// How a pattern was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    /// No wildcards: the path itself, or anything under it if it is a directory.
    Literal,
    /// Trailing separator: the matched paths and anything under them.
    Directory,
    /// Contains wildcards and is matched as written.
    Glob,
}

/// A single compiled pattern.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    kind: PatternKind,
    globs: Vec<String>,
    set: GlobSet,
}

impl Pattern {
    pub fn new(raw: &str, case_sensitive: bool) -> Result<Self> {
        let source = raw.trim().to_string();
        let unified = source.replace('\\', "/");
        let body = unified
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect::<Vec<_>>()
            .join("/");

        // "." and "./" name the root itself
        let kind = if unified.ends_with('/') || (body.is_empty() && !unified.is_empty()) {
            PatternKind::Directory
        } else if body.contains(WILDCARDS) {
            PatternKind::Glob
        } else {
            PatternKind::Literal
        };

        let globs = match kind {
            PatternKind::Directory if body.is_empty() || body == "**" || body.ends_with("/**") => {
                vec![descend(&body)]
            }
            // `**` also spans zero trailing segments, so `out/` still selects a file named `out`
            PatternKind::Directory => vec![body.clone(), descend(&body)],
            PatternKind::Literal if body.is_empty() => Vec::new(),
            PatternKind::Literal => vec![body.clone(), format!("{}/**", body)],
            PatternKind::Glob => vec![body],
        };

        let mut builder = GlobSetBuilder::new();
        for glob in &globs {
            builder.add(compile(&source, glob, case_sensitive)?);
        }

        let set = builder.build().map_err(|err| Error::Pattern {
            pattern: source.clone(),
            err,
        })?;

        Ok(Self {
            source,
            kind,
            globs,
            set,
        })
    }

    /// The pattern as it was written, minus surrounding whitespace.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub const fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The globs this pattern was expanded into.
    pub fn globs(&self) -> &[String] {
        &self.globs
    }

    /// Tests a root-relative, `/`-separated path.
    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(path)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn descend(body: &str) -> String {
    if body.is_empty() {
        "**".into()
    } else if body == "**" || body.ends_with("/**") {
        body.into()
    } else {
        format!("{}/**", body)
    }
}

fn compile(source: &str, glob: &str, case_sensitive: bool) -> Result<Glob> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|err| Error::Pattern {
            pattern: source.into(),
            err,
        })
}

/// An ordered set of patterns, any of which may select a path.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compiles every pattern of a comma-separated specification.
    ///
    /// The first invalid pattern fails the whole set.
    pub fn compile(spec: &str, case_sensitive: bool) -> Result<Self> {
        Self::from_patterns(split_patterns(spec), case_sensitive)
    }

    pub fn from_patterns<I, S>(patterns: I, case_sensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| Pattern::new(pattern.as_ref(), case_sensitive))
            .collect::<Result<Vec<_>>>()?;

        for pattern in &patterns {
            debug!(
                "Compiled pattern '{}' ({:?}) as {:?}",
                pattern.source, pattern.kind, pattern.globs
            );
        }

        Ok(Self { patterns })
    }

    /// Returns the first pattern that selects the path.
    pub fn matching(&self, path: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.is_match(path))
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matching(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
