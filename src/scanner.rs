//! Resolving a pattern specification against a directory tree.

use std::{
    borrow::Cow,
    collections::HashSet,
    fs, io,
    path::{Component, Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::config::ScanOptions;
use crate::error::{Error, Result};
use crate::pattern::{split_patterns, PatternSet};

/// A file selected by a scan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchedFile {
    relative: String,
    path: PathBuf,
}

impl MatchedFile {
    /// Path relative to the scan root, `/`-separated on every platform.
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// Path on disk, i.e. the scan root joined with the relative path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Scans directories with a fixed set of options.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub const fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Returns every file under `root` selected by `spec`, sorted by relative path.
    ///
    /// Patterns are compiled before the filesystem is touched, so an invalid pattern fails
    /// the scan even when the root does not exist. An empty specification or a missing root
    /// selects nothing. Any error met while walking fails the whole scan.
    pub fn scan(&self, root: impl AsRef<Path>, spec: &str) -> Result<Vec<MatchedFile>> {
        let root = root.as_ref();
        let case_sensitive = self.options.case_sensitive;

        let includes = PatternSet::compile(spec, case_sensitive)?;
        let excludes = PatternSet::from_patterns(
            self.options
                .excludes
                .iter()
                .flat_map(|exclude| split_patterns(exclude)),
            case_sensitive,
        )?;

        if includes.is_empty() {
            debug!("No patterns in {:?}, nothing to scan", spec);
            return Ok(Vec::new());
        }

        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(Error::NotADirectory(root.to_path_buf())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("Scan root {:?} does not exist, nothing to scan", root);
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(Error::Io {
                    path: root.to_path_buf(),
                    err,
                })
            }
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.options.follow_links)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()));

        let mut seen = HashSet::new();
        let mut files = Vec::new();
        let mut visited = 0_usize;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_broken_link(&err) => {
                    debug!("Skipping broken symlink {:?}", err.path());
                    continue;
                }
                Err(err) => return Err(Error::walk(root, err)),
            };

            if !is_file(&entry) {
                continue;
            }

            visited += 1;
            let (relative, lossless) = relative_key(root, entry.path());

            if let Some(exclude) = excludes.matching(&relative) {
                trace!("Skipping {}: excluded by '{}'", relative, exclude);
                continue;
            }

            match includes.matching(&relative) {
                Some(pattern) => {
                    trace!("Selected {}: matched '{}'", relative, pattern);
                    if !lossless {
                        return Err(Error::NonUnicodePath(entry.into_path()));
                    }

                    if seen.insert(relative.clone()) {
                        files.push(MatchedFile {
                            relative,
                            path: entry.into_path(),
                        });
                    }
                }
                None => trace!("Skipping {}: no pattern matched", relative),
            }
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));

        debug!(
            "Scanned {:?}: {} of {} files selected by {} pattern(s)",
            root,
            files.len(),
            visited,
            includes.len()
        );

        Ok(files)
    }
}

/// Scans `root` with default options.
///
/// # Examples
///
/// ```no_run
/// let files = artifact_scanner::scan("build", "out/, **/*.bin").unwrap();
/// for file in files {
///     println!("{}", file.relative_path());
/// }
/// ```
pub fn scan(root: impl AsRef<Path>, spec: &str) -> Result<Vec<MatchedFile>> {
    Scanner::default().scan(root, spec)
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }

    // with follow_links off, symlinks are reported as themselves
    if file_type.is_symlink() {
        if entry.path().is_file() {
            return true;
        }

        if !entry.path().exists() {
            debug!("Skipping broken symlink {:?}", entry.path());
        }
    }

    false
}

// following links, walkdir stats the target and reports dangling links as errors
fn is_broken_link(err: &walkdir::Error) -> bool {
    let not_found = err
        .io_error()
        .map_or(false, |io| io.kind() == io::ErrorKind::NotFound);

    not_found
        && err.path().map_or(false, |path| {
            fs::symlink_metadata(path).map_or(false, |meta| meta.file_type().is_symlink())
        })
}

/// The `/`-joined path under `root`, and whether it was valid unicode.
///
/// Invalid segments are converted lossily so the path can still be matched.
fn relative_key(root: &Path, path: &Path) -> (String, bool) {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut segments = Vec::new();
    let mut lossless = true;

    for component in relative.components() {
        if let Component::Normal(segment) = component {
            let segment = segment.to_string_lossy();
            lossless &= matches!(segment, Cow::Borrowed(_));
            segments.push(segment);
        }
    }

    (segments.join("/"), lossless)
}
