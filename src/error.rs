use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A pattern could not be compiled into a glob.
    #[error("invalid pattern '{pattern}': {err}")]
    Pattern {
        /// The pattern as written in the specification.
        pattern: String,

        #[source]
        err: globset::Error,
    },

    /// The scan root exists but could not be inspected.
    #[error("cannot read '{}': {err}", .path.display())]
    Io {
        path: PathBuf,

        #[source]
        err: io::Error,
    },

    /// The directory walk failed partway (permissions, symlink loops).
    #[error("cannot scan '{}': {err}", .path.display())]
    Walk {
        path: PathBuf,

        #[source]
        err: walkdir::Error,
    },

    /// The scan root is a file or something else that cannot be walked.
    #[error("scan root '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A file under the root has a name that cannot be turned into a relative key.
    #[error("path '{}' is not valid unicode", .0.display())]
    NonUnicodePath(PathBuf),

    /// Scan options were rejected by the builder.
    #[error("invalid scan options: {0}")]
    Options(String),
}

impl Error {
    pub(crate) fn walk(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        Error::Walk { path, err }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::path::PathBuf;

    #[test]
    fn test_pattern_error_names_pattern() {
        let err = globset::Glob::new("out/[a").unwrap_err();
        let err = Error::Pattern {
            pattern: "out/[a".into(),
            err,
        };

        assert!(err.to_string().starts_with("invalid pattern 'out/[a': "));
    }

    #[test]
    fn test_not_a_directory_message() {
        let err = Error::NotADirectory(PathBuf::from("/tmp/file.bin"));

        assert_eq!(
            err.to_string(),
            "scan root '/tmp/file.bin' is not a directory"
        );
    }
}
