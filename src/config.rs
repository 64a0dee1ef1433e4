//! Options for a scan.
//!
//! The [`ScanOptions`] struct is not constructable, use [`ScanOptionsBuilder`] or
//! [`ScanOptions::default()`].
//!
//! # Examples
//!
//! ```
//! # use artifact_scanner::config::ScanOptionsBuilder;
//! let options = ScanOptionsBuilder::default()
//!     .excludes(vec!["**/*.tmp".to_string()])
//!     .follow_links(true)
//!     .build()
//!     .expect("mission failed");
//!
//! assert!(options.case_sensitive);
//! ```

use crate::error::Error;
use crate::pattern::split_patterns;

/// How a directory tree is walked and matched.
#[derive(Builder, Clone, Debug)]
#[builder(setter(into))]
#[builder(build_fn(validate = "Self::validate"))]
#[non_exhaustive]
pub struct ScanOptions {
    /// Match patterns case-sensitively.
    #[builder(default = "true")]
    pub case_sensitive: bool,
    /// Descend into symlinked directories. Symlinked files are always candidates.
    #[builder(default)]
    pub follow_links: bool,
    /// Exclude specifications, same syntax as the include specification.
    /// Files matching any of them are never returned.
    #[builder(default)]
    pub excludes: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            follow_links: false,
            excludes: Vec::new(),
        }
    }
}

impl ScanOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(excludes) = &self.excludes {
            if let Some(empty) = excludes
                .iter()
                .find(|spec| split_patterns(spec).next().is_none())
            {
                return Err(format!("exclude {:?} contains no pattern", empty));
            }
        }

        Ok(())
    }

    /// Like [`build`](Self::build), with the crate's error type.
    pub fn finish(&self) -> Result<ScanOptions, Error> {
        self.build().map_err(Error::Options)
    }
}
