//! Artifact scanner: resolves Ant-style patterns against a directory tree.
//!
//! Given a root directory and a comma-separated pattern specification such as
//! `out/, **/*.bin, dist/dir-a/**/*`, [`scan`] walks the tree once and returns every file
//! selected by at least one pattern, each exactly once, sorted by its path relative to
//! the root. The result is what an artifact publisher uploads.
//!
//! ```no_run
//! use artifact_scanner::{config::ScanOptionsBuilder, Scanner};
//!
//! let options = ScanOptionsBuilder::default()
//!     .excludes(vec!["**/*.tmp".to_string()])
//!     .finish()?;
//!
//! for file in Scanner::new(options).scan("/var/build", "out/,reports/*.xml")? {
//!     println!("{} -> {}", file.relative_path(), file.path().display());
//! }
//! # Ok::<(), artifact_scanner::error::Error>(())
//! ```
//!
//! See the [`pattern`] module for the pattern syntax.

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::default_trait_access)]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;

pub mod cli;
pub mod config;
pub mod error;
pub mod pattern;
pub mod run;
mod scanner;

pub use run::run;
pub use scanner::{scan, MatchedFile, Scanner};
