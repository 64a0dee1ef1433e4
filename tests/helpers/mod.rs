#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use artifact_scanner::MatchedFile;
use tempfile::TempDir;

/// A throwaway directory tree to scan.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an empty file and any missing parents, returning its relative path.
    pub fn file(&self, relative: &str) -> String {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"").unwrap();
        relative.to_string()
    }

    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// The nested `out/` layout used across the scanner tests.
    pub fn nested_out(&self) -> Vec<String> {
        vec![
            self.file("out/test.bin"),
            self.file("out/dir-a/test-a.bin"),
            self.file("out/dir-a/dir-b/test-b1.bin"),
            self.file("out/dir-a/dir-b/test-b2.bin"),
            self.file("out/dir-a/dir-b/dir-c/test-c.bin"),
        ]
    }
}

pub fn relatives(files: &[MatchedFile]) -> Vec<&str> {
    files.iter().map(MatchedFile::relative_path).collect()
}

pub fn sorted(mut paths: Vec<String>) -> Vec<String> {
    paths.sort();
    paths
}
