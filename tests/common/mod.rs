// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use rusqlite::Connection;
use tempfile::TempDir;

const CATALOG_SQL: &str = include_str!("../fixtures/catalog.sql");

/// A temp directory holding fixture catalogs.
pub struct Library {
    dir: TempDir,
}

impl Library {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates the fixture catalog at `relative` and returns its path.
    pub fn catalog(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        Connection::open(&path).unwrap().execute_batch(CATALOG_SQL).unwrap();
        path
    }

    /// Points the catalog's root folder at `root`, which must end with a separator.
    pub fn relocate(&self, catalog: &Path, root: &str) {
        Connection::open(catalog)
            .unwrap()
            .execute("UPDATE AgLibraryRootFolder SET absolutePath = ?1", [root])
            .unwrap();
    }

    pub fn write(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, bytes).unwrap();
        path
    }
}

pub fn luminosity() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_luminosity"));
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}
