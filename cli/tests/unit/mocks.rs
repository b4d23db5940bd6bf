//! Shared mock infrastructure for unit tests.
//!
//! `RecordingFs` logs every call and can be told to fail a specific
//! operation, so tests can assert ordering and error mapping without I/O.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use singularity_setup::application::ports::{InstallFs, ProgressReporter};

// ── Recorded calls ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    CreateDirAll(PathBuf),
    Write(PathBuf, String),
    Rename(PathBuf, PathBuf),
    Copy(PathBuf, PathBuf),
    RemoveFile(PathBuf),
}

/// Which operation should fail, and with what kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fail {
    CreateDirAll(io::ErrorKind),
    Write(io::ErrorKind),
    Rename(io::ErrorKind),
    Copy(io::ErrorKind),
}

pub struct RecordingFs {
    pub calls: RefCell<Vec<FsCall>>,
    pub present: RefCell<HashSet<PathBuf>>,
    pub fail: Option<Fail>,
}

impl RecordingFs {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            present: RefCell::new(HashSet::new()),
            fail: None,
        }
    }

    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.present.borrow_mut().insert(path.into());
        self
    }

    pub fn failing(mut self, fail: Fail) -> Self {
        self.fail = Some(fail);
        self
    }

    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: FsCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl InstallFs for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::CreateDirAll(path.to_path_buf()));
        match self.fail {
            Some(Fail::CreateDirAll(kind)) => Err(io::Error::from(kind)),
            _ => Ok(()),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.record(FsCall::Write(path.to_path_buf(), contents.to_string()));
        match self.fail {
            Some(Fail::Write(kind)) => Err(io::Error::from(kind)),
            _ => Ok(()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.present.borrow().contains(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.record(FsCall::Rename(from.to_path_buf(), to.to_path_buf()));
        match self.fail {
            Some(Fail::Rename(kind)) => Err(io::Error::from(kind)),
            _ => Ok(()),
        }
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        self.record(FsCall::Copy(from.to_path_buf(), to.to_path_buf()));
        match self.fail {
            Some(Fail::Copy(kind)) => Err(io::Error::from(kind)),
            _ => Ok(42),
        }
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::RemoveFile(path.to_path_buf()));
        Ok(())
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Collects progress events as `"<level>: <message>"` strings.
#[derive(Default)]
pub struct CollectingReporter {
    pub events: RefCell<Vec<String>>,
}

impl ProgressReporter for CollectingReporter {
    fn step(&self, message: &str) {
        self.events.borrow_mut().push(format!("step: {message}"));
    }
    fn success(&self, message: &str) {
        self.events.borrow_mut().push(format!("success: {message}"));
    }
    fn warn(&self, message: &str) {
        self.events.borrow_mut().push(format!("warn: {message}"));
    }
}
