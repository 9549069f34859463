#![allow(dead_code)]

pub mod command;

use git_tint::areas::git::{StatusOutput, StatusProvider};
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// Writer whose contents stay readable after it has been boxed into a `Repository`.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.borrow().clone()).expect("output is valid UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Status provider returning a fixed result, recording the directory it was asked about.
pub struct CannedStatus {
    result: RefCell<Option<anyhow::Result<StatusOutput>>>,
    pub requested_dir: RefCell<Option<std::path::PathBuf>>,
}

impl CannedStatus {
    pub fn success(text: &str) -> Self {
        Self::from_result(Ok(StatusOutput::new(text, true, Some(0))))
    }

    pub fn failure(text: &str, exit_code: i32) -> Self {
        Self::from_result(Ok(StatusOutput::new(text, false, Some(exit_code))))
    }

    pub fn error(message: &str) -> Self {
        Self::from_result(Err(anyhow::anyhow!(message.to_string())))
    }

    fn from_result(result: anyhow::Result<StatusOutput>) -> Self {
        CannedStatus {
            result: RefCell::new(Some(result)),
            requested_dir: RefCell::new(None),
        }
    }
}

impl StatusProvider for CannedStatus {
    fn status(&self, dir: &Path) -> anyhow::Result<StatusOutput> {
        *self.requested_dir.borrow_mut() = Some(dir.to_path_buf());
        self.result
            .borrow_mut()
            .take()
            .expect("status requested more than once")
    }
}
