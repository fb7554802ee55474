use std::io;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{join_lines, AuditWriter};

/// Keeps lines in memory. Reading before the first append fails with
/// `NotFound`, like a log file that was never created.
#[derive(Debug, Default)]
pub struct MemoryAuditWriter {
    lines: Mutex<Option<Vec<String>>>,
    failing: bool,
}

impl MemoryAuditWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose appends always fail.
    pub fn failing() -> Self {
        Self {
            lines: Mutex::new(None),
            failing: true,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .unwrap_or_default()
    }
}

#[async_trait]
impl AuditWriter for MemoryAuditWriter {
    async fn append_line(&self, line: &str) -> io::Result<()> {
        if self.failing {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "audit sink rejected the write",
            ));
        }
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(Vec::new)
            .push(line.to_string());
        Ok(())
    }

    async fn read_all(&self) -> io::Result<String> {
        let guard = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(lines) => Ok(join_lines(lines.iter().map(String::as_str))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "audit log has not been created",
            )),
        }
    }
}
