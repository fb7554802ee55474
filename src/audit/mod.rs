// Append-only line sinks for the item change log and backup trail

pub mod file;
pub mod memory;

pub use file::FileAuditWriter;
pub use memory::MemoryAuditWriter;

use std::io;

use async_trait::async_trait;

#[async_trait]
pub trait AuditWriter: Send + Sync {
    /// Appends `line` followed by a newline.
    async fn append_line(&self, line: &str) -> io::Result<()>;

    /// Every line appended so far, oldest first, joined with `\n`.
    async fn read_all(&self) -> io::Result<String>;
}

pub(crate) fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
