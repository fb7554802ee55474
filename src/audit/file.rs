use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::{join_lines, AuditWriter};

/// Writes to a plain text file, opening and closing it on every call.
///
/// Nothing is buffered between calls and concurrent appends are not
/// serialized.
#[derive(Debug, Clone)]
pub struct FileAuditWriter {
    path: PathBuf,
}

impl FileAuditWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AuditWriter for FileAuditWriter {
    async fn append_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn read_all(&self) -> io::Result<String> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(join_lines(contents.lines()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}-{}.log", name, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let writer = FileAuditWriter::new(temp_path("missing"));
        let err = writer.read_all().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_appends_are_read_back_in_order() {
        let path = temp_path("changes");
        let writer = FileAuditWriter::new(&path);

        writer.append_line("first").await.unwrap();
        writer.append_line("second").await.unwrap();
        writer.append_line("third").await.unwrap();

        assert_eq!(writer.read_all().await.unwrap(), "first\nsecond\nthird");
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "first\nsecond\nthird\n");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_append_to_unwritable_path_fails() {
        let path = temp_path("no-such-dir").join("backup.log");
        let writer = FileAuditWriter::new(path);
        assert!(writer.append_line("x").await.is_err());
    }
}
