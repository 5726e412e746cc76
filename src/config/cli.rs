use crate::core::{InputSource, RawInput};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads a previously saved puzzle input from disk instead of the network.
#[derive(Debug, Clone)]
pub struct LocalFileSource {
    path: PathBuf,
}

impl LocalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl InputSource for LocalFileSource {
    async fn fetch(&self) -> Result<RawInput> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(RawInput::new(data))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AocError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_file_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("day1.txt");
        std::fs::write(&path, "1 2\n").unwrap();

        let source = LocalFileSource::new(&path);
        let raw = source.fetch().await.unwrap();
        assert_eq!(raw.as_bytes(), b"1 2\n");
        assert!(source.describe().ends_with("day1.txt"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = LocalFileSource::new(temp_dir.path().join("absent.txt"));
        assert!(matches!(source.fetch().await, Err(AocError::IoError(_))));
    }
}
