use crate::core::{InputSource, OutputSink};
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Reads the whole input stream: a file when a path is given, stdin otherwise.
#[derive(Debug, Clone)]
pub struct LocalInput {
    path: Option<PathBuf>,
}

impl LocalInput {
    pub fn stdin() -> Self {
        Self { path: None }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::file(p),
            None => Self::stdin(),
        }
    }
}

impl InputSource for LocalInput {
    async fn read_all(&self) -> Result<String> {
        match &self.path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                Ok(content)
            }
            None => {
                let mut content = String::new();
                std::io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }
}

/// Writes the result line: to a file when a path is given, stdout otherwise.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    path: Option<PathBuf>,
}

impl LocalOutput {
    pub fn stdout() -> Self {
        Self { path: None }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::file(p),
            None => Self::stdout(),
        }
    }
}

impl OutputSink for LocalOutput {
    async fn write_line(&self, line: &str) -> Result<()> {
        match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(path, format!("{}\n", line))?;
                Ok(())
            }
            None => {
                println!("{}", line);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_input_reads_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("numbers.txt");
        fs::write(&path, "2 2 1").unwrap();

        let input = LocalInput::file(&path);
        let content = input.read_all().await.unwrap();
        assert_eq!(content, "2 2 1");
    }

    #[tokio::test]
    async fn test_missing_file_input_is_io_error() {
        let input = LocalInput::file("/nonexistent/numbers.txt");
        assert!(input.read_all().await.is_err());
    }

    #[tokio::test]
    async fn test_file_output_writes_terminated_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/result.txt");

        let output = LocalOutput::file(&path);
        output.write_line("4").await.unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "4\n");
    }

    #[test]
    fn test_from_path_selects_stream_or_file() {
        assert!(LocalInput::from_path(None).path.is_none());
        assert!(LocalInput::from_path(Some("in.txt")).path.is_some());
        assert!(LocalOutput::from_path(None).path.is_none());
        assert!(LocalOutput::from_path(Some("out.txt")).path.is_some());
    }
}
