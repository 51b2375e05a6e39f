//! Output destinations for log records

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Where records are written
///
/// Deserializes from `"stdout"`, `"stderr"`, or any other string as a file
/// path.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Write to stdout (default)
    #[default]
    Stdout,
    /// Write to stderr
    Stderr,
    /// Append to a file, created if missing
    #[serde(untagged)]
    File(PathBuf),
}

impl OutputTarget {
    /// Open the destination as a writer
    pub fn open(&self) -> Result<Box<dyn Write + Send>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout())),
            OutputTarget::Stderr => Ok(Box::new(io::stderr())),
            OutputTarget::File(path) => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("output", "file path must not be empty"));
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        LoggerError::io_operation(
                            "opening log file",
                            path.display().to_string(),
                            e,
                        )
                    })?;
                Ok(Box::new(file))
            }
        }
    }
}

/// In-memory sink whose contents stay readable after it is handed to a logger
///
/// # Example
///
/// ```
/// use leveled_logger::SharedBuffer;
/// use std::io::Write;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// writer.write_all(b"hello\n").unwrap();
/// assert_eq!(buffer.contents_string(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn contents(&self) -> Vec<u8> {
        self.inner.lock().clone()
    }

    /// Contents decoded as UTF-8, lossy
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Written contents split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents_string().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
