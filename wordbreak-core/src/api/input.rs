//! Input sources for the segmentation API

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Text to segment, from memory, disk or a stream
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw UTF-8 bytes
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the whole input as a UTF-8 string
    pub fn into_text(self) -> Result<String> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => {
                std::fs::read(&path).map_err(|source| Error::Io { path, source })?
            }
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|source| Error::Io {
                        path: PathBuf::from("<reader>"),
                        source,
                    })?;
                buffer
            }
        };
        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidArgument(format!("input is not valid UTF-8: {e}")))
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}
