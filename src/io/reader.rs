//! Circuit text input.
//!
//! Circuit text is read once, fully buffered, from either a file or
//! standard input. Large files go through a read-only memory map.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Label used in errors when reading standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Reader for a circuit file.
///
/// Small files (< 1MB) are read directly, larger ones are memory mapped.
///
/// # Examples
///
/// ```no_run
/// use stim_url::io::FileReader;
///
/// let reader = FileReader::open("surface_code.stim").unwrap();
/// let text = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if the path does not exist and
    /// [`IoError::ReadFailed`] if it cannot be opened or is a directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IoError::FileNotFound {
                path: path_str.clone(),
            },
            _ => IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            },
        })?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        if metadata.is_dir() {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: "is a directory".to_string(),
            }
            .into());
        }

        Ok(Self {
            file,
            size: metadata.len(),
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the file content as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        if self.size >= MMAP_THRESHOLD {
            debug!(path = %self.path, size = self.size, "reading circuit via mmap");
            self.read_mmap()
        } else {
            debug!(path = %self.path, size = self.size, "reading circuit");
            decode_utf8(self.read_direct_bytes()?, &self.path)
        }
    }

    /// Validates the mapped bytes in place and copies them once into the result.
    fn read_mmap(&self) -> Result<String> {
        // Safety: We're only reading from the file, which is safe
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        std::str::from_utf8(&mmap).map(str::to_owned).map_err(|e| {
            IoError::ReadFailed {
                path: self.path.clone(),
                reason: format!("invalid UTF-8: {e}"),
            }
            .into()
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Reads a circuit file to a string.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Reads an entire stream as UTF-8, naming it `label` in errors.
///
/// # Errors
///
/// Returns [`IoError::ReadFailed`] if reading fails or the bytes are not
/// valid UTF-8.
pub fn read_to_string_from<R: Read>(mut reader: R, label: &str) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: label.to_string(),
            reason: e.to_string(),
        })?;
    debug!(source = label, size = buffer.len(), "read circuit");
    decode_utf8(buffer, label)
}

fn decode_utf8(bytes: Vec<u8>, label: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        IoError::ReadFailed {
            path: label.to_string(),
            reason: format!("invalid UTF-8: {e}"),
        }
        .into()
    })
}
