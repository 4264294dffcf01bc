//! Source document reading and chunk file output.
//!
//! Small files are read directly; large files are memory mapped before
//! being copied into a `String`. Standard input is read when the path is
//! absent or `-`.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum source document size (256MB).
const MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reader for a source document on disk.
///
/// # Examples
///
/// ```no_run
/// use transchunk::io::FileReader;
///
/// let reader = FileReader::open("chapter.md").unwrap();
/// let content = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    file: File,
    size: u64,
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or
    /// exceeds the size limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
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

    /// Reads the file content as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = if self.size >= MMAP_THRESHOLD {
            self.read_mmap()?
        } else {
            self.read_direct()?
        };
        decode_utf8(bytes, &self.path)
    }

    fn read_mmap(&self) -> Result<Vec<u8>> {
        tracing::debug!(path = %self.path, size = self.size, "memory mapping input");
        // Safety: the mapping is read-only and dropped before returning
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };
        Ok(mmap.to_vec())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct(&self) -> Result<Vec<u8>> {
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

/// Reads a file to string, memory mapping it when large.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use transchunk::io::read_file;
///
/// let content = read_file("chapter.md").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Reads a source document from `path`, or from standard input when
/// `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != STDIN_PATH => read_file(p),
        _ => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .map_err(|e| IoError::ReadFailed {
            path: STDIN_PATH.to_string(),
            reason: e.to_string(),
        })?;
    decode_utf8(bytes, STDIN_PATH)
}

fn decode_utf8(bytes: Vec<u8>, path: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        IoError::ReadFailed {
            path: path.to_string(),
            reason: format!("invalid UTF-8: {e}"),
        }
        .into()
    })
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_ref.to_string_lossy().to_string(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Writes each chunk to `{prefix}_{index:04}.txt` inside `out_dir`.
///
/// Returns the written paths in input order.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_chunks<'a, P, I>(out_dir: P, chunks: I, prefix: &str) -> Result<Vec<String>>
where
    P: AsRef<Path>,
    I: Iterator<Item = (usize, &'a str)>,
{
    let out_path = out_dir.as_ref();

    if !out_path.exists() {
        std::fs::create_dir_all(out_path).map_err(|e| IoError::DirectoryFailed {
            path: out_path.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    let mut paths = Vec::new();

    for (index, content) in chunks {
        let file_path = out_path.join(format!("{prefix}_{index:04}.txt"));
        let file_str = file_path.to_string_lossy().to_string();

        std::fs::write(&file_path, content).map_err(|e| IoError::WriteFailed {
            path: file_str.clone(),
            reason: e.to_string(),
        })?;

        paths.push(file_str);
    }

    tracing::debug!(dir = %out_path.display(), files = paths.len(), "wrote chunk files");
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_small_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small.md");
        std::fs::write(&file_path, "First.\n\nSecond.").unwrap();

        let content = read_file(&file_path).unwrap();
        assert_eq!(content, "First.\n\nSecond.");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = read_file("/nonexistent/path/chapter.md");
        assert!(matches!(
            result,
            Err(crate::Error::Io(IoError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_file_reader_size_and_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.md");
        std::fs::write(&file_path, "Hello").unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert_eq!(reader.size(), 5);
        assert!(reader.path().contains("test.md"));
    }

    #[test]
    fn test_read_utf8_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.md");
        std::fs::write(&file_path, "Käännös: 世界 🌍").unwrap();

        assert_eq!(read_file(&file_path).unwrap(), "Käännös: 世界 🌍");
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.md");
        std::fs::write(&file_path, "").unwrap();

        assert!(read_file(&file_path).unwrap().is_empty());
    }

    #[test]
    fn test_read_large_file_mmap_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large.md");
        let large_content = "word ".repeat(300 * 1024);
        std::fs::write(&file_path, &large_content).unwrap();

        let reader = FileReader::open(&file_path).unwrap();
        assert!(reader.size() >= MMAP_THRESHOLD);
        assert_eq!(reader.read_to_string().unwrap(), large_content);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("invalid.bin");
        std::fs::write(&file_path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let err = read_file(&file_path).unwrap_err();
        assert!(matches!(err, crate::Error::Io(IoError::ReadFailed { .. })));
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn test_invalid_utf8_same_error_for_stdin() {
        let err = decode_utf8(vec![b'o', b'k', 0xff], STDIN_PATH).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Io(IoError::ReadFailed { ref path, ref reason })
                if path == STDIN_PATH && reason.starts_with("invalid UTF-8")
        ));
    }

    #[test]
    fn test_read_input_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("input.md");
        std::fs::write(&file_path, "text").unwrap();

        assert_eq!(read_input(Some(&file_path)).unwrap(), "text");
    }

    #[test]
    fn test_write_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a/b/final.md");

        write_file(&file_path, "Final text").unwrap();

        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "Final text");
    }

    #[test]
    fn test_write_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("chunks");
        assert!(!out_dir.exists());

        let chunks = vec![(0, "First chunk\n\n"), (1, "```\ncode\n```\n")];
        let paths = write_chunks(&out_dir, chunks.into_iter(), "chunk").unwrap();

        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("chunk_0000.txt"));
        assert!(paths[1].ends_with("chunk_0001.txt"));
        assert_eq!(std::fs::read_to_string(&paths[1]).unwrap(), "```\ncode\n```\n");
    }

    #[test]
    fn test_write_chunks_empty() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("empty_chunks");

        let chunks: Vec<(usize, &str)> = vec![];
        let paths = write_chunks(&out_dir, chunks.into_iter(), "chunk").unwrap();

        assert!(paths.is_empty());
        assert!(out_dir.exists());
    }
}
