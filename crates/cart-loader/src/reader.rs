//! # File Reading
//!
//! The file-read collaborator `CartParser` gets its text from.
//!
//! [`FsReader`] reads from disk. Any `Fn(&Path) -> LoaderResult<String>` is
//! also a reader, which lets tests serve content from memory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{LoaderError, LoaderResult};

/// Source of raw cart file contents.
pub trait FileReader {
    /// Reads the whole file at `path` as text.
    fn read_file(&self, path: &Path) -> LoaderResult<String>;
}

impl<F> FileReader for F
where
    F: Fn(&Path) -> LoaderResult<String>,
{
    fn read_file(&self, path: &Path) -> LoaderResult<String> {
        self(path)
    }
}

/// Reads files from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_file(&self, path: &Path) -> LoaderResult<String> {
        if path.as_os_str().is_empty() {
            return Err(LoaderError::EmptyPath);
        }

        debug!(path = %path.display(), "Reading cart file");

        fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LoaderError::FileNotFound(path.display().to_string()),
            _ => LoaderError::read_failed(path.display().to_string(), err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_reads_file_contents() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Product name,Price,Quantity").unwrap();

        let content = FsReader.read_file(file.path()).unwrap();
        assert_eq!(content, "Product name,Price,Quantity\n");
    }

    #[test]
    fn test_empty_path() {
        assert!(matches!(
            FsReader.read_file(Path::new("")),
            Err(LoaderError::EmptyPath)
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = FsReader.read_file(Path::new("random/path/file.csv"));
        assert!(matches!(result, Err(LoaderError::FileNotFound(_))));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempdir().unwrap();
        let err = FsReader.read_file(dir.path()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(matches!(
            FsReader.read_file(file.path()),
            Err(LoaderError::ReadFailed { .. })
        ));
    }

    #[test]
    fn test_closure_reader() {
        let reader = |path: &Path| -> LoaderResult<String> { Ok(path.display().to_string()) };
        assert_eq!(reader.read_file(Path::new("cart.csv")).unwrap(), "cart.csv");
    }
}
