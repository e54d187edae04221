//! Where SVG files come from
//!
//! The extractor never touches the filesystem directly. It asks an
//! [`SvgSource`] for file paths and contents, so a directory on disk and an
//! in-memory set of documents go through the same pipeline.

use crate::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A listing of candidate files plus a way to read them
pub trait SvgSource {
    /// All candidate files, in the order they should be processed.
    /// Non-SVG entries may be included; the extractor filters them by name.
    fn list(&self) -> Result<Vec<PathBuf>, Error>;

    /// Read one listed file as raw bytes; decoding is left to the parser
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// True when the file name ends in `.svg`, ignoring case
pub fn is_svg_file_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".svg"))
        .unwrap_or(false)
}

/// Identifier for a file: its name without the final extension
pub fn file_identifier(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Entries of one directory on disk, sorted by path
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SvgSource for DirSource {
    fn list(&self) -> Result<Vec<PathBuf>, Error> {
        let read_dir_error = |source: io::Error| Error::ReadDir {
            path: self.dir.clone(),
            source,
        };

        let mut paths = fs::read_dir(&self.dir)
            .map_err(read_dir_error)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_dir_error)?;

        // read_dir order is platform dependent
        paths.sort();
        Ok(paths)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Documents held in memory, listed in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: Vec<(PathBuf, Vec<u8>)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`MemorySource::add`]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.add(path, contents);
        self
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.push((path.into(), contents.into()));
    }
}

impl SvgSource for MemorySource {
    fn list(&self) -> Result<Vec<PathBuf>, Error> {
        Ok(self.files.iter().map(|(path, _)| path.clone()).collect())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, contents)| contents.clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such in-memory file"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg_file_name() {
        assert!(is_svg_file_name(Path::new("castle.svg")));
        assert!(is_svg_file_name(Path::new("dir/CASTLE.SVG")));
        assert!(is_svg_file_name(Path::new("Camp.Svg")));
        assert!(!is_svg_file_name(Path::new("castle.svg.bak")));
        assert!(!is_svg_file_name(Path::new("notes.txt")));
        assert!(!is_svg_file_name(Path::new("svg")));
    }

    #[test]
    fn test_file_identifier() {
        assert_eq!(file_identifier(Path::new("layouts/Major Base.svg")), "Major Base");
        assert_eq!(file_identifier(Path::new("camp.SVG")), "camp");
        assert_eq!(file_identifier(Path::new("a.b.svg")), "a.b");
    }

    #[test]
    fn test_memory_source_order_and_read() {
        let source = MemorySource::new()
            .with_file("b.svg", "<b/>")
            .with_file("a.svg", "<a/>");

        assert_eq!(
            source.list().unwrap(),
            vec![PathBuf::from("b.svg"), PathBuf::from("a.svg")]
        );
        assert_eq!(source.read(Path::new("a.svg")).unwrap(), b"<a/>");
        assert!(source.read(Path::new("missing.svg")).is_err());
    }

    #[test]
    fn test_dir_source_missing_dir() {
        let source = DirSource::new("this/directory/does/not/exist");
        assert!(matches!(source.list(), Err(Error::ReadDir { .. })));
    }
}
