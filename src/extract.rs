//! Coordinate extraction pipeline
//!
//! For each SVG file in a source:
//! 1. Skip anything whose name does not end in `.svg`
//! 2. Parse the document and collect its `<path>` elements
//! 3. Pick paths according to the [`PathPolicy`]
//! 4. Scan each picked `d` attribute into `[x, y]` pairs
//! 5. Append the pairs under the path's identifier
//!
//! A file that fails at any step is logged and skipped; the rest of the
//! batch carries on.

use crate::document::{PathElement, parse_svg};
use crate::error::{Error, ExtractError};
use crate::scan::ScanMode;
use crate::source::{DirSource, SvgSource, file_identifier, is_svg_file_name};
use crate::types::CoordinateMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which `<path>` elements of a document contribute, and how they are keyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathPolicy {
    /// First path only, keyed by the file name. Path ids are ignored.
    First,
    /// Every path, keyed by its `id`, falling back to the file name
    #[default]
    Every,
    /// Last path only, keyed by its `id` or the file name.
    ///
    /// This is the behaviour of the older multi-path layout scripts, which
    /// resolved the key inside the element loop but read `d` after it,
    /// so only the final element ever reached the output. Use it to
    /// reproduce files generated by those scripts.
    Last,
}

impl PathPolicy {
    /// The elements that contribute under this policy
    pub fn select(self, paths: &[PathElement]) -> &[PathElement] {
        match self {
            PathPolicy::First => &paths[..paths.len().min(1)],
            PathPolicy::Every => paths,
            PathPolicy::Last => &paths[paths.len().saturating_sub(1)..],
        }
    }

    /// Key for `path`, given the identifier derived from its file
    pub fn identifier<'a>(self, path: &'a PathElement, file_id: &'a str) -> &'a str {
        match self {
            PathPolicy::First => file_id,
            PathPolicy::Every | PathPolicy::Last => path.identifier(file_id),
        }
    }
}

/// Options for coordinate extraction
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub policy: PathPolicy,
    pub scan: ScanMode,
}

/// A file that could not be processed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ExtractError,
}

/// Result of one extraction run
#[derive(Debug, Default)]
pub struct Extraction {
    pub coordinates: CoordinateMap,
    /// SVG files attempted, including failed ones
    pub files_processed: usize,
    pub failures: Vec<FileFailure>,
}

/// Runs the extraction pipeline with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract coordinates from every SVG file in `dir`
    pub fn extract_dir(&self, dir: impl AsRef<Path>) -> Result<Extraction, Error> {
        self.extract_from(&DirSource::new(dir.as_ref()))
    }

    /// Extract coordinates from every SVG file a source lists
    ///
    /// Only a failure to list the source is returned as an error. Per-file
    /// failures are logged and collected in [`Extraction::failures`].
    pub fn extract_from<S: SvgSource + ?Sized>(&self, source: &S) -> Result<Extraction, Error> {
        let mut extraction = Extraction::default();

        for path in source.list()? {
            if !is_svg_file_name(&path) {
                debug!(file = %path.display(), "skipping non-SVG file");
                continue;
            }
            extraction.files_processed += 1;

            let file_id = file_identifier(&path);
            let result = source
                .read(&path)
                .map_err(ExtractError::from)
                .and_then(|bytes| self.extract_document(&file_id, &bytes, &mut extraction.coordinates));

            match result {
                Ok(pairs) => debug!(file = %path.display(), pairs, "extracted coordinates"),
                Err(error) => {
                    let name = path.file_name().map(Path::new).unwrap_or(path.as_path());
                    warn!("Error processing {}: {}", name.display(), error);
                    extraction.failures.push(FileFailure { path, error });
                }
            }
        }

        info!(
            files = extraction.files_processed,
            failed = extraction.failures.len(),
            ids = extraction.coordinates.len(),
            pairs = extraction.coordinates.pair_count(),
            "extraction finished"
        );

        Ok(extraction)
    }

    /// Add one document's coordinates to `into`, returning the number of
    /// pairs added. `file_id` is the key used when a path has no usable id.
    ///
    /// `svg` is the raw file; its encoding comes from a byte order mark or
    /// the XML declaration. The document is parsed completely and collected
    /// on its own before being merged, so a malformed document leaves `into`
    /// unchanged.
    pub fn extract_document(
        &self,
        file_id: &str,
        svg: &[u8],
        into: &mut CoordinateMap,
    ) -> Result<usize, ExtractError> {
        let paths = parse_svg(svg)?;
        let policy = self.options.policy;

        let mut document = CoordinateMap::new();
        for path in policy.select(&paths) {
            let coords = self.options.scan.coordinates(&path.d);
            document.append(policy.identifier(path, file_id), coords);
        }

        let added = document.pair_count();
        into.merge(document);
        Ok(added)
    }
}

/// Extract coordinates from a directory of SVG files
pub fn extract(dir: impl AsRef<Path>, options: ExtractOptions) -> Result<Extraction, Error> {
    Extractor::new(options).extract_dir(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(id: Option<&str>, d: &str) -> PathElement {
        PathElement {
            id: id.map(str::to_string),
            d: d.to_string(),
        }
    }

    #[test]
    fn test_policy_select() {
        let paths = vec![element(Some("a"), "1,2"), element(None, "3,4"), element(Some("c"), "5,6")];

        assert_eq!(PathPolicy::First.select(&paths), &paths[..1]);
        assert_eq!(PathPolicy::Every.select(&paths), &paths[..]);
        assert_eq!(PathPolicy::Last.select(&paths), &paths[2..]);

        assert!(PathPolicy::First.select(&[]).is_empty());
        assert!(PathPolicy::Last.select(&[]).is_empty());
    }

    #[test]
    fn test_policy_identifier() {
        let named = element(Some("church"), "");
        assert_eq!(PathPolicy::First.identifier(&named, "map"), "map");
        assert_eq!(PathPolicy::Every.identifier(&named, "map"), "church");
        assert_eq!(PathPolicy::Last.identifier(&named, "map"), "church");
    }

    #[test]
    fn test_extract_document_appends() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
            <path id="camp" d="M10,20 30,40"/>
            <path id="camp" d="M50,60"/>
        </svg>"#;

        let mut map = CoordinateMap::new();
        let added = Extractor::default().extract_document("file", svg.as_bytes(), &mut map).unwrap();

        assert_eq!(added, 3);
        assert_eq!(
            map.get("camp"),
            Some(&[[10.0, 20.0], [30.0, 40.0], [50.0, 60.0]][..])
        );
    }

    #[test]
    fn test_extract_document_failure_leaves_map_untouched() {
        let mut map = CoordinateMap::new();
        map.append("keep", vec![[1.0, 1.0]]);

        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="1,2"/><g></svg>"#;
        let result = Extractor::default().extract_document("broken", svg.as_bytes(), &mut map);

        assert!(matches!(result, Err(ExtractError::Document(_))));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("broken"), None);
    }
}
