//! # svg-coords
//!
//! A Rust library for pulling POI coordinates out of SVG map layouts.
//!
//! Every `<path>` in an SVG is read as a flat stream of numbers: drawing
//! commands are ignored and consecutive numbers are paired into `[x, y]`
//! coordinates. Pairs are grouped under the path's `id` (or the file name)
//! and written out as a single JSON object.
//!
//! ## Example
//!
//! ```rust,ignore
//! use svg_coords::{ExtractOptions, extract, write_json};
//!
//! let extraction = extract("layouts/", ExtractOptions::default()).unwrap();
//! write_json(&extraction.coordinates, "layout.json").unwrap();
//! ```
//!
//! ## Example - In-memory documents
//!
//! ```rust,ignore
//! use svg_coords::{Extractor, MemorySource};
//!
//! let source = MemorySource::new().with_file(
//!     "castle.svg",
//!     r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M10,20 30,40"/></svg>"#,
//! );
//! let extraction = Extractor::default().extract_from(&source).unwrap();
//! assert_eq!(extraction.coordinates.get("castle"), Some(&[[10.0, 20.0], [30.0, 40.0]][..]));
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod output;
pub mod scan;
pub mod source;
pub mod types;

// Re-export commonly used items
pub use document::{DocumentError, PathElement, decode_document, parse_paths, parse_svg};
pub use error::{Error, ExtractError};
pub use extract::{ExtractOptions, Extraction, Extractor, FileFailure, PathPolicy, extract};
pub use output::{read_json, to_json_string, write_json};
pub use scan::ScanMode;
pub use source::{DirSource, MemorySource, SvgSource};
pub use types::{Coordinate, CoordinateMap};
