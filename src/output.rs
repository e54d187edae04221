//! JSON output for extracted coordinates
//!
//! The file is a single object, pretty-printed with two-space indentation:
//!
//! ```json
//! {
//!   "castle": [
//!     [
//!       1237.45,
//!       832.36
//!     ]
//!   ]
//! }
//! ```

use crate::error::Error;
use crate::types::CoordinateMap;
use std::fs;
use std::path::Path;

/// Render coordinates as indented JSON
pub fn to_json_string(coordinates: &CoordinateMap) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(coordinates)?)
}

/// Parse coordinates back from JSON text
pub fn from_json_str(json: &str) -> Result<CoordinateMap, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Write coordinates as indented JSON, replacing any existing file
pub fn write_json(coordinates: &CoordinateMap, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let json = to_json_string(coordinates)?;

    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a coordinates file written by [`write_json`]
pub fn read_json(path: impl AsRef<Path>) -> Result<CoordinateMap, Error> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    from_json_str(&json)
}
