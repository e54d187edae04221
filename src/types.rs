use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single `[x, y]` pair taken from path data
pub type Coordinate = [f64; 2];

/// Coordinates grouped by identifier (POI type)
///
/// Serializes as a plain JSON object of `identifier -> [[x, y], ...]`.
/// Keys are ordered by identifier; the pairs under each key keep the order
/// in which they were appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateMap(BTreeMap<String, Vec<Coordinate>>);

impl CoordinateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append pairs under `id`, extending any pairs already stored there.
    /// An empty batch leaves the map untouched, so no empty keys appear.
    pub fn append(&mut self, id: &str, coords: Vec<Coordinate>) {
        if coords.is_empty() {
            return;
        }

        match self.0.get_mut(id) {
            Some(existing) => existing.extend(coords),
            None => {
                self.0.insert(id.to_string(), coords);
            }
        }
    }

    /// Append every group from `other`, in its key order
    pub fn merge(&mut self, other: CoordinateMap) {
        for (id, coords) in other.0 {
            self.append(&id, coords);
        }
    }

    pub fn get(&self, id: &str) -> Option<&[Coordinate]> {
        self.0.get(id).map(Vec::as_slice)
    }

    /// Number of identifiers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of pairs across all identifiers
    pub fn pair_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Coordinate])> {
        self.0.iter().map(|(id, coords)| (id.as_str(), coords.as_slice()))
    }
}
