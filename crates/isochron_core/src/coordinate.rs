use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::travel_type::TravelType;

pub const WGS84_SRID: i32 = 4326;

/// Per-point inputs used by multigraph aggregations (weighting and gravitation).
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregationInputParameters {
    pub factor: Option<f64>,
    pub gravitation_attraction_strength: Option<f64>,
    pub gravitation_positive_influence: Option<bool>,
}

impl AggregationInputParameters {
    pub fn is_empty(&self) -> bool {
        self.factor.is_none()
            && self.gravitation_attraction_strength.is_none()
            && self.gravitation_positive_influence.is_none()
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Coordinate {
    pub id: String,
    pub x: f64,
    pub y: f64,

    /// EPSG code of `x`/`y`, WGS84 when absent
    #[serde(default)]
    pub crs: Option<i32>,

    /// Overrides the request travel type unless `Unspecified`
    #[serde(default)]
    pub travel_type: TravelType,

    #[serde(default)]
    pub aggregation_input: Option<AggregationInputParameters>,
}

impl Coordinate {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            crs: None,
            travel_type: TravelType::Unspecified,
            aggregation_input: None,
        }
    }

    pub fn with_travel_type(mut self, travel_type: TravelType) -> Self {
        self.travel_type = travel_type;
        self
    }

    pub fn with_crs(mut self, crs: i32) -> Self {
        self.crs = Some(crs);
        self
    }

    pub fn with_aggregation_input(mut self, input: AggregationInputParameters) -> Self {
        self.aggregation_input = Some(input);
        self
    }

    pub fn is_wgs84(&self) -> bool {
        self.crs.is_none_or(|crs| crs == WGS84_SRID)
    }

}

/// Coordinates keyed by id, kept in insertion order.
///
/// Inserting a coordinate whose id is already present replaces it in place so
/// the emitted order stays stable.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct CoordinateSet {
    coordinates: Vec<Coordinate>,
}

impl CoordinateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced coordinate when the id was already present.
    pub fn insert(&mut self, coordinate: Coordinate) -> Option<Coordinate> {
        match self.coordinates.iter_mut().find(|c| c.id == coordinate.id) {
            Some(existing) => Some(std::mem::replace(existing, coordinate)),
            None => {
                self.coordinates.push(coordinate);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Coordinate> {
        self.coordinates.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl From<Vec<Coordinate>> for CoordinateSet {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        coordinates.into_iter().collect()
    }
}

impl From<CoordinateSet> for Vec<Coordinate> {
    fn from(set: CoordinateSet) -> Self {
        set.coordinates
    }
}

impl FromIterator<Coordinate> for CoordinateSet {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = CoordinateSet::new();
        for coordinate in iter {
            set.insert(coordinate);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = CoordinateSet::new();
        set.insert(Coordinate::new("a", 1.0, 1.0));
        set.insert(Coordinate::new("b", 2.0, 2.0));
        let replaced = set.insert(Coordinate::new("a", 3.0, 3.0));

        assert_eq!(replaced.map(|c| c.x), Some(1.0));
        assert_eq!(set.len(), 2);

        let ids: Vec<&str> = set.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(set.get("a").map(|c| c.x), Some(3.0));
    }

    #[test]
    fn test_deserialize_deduplicates_ids() {
        let set: CoordinateSet = serde_json::from_str(
            r#"[{"id":"a","x":1.0,"y":1.0},{"id":"a","x":2.0,"y":2.0},{"id":"b","x":0.0,"y":0.0}]"#,
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").map(|c| c.x), Some(2.0));
    }

    #[test]
    fn test_is_wgs84() {
        assert!(Coordinate::new("a", 0.0, 0.0).is_wgs84());
        assert!(Coordinate::new("a", 0.0, 0.0).with_crs(4326).is_wgs84());
        assert!(!Coordinate::new("a", 0.0, 0.0).with_crs(25833).is_wgs84());
    }
}
