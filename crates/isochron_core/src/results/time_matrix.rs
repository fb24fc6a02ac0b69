use fxhash::FxHashMap;

use crate::coordinate::Coordinate;

/// Weight of the fastest path from a source to a target. Unreachable targets
/// carry a negative travel time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelWeight {
    /// Seconds
    pub travel_time: i32,
    /// Meters, only reported for distance weighted requests
    pub length: Option<f64>,
}

impl TravelWeight {
    pub fn is_reachable(&self) -> bool {
        self.travel_time >= 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeMatrixRow {
    pub source: Coordinate,
    pub targets: Vec<(Coordinate, TravelWeight)>,
}

/// Travel weights from every answered source to its targets, in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeMatrix {
    rows: Vec<TimeMatrixRow>,
    index: FxHashMap<(String, String), TravelWeight>,
}

impl TimeMatrix {
    pub(crate) fn new(rows: Vec<TimeMatrixRow>) -> Self {
        let index = rows
            .iter()
            .flat_map(|row| {
                row.targets.iter().map(|(target, weight)| {
                    ((row.source.id.clone(), target.id.clone()), *weight)
                })
            })
            .collect();

        Self { rows, index }
    }

    pub fn travel_weight(&self, source_id: &str, target_id: &str) -> Option<TravelWeight> {
        self.index
            .get(&(source_id.to_owned(), target_id.to_owned()))
            .copied()
    }

    pub fn rows(&self) -> &[TimeMatrixRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
