use std::collections::BTreeMap;

use serde::Deserialize;

/// Statistic values per statistic id, one value per requested travel time.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub statistics: BTreeMap<String, Vec<f64>>,

    /// Same shape as `statistics`, keyed by source id
    #[serde(default)]
    pub individual_statistics: BTreeMap<String, BTreeMap<String, Vec<f64>>>,
}

impl Statistics {
    pub fn values(&self, statistic_id: &str) -> Option<&[f64]> {
        self.statistics.get(statistic_id).map(Vec::as_slice)
    }

    pub fn source_values(&self, source_id: &str, statistic_id: &str) -> Option<&[f64]> {
        self.individual_statistics
            .get(source_id)?
            .get(statistic_id)
            .map(Vec::as_slice)
    }
}
