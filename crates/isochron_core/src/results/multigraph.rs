use std::collections::BTreeMap;

use geojson::FeatureCollection;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MultiGraphLayer {
    pub values: BTreeMap<String, f64>,
}

/// A multigraph in the JSON serialization: node positions, edges as node id
/// sequences and aggregated values per layer.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MultiGraph {
    #[serde(default)]
    pub nodes: BTreeMap<String, [f64; 2]>,
    #[serde(default)]
    pub edges: BTreeMap<String, Vec<String>>,
    pub layers: BTreeMap<String, MultiGraphLayer>,
}

impl MultiGraph {
    pub fn layer(&self, layer_id: &str) -> Option<&MultiGraphLayer> {
        self.layers.get(layer_id)
    }

    pub fn value(&self, layer_id: &str, element_id: &str) -> Option<f64> {
        self.layer(layer_id)?.values.get(element_id).copied()
    }

    pub fn node(&self, node_id: &str) -> Option<geo_types::Point> {
        self.nodes
            .get(node_id)
            .map(|&[x, y]| geo_types::Point::new(x, y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MultiGraphPayload {
    Json(MultiGraph),
    GeoJson(FeatureCollection),
}
