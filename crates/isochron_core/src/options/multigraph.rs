use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MultiGraphLayerType {
    Identity,
    Node,
    Edge,
    Hexagon,
    Tile,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MultiGraphEdgeAggregationType {
    Min,
    Max,
    Mean,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MultiGraphSerializationFormat {
    #[default]
    Json,
    GeoJson,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MultiGraphAggregationType {
    None,
    Min,
    Max,
    Sum,
    Mean,
    Median,
    Nearest,
    RoutingUnion,
}

/// The multigraph parameter group of a request. Every field is optional; the
/// whole group is only sent when something in it is set.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MultiGraphOptions {
    pub edge_classes: Option<Vec<i32>>,

    pub layer_type: Option<MultiGraphLayerType>,
    pub layer_edge_aggregation_type: Option<MultiGraphEdgeAggregationType>,
    pub layer_geometry_detail_per_tile: Option<i32>,
    pub layer_min_geometry_detail_level: Option<i32>,
    pub layer_max_geometry_detail_level: Option<i32>,
    pub layer_geometry_detail_level: Option<i32>,

    pub tile_zoom: Option<i32>,
    pub tile_x: Option<i32>,
    pub tile_y: Option<i32>,

    pub serialization_format: Option<MultiGraphSerializationFormat>,
    pub serialization_decimal_precision: Option<i32>,
    pub serialization_max_geometry_count: Option<i32>,

    pub aggregation_type: Option<MultiGraphAggregationType>,
    pub aggregation_ignore_outliers: Option<bool>,
    pub aggregation_outlier_penalty: Option<f64>,
    pub aggregation_min_sources_ratio: Option<f64>,
    pub aggregation_min_sources_count: Option<i32>,
    pub aggregation_max_result_value_ratio: Option<f64>,
    pub aggregation_max_result_value: Option<f64>,
    pub aggregation_gravitation_exponent: Option<f64>,
}

impl MultiGraphOptions {
    pub fn has_layer(&self) -> bool {
        self.layer_type.is_some()
            || self.layer_edge_aggregation_type.is_some()
            || self.layer_geometry_detail_per_tile.is_some()
            || self.layer_min_geometry_detail_level.is_some()
            || self.layer_max_geometry_detail_level.is_some()
            || self.layer_geometry_detail_level.is_some()
    }

    pub fn has_serialization(&self) -> bool {
        self.serialization_format.is_some()
            || self.serialization_decimal_precision.is_some()
            || self.serialization_max_geometry_count.is_some()
    }

    pub fn has_aggregation(&self) -> bool {
        self.aggregation_type.is_some()
            || self.aggregation_ignore_outliers.is_some()
            || self.aggregation_outlier_penalty.is_some()
            || self.aggregation_min_sources_ratio.is_some()
            || self.aggregation_min_sources_count.is_some()
            || self.aggregation_max_result_value_ratio.is_some()
            || self.aggregation_max_result_value.is_some()
            || self.aggregation_gravitation_exponent.is_some()
    }

    /// Number of tile fields (`zoom`, `x`, `y`) that are set.
    pub fn tile_field_count(&self) -> usize {
        [self.tile_zoom, self.tile_x, self.tile_y]
            .iter()
            .filter(|field| field.is_some())
            .count()
    }

    /// `(zoom, x, y)` when all three tile fields are set.
    pub fn tile(&self) -> Option<(i32, i32, i32)> {
        Some((self.tile_zoom?, self.tile_x?, self.tile_y?))
    }

    /// Whether any field outside the tile group is set.
    pub fn has_non_tile_field(&self) -> bool {
        self.edge_classes.is_some()
            || self.has_layer()
            || self.has_serialization()
            || self.has_aggregation()
    }

    /// The multigraph block is sent iff a non-tile field is set or the tile is complete.
    pub fn is_requested(&self) -> bool {
        self.has_non_tile_field() || self.tile().is_some()
    }

    pub fn format(&self) -> MultiGraphSerializationFormat {
        self.serialization_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_is_not_requested() {
        let options = MultiGraphOptions::default();
        assert!(!options.is_requested());
        assert_eq!(options.tile_field_count(), 0);
    }

    #[test]
    fn test_partial_tile_is_not_requested() {
        let options = MultiGraphOptions {
            tile_zoom: Some(12),
            tile_x: Some(2200),
            ..Default::default()
        };

        assert!(!options.is_requested());
        assert_eq!(options.tile_field_count(), 2);
        assert_eq!(options.tile(), None);
    }

    #[test]
    fn test_complete_tile_is_requested() {
        let options = MultiGraphOptions {
            tile_zoom: Some(12),
            tile_x: Some(2200),
            tile_y: Some(1343),
            ..Default::default()
        };

        assert!(options.is_requested());
        assert_eq!(options.tile(), Some((12, 2200, 1343)));
    }

    #[test]
    fn test_aggregation_type_names() {
        assert_eq!(
            serde_json::to_string(&MultiGraphAggregationType::RoutingUnion).unwrap(),
            "\"routing_union\""
        );
        assert_eq!(
            serde_json::to_string(&MultiGraphAggregationType::None).unwrap(),
            "\"none\""
        );
    }
}
