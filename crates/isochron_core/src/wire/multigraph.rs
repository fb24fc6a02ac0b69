use crate::{
    error::ConfigurationError,
    options::multigraph::MultiGraphOptions,
};

use super::wire_request::{
    WireAggregation, WireLayer, WireMultiGraph, WireSerialization, WireTile,
};

/// The tile fields are all-or-nothing, whether or not the block is sent.
pub(super) fn validate_tile(options: &MultiGraphOptions) -> Result<(), ConfigurationError> {
    match options.tile_field_count() {
        0 | 3 => Ok(()),
        _ => Err(ConfigurationError::IncompleteTile {
            zoom: options.tile_zoom,
            x: options.tile_x,
            y: options.tile_y,
        }),
    }
}

pub(super) fn multigraph_block(options: &MultiGraphOptions) -> Option<WireMultiGraph<'_>> {
    if !options.is_requested() {
        return None;
    }

    let layer = options.has_layer().then(|| WireLayer {
        layer_type: options.layer_type,
        edge_aggregation_type: options.layer_edge_aggregation_type,
        geometry_detail_per_tile: options.layer_geometry_detail_per_tile,
        min_geometry_detail_level: options.layer_min_geometry_detail_level,
        max_geometry_detail_level: options.layer_max_geometry_detail_level,
        geometry_detail_level: options.layer_geometry_detail_level,
    });

    let tile = options.tile().map(|(zoom, x, y)| WireTile { zoom, x, y });

    let serialization = options.has_serialization().then(|| WireSerialization {
        format: options.serialization_format,
        decimal_precision: options.serialization_decimal_precision,
        max_geometry_count: options.serialization_max_geometry_count,
    });

    let aggregation = options.has_aggregation().then(|| WireAggregation {
        aggregation_type: options.aggregation_type,
        ignore_outliers: options.aggregation_ignore_outliers,
        outlier_penalty: options.aggregation_outlier_penalty,
        min_sources_ratio: options.aggregation_min_sources_ratio,
        min_sources_count: options.aggregation_min_sources_count,
        max_result_value_ratio: options.aggregation_max_result_value_ratio,
        max_result_value: options.aggregation_max_result_value,
        gravitation_exponent: options.aggregation_gravitation_exponent,
    });

    Some(WireMultiGraph {
        edge_classes: options.edge_classes.as_deref(),
        layer,
        tile,
        serialization,
        aggregation,
    })
}
