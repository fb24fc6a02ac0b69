use tracing::debug;

use crate::{error::ServiceError, options::travel_options::TravelOptions};

use super::{
    multigraph::{multigraph_block, validate_tile},
    points::{sources, targets},
    wire_request::{WireIntersectionGeometry, WirePolygon, WireRequest},
};

fn polygon_block(options: &TravelOptions) -> Option<WirePolygon<'_>> {
    if options.travel_times.is_empty() {
        return None;
    }

    Some(WirePolygon {
        values: &options.travel_times,
        intersection_mode: options.intersection_mode,
        point_reduction: options.point_reduction,
        min_polygon_hole_size: options.min_polygon_hole_size,
        srid: options.srid,
        decimal_precision: options.decimal_precision,
        buffer: options.buffer,
        simplify: options.simplify,
        serializer: options.polygon_serializer,
        intersection_geometry: options.intersection_geometry.as_ref().map(|geometry| {
            WireIntersectionGeometry {
                geojson: &geometry.geojson,
                crs: geometry.crs,
            }
        }),
    })
}

/// Maps options onto the wire request.
///
/// Missing sources or service credentials do not fail here, the service is
/// the authority on whether a request is complete. A partially set tile group
/// is rejected before anything is built.
pub fn serialize(options: &TravelOptions) -> Result<WireRequest<'_>, ServiceError> {
    validate_tile(&options.multigraph)?;

    Ok(WireRequest {
        polygon: polygon_block(options),
        multigraph: multigraph_block(&options.multigraph),
        sources: sources(options),
        targets: targets(options),
        path_serializer: options.path_serializer,
        reverse: options.reverse,
        edge_weight: options.edge_weight_type,
        elevation: options.elevation_enabled,
        statistic_group_id: options.statistic_group_id,
        statistic_ids: options.statistic_ids.as_deref(),
        service_url: options.service_url.as_deref(),
        service_key: options.service_key.as_deref(),
        format: options.format,
        bounding_box: options.bounding_box.map(|bounding_box| bounding_box.to_array()),
        osm_types: options.osm_types.as_deref(),
        travel_time_factors: options.travel_time_factors.as_ref(),
        only_print_reachable_points: options.only_print_reachable_points,
        max_edge_weight: options.max_edge_weight,
    })
}

pub fn to_json_string(options: &TravelOptions) -> Result<String, ServiceError> {
    let request = serialize(options)?;
    let json = serde_json::to_string(&request).map_err(ServiceError::Serialization)?;

    debug!(
        sources = options.sources.len(),
        targets = options.targets.len(),
        bytes = json.len(),
        "Serialized request"
    );

    Ok(json)
}

/// The request as a JSON value, for inspection. Object keys come back sorted,
/// so use [`to_json_string`] for the bytes actually sent.
pub fn to_json_value(options: &TravelOptions) -> Result<serde_json::Value, ServiceError> {
    let request = serialize(options)?;
    serde_json::to_value(&request).map_err(ServiceError::Serialization)
}
