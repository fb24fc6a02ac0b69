use std::collections::BTreeMap;

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::options::{
    multigraph::{
        MultiGraphAggregationType, MultiGraphEdgeAggregationType, MultiGraphLayerType,
        MultiGraphSerializationFormat,
    },
    output::{EdgeWeightType, OsmType, OutputFormat, PathSerializerType},
    polygon::{IntersectionMode, PolygonSerializerType},
};

/// The request body as the service expects it. Field order is the emission
/// order, so identical options always produce identical bytes.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireRequest<'a> {
    pub polygon: Option<WirePolygon<'a>>,
    pub multigraph: Option<WireMultiGraph<'a>>,
    pub sources: Vec<WireSource<'a>>,
    pub targets: Option<Vec<WireTarget<'a>>>,
    pub path_serializer: Option<PathSerializerType>,
    pub reverse: Option<bool>,
    pub edge_weight: Option<EdgeWeightType>,
    pub elevation: Option<bool>,
    pub statistic_group_id: Option<i32>,
    pub statistic_ids: Option<&'a [i32]>,
    pub service_url: Option<&'a str>,
    pub service_key: Option<&'a str>,
    pub format: Option<OutputFormat>,
    pub bounding_box: Option<[f64; 4]>,
    pub osm_types: Option<&'a [OsmType]>,
    pub travel_time_factors: Option<&'a BTreeMap<String, f64>>,
    pub only_print_reachable_points: Option<bool>,
    pub max_edge_weight: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WirePolygon<'a> {
    pub values: &'a [i32],
    pub intersection_mode: IntersectionMode,
    pub point_reduction: bool,
    pub min_polygon_hole_size: i64,
    pub srid: Option<i32>,
    pub decimal_precision: Option<i32>,
    pub buffer: Option<f64>,
    pub simplify: Option<i64>,
    pub serializer: Option<PolygonSerializerType>,
    pub intersection_geometry: Option<WireIntersectionGeometry<'a>>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WireIntersectionGeometry<'a> {
    pub geojson: &'a serde_json::Value,
    pub crs: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireMultiGraph<'a> {
    pub edge_classes: Option<&'a [i32]>,
    pub layer: Option<WireLayer>,
    pub tile: Option<WireTile>,
    pub serialization: Option<WireSerialization>,
    pub aggregation: Option<WireAggregation>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireLayer {
    #[serde(rename = "type")]
    pub layer_type: Option<MultiGraphLayerType>,
    pub edge_aggregation_type: Option<MultiGraphEdgeAggregationType>,
    pub geometry_detail_per_tile: Option<i32>,
    pub min_geometry_detail_level: Option<i32>,
    pub max_geometry_detail_level: Option<i32>,
    pub geometry_detail_level: Option<i32>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireTile {
    pub zoom: i32,
    pub x: i32,
    pub y: i32,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireSerialization {
    pub format: Option<MultiGraphSerializationFormat>,
    pub decimal_precision: Option<i32>,
    pub max_geometry_count: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireAggregation {
    #[serde(rename = "type")]
    pub aggregation_type: Option<MultiGraphAggregationType>,
    pub ignore_outliers: Option<bool>,
    pub outlier_penalty: Option<f64>,
    pub min_sources_ratio: Option<f64>,
    pub min_sources_count: Option<i32>,
    pub max_result_value_ratio: Option<f64>,
    pub max_result_value: Option<f64>,
    pub gravitation_exponent: Option<f64>,
}

/// Point position: `lat`/`lng` for WGS84, projected `x`/`y` with their `crs` otherwise.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum WirePosition {
    LatLng { lat: f64, lng: f64 },
    Projected { x: f64, y: f64, crs: i32 },
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireSource<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub position: WirePosition,
    pub tm: Option<WireTransportMode>,
    pub reverse: Option<bool>,
    pub aggregation_input_parameters: Option<WireAggregationInput>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WireTarget<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub position: WirePosition,
}

/// The `tm` object, keyed by the resolved travel type name.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WireTransportMode {
    Walk(WireSpeed),
    Bike(WireSpeed),
    Car(WireCar),
    Transit(WireTransit),
    WalkTransit(WireSpeedTransit),
    BikeTransit(WireSpeedTransit),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WireSpeed {
    pub speed: f64,
    pub uphill: f64,
    pub downhill: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WireCar {
    pub rush_hour: bool,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WireTransit {
    pub frame: WireFrame,
    pub max_transfers: Option<i32>,
    pub max_walking_time_from_source: Option<i32>,
    pub max_walking_time_to_target: Option<i32>,
    pub recommendations: Option<i32>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WireSpeedTransit {
    #[serde(flatten)]
    pub transit: WireTransit,
    #[serde(flatten)]
    pub speed: WireSpeed,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFrame {
    pub date: Option<i32>,
    pub time: Option<i32>,
    pub duration: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WireAggregationInput {
    pub factor: Option<f64>,
    pub gravitation_attraction_strength: Option<f64>,
    pub gravitation_positive_influence: Option<bool>,
}
