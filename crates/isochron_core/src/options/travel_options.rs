use std::{collections::BTreeMap, sync::Arc};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, CoordinateSet};

use super::{
    multigraph::MultiGraphOptions,
    output::{BoundingBox, EdgeWeightType, OsmType, OutputFormat, PathSerializerType},
    polygon::{IntersectionGeometry, IntersectionMode, PolygonSerializerType},
    transit::TransitFrame,
    travel_type::TravelType,
};

pub const DEFAULT_BIKE_SPEED: f64 = 15.0;
pub const DEFAULT_BIKE_UPHILL: f64 = 20.0;
pub const DEFAULT_BIKE_DOWNHILL: f64 = -10.0;
pub const DEFAULT_WALK_SPEED: f64 = 5.0;
pub const DEFAULT_WALK_UPHILL: f64 = 10.0;
pub const DEFAULT_WALK_DOWNHILL: f64 = 0.0;
pub const DEFAULT_MIN_POLYGON_HOLE_SIZE: i64 = 100_000_000;

/// Everything the service needs to answer one request.
///
/// Options are mutated freely while a request is being prepared. Issuing a
/// request takes a [`TravelOptions::snapshot`], which the returned result keeps
/// for traceability.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TravelOptions {
    #[schemars(with = "Vec<Coordinate>")]
    pub sources: CoordinateSet,
    #[schemars(with = "Vec<Coordinate>")]
    pub targets: CoordinateSet,

    pub travel_type: TravelType,

    /// km/h
    pub bike_speed: f64,
    pub bike_uphill: f64,
    pub bike_downhill: f64,
    /// km/h
    pub walk_speed: f64,
    pub walk_uphill: f64,
    pub walk_downhill: f64,
    pub rush_hour: bool,

    pub transit_frame: TransitFrame,
    pub max_transfers: Option<i32>,
    /// Seconds
    pub max_walking_time_from_source: Option<i32>,
    /// Seconds
    pub max_walking_time_to_target: Option<i32>,
    pub recommendations: Option<i32>,

    /// Polygon break values in seconds (or meters for distance weights)
    pub travel_times: Vec<i32>,
    pub intersection_mode: IntersectionMode,
    pub point_reduction: bool,
    pub min_polygon_hole_size: i64,
    pub srid: Option<i32>,
    pub decimal_precision: Option<i32>,
    pub buffer: Option<f64>,
    pub simplify: Option<i64>,
    pub polygon_serializer: Option<PolygonSerializerType>,
    pub intersection_geometry: Option<IntersectionGeometry>,

    pub multigraph: MultiGraphOptions,

    pub path_serializer: Option<PathSerializerType>,
    pub reverse: Option<bool>,
    pub edge_weight_type: Option<EdgeWeightType>,
    pub elevation_enabled: Option<bool>,
    pub statistic_group_id: Option<i32>,
    pub statistic_ids: Option<Vec<i32>>,
    pub format: Option<OutputFormat>,
    pub bounding_box: Option<BoundingBox>,
    pub osm_types: Option<Vec<OsmType>>,
    pub travel_time_factors: Option<BTreeMap<String, f64>>,
    pub only_print_reachable_points: Option<bool>,
    pub max_edge_weight: Option<i32>,

    pub service_url: Option<String>,
    pub service_key: Option<String>,
}

impl Default for TravelOptions {
    fn default() -> Self {
        TravelOptions {
            sources: CoordinateSet::new(),
            targets: CoordinateSet::new(),
            travel_type: TravelType::Unspecified,
            bike_speed: DEFAULT_BIKE_SPEED,
            bike_uphill: DEFAULT_BIKE_UPHILL,
            bike_downhill: DEFAULT_BIKE_DOWNHILL,
            walk_speed: DEFAULT_WALK_SPEED,
            walk_uphill: DEFAULT_WALK_UPHILL,
            walk_downhill: DEFAULT_WALK_DOWNHILL,
            rush_hour: false,
            transit_frame: TransitFrame::default(),
            max_transfers: None,
            max_walking_time_from_source: None,
            max_walking_time_to_target: None,
            recommendations: None,
            travel_times: Vec::new(),
            intersection_mode: IntersectionMode::Union,
            point_reduction: true,
            min_polygon_hole_size: DEFAULT_MIN_POLYGON_HOLE_SIZE,
            srid: None,
            decimal_precision: None,
            buffer: None,
            simplify: None,
            polygon_serializer: None,
            intersection_geometry: None,
            multigraph: MultiGraphOptions::default(),
            path_serializer: None,
            reverse: None,
            edge_weight_type: None,
            elevation_enabled: None,
            statistic_group_id: None,
            statistic_ids: None,
            format: None,
            bounding_box: None,
            osm_types: None,
            travel_time_factors: None,
            only_print_reachable_points: None,
            max_edge_weight: None,
            service_url: None,
            service_key: None,
        }
    }
}

impl TravelOptions {
    pub fn add_source(&mut self, source: Coordinate) -> &mut TravelOptions {
        self.sources.insert(source);
        self
    }

    pub fn add_target(&mut self, target: Coordinate) -> &mut TravelOptions {
        self.targets.insert(target);
        self
    }

    pub fn set_service(
        &mut self,
        url: impl Into<String>,
        key: impl Into<String>,
    ) -> &mut TravelOptions {
        self.service_url = Some(url.into());
        self.service_key = Some(key.into());
        self
    }

    /// Travel type used for `source`: its own override unless `Unspecified`,
    /// the request-wide travel type otherwise.
    pub fn resolve_travel_type(&self, source: &Coordinate) -> TravelType {
        source.travel_type.or(self.travel_type)
    }

    pub fn polygon_serializer(&self) -> PolygonSerializerType {
        self.polygon_serializer.unwrap_or_default()
    }

    /// Immutable copy used for the duration of one request/response cycle.
    pub fn snapshot(&self) -> Arc<TravelOptions> {
        Arc::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let options: TravelOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TravelOptions::default());
        assert_eq!(options.bike_speed, DEFAULT_BIKE_SPEED);
        assert!(options.point_reduction);
    }

    #[test]
    fn test_resolve_travel_type() {
        let mut options = TravelOptions {
            travel_type: TravelType::Walk,
            ..Default::default()
        };
        options
            .add_source(Coordinate::new("a", 0.0, 0.0))
            .add_source(Coordinate::new("b", 0.0, 0.0).with_travel_type(TravelType::Car));

        let types: Vec<TravelType> = options
            .sources
            .iter()
            .map(|source| options.resolve_travel_type(source))
            .collect();

        assert_eq!(types, vec![TravelType::Walk, TravelType::Car]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut options = TravelOptions::default();
        options.add_source(Coordinate::new("a", 0.0, 0.0));

        let snapshot = options.snapshot();
        options.add_source(Coordinate::new("b", 0.0, 0.0));

        assert_eq!(snapshot.sources.len(), 1);
        assert_eq!(options.sources.len(), 2);
    }
}
