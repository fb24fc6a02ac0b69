use fxhash::FxHashMap;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    coordinate::{Coordinate, CoordinateSet},
    endpoint::Endpoint,
    error::{ConsistencyError, IdentifierKind},
    options::{
        multigraph::MultiGraphSerializationFormat, polygon::PolygonSerializerType,
        travel_options::TravelOptions,
    },
    results::{
        multigraph::{MultiGraph, MultiGraphPayload},
        payload::Payload,
        polygons::{PolygonPayload, SourcePolygons, TravelTimePolygon},
        reachability::ReachabilityMap,
        statistics::Statistics,
        time_matrix::{TimeMatrix, TimeMatrixRow, TravelWeight},
    },
};

/// Maps a response id to the id reported to the caller. `None` drops the entry.
pub type IdMapper<'a> = &'a (dyn Fn(&str) -> Option<String> + Sync);

#[derive(Deserialize)]
struct TimeSourceEntry {
    id: String,
    targets: Vec<TimeTargetEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeTargetEntry {
    id: String,
    travel_time: i32,
    #[serde(default)]
    length: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReachabilityEntry {
    id: String,
    travel_time: i32,
}

#[derive(Deserialize)]
struct SourcePolygonsEntry {
    #[serde(default)]
    id: Option<String>,
    polygons: Vec<PolygonEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PolygonEntry {
    travel_time: i32,
    #[serde(default)]
    area: Option<f64>,
    outer_boundary: Vec<[f64; 2]>,
    #[serde(default)]
    inner_boundary: Vec<Vec<[f64; 2]>>,
}

fn from_payload<T: DeserializeOwned>(
    endpoint: Endpoint,
    payload: Value,
) -> Result<T, ConsistencyError> {
    serde_json::from_value(payload)
        .map_err(|source| ConsistencyError::InvalidPayload { endpoint, source })
}

struct CoordinateIndex<'a> {
    kind: IdentifierKind,
    coordinates: FxHashMap<&'a str, &'a Coordinate>,
}

impl<'a> CoordinateIndex<'a> {
    fn new(kind: IdentifierKind, set: &'a CoordinateSet) -> Self {
        Self {
            kind,
            coordinates: set.iter().map(|c| (c.id.as_str(), c)).collect(),
        }
    }

    fn resolve(&self, id: &str) -> Result<&'a Coordinate, ConsistencyError> {
        self.coordinates
            .get(id)
            .copied()
            .ok_or_else(|| ConsistencyError::UnknownIdentifier {
                kind: self.kind,
                id: id.to_owned(),
            })
    }
}

fn decode_time_matrix(
    payload: Value,
    options: &TravelOptions,
) -> Result<TimeMatrix, ConsistencyError> {
    let entries: Vec<TimeSourceEntry> = from_payload(Endpoint::Time, payload)?;

    let sources = CoordinateIndex::new(IdentifierKind::Source, &options.sources);
    let targets = CoordinateIndex::new(IdentifierKind::Target, &options.targets);

    let rows = entries
        .into_iter()
        .map(|entry| {
            let source = sources.resolve(&entry.id)?.clone();
            let weights = entry
                .targets
                .into_iter()
                .map(|target| {
                    let weight = TravelWeight {
                        travel_time: target.travel_time,
                        length: target.length,
                    };
                    Ok((targets.resolve(&target.id)?.clone(), weight))
                })
                .collect::<Result<Vec<_>, ConsistencyError>>()?;

            Ok(TimeMatrixRow {
                source,
                targets: weights,
            })
        })
        .collect::<Result<Vec<_>, ConsistencyError>>()?;

    Ok(TimeMatrix::new(rows))
}

fn decode_reachability(
    payload: Value,
    id_mapper: Option<IdMapper<'_>>,
) -> Result<ReachabilityMap, ConsistencyError> {
    let entries: Vec<ReachabilityEntry> = from_payload(Endpoint::Reachability, payload)?;

    let entries = entries
        .into_iter()
        .filter_map(|entry| {
            let id = match id_mapper {
                Some(mapper) => mapper(&entry.id)?,
                None => entry.id,
            };
            Some((id, entry.travel_time))
        })
        .collect();

    Ok(ReachabilityMap::new(entries))
}

fn to_polygon(entry: PolygonEntry) -> TravelTimePolygon {
    let exterior = geo_types::LineString::from(entry.outer_boundary);
    let interiors = entry
        .inner_boundary
        .into_iter()
        .map(geo_types::LineString::from)
        .collect();

    TravelTimePolygon {
        travel_time: entry.travel_time,
        area: entry.area,
        polygon: geo_types::Polygon::new(exterior, interiors),
    }
}

fn decode_polygons(
    payload: Value,
    options: &TravelOptions,
) -> Result<PolygonPayload, ConsistencyError> {
    if options.polygon_serializer() == PolygonSerializerType::GeoJson {
        return from_payload(Endpoint::Polygon, payload).map(PolygonPayload::GeoJson);
    }

    let entries: Vec<SourcePolygonsEntry> = from_payload(Endpoint::Polygon, payload)?;
    let sources = CoordinateIndex::new(IdentifierKind::Source, &options.sources);

    let polygons = entries
        .into_iter()
        .map(|entry| {
            if let Some(id) = &entry.id {
                sources.resolve(id)?;
            }

            Ok(SourcePolygons {
                source_id: entry.id,
                polygons: entry.polygons.into_iter().map(to_polygon).collect(),
            })
        })
        .collect::<Result<Vec<_>, ConsistencyError>>()?;

    Ok(PolygonPayload::Json(polygons))
}

fn decode_multigraph(
    payload: Value,
    options: &TravelOptions,
) -> Result<MultiGraphPayload, ConsistencyError> {
    if options.multigraph.format() == MultiGraphSerializationFormat::GeoJson {
        return from_payload(Endpoint::MultiGraph, payload).map(MultiGraphPayload::GeoJson);
    }

    let multigraph: MultiGraph = from_payload(Endpoint::MultiGraph, payload)?;

    if !multigraph.nodes.is_empty() {
        let unknown_node = multigraph
            .edges
            .values()
            .flatten()
            .find(|node_id| !multigraph.nodes.contains_key(node_id.as_str()));

        if let Some(node_id) = unknown_node {
            return Err(ConsistencyError::UnknownIdentifier {
                kind: IdentifierKind::Node,
                id: node_id.clone(),
            });
        }
    }

    Ok(MultiGraphPayload::Json(multigraph))
}

fn decode_statistics(
    payload: Value,
    options: &TravelOptions,
) -> Result<Statistics, ConsistencyError> {
    let statistics: Statistics = from_payload(Endpoint::Statistics, payload)?;

    let sources = CoordinateIndex::new(IdentifierKind::Source, &options.sources);
    for source_id in statistics.individual_statistics.keys() {
        sources.resolve(source_id)?;
    }

    Ok(statistics)
}

/// Decodes a success payload with the decoder chosen by `endpoint`.
///
/// Ids in the payload are checked against the options the request was built
/// from; an id the request never sent means client and service disagree.
pub fn decode_payload(
    endpoint: Endpoint,
    payload: Value,
    options: &TravelOptions,
    id_mapper: Option<IdMapper<'_>>,
) -> Result<Payload, ConsistencyError> {
    let payload = match endpoint {
        Endpoint::Time => Payload::TimeMatrix(decode_time_matrix(payload, options)?),
        Endpoint::Reachability => Payload::Reachability(decode_reachability(payload, id_mapper)?),
        Endpoint::Polygon => Payload::Polygons(decode_polygons(payload, options)?),
        Endpoint::MultiGraph => Payload::MultiGraph(decode_multigraph(payload, options)?),
        Endpoint::Statistics => Payload::Statistics(decode_statistics(payload, options)?),
    };

    Ok(payload)
}
