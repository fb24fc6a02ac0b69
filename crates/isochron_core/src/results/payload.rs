use crate::endpoint::Endpoint;

use super::{
    multigraph::MultiGraphPayload, polygons::PolygonPayload, reachability::ReachabilityMap,
    statistics::Statistics, time_matrix::TimeMatrix,
};

/// A decoded response payload, tagged by the endpoint that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    TimeMatrix(TimeMatrix),
    Reachability(ReachabilityMap),
    Polygons(PolygonPayload),
    MultiGraph(MultiGraphPayload),
    Statistics(Statistics),
}

impl Payload {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Payload::TimeMatrix(_) => Endpoint::Time,
            Payload::Reachability(_) => Endpoint::Reachability,
            Payload::Polygons(_) => Endpoint::Polygon,
            Payload::MultiGraph(_) => Endpoint::MultiGraph,
            Payload::Statistics(_) => Endpoint::Statistics,
        }
    }
}

/// A payload type that belongs to exactly one endpoint.
pub trait EndpointPayload: Sized {
    const ENDPOINT: Endpoint;

    fn from_payload(payload: Payload) -> Result<Self, Payload>;
}

macro_rules! endpoint_payload {
    ($payload_type:ty, $endpoint:expr, $variant:ident) => {
        impl EndpointPayload for $payload_type {
            const ENDPOINT: Endpoint = $endpoint;

            fn from_payload(payload: Payload) -> Result<Self, Payload> {
                match payload {
                    Payload::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

endpoint_payload!(TimeMatrix, Endpoint::Time, TimeMatrix);
endpoint_payload!(ReachabilityMap, Endpoint::Reachability, Reachability);
endpoint_payload!(PolygonPayload, Endpoint::Polygon, Polygons);
endpoint_payload!(MultiGraphPayload, Endpoint::MultiGraph, MultiGraph);
endpoint_payload!(Statistics, Endpoint::Statistics, Statistics);
