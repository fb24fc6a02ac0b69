use std::fmt::Display;

/// The service endpoint a request targets. It selects both the URL path and
/// the decoder applied to the response payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Time,
    Reachability,
    Polygon,
    MultiGraph,
    Statistics,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Time => "v1/time",
            Endpoint::Reachability => "v1/reachability",
            Endpoint::Polygon => "v1/polygon",
            Endpoint::MultiGraph => "v1/multigraph",
            Endpoint::Statistics => "v1/statistics",
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Endpoint::Time => "time",
                Endpoint::Reachability => "reachability",
                Endpoint::Polygon => "polygon",
                Endpoint::MultiGraph => "multigraph",
                Endpoint::Statistics => "statistics",
            }
        )
    }
}
