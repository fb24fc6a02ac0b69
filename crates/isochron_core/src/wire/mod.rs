mod multigraph;
mod points;
pub mod serializer;
pub mod wire_request;
