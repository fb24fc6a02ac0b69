pub mod multigraph;
pub mod payload;
pub mod polygons;
pub mod reachability;
pub mod service_response;
pub mod statistics;
pub mod time_matrix;
