pub mod multigraph;
pub mod output;
pub mod polygon;
pub mod transit;
pub mod travel_options;
pub mod travel_type;
