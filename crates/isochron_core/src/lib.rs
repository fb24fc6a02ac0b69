pub mod coordinate;
pub mod endpoint;
pub mod error;
pub mod options;
pub mod response;
pub mod results;
pub mod transport;
pub mod wire;
