pub mod client;
pub mod error;
pub mod reqwest_transport;
pub mod transport;
