pub mod decode;
pub mod envelope;
pub mod parser;
pub mod response_code;
