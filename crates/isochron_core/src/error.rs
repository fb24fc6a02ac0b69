use std::fmt::Display;

use thiserror::Error;

use crate::{endpoint::Endpoint, response::response_code::ResponseCode};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("could not serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error(
        "request failed with status {status} and code {}: {body}",
        .code.as_ref().map_or("none", ResponseCode::as_str)
    )]
    RequestFailure {
        status: u16,
        code: Option<ResponseCode>,
        message: Option<String>,
        body: String,
    },

    #[error("inconsistent response: {0}")]
    ResponseConsistency(#[from] ConsistencyError),
}

impl ServiceError {
    /// The remote code carried by a request failure.
    pub fn code(&self) -> Option<&ResponseCode> {
        match self {
            ServiceError::RequestFailure { code, .. } => code.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "multigraph tile needs zoom, x and y together (zoom: {zoom:?}, x: {x:?}, y: {y:?})"
    )]
    IncompleteTile {
        zoom: Option<i32>,
        x: Option<i32>,
        y: Option<i32>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IdentifierKind {
    Source,
    Target,
    Node,
}

impl Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Source => write!(f, "source"),
            IdentifierKind::Target => write!(f, "target"),
            IdentifierKind::Node => write!(f, "node"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConsistencyError {
    #[error("response body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("response field `{0}` has an unexpected type")]
    InvalidField(&'static str),

    #[error("invalid {endpoint} payload: {source}")]
    InvalidPayload {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    #[error("response references unknown {kind} `{id}`")]
    UnknownIdentifier { kind: IdentifierKind, id: String },

    #[error("expected a {expected} payload but got a {actual} payload")]
    UnexpectedPayload { expected: Endpoint, actual: Endpoint },
}
