use std::{sync::Arc, time::Duration};

use crate::{
    error::{ConsistencyError, ServiceError},
    options::travel_options::TravelOptions,
    response::response_code::ResponseCode,
};

use super::{
    payload::{EndpointPayload, Payload},
    time_matrix::{TimeMatrix, TravelWeight},
};

/// The outcome of one request/response cycle.
///
/// Gateway timeouts are regular responses with [`ResponseCode::GatewayTimeout`]
/// and no payload.
#[derive(Debug, Clone)]
pub struct ServiceResponse<P> {
    code: ResponseCode,
    message: Option<String>,
    server_request_time_ms: i64,
    round_trip_time: Duration,
    parse_time: Duration,
    options: Arc<TravelOptions>,
    payload: Option<P>,
}

pub(crate) struct ResponseMeta {
    pub code: ResponseCode,
    pub message: Option<String>,
    pub server_request_time_ms: i64,
    pub round_trip_time: Duration,
    pub options: Arc<TravelOptions>,
}

impl<P> ServiceResponse<P> {
    pub(crate) fn new(meta: ResponseMeta, parse_time: Duration, payload: Option<P>) -> Self {
        Self {
            code: meta.code,
            message: meta.message,
            server_request_time_ms: meta.server_request_time_ms,
            round_trip_time: meta.round_trip_time,
            parse_time,
            options: meta.options,
            payload,
        }
    }

    pub fn code(&self) -> &ResponseCode {
        &self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_gateway_timeout(&self) -> bool {
        self.code == ResponseCode::GatewayTimeout
    }

    /// Processing time reported by the service, -1 when it did not report one.
    pub fn server_request_time_ms(&self) -> i64 {
        self.server_request_time_ms
    }

    pub fn round_trip_time(&self) -> Duration {
        self.round_trip_time
    }

    pub fn parse_time(&self) -> Duration {
        self.parse_time
    }

    /// The options snapshot the request was built from.
    pub fn options(&self) -> &TravelOptions {
        &self.options
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    fn with_payload<Q>(self, payload: Option<Q>) -> ServiceResponse<Q> {
        ServiceResponse {
            code: self.code,
            message: self.message,
            server_request_time_ms: self.server_request_time_ms,
            round_trip_time: self.round_trip_time,
            parse_time: self.parse_time,
            options: self.options,
            payload,
        }
    }
}

impl ServiceResponse<Payload> {
    /// Narrows the payload to the type of one endpoint.
    pub fn narrow<P: EndpointPayload>(mut self) -> Result<ServiceResponse<P>, ServiceError> {
        let payload = match self.payload.take() {
            Some(payload) => Some(P::from_payload(payload).map_err(|other| {
                ConsistencyError::UnexpectedPayload {
                    expected: P::ENDPOINT,
                    actual: other.endpoint(),
                }
            })?),
            None => None,
        };

        Ok(self.with_payload(payload))
    }
}

impl ServiceResponse<TimeMatrix> {
    pub fn travel_weight(&self, source_id: &str, target_id: &str) -> Option<TravelWeight> {
        self.payload.as_ref()?.travel_weight(source_id, target_id)
    }
}

impl ServiceResponse<super::statistics::Statistics> {
    /// Value of `statistic_id` for the bin of `travel_time` among the requested travel times.
    pub fn statistic_value(&self, statistic_id: &str, travel_time: i32) -> Option<f64> {
        let bin = self
            .options
            .travel_times
            .iter()
            .position(|&value| value == travel_time)?;

        self.payload.as_ref()?.values(statistic_id)?.get(bin).copied()
    }
}
