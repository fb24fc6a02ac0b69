use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::{debug, warn};

use crate::{
    endpoint::Endpoint,
    error::ServiceError,
    options::travel_options::TravelOptions,
    results::{
        payload::Payload,
        service_response::{ResponseMeta, ServiceResponse},
    },
};

use super::{
    decode::{IdMapper, decode_payload},
    envelope::{Classification, classify, strip_callback},
    response_code::ResponseCode,
};

/// A finished HTTP exchange together with the context needed to interpret it.
pub struct ParseInput<'a> {
    pub endpoint: Endpoint,
    pub status: u16,
    pub body: &'a str,
    pub callback: Option<&'a str>,
    pub options: Arc<TravelOptions>,
    pub round_trip_time: Duration,
    pub id_mapper: Option<IdMapper<'a>>,
}

impl<'a> ParseInput<'a> {
    pub fn new(
        endpoint: Endpoint,
        status: u16,
        body: &'a str,
        options: Arc<TravelOptions>,
    ) -> Self {
        Self {
            endpoint,
            status,
            body,
            callback: None,
            options,
            round_trip_time: Duration::ZERO,
            id_mapper: None,
        }
    }

    pub fn with_callback(mut self, callback: Option<&'a str>) -> Self {
        self.callback = callback;
        self
    }

    pub fn with_round_trip_time(mut self, round_trip_time: Duration) -> Self {
        self.round_trip_time = round_trip_time;
        self
    }

    pub fn with_id_mapper(mut self, id_mapper: IdMapper<'a>) -> Self {
        self.id_mapper = Some(id_mapper);
        self
    }
}

/// Turns a finished exchange into a [`ServiceResponse`].
///
/// HTTP 504 yields a response with [`ResponseCode::GatewayTimeout`] and no
/// payload. Every other non-success outcome is an error.
pub fn parse_response(input: ParseInput<'_>) -> Result<ServiceResponse<Payload>, ServiceError> {
    let started_at = Instant::now();
    let body = strip_callback(input.body, input.callback);

    let envelope = match classify(input.status, body)? {
        Classification::GatewayTimeout => {
            warn!(
                endpoint = %input.endpoint,
                round_trip_ms = input.round_trip_time.as_millis(),
                "Gateway timed out"
            );

            let meta = ResponseMeta {
                code: ResponseCode::GatewayTimeout,
                message: None,
                server_request_time_ms: -1,
                round_trip_time: input.round_trip_time,
                options: input.options,
            };

            return Ok(ServiceResponse::new(meta, started_at.elapsed(), None));
        }
        Classification::Success(envelope) => envelope,
    };

    let payload = decode_payload(
        input.endpoint,
        envelope.payload,
        &input.options,
        input.id_mapper,
    )?;

    let parse_time = started_at.elapsed();

    debug!(
        endpoint = %input.endpoint,
        code = %envelope.code,
        server_request_time_ms = envelope.request_time_ms,
        round_trip_ms = input.round_trip_time.as_millis(),
        parse_us = parse_time.as_micros(),
        "Parsed response"
    );

    let meta = ResponseMeta {
        code: envelope.code,
        message: envelope.message,
        server_request_time_ms: envelope.request_time_ms,
        round_trip_time: input.round_trip_time,
        options: input.options,
    };

    Ok(ServiceResponse::new(meta, parse_time, Some(payload)))
}
