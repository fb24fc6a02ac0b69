use serde_json::Value;

use crate::error::{ConsistencyError, ServiceError};

use super::response_code::ResponseCode;

pub const HTTP_OK: u16 = 200;
pub const HTTP_GATEWAY_TIMEOUT: u16 = 504;

/// Removes a `callback(...)` or `callback(...);` wrapper. Bodies that are not
/// wrapped are returned unchanged.
pub fn strip_callback<'a>(body: &'a str, callback: Option<&str>) -> &'a str {
    let Some(callback) = callback else {
        return body;
    };

    body.trim()
        .strip_prefix(callback)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .and_then(|rest| {
            let rest = rest.trim_end();
            rest.strip_suffix(';').unwrap_or(rest).trim_end().strip_suffix(')')
        })
        .unwrap_or(body)
}

/// The common part of every response: status code, timing and the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub code: ResponseCode,
    pub message: Option<String>,
    /// -1 when the service did not report it
    pub request_time_ms: i64,
    /// `data` when present, the remaining top-level object otherwise
    pub payload: Value,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Envelope, ConsistencyError> {
        let value: Value = serde_json::from_str(body).map_err(ConsistencyError::MalformedBody)?;

        let Value::Object(mut object) = value else {
            return Ok(Envelope {
                code: ResponseCode::Ok,
                message: None,
                request_time_ms: -1,
                payload: value,
            });
        };

        let code = match object.remove("code") {
            None | Some(Value::Null) => ResponseCode::Ok,
            Some(Value::String(code)) => ResponseCode::from(code.as_str()),
            Some(_) => return Err(ConsistencyError::InvalidField("code")),
        };

        let request_time_ms = object
            .remove("requestTime")
            .and_then(|request_time| {
                request_time
                    .as_i64()
                    .or_else(|| request_time.as_f64().map(|millis| millis.round() as i64))
            })
            .unwrap_or(-1);

        let message = object
            .remove("message")
            .and_then(|message| message.as_str().map(str::to_owned));

        let payload = match object.remove("data") {
            Some(data) => data,
            None => Value::Object(object),
        };

        Ok(Envelope {
            code,
            message,
            request_time_ms,
            payload,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Success(Envelope),
    GatewayTimeout,
}

/// Sorts a finished HTTP exchange into success, gateway timeout or failure.
///
/// A gateway timeout is an outcome, not an error, and its body is never read.
pub fn classify(status: u16, body: &str) -> Result<Classification, ServiceError> {
    match status {
        HTTP_GATEWAY_TIMEOUT => Ok(Classification::GatewayTimeout),
        HTTP_OK => {
            let envelope = Envelope::parse(body)?;

            if envelope.code.is_failure() {
                return Err(ServiceError::RequestFailure {
                    status,
                    code: Some(envelope.code),
                    message: envelope.message,
                    body: body.to_owned(),
                });
            }

            Ok(Classification::Success(envelope))
        }
        _ => {
            let envelope = Envelope::parse(body).ok();

            Err(ServiceError::RequestFailure {
                status,
                code: envelope.as_ref().map(|envelope| envelope.code.clone()),
                message: envelope.and_then(|envelope| envelope.message),
                body: body.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_strip_callback() {
        assert_eq!(
            strip_callback("callback({\"code\":\"ok\"})", Some("callback")),
            "{\"code\":\"ok\"}"
        );
        assert_eq!(
            strip_callback(" callback( {\"code\":\"ok\"} ); \n", Some("callback")),
            " {\"code\":\"ok\"} "
        );
        assert_eq!(
            strip_callback("{\"code\":\"ok\"}", Some("callback")),
            "{\"code\":\"ok\"}"
        );
        assert_eq!(strip_callback("callback({})", None), "callback({})");
    }

    #[test]
    fn test_envelope_with_data() {
        let envelope =
            Envelope::parse(r#"{"code":"ok","requestTime":123,"message":"fine","data":[1,2]}"#)
                .unwrap();

        assert_eq!(envelope.code, ResponseCode::Ok);
        assert_eq!(envelope.request_time_ms, 123);
        assert_eq!(envelope.message.as_deref(), Some("fine"));
        assert_eq!(envelope.payload, json!([1, 2]));
    }

    #[test]
    fn test_envelope_top_level_payload() {
        let envelope =
            Envelope::parse(r#"{"type":"FeatureCollection","features":[]}"#).unwrap();

        assert_eq!(envelope.code, ResponseCode::Ok);
        assert_eq!(envelope.request_time_ms, -1);
        assert_eq!(
            envelope.payload,
            json!({ "type": "FeatureCollection", "features": [] })
        );
    }

    #[test]
    fn test_envelope_rejects_non_string_code() {
        assert!(matches!(
            Envelope::parse(r#"{"code":12}"#),
            Err(ConsistencyError::InvalidField("code"))
        ));
    }

    #[test]
    fn test_fractional_request_time() {
        let envelope = Envelope::parse(r#"{"code":"ok","requestTime":123.0,"data":[]}"#).unwrap();
        assert_eq!(envelope.request_time_ms, 123);

        let envelope = Envelope::parse(r#"{"code":"ok","requestTime":"soon","data":[]}"#).unwrap();
        assert_eq!(envelope.request_time_ms, -1);
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            classify(HTTP_OK, "<html>"),
            Err(ServiceError::ResponseConsistency(
                ConsistencyError::MalformedBody(_)
            ))
        ));
    }

    #[test]
    fn test_gateway_timeout_ignores_body() {
        assert_eq!(
            classify(HTTP_GATEWAY_TIMEOUT, "<html>upstream timed out</html>").unwrap(),
            Classification::GatewayTimeout
        );
    }

    #[test]
    fn test_semantic_failure() {
        let error = classify(HTTP_OK, r#"{"code":"travel-time-exceeded"}"#).unwrap_err();

        assert_eq!(error.code(), Some(&ResponseCode::TravelTimeExceeded));
    }

    #[test]
    fn test_http_error_keeps_envelope_code() {
        let body = r#"{"code":"unknown-exception","message":"boom"}"#;
        let error = classify(500, body).unwrap_err();

        match error {
            ServiceError::RequestFailure {
                status,
                code,
                message,
                body: raw,
            } => {
                assert_eq!(status, 500);
                assert_eq!(code, Some(ResponseCode::UnknownException));
                assert_eq!(message.as_deref(), Some("boom"));
                assert_eq!(raw, body);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_http_error_with_plain_body() {
        let error = classify(403, "Forbidden").unwrap_err();

        assert!(matches!(
            error,
            ServiceError::RequestFailure {
                status: 403,
                code: None,
                ..
            }
        ));
    }
}
