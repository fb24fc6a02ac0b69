use std::time::Duration;

use isochron_core::{
    endpoint::Endpoint,
    error::{ConsistencyError, IdentifierKind, ServiceError},
    response::{
        parser::{ParseInput, parse_response},
        response_code::ResponseCode,
    },
    results::time_matrix::TimeMatrix,
};

mod test_utils;

#[test]
fn test_time_matrix_response() {
    let options = test_utils::create_time_options().snapshot();
    let body = r#"{"code":"ok","requestTime":123,"data":[{"id":"id0","targets":[{"id":"id0","travelTime":987}]}]}"#;

    let response = parse_response(
        ParseInput::new(Endpoint::Time, 200, body, options)
            .with_round_trip_time(Duration::from_millis(250)),
    )
    .unwrap()
    .narrow::<TimeMatrix>()
    .unwrap();

    assert_eq!(response.code(), &ResponseCode::Ok);
    assert_eq!(response.server_request_time_ms(), 123);
    assert_eq!(response.round_trip_time(), Duration::from_millis(250));
    assert_eq!(
        response.travel_weight("id0", "id0").map(|weight| weight.travel_time),
        Some(987)
    );

    let row = &response.payload().unwrap().rows()[0];
    assert_eq!(row.source.x, 10.64);
    assert_eq!(row.targets[0].0.y, 41.81);
}

#[test]
fn test_unknown_target_is_inconsistent() {
    let options = test_utils::create_time_options().snapshot();
    let body = r#"{"code":"ok","data":[{"id":"id0","targets":[{"id":"idX","travelTime":1}]}]}"#;

    let error = parse_response(ParseInput::new(Endpoint::Time, 200, body, options)).unwrap_err();

    assert!(matches!(
        error,
        ServiceError::ResponseConsistency(ConsistencyError::UnknownIdentifier {
            kind: IdentifierKind::Target,
            ref id,
        }) if id == "idX"
    ));
}

#[test]
fn test_semantic_failure_is_request_failure() {
    let options = test_utils::create_time_options().snapshot();

    let error = parse_response(ParseInput::new(
        Endpoint::Time,
        200,
        r#"{"code":"no-route-found"}"#,
        options,
    ))
    .unwrap_err();

    assert!(matches!(
        error,
        ServiceError::RequestFailure {
            status: 200,
            code: Some(ResponseCode::NoRouteFound),
            ..
        }
    ));
}

#[test]
fn test_gateway_timeout_never_fails() {
    let bodies = [
        "",
        "<html><body>504 Gateway Time-out</body></html>",
        r#"{"code":"no-route-found"}"#,
        r#"callback({"code":"ok","data":[]})"#,
        "\u{0}\u{1}garbage",
    ];

    for endpoint in [
        Endpoint::Time,
        Endpoint::Reachability,
        Endpoint::Polygon,
        Endpoint::MultiGraph,
        Endpoint::Statistics,
    ] {
        for body in bodies {
            let options = test_utils::create_time_options().snapshot();
            let response = parse_response(
                ParseInput::new(endpoint, 504, body, options).with_callback(Some("callback")),
            )
            .unwrap();

            assert!(response.is_gateway_timeout(), "{endpoint} {body:?}");
            assert!(response.payload().is_none());
            assert_eq!(response.server_request_time_ms(), -1);
        }
    }
}

#[test]
fn test_http_error_status() {
    let options = test_utils::create_time_options().snapshot();

    let error = parse_response(ParseInput::new(
        Endpoint::Reachability,
        401,
        "Unauthorized",
        options,
    ))
    .unwrap_err();

    match error {
        ServiceError::RequestFailure { status, code, body, .. } => {
            assert_eq!(status, 401);
            assert_eq!(code, None);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_response_keeps_options_snapshot() {
    let mut options = test_utils::create_time_options();
    let snapshot = options.snapshot();
    options.travel_times.push(900);

    let response = parse_response(ParseInput::new(
        Endpoint::Time,
        200,
        r#"{"code":"ok","data":[]}"#,
        snapshot,
    ))
    .unwrap();

    assert!(response.options().travel_times.is_empty());
    assert_eq!(response.options().sources.len(), 1);
}
