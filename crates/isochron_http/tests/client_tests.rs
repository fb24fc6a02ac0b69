use std::sync::Mutex;

use isochron_core::{
    coordinate::Coordinate,
    error::{ConfigurationError, ServiceError},
    options::{travel_options::TravelOptions, travel_type::TravelType},
    response::response_code::ResponseCode,
    transport::{RequestMethod, TransportRequest, TransportResponse},
};
use isochron_http::{client::IsochronClient, error::ClientError, transport::Transport};
use serde_json::{Value, json};

struct MockTransport {
    requests: Mutex<Vec<TransportRequest>>,
    response: Result<TransportResponse, std::io::ErrorKind>,
}

impl MockTransport {
    fn respond(status: u16, body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Ok(TransportResponse {
                status,
                body: body.to_string(),
            }),
        }
    }

    fn fail(kind: std::io::ErrorKind) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Err(kind),
        }
    }
}

impl Transport for MockTransport {
    type Error = std::io::Error;

    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone().map_err(std::io::Error::from)
    }
}

fn time_options() -> TravelOptions {
    let mut options = TravelOptions::default();
    options
        .add_source(Coordinate::new("id0", 10.64, -17.37).with_travel_type(TravelType::Car))
        .add_target(Coordinate::new("id0", -84.01, 41.81))
        .set_service("https://service.example.com/", "secret");
    options
}

#[tokio::test]
async fn test_time_request() {
    let client = IsochronClient::with_transport(MockTransport::respond(
        200,
        r#"{"code":"ok","requestTime":123,"data":[{"id":"id0","targets":[{"id":"id0","travelTime":987}]}]}"#,
    ));

    let response = client.time(&time_options()).await.unwrap();

    assert_eq!(response.code(), &ResponseCode::Ok);
    assert_eq!(response.server_request_time_ms(), 123);
    assert_eq!(
        response.travel_weight("id0", "id0").unwrap().travel_time,
        987
    );

    let client_requests = client_requests(&client);
    assert_eq!(client_requests.len(), 1);

    let request = &client_requests[0];
    assert_eq!(request.method, RequestMethod::Post);
    assert_eq!(request.url, "https://service.example.com/v1/time");
    assert_eq!(request.query, vec![("key", "secret".to_string())]);

    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["sources"][0]["tm"], json!({ "car": { "rushHour": false } }));
}

#[tokio::test]
async fn test_get_request_with_callback() {
    let client = IsochronClient::with_transport(MockTransport::respond(
        200,
        r#"callback({"code":"ok","data":[{"id":"id0","travelTime":42}]});"#,
    ))
    .with_method(RequestMethod::Get);

    let response = client.reachability(&time_options()).await.unwrap();

    assert_eq!(response.payload().unwrap().travel_time("id0"), Some(42));

    let requests = client_requests(&client);
    assert_eq!(requests[0].url, "https://service.example.com/v1/reachability");
    assert_eq!(requests[0].query[0].0, "cfg");
    assert_eq!(requests[0].query[1], ("cb", "callback".to_string()));
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn test_reachability_with_mapper() {
    let client = IsochronClient::with_transport(MockTransport::respond(
        200,
        r#"{"code":"ok","data":[{"id":"0","travelTime":60},{"id":"1","travelTime":90}]}"#,
    ));
    let names = ["bakery", "school"];
    let mapper = move |id: &str| {
        id.parse::<usize>()
            .ok()
            .and_then(|index| names.get(index))
            .map(|name| name.to_string())
    };

    let response = client
        .reachability_with_mapper(&time_options(), &mapper)
        .await
        .unwrap();

    let reachability = response.payload().unwrap();
    assert_eq!(reachability.travel_time("school"), Some(90));
    assert_eq!(reachability.travel_time("1"), None);
}

#[tokio::test]
async fn test_gateway_timeout_is_a_response() {
    let client =
        IsochronClient::with_transport(MockTransport::respond(504, "<html>Gateway Time-out</html>"));

    let mut options = time_options();
    options.travel_times = vec![600];

    let response = client.polygons(&options).await.unwrap();

    assert!(response.is_gateway_timeout());
    assert!(response.payload().is_none());
    assert_eq!(response.options().travel_times, vec![600]);
}

#[tokio::test]
async fn test_semantic_failure() {
    let client = IsochronClient::with_transport(MockTransport::respond(
        200,
        r#"{"code":"no-route-found","message":"nothing"}"#,
    ));

    let error = client.time(&time_options()).await.unwrap_err();

    assert_eq!(
        error.as_service_error().and_then(ServiceError::code),
        Some(&ResponseCode::NoRouteFound)
    );
}

#[tokio::test]
async fn test_incomplete_tile_never_reaches_transport() {
    let client = IsochronClient::with_transport(MockTransport::respond(200, "{}"));

    let mut options = time_options();
    options.multigraph.tile_x = Some(4);

    let error = client.multigraph(&options).await.unwrap_err();

    assert!(matches!(
        error,
        ClientError::Service(ServiceError::Configuration(
            ConfigurationError::IncompleteTile { .. }
        ))
    ));
    assert!(client_requests(&client).is_empty());
}

#[tokio::test]
async fn test_transport_failure() {
    let client =
        IsochronClient::with_transport(MockTransport::fail(std::io::ErrorKind::ConnectionRefused));

    let error = client.statistics(&time_options()).await.unwrap_err();

    assert!(matches!(error, ClientError::Transport(_)));
}

fn client_requests(client: &IsochronClient<MockTransport>) -> Vec<TransportRequest> {
    client.transport().requests.lock().unwrap().clone()
}
