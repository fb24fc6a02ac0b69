use crate::{
    endpoint::Endpoint, error::ServiceError, options::travel_options::TravelOptions,
    wire::serializer::to_json_string,
};

/// Name of the JSONP callback sent with GET requests and stripped from responses.
pub const DEFAULT_CALLBACK: &str = "callback";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    #[default]
    Post,
}

/// Everything a transport needs to perform one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: RequestMethod,
    pub url: String,
    /// Unencoded query pairs, the transport takes care of encoding
    pub query: Vec<(&'static str, String)>,
    /// JSON body for POST requests
    pub body: Option<String>,
    /// Callback wrapping the response body, if one was requested
    pub callback: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

fn target_url(service_url: Option<&str>, endpoint: Endpoint) -> String {
    let base = service_url.unwrap_or_default().trim_end_matches('/');
    format!("{}/{}", base, endpoint.path())
}

/// Builds the HTTP exchange for `endpoint`.
///
/// GET requests carry the serialized options in `cfg` along with the callback
/// name and key. POST requests only carry the key in the query string and send
/// the options as body.
pub fn build_request(
    endpoint: Endpoint,
    options: &TravelOptions,
    method: RequestMethod,
) -> Result<TransportRequest, ServiceError> {
    let config = to_json_string(options)?;
    let url = target_url(options.service_url.as_deref(), endpoint);
    let key = options.service_key.clone().unwrap_or_default();

    let request = match method {
        RequestMethod::Get => TransportRequest {
            method,
            url,
            query: vec![
                ("cfg", config),
                ("cb", DEFAULT_CALLBACK.to_string()),
                ("key", key),
            ],
            body: None,
            callback: Some(DEFAULT_CALLBACK.to_string()),
        },
        RequestMethod::Post => TransportRequest {
            method,
            url,
            query: vec![("key", key)],
            body: Some(config),
            callback: None,
        },
    };

    Ok(request)
}
