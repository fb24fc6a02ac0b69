use std::time::Duration;

use isochron_core::transport::{RequestMethod, TransportRequest, TransportResponse};
use tracing::debug;

use crate::transport::Transport;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_USER_AGENT: &str = concat!("isochron/", env!("CARGO_PKG_VERSION"));

pub struct HttpTransportParams {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpTransportParams {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(params: HttpTransportParams) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .user_agent(params.user_agent)
            .build()?;

        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    type Error = reqwest::Error;

    async fn execute(&self, request: &TransportRequest) -> Result<TransportResponse, Self::Error> {
        let builder = match request.method {
            RequestMethod::Get => self.client.get(&request.url),
            RequestMethod::Post => self.client.post(&request.url),
        }
        .query(&request.query);

        let builder = match &request.body {
            Some(body) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone()),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(
            url = %request.url,
            status,
            bytes = body.len(),
            "HTTP exchange completed"
        );

        Ok(TransportResponse { status, body })
    }
}
