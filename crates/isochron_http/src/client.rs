use std::time::Instant;

use isochron_core::{
    endpoint::Endpoint,
    options::travel_options::TravelOptions,
    response::{
        decode::IdMapper,
        parser::{ParseInput, parse_response},
    },
    results::{
        multigraph::MultiGraphPayload,
        payload::{EndpointPayload, Payload},
        polygons::PolygonPayload,
        reachability::ReachabilityMap,
        service_response::ServiceResponse,
        statistics::Statistics,
        time_matrix::TimeMatrix,
    },
    transport::{RequestMethod, build_request},
};
use tracing::{info, instrument};

use crate::{
    error::ClientError,
    reqwest_transport::{HttpTransportParams, ReqwestTransport},
    transport::Transport,
};

/// Client for the routing service. Every call snapshots the options it is
/// given, so callers may keep mutating theirs while requests are in flight.
pub struct IsochronClient<T = ReqwestTransport> {
    transport: T,
    method: RequestMethod,
}

impl IsochronClient<ReqwestTransport> {
    pub fn new(params: HttpTransportParams) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(params).map_err(ClientError::Build)?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> IsochronClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            method: RequestMethod::default(),
        }
    }

    pub fn with_method(mut self, method: RequestMethod) -> Self {
        self.method = method;
        self
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn time(
        &self,
        options: &TravelOptions,
    ) -> Result<ServiceResponse<TimeMatrix>, ClientError> {
        self.fetch(options).await
    }

    pub async fn reachability(
        &self,
        options: &TravelOptions,
    ) -> Result<ServiceResponse<ReachabilityMap>, ClientError> {
        self.fetch(options).await
    }

    /// Like [`IsochronClient::reachability`], renaming or dropping ids with `id_mapper`.
    pub async fn reachability_with_mapper(
        &self,
        options: &TravelOptions,
        id_mapper: IdMapper<'_>,
    ) -> Result<ServiceResponse<ReachabilityMap>, ClientError> {
        let response = self
            .execute(Endpoint::Reachability, options, Some(id_mapper))
            .await?;

        Ok(response.narrow()?)
    }

    pub async fn polygons(
        &self,
        options: &TravelOptions,
    ) -> Result<ServiceResponse<PolygonPayload>, ClientError> {
        self.fetch(options).await
    }

    pub async fn multigraph(
        &self,
        options: &TravelOptions,
    ) -> Result<ServiceResponse<MultiGraphPayload>, ClientError> {
        self.fetch(options).await
    }

    pub async fn statistics(
        &self,
        options: &TravelOptions,
    ) -> Result<ServiceResponse<Statistics>, ClientError> {
        self.fetch(options).await
    }

    pub async fn fetch<P: EndpointPayload>(
        &self,
        options: &TravelOptions,
    ) -> Result<ServiceResponse<P>, ClientError> {
        let response = self.execute(P::ENDPOINT, options, None).await?;
        Ok(response.narrow()?)
    }

    /// Runs one request/response cycle against `endpoint`.
    #[instrument(skip_all, fields(endpoint = %endpoint))]
    pub async fn execute(
        &self,
        endpoint: Endpoint,
        options: &TravelOptions,
        id_mapper: Option<IdMapper<'_>>,
    ) -> Result<ServiceResponse<Payload>, ClientError> {
        let snapshot = options.snapshot();
        let request = build_request(endpoint, &snapshot, self.method)?;

        let started_at = Instant::now();
        let exchange = self
            .transport
            .execute(&request)
            .await
            .map_err(|error| ClientError::Transport(Box::new(error)))?;
        let round_trip_time = started_at.elapsed();

        let mut input = ParseInput::new(endpoint, exchange.status, &exchange.body, snapshot)
            .with_callback(request.callback.as_deref())
            .with_round_trip_time(round_trip_time);

        if let Some(id_mapper) = id_mapper {
            input = input.with_id_mapper(id_mapper);
        }

        let response = parse_response(input)?;

        info!(
            status = exchange.status,
            code = %response.code(),
            round_trip_ms = round_trip_time.as_millis(),
            server_request_time_ms = response.server_request_time_ms(),
            "Request completed"
        );

        Ok(response)
    }
}
