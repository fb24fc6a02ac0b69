use std::future::Future;

use isochron_core::transport::{TransportRequest, TransportResponse};

/// Performs one HTTP exchange.
///
/// A transport reports the status and body of every completed exchange,
/// including non-success statuses. Only failures to complete the exchange
/// (connection errors, timeouts) are errors.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(
        &self,
        request: &TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, Self::Error>> + Send;
}
