//! Request executor capability.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;

use crate::error::TransportError;
use crate::transport::context::CallContext;

/// A single outbound HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Status and body of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one HTTP round trip.
///
/// Implementations own pooling, TLS and timeouts. They should honor
/// `ctx` where they can; the caller also races the returned future
/// against the context, so a non-cooperative executor is still cut off.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(
        &self,
        ctx: &CallContext,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError>;
}
