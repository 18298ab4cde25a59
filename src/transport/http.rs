//! Default executor backed by a pooled reqwest client.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::TransportConfig;
use crate::error::TransportError;
use crate::transport::context::CallContext;
use crate::transport::executor::{HttpRequest, HttpResponse, RequestExecutor};

/// reqwest-based [`RequestExecutor`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: reqwest::Client,
    request_timeout: Option<Duration>,
}

impl HttpExecutor {
    /// Build a pooled client from transport settings.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        if config.danger_accept_invalid_certs {
            tracing::warn!("TLS certificate verification is DISABLED for ledger requests");
        }

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .tcp_keepalive(Duration::from_secs(config.keep_alive_secs))
            .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            request_timeout: config.request_timeout_secs.map(Duration::from_secs),
        })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            request_timeout: None,
        }
    }

    /// Tightest of the configured timeout and the context's remaining time.
    fn effective_timeout(&self, ctx: &CallContext) -> Option<Duration> {
        match (self.request_timeout, ctx.remaining()) {
            (Some(configured), Some(remaining)) => Some(configured.min(remaining)),
            (configured, remaining) => configured.or(remaining),
        }
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(
        &self,
        ctx: &CallContext,
        request: HttpRequest,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .body(request.body);

        if let Some(timeout) = self.effective_timeout(ctx) {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
