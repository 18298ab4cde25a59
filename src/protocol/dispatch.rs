//! Signed request dispatch.
//!
//! # Responsibilities
//! - Run the handshake before every call (tokens are never cached)
//! - Assemble, encode and post call parameters
//! - Decode the response envelope into a payload or an error

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ChainConfig;
use crate::crypto::MessageSigner;
use crate::error::{ChainError, ChainResult};
use crate::observability::metrics as call_metrics;
use crate::protocol::call::{assemble_params, CallKind};
use crate::protocol::envelope::{Envelope, CONTENT_TYPE_JSON};
use crate::protocol::handshake::{current_millis, handshake_params};
use crate::protocol::params::{CallOption, CallParams};
use crate::protocol::route::Route;
use crate::transport::{CallContext, HttpRequest, RequestExecutor};

/// Shared, immutable call machinery. Safe to use from many tasks at once.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<ChainConfig>,
    signer: Arc<dyn MessageSigner>,
    executor: Arc<dyn RequestExecutor>,
    metrics_enabled: bool,
}

impl Dispatcher {
    pub fn new(
        config: ChainConfig,
        signer: Arc<dyn MessageSigner>,
        executor: Arc<dyn RequestExecutor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            signer,
            executor,
            metrics_enabled: true,
        }
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Exchange a fresh signature for a session token.
    pub async fn shake_hand(&self, ctx: &CallContext) -> ChainResult<String> {
        ctx.check()?;
        let params = handshake_params(&self.config.access_id, self.signer.as_ref(), current_millis())?;
        self.post(ctx, Route::ShakeHand, &params).await
    }

    /// Generic call (`chainCall`).
    pub async fn chain_call(
        &self,
        ctx: &CallContext,
        method: &str,
        options: Vec<CallOption>,
    ) -> ChainResult<String> {
        self.call(ctx, CallKind::Generic, method, options).await
    }

    /// Business-scoped call (`chainCallForBiz`).
    pub async fn chain_call_for_biz(
        &self,
        ctx: &CallContext,
        method: &str,
        options: Vec<CallOption>,
    ) -> ChainResult<String> {
        self.call(ctx, CallKind::ForBiz, method, options).await
    }

    /// Handshake, assemble and post; shared by both call shapes.
    pub async fn call(
        &self,
        ctx: &CallContext,
        kind: CallKind,
        method: &str,
        options: Vec<CallOption>,
    ) -> ChainResult<String> {
        let token = self.shake_hand(ctx).await?;
        let params = assemble_params(kind, &self.config, method, &token, options);

        tracing::debug!(
            route = kind.route().as_str(),
            method = method,
            order_id = params.get_str("orderId").unwrap_or("-"),
            "Dispatching chain call"
        );

        self.post(ctx, kind.route(), &params).await
    }

    async fn post(&self, ctx: &CallContext, route: Route, params: &CallParams) -> ChainResult<String> {
        let body = params.encode()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));

        let request = HttpRequest {
            method: Method::POST,
            url: route.url(&self.config.endpoint),
            headers,
            body,
        };

        let started = Instant::now();
        let result = ctx
            .run(self.executor.execute(ctx, request))
            .await
            .and_then(|response| {
                tracing::debug!(
                    route = route.as_str(),
                    status = response.status,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Ledger responded"
                );
                Envelope::decode(response.status, &response.body)?.into_payload()
            });

        if let Err(ChainError::Remote { code, message }) = &result {
            tracing::warn!(
                route = route.as_str(),
                code = %code,
                message = %message,
                "Ledger rejected call"
            );
        }

        if self.metrics_enabled {
            call_metrics::record_request(
                route.as_str(),
                call_metrics::outcome(&result),
                started.elapsed(),
            );
        }

        result
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("endpoint", &self.config.endpoint)
            .field("biz_id", &self.config.biz_id)
            .field("signer", &self.signer.algorithm())
            .finish()
    }
}
