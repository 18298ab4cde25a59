//! Ledger client façade.
//!
//! # Responsibilities
//! - Own the immutable configuration, signer and executor
//! - Expose one operation per remote method
//! - Coerce numeric arguments to the decimal strings the service expects
//! - Return the raw payload string; interpretation is left to callers

use std::sync::Arc;

use crate::client::method::LedgerMethod;
use crate::config::validation::validate_config;
use crate::config::{ChainConfig, ConfigError, SdkConfig, TransportConfig};
use crate::crypto::{MessageSigner, RsaSigner, PRIVATE_KEY_ENV_VAR};
use crate::error::{ChainResult, KeyError};
use crate::protocol::{with_param, CallOption, Dispatcher};
use crate::transport::{CallContext, HttpExecutor, RequestExecutor};

/// Client for the contract REST service.
///
/// Stateless between calls: every operation performs its own handshake,
/// so one instance can be shared freely across tasks.
#[derive(Debug, Clone)]
pub struct ChainClient {
    dispatcher: Dispatcher,
}

impl ChainClient {
    /// Start building a client for `config`.
    pub fn builder(config: ChainConfig) -> ChainClientBuilder {
        ChainClientBuilder::new(config)
    }

    /// Build a client from a loaded configuration file.
    ///
    /// The key comes from `ANTCHAIN_ACCESS_KEY_PEM` when set, otherwise
    /// from the `chain.access_key` path.
    pub fn from_config(config: &SdkConfig) -> ChainResult<Self> {
        Self::builder(config.chain.clone())
            .transport(config.transport.clone())
            .metrics(config.observability.metrics_enabled)
            .build()
    }

    pub fn config(&self) -> &ChainConfig {
        self.dispatcher.config()
    }

    /// Obtain a session token. Operations do this themselves; exposed for diagnostics.
    pub async fn shake_hand(&self, ctx: &CallContext) -> ChainResult<String> {
        self.dispatcher.shake_hand(ctx).await
    }

    /// Generic call for methods without a dedicated operation.
    pub async fn chain_call(
        &self,
        ctx: &CallContext,
        method: &str,
        options: Vec<CallOption>,
    ) -> ChainResult<String> {
        self.dispatcher.chain_call(ctx, method, options).await
    }

    /// Business-scoped call for methods without a dedicated operation.
    pub async fn chain_call_for_biz(
        &self,
        ctx: &CallContext,
        method: &str,
        options: Vec<CallOption>,
    ) -> ChainResult<String> {
        self.dispatcher.chain_call_for_biz(ctx, method, options).await
    }

    async fn invoke(
        &self,
        ctx: &CallContext,
        method: LedgerMethod,
        options: Vec<CallOption>,
    ) -> ChainResult<String> {
        self.dispatcher
            .call(ctx, method.kind(), method.as_str(), options)
            .await
    }

    /// Create a chain account hosted under managed key `kms_id`.
    pub async fn create_account(
        &self,
        ctx: &CallContext,
        account: &str,
        kms_id: &str,
        gas: u64,
    ) -> ChainResult<String> {
        self.invoke(
            ctx,
            LedgerMethod::CreateAccount,
            vec![
                with_param("newAccountId", account),
                with_param("newAccountKmsId", kms_id),
                with_param("gas", gas.to_string()),
            ],
        )
        .await
    }

    /// Notarize `content`. Returns the transaction hash.
    pub async fn deposit(&self, ctx: &CallContext, content: &str, gas: u64) -> ChainResult<String> {
        self.invoke(
            ctx,
            LedgerMethod::Deposit,
            vec![
                with_param("content", content),
                with_param("gas", gas.to_string()),
            ],
        )
        .await
    }

    /// Deploy compiled Solidity bytecode as contract `name`.
    pub async fn deploy_solidity(
        &self,
        ctx: &CallContext,
        name: &str,
        code: &str,
        gas: u64,
    ) -> ChainResult<String> {
        self.invoke(
            ctx,
            LedgerMethod::DeployContract,
            vec![
                with_param("contractName", name),
                with_param("contractCode", code),
                with_param("vmTypeEnum", "EVM"),
                with_param("gas", gas.to_string()),
            ],
        )
        .await
    }

    /// Invoke a Solidity method asynchronously.
    ///
    /// # Arguments
    /// * `method_sign` - Method signature, e.g. `"transfer(identity,uint256)"`
    /// * `input_params` - JSON array of arguments, as a string
    /// * `out_types` - JSON array of output types, as a string
    pub async fn async_call_solidity(
        &self,
        ctx: &CallContext,
        contract_name: &str,
        method_sign: &str,
        input_params: &str,
        out_types: &str,
        gas: u64,
    ) -> ChainResult<String> {
        self.invoke(
            ctx,
            LedgerMethod::CallContractAsync,
            vec![
                with_param("contractName", contract_name),
                with_param("methodSignature", method_sign),
                with_param("inputParamListStr", input_params),
                with_param("outTypes", out_types),
                with_param("vmTypeEnum", "EVM"),
                with_param("gas", gas.to_string()),
            ],
        )
        .await
    }

    pub async fn query_transaction(&self, ctx: &CallContext, hash: &str) -> ChainResult<String> {
        self.invoke(ctx, LedgerMethod::QueryTransaction, vec![with_param("hash", hash)])
            .await
    }

    pub async fn query_receipt(&self, ctx: &CallContext, hash: &str) -> ChainResult<String> {
        self.invoke(ctx, LedgerMethod::QueryReceipt, vec![with_param("hash", hash)])
            .await
    }

    pub async fn query_block_header(&self, ctx: &CallContext, block_number: u64) -> ChainResult<String> {
        self.invoke(
            ctx,
            LedgerMethod::QueryBlock,
            vec![with_param("requestStr", block_number.to_string())],
        )
        .await
    }

    pub async fn query_block_body(&self, ctx: &CallContext, block_number: u64) -> ChainResult<String> {
        self.invoke(
            ctx,
            LedgerMethod::QueryBlockBody,
            vec![with_param("requestStr", block_number.to_string())],
        )
        .await
    }

    /// Latest block height.
    pub async fn query_last_block(&self, ctx: &CallContext) -> ChainResult<String> {
        self.invoke(ctx, LedgerMethod::QueryLastBlock, Vec::new()).await
    }

    pub async fn query_account(&self, ctx: &CallContext, account: &str) -> ChainResult<String> {
        let request = serde_json::json!({ "queryAccount": account }).to_string();
        self.invoke(ctx, LedgerMethod::QueryAccount, vec![with_param("requestStr", request)])
            .await
    }
}

/// Builder for [`ChainClient`].
pub struct ChainClientBuilder {
    config: ChainConfig,
    transport: TransportConfig,
    signer: Option<Arc<dyn MessageSigner>>,
    executor: Option<Arc<dyn RequestExecutor>>,
    metrics_enabled: bool,
}

impl ChainClientBuilder {
    fn new(config: ChainConfig) -> Self {
        Self {
            config,
            transport: TransportConfig::default(),
            signer: None,
            executor: None,
            metrics_enabled: true,
        }
    }

    /// Settings for the default reqwest executor.
    pub fn transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Use this signer instead of loading the configured key.
    pub fn signer(mut self, signer: Arc<dyn MessageSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Use this executor instead of the default reqwest client.
    pub fn executor(mut self, executor: Arc<dyn RequestExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    /// Validate the configuration and assemble the client.
    pub fn build(self) -> ChainResult<ChainClient> {
        let check = SdkConfig {
            chain: self.config.clone(),
            transport: self.transport.clone(),
            ..Default::default()
        };
        validate_config(&check).map_err(ConfigError::Validation)?;

        let signer = match self.signer {
            Some(signer) => signer,
            None => Arc::new(load_signer(&self.config)?),
        };

        let executor = match self.executor {
            Some(executor) => executor,
            None => Arc::new(HttpExecutor::new(&self.transport)?),
        };

        tracing::info!(
            endpoint = %self.config.endpoint,
            biz_id = %self.config.biz_id,
            signer = signer.algorithm(),
            "Ledger client initialized"
        );

        let dispatcher =
            Dispatcher::new(self.config, signer, executor).with_metrics(self.metrics_enabled);
        Ok(ChainClient { dispatcher })
    }
}

/// Inline PEM from the environment wins over the configured key file.
fn load_signer(config: &ChainConfig) -> Result<RsaSigner, KeyError> {
    if std::env::var_os(PRIVATE_KEY_ENV_VAR).is_some() {
        return RsaSigner::from_env();
    }
    if config.access_key.trim().is_empty() {
        return Err(KeyError::NoKeySource(PRIVATE_KEY_ENV_VAR.to_string()));
    }
    RsaSigner::from_pem_file(&config.access_key)
}
