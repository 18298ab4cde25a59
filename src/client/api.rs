//! Abstract ledger operations.

use async_trait::async_trait;

use crate::client::chain::ChainClient;
use crate::error::ChainResult;
use crate::transport::CallContext;

/// Ledger operations as a capability, so callers can depend on a trait
/// object and substitute a fake in their own tests.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn create_account(
        &self,
        ctx: &CallContext,
        account: &str,
        kms_id: &str,
        gas: u64,
    ) -> ChainResult<String>;
    async fn deposit(&self, ctx: &CallContext, content: &str, gas: u64) -> ChainResult<String>;
    async fn deploy_solidity(
        &self,
        ctx: &CallContext,
        name: &str,
        code: &str,
        gas: u64,
    ) -> ChainResult<String>;
    async fn async_call_solidity(
        &self,
        ctx: &CallContext,
        contract_name: &str,
        method_sign: &str,
        input_params: &str,
        out_types: &str,
        gas: u64,
    ) -> ChainResult<String>;
    async fn query_transaction(&self, ctx: &CallContext, hash: &str) -> ChainResult<String>;
    async fn query_receipt(&self, ctx: &CallContext, hash: &str) -> ChainResult<String>;
    async fn query_block_header(&self, ctx: &CallContext, block_number: u64) -> ChainResult<String>;
    async fn query_block_body(&self, ctx: &CallContext, block_number: u64) -> ChainResult<String>;
    async fn query_last_block(&self, ctx: &CallContext) -> ChainResult<String>;
    async fn query_account(&self, ctx: &CallContext, account: &str) -> ChainResult<String>;
}

#[async_trait]
impl LedgerApi for ChainClient {
    async fn create_account(
        &self,
        ctx: &CallContext,
        account: &str,
        kms_id: &str,
        gas: u64,
    ) -> ChainResult<String> {
        ChainClient::create_account(self, ctx, account, kms_id, gas).await
    }

    async fn deposit(&self, ctx: &CallContext, content: &str, gas: u64) -> ChainResult<String> {
        ChainClient::deposit(self, ctx, content, gas).await
    }

    async fn deploy_solidity(
        &self,
        ctx: &CallContext,
        name: &str,
        code: &str,
        gas: u64,
    ) -> ChainResult<String> {
        ChainClient::deploy_solidity(self, ctx, name, code, gas).await
    }

    async fn async_call_solidity(
        &self,
        ctx: &CallContext,
        contract_name: &str,
        method_sign: &str,
        input_params: &str,
        out_types: &str,
        gas: u64,
    ) -> ChainResult<String> {
        ChainClient::async_call_solidity(
            self,
            ctx,
            contract_name,
            method_sign,
            input_params,
            out_types,
            gas,
        )
        .await
    }

    async fn query_transaction(&self, ctx: &CallContext, hash: &str) -> ChainResult<String> {
        ChainClient::query_transaction(self, ctx, hash).await
    }

    async fn query_receipt(&self, ctx: &CallContext, hash: &str) -> ChainResult<String> {
        ChainClient::query_receipt(self, ctx, hash).await
    }

    async fn query_block_header(
        &self,
        ctx: &CallContext,
        block_number: u64,
    ) -> ChainResult<String> {
        ChainClient::query_block_header(self, ctx, block_number).await
    }

    async fn query_block_body(&self, ctx: &CallContext, block_number: u64) -> ChainResult<String> {
        ChainClient::query_block_body(self, ctx, block_number).await
    }

    async fn query_last_block(&self, ctx: &CallContext) -> ChainResult<String> {
        ChainClient::query_last_block(self, ctx).await
    }

    async fn query_account(&self, ctx: &CallContext, account: &str) -> ChainResult<String> {
        ChainClient::query_account(self, ctx, account).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChainConfig;
    use crate::crypto::{test_private_key, RsaSigner};
    use crate::transport::mock::MockExecutor;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_client_as_trait_object() {
        let executor = Arc::new(MockExecutor::new());
        executor.push_json(json!({"success": true, "data": "tok"}));
        executor.push_json(json!({"success": true, "data": "1024"}));

        let config = ChainConfig {
            biz_id: "biz".into(),
            endpoint: "http://ledger.test".into(),
            access_id: "access".into(),
            ..Default::default()
        };
        let client = ChainClient::builder(config)
            .signer(Arc::new(RsaSigner::new(test_private_key())))
            .executor(executor.clone())
            .metrics(false)
            .build()
            .unwrap();

        let api: Arc<dyn LedgerApi> = Arc::new(client);
        assert_eq!(api.query_last_block(&CallContext::new()).await.unwrap(), "1024");
        assert_eq!(executor.bodies()[1]["method"], "QUERYLASTBLOCK");
    }
}
