//! Fixed service routes.

/// The three endpoints of the contract REST service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Signed challenge exchanged for a session token.
    ShakeHand,
    /// Generic token-authenticated call.
    ChainCall,
    /// Call bound to a business account, tenant and managed key.
    ChainCallForBiz,
}

impl Route {
    pub const fn path(&self) -> &'static str {
        match self {
            Route::ShakeHand => "/api/contract/shakeHand",
            Route::ChainCall => "/api/contract/chainCall",
            Route::ChainCallForBiz => "/api/contract/chainCallForBiz",
        }
    }

    /// Short label for logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Route::ShakeHand => "shake_hand",
            Route::ChainCall => "chain_call",
            Route::ChainCallForBiz => "chain_call_for_biz",
        }
    }

    /// Full URL under `endpoint`; a trailing slash on the endpoint is ignored.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), self.path())
    }
}
