//! Parameter assembly for the two call shapes.

use uuid::Uuid;

use crate::config::ChainConfig;
use crate::protocol::params::{CallOption, CallParams};
use crate::protocol::route::Route;

/// Shape of an authenticated call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// `chainCall`: identity, method and token only.
    Generic,
    /// `chainCallForBiz`: also bound to account, tenant and managed key,
    /// with a fresh order id.
    ForBiz,
}

impl CallKind {
    pub const fn route(&self) -> Route {
        match self {
            CallKind::Generic => Route::ChainCall,
            CallKind::ForBiz => Route::ChainCallForBiz,
        }
    }
}

/// A new random (v4) order id, 36 characters.
pub fn new_order_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build the parameters of one call.
///
/// Caller options are applied first, in order; protocol fields are
/// written last and therefore win over options using the same keys.
pub fn assemble_params(
    kind: CallKind,
    config: &ChainConfig,
    method: &str,
    token: &str,
    options: Vec<CallOption>,
) -> CallParams {
    let mut params = CallParams::new();
    params.apply(options);

    match kind {
        CallKind::Generic => {
            params.set("bizid", &config.biz_id);
            params.set("accessId", &config.access_id);
            params.set("method", method);
            params.set("token", token);
        }
        CallKind::ForBiz => {
            params.set("orderId", new_order_id());
            params.set("bizid", &config.biz_id);
            params.set("account", &config.account);
            params.set("mykmsKeyId", &config.my_kms_key_id);
            params.set("method", method);
            params.set("accessId", &config.access_id);
            params.set("tenantid", &config.tenant_id);
            params.set("token", token);
        }
    }

    params
}
