//! Remote ledger method names.

use crate::protocol::CallKind;

/// Ledger operations exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerMethod {
    CreateAccount,
    Deposit,
    DeployContract,
    CallContractAsync,
    QueryTransaction,
    QueryReceipt,
    QueryBlock,
    QueryBlockBody,
    QueryLastBlock,
    QueryAccount,
}

impl LedgerMethod {
    /// Wire name sent as `method`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // sic: the service spells it this way
            LedgerMethod::CreateAccount => "TENANTCREATEACCUNT",
            LedgerMethod::Deposit => "DEPOSIT",
            LedgerMethod::DeployContract => "DEPLOYCONTRACTFORBIZ",
            LedgerMethod::CallContractAsync => "CALLCONTRACTBIZASYNC",
            LedgerMethod::QueryTransaction => "QUERYTRANSACTION",
            LedgerMethod::QueryReceipt => "QUERYRECEIPT",
            LedgerMethod::QueryBlock => "QUERYBLOCK",
            LedgerMethod::QueryBlockBody => "QUERYBLOCKBODY",
            LedgerMethod::QueryLastBlock => "QUERYLASTBLOCK",
            LedgerMethod::QueryAccount => "QUERYACCOUNT",
        }
    }

    /// Writes go through the business-scoped route, reads through the generic one.
    pub const fn kind(&self) -> CallKind {
        match self {
            LedgerMethod::CreateAccount
            | LedgerMethod::Deposit
            | LedgerMethod::DeployContract
            | LedgerMethod::CallContractAsync => CallKind::ForBiz,
            _ => CallKind::Generic,
        }
    }
}

impl std::fmt::Display for LedgerMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(LedgerMethod::Deposit.kind(), CallKind::ForBiz);
        assert_eq!(LedgerMethod::CallContractAsync.kind(), CallKind::ForBiz);
        assert_eq!(LedgerMethod::QueryAccount.kind(), CallKind::Generic);
        assert_eq!(LedgerMethod::QueryLastBlock.kind(), CallKind::Generic);
    }

    #[test]
    fn test_display() {
        assert_eq!(LedgerMethod::QueryBlockBody.to_string(), "QUERYBLOCKBODY");
    }
}
