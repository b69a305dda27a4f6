//! Historical-claims ledger rows.

use serde::{Deserialize, Serialize};

/// One row of the historical-claims ledger: a bank/card-type combination
/// that was previously claimed and closed.
///
/// Serde renames match the ledger CSV headers, so rows deserialize
/// directly. The close date is day/month/two-digit-year text and is parsed
/// lazily by the eligibility filter, which treats unparseable dates as
/// recent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalClaim {
    /// Issuing bank, matched case-insensitively against card names.
    #[serde(rename = "Bank")]
    pub bank: String,

    /// Card type or product line, matched the same way.
    #[serde(rename = "Type")]
    pub claim_type: String,

    /// Close date, e.g. "14/3/24".
    #[serde(rename = "Close Date")]
    pub close_date: String,
}

impl HistoricalClaim {
    pub fn new(
        bank: impl Into<String>,
        claim_type: impl Into<String>,
        close_date: impl Into<String>,
    ) -> Self {
        Self {
            bank: bank.into(),
            claim_type: claim_type.into(),
            close_date: close_date.into(),
        }
    }
}
