//! Offer records for each stage of the pipeline.
//!
//! An offer moves through three shapes: [`ExtractedOffer`] straight out of
//! the field extractor, [`ScoredOffer`] once the financial metrics are
//! derived, and [`DisplayOffer`] when every column needed by the report is
//! present and formatted. Fields are optional until the display boundary;
//! a pattern that did not match is absence, not an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which kind of promotional offer a batch contains.
///
/// Selects the extraction rule set and the scoring branch. Threaded through
/// pipeline calls for the whole batch rather than stored per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    /// Direct cash-back reward with a stated profit figure.
    Cash,
    /// Loyalty-points reward valued at a cents-per-point rate.
    Points,
}

/// An offer as produced by the field extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedOffer {
    /// Card name, with listing numbering stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,

    /// Total qualifying spend requirement in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spend: Option<i64>,

    /// Length of the bonus window in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,

    /// First annual fee in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,

    /// Bonus points on offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,

    /// Stated profit in dollars (cash offers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<i64>,
}

/// Net revenue of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetRevenue {
    /// Dollar value of the reward net of the spend's own cost.
    Amount(i64),
    /// Cash offers state profit directly, so revenue is not applicable.
    NotApplicable,
}

/// An offer after scoring.
///
/// The raw spend requirement is gone, normalized into `monthly_spend`.
/// Derived fields stay unset when their inputs were missing. Whenever both
/// `net_monthly_profit` and `monthly_spend` are set, `monthly_roi` is too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoredOffer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<i64>,

    /// Effective qualifying period, e.g. "60 days".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_bonus: Option<String>,

    /// Spend requirement normalized to a 30-day cadence, in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_revenue: Option<NetRevenue>,

    /// Stated profit spread over the qualifying period (cash offers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_profit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_total_profit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_monthly_profit: Option<i64>,

    /// Net monthly profit over monthly spend, as a percentage (2 dp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_roi: Option<Decimal>,
}

/// A fully formatted report row.
///
/// Every column is required; construction from a [`ScoredOffer`] fails when
/// any is missing, because the renderer cannot tolerate partial rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOffer {
    pub card_name: String,
    /// Percentage string, e.g. "28.5%".
    pub monthly_roi: String,
    pub time_to_bonus: String,
    /// Currency string, e.g. "$149".
    pub fee: String,
    pub monthly_spend: String,
    pub net_monthly_profit: String,
    pub net_total_profit: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let offer = ExtractedOffer {
            card_name: Some("Amex Explorer".to_string()),
            spend: Some(1000),
            ..ExtractedOffer::default()
        };

        let json = serde_json::to_value(&offer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"card_name": "Amex Explorer", "spend": 1000})
        );
    }

    #[test]
    fn test_net_revenue_variants_serialize_distinctly() {
        let amount = serde_json::to_value(NetRevenue::Amount(735)).unwrap();
        let not_applicable = serde_json::to_value(NetRevenue::NotApplicable).unwrap();

        assert_eq!(amount, serde_json::json!({"amount": 735}));
        assert_eq!(not_applicable, serde_json::json!("not_applicable"));
    }
}
