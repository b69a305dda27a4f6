//! Offer scoring: time-to-bonus, spend normalization, net profit, and ROI.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::offer::{ExtractedOffer, NetRevenue, OfferType, ScoredOffer};

/// Hard cap on normalized monthly spend; offers above it are dropped from
/// the batch regardless of ROI. Uniform across offer types.
pub const MONTHLY_SPEND_CAP: i64 = 2000;

/// Qualifying velocity: ordinary spending covers $1000 in this many days.
const DAYS_PER_THOUSAND: f64 = 30.0;

/// Dollar value of one loyalty point.
const POINT_VALUE: f64 = 0.015;

/// Opportunity-cost rate applied to the monthly spend itself.
const SPEND_COST_RATE: f64 = 0.015;

/// Derive the financial metrics for one offer.
///
/// Derivation runs only when both the spend requirement and the bonus
/// window are present (zero counts as missing); otherwise the record passes
/// through untouched. Missing branch inputs skip that branch the same way.
/// Never fails.
pub fn score_offer(offer: ExtractedOffer, offer_type: OfferType) -> ScoredOffer {
    let mut scored = ScoredOffer {
        card_name: offer.card_name,
        fee: offer.fee,
        points: offer.points,
        profit: offer.profit,
        ..ScoredOffer::default()
    };

    let (spend, days) = match (offer.spend, offer.days) {
        (Some(spend), Some(days)) if spend > 0 && days > 0 => (spend as f64, days as f64),
        _ => return scored,
    };

    // The spend target is naturally hit in `days_needed` days; a shorter
    // offer window caps the effective qualifying period.
    let days_needed = spend / 1000.0 * DAYS_PER_THOUSAND;
    let actual_days = days_needed.min(days);

    scored.time_to_bonus = Some(format!("{} days", actual_days.round() as i64));

    // Total requirement re-expressed on a 30-day cadence at the effective pace.
    let monthly_spend = (spend / actual_days * 30.0).round() as i64;
    scored.monthly_spend = Some(monthly_spend);

    match offer_type {
        OfferType::Points => {
            if let (Some(fee), Some(points)) = (scored.fee, scored.points) {
                let net_revenue = (POINT_VALUE * points as f64
                    - SPEND_COST_RATE * monthly_spend as f64)
                    .round() as i64;
                let net_total = net_revenue - fee;
                scored.net_revenue = Some(NetRevenue::Amount(net_revenue));
                scored.net_total_profit = Some(net_total);
                scored.net_monthly_profit =
                    Some((net_total as f64 / actual_days * 30.0).round() as i64);
            }
        }
        OfferType::Cash => {
            if let Some(profit) = scored.profit {
                scored.net_revenue = Some(NetRevenue::NotApplicable);
                let monthly_profit = (profit as f64 / actual_days * 30.0).round() as i64;
                scored.monthly_profit = Some(monthly_profit);
                let net_monthly =
                    (monthly_profit as f64 - SPEND_COST_RATE * monthly_spend as f64).round() as i64;
                scored.net_monthly_profit = Some(net_monthly);
                scored.net_total_profit =
                    Some((net_monthly as f64 * actual_days / 30.0).round() as i64);
            }
        }
    }

    // monthly_spend is at least $1000 whenever scoring ran, so the ratio is
    // always defined.
    if let Some(net_monthly) = scored.net_monthly_profit {
        let roi = net_monthly as f64 / monthly_spend as f64 * 100.0;
        scored.monthly_roi = Decimal::from_f64(roi).map(|d| d.round_dp(2).normalize());
    }

    scored
}

/// Score a batch, then apply the monthly-spend cap.
///
/// Records lacking spend data pass the cap trivially; the eligibility
/// filter still consumes them, they just never rank above scored offers.
pub fn score_offers(offers: Vec<ExtractedOffer>, offer_type: OfferType) -> Vec<ScoredOffer> {
    let total = offers.len();
    let kept: Vec<ScoredOffer> = offers
        .into_iter()
        .map(|offer| score_offer(offer, offer_type))
        .filter(|scored| scored.monthly_spend.unwrap_or(0) <= MONTHLY_SPEND_CAP)
        .collect();
    debug!(
        "scored {} offers, {} within the ${} monthly spend cap",
        total,
        kept.len(),
        MONTHLY_SPEND_CAP
    );
    kept
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use super::*;

    fn offer(spend: i64, days: i64) -> ExtractedOffer {
        ExtractedOffer {
            card_name: Some("Test Card".to_string()),
            spend: Some(spend),
            days: Some(days),
            ..ExtractedOffer::default()
        }
    }

    fn roi(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_time_to_bonus_capped_by_window() {
        // $3000 takes 90 days at velocity, but the window is only 60.
        let scored = score_offer(offer(3000, 60), OfferType::Cash);

        assert_eq!(scored.time_to_bonus.as_deref(), Some("60 days"));
        assert_eq!(scored.monthly_spend, Some(1500));
    }

    #[test]
    fn test_time_to_bonus_capped_by_velocity() {
        // $1000 is met in 30 days even though the window allows 90.
        let scored = score_offer(offer(1000, 90), OfferType::Cash);

        assert_eq!(scored.time_to_bonus.as_deref(), Some("30 days"));
        assert_eq!(scored.monthly_spend, Some(1000));
    }

    #[test]
    fn test_cash_scoring() {
        let mut input = offer(1000, 30);
        input.profit = Some(300);
        let scored = score_offer(input, OfferType::Cash);

        assert_eq!(scored.monthly_spend, Some(1000));
        assert_eq!(scored.monthly_profit, Some(300));
        assert_eq!(scored.net_monthly_profit, Some(285));
        assert_eq!(scored.net_total_profit, Some(285));
        assert_eq!(scored.net_revenue, Some(NetRevenue::NotApplicable));
        assert_eq!(scored.monthly_roi, Some(roi("28.5")));
    }

    #[test]
    fn test_points_scoring() {
        let mut input = offer(2000, 60);
        input.fee = Some(99);
        input.points = Some(50000);
        let scored = score_offer(input, OfferType::Points);

        assert_eq!(scored.monthly_spend, Some(1000));
        assert_eq!(scored.net_revenue, Some(NetRevenue::Amount(735)));
        assert_eq!(scored.net_total_profit, Some(636));
        assert_eq!(scored.net_monthly_profit, Some(318));
        assert_eq!(scored.monthly_roi, Some(roi("31.8")));
    }

    #[test]
    fn test_missing_spend_or_days_skips_derivation() {
        let input = ExtractedOffer {
            card_name: Some("No Spend Card".to_string()),
            profit: Some(500),
            ..ExtractedOffer::default()
        };
        let scored = score_offer(input, OfferType::Cash);

        assert_eq!(scored.time_to_bonus, None);
        assert_eq!(scored.monthly_spend, None);
        assert_eq!(scored.net_monthly_profit, None);
        assert_eq!(scored.monthly_roi, None);
        // The record itself survives.
        assert_eq!(scored.card_name.as_deref(), Some("No Spend Card"));
    }

    #[test]
    fn test_missing_branch_inputs_skip_profit_fields() {
        // Points offer without a fee: spend metrics derive, profit does not.
        let mut input = offer(2000, 60);
        input.points = Some(50000);
        let scored = score_offer(input, OfferType::Points);

        assert_eq!(scored.monthly_spend, Some(1000));
        assert_eq!(scored.net_revenue, None);
        assert_eq!(scored.net_monthly_profit, None);
        assert_eq!(scored.monthly_roi, None);
    }

    #[test]
    fn test_roi_set_whenever_profit_and_spend_exist() {
        let mut input = offer(1000, 30);
        input.profit = Some(300);
        let scored = score_offer(input, OfferType::Cash);

        assert!(scored.net_monthly_profit.is_some());
        assert!(scored.monthly_spend.is_some());
        assert!(scored.monthly_roi.is_some());
    }

    #[test]
    fn test_spend_cap_drops_high_spend_offers() {
        let mut capped = offer(9000, 30);
        capped.profit = Some(5000);
        let mut kept = offer(1000, 30);
        kept.profit = Some(300);

        let scored = score_offers(vec![capped, kept], OfferType::Cash);

        // $9000 in 30 days normalizes to $9000/month, over the cap.
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].monthly_spend, Some(1000));
    }

    #[test]
    fn test_spend_cap_passes_unscored_records() {
        let input = ExtractedOffer {
            card_name: Some("Sparse".to_string()),
            ..ExtractedOffer::default()
        };
        let scored = score_offers(vec![input], OfferType::Cash);

        assert_eq!(scored.len(), 1);
    }
}
