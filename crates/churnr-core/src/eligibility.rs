//! Eligibility filtering against the historical-claims ledger, plus ROI
//! ranking of the survivors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::claim::HistoricalClaim;
use crate::models::offer::ScoredOffer;

/// Claims closed within this many days still block a card.
pub const ELIGIBILITY_WINDOW_DAYS: i64 = 365;

/// Ledger close-date format: day/month/two-digit-year.
const CLOSE_DATE_FORMAT: &str = "%d/%m/%y";

/// Whether a claim's close date falls within the recency window of `today`.
///
/// A close date that fails to parse counts as recent, so messy ledger rows
/// block a card rather than admit it.
pub fn claim_within_window(claim: &HistoricalClaim, today: NaiveDate) -> bool {
    match NaiveDate::parse_from_str(claim.close_date.trim(), CLOSE_DATE_FORMAT) {
        Ok(close) => (today - close).num_days() < ELIGIBILITY_WINDOW_DAYS,
        Err(_) => true,
    }
}

/// Whether a single claim blocks the given (lower-cased) card name.
///
/// Bank and type must both appear in the card name, and the claim must be
/// within the window.
fn claim_blocks(card_name: &str, claim: &HistoricalClaim, today: NaiveDate) -> bool {
    card_name.contains(&claim.bank.to_lowercase())
        && card_name.contains(&claim.claim_type.to_lowercase())
        && claim_within_window(claim, today)
}

/// Drop offers whose card was claimed within the window, then rank the
/// remainder by monthly ROI descending. Offers without an ROI sort last.
///
/// The ledger and the reference date are explicit parameters; the filter
/// holds no state of its own.
pub fn filter_eligible(
    offers: Vec<ScoredOffer>,
    claims: &[HistoricalClaim],
    today: NaiveDate,
) -> Vec<ScoredOffer> {
    let total = offers.len();
    let mut eligible: Vec<ScoredOffer> = offers
        .into_iter()
        .filter(|offer| {
            let card_name = offer
                .card_name
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            // `any` stops at the first blocking claim.
            !claims
                .iter()
                .any(|claim| claim_blocks(&card_name, claim, today))
        })
        .collect();
    debug!("{} of {} offers eligible", eligible.len(), total);

    eligible.sort_by(|a, b| roi_key(b).cmp(&roi_key(a)));
    eligible
}

fn roi_key(offer: &ScoredOffer) -> Decimal {
    offer.monthly_roi.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn close_date(days_ago: i64) -> String {
        (today() - Duration::days(days_ago))
            .format(CLOSE_DATE_FORMAT)
            .to_string()
    }

    fn offer(card_name: &str, roi: Option<&str>) -> ScoredOffer {
        ScoredOffer {
            card_name: Some(card_name.to_string()),
            monthly_roi: roi.map(|r| Decimal::from_str(r).unwrap()),
            ..ScoredOffer::default()
        }
    }

    #[test]
    fn test_claim_inside_window() {
        let claim = HistoricalClaim::new("ANZ", "Rewards", close_date(364));
        assert!(claim_within_window(&claim, today()));
    }

    #[test]
    fn test_claim_outside_window() {
        let claim = HistoricalClaim::new("ANZ", "Rewards", close_date(366));
        assert!(!claim_within_window(&claim, today()));
    }

    #[test]
    fn test_malformed_close_date_counts_as_recent() {
        let claim = HistoricalClaim::new("ANZ", "Rewards", "soonish");
        assert!(claim_within_window(&claim, today()));
    }

    #[test]
    fn test_recent_claim_blocks_matching_card() {
        let claims = vec![HistoricalClaim::new("ANZ", "Rewards", close_date(100))];
        let offers = vec![offer("ANZ Rewards Black", Some("20"))];

        let eligible = filter_eligible(offers, &claims, today());
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_stale_claim_does_not_block() {
        let claims = vec![HistoricalClaim::new("ANZ", "Rewards", close_date(400))];
        let offers = vec![offer("ANZ Rewards Black", Some("20"))];

        let eligible = filter_eligible(offers, &claims, today());
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn test_blocking_needs_both_bank_and_type() {
        let claims = vec![HistoricalClaim::new("ANZ", "Platinum", close_date(100))];
        // Bank matches, type does not.
        let offers = vec![offer("ANZ Rewards Black", Some("20"))];

        let eligible = filter_eligible(offers, &claims, today());
        assert_eq!(eligible.len(), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let claims = vec![HistoricalClaim::new("anz", "REWARDS", close_date(100))];
        let offers = vec![offer("ANZ Rewards Black", Some("20"))];

        let eligible = filter_eligible(offers, &claims, today());
        assert!(eligible.is_empty());
    }

    #[test]
    fn test_ranking_by_roi_descending() {
        let offers = vec![
            offer("Low", Some("10")),
            offer("High", Some("30")),
            offer("Mid", Some("20")),
        ];

        let ranked = filter_eligible(offers, &[], today());
        let names: Vec<&str> = ranked.iter().filter_map(|o| o.card_name.as_deref()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn test_missing_roi_ranks_last() {
        let offers = vec![offer("No Roi", None), offer("Scored", Some("5"))];

        let ranked = filter_eligible(offers, &[], today());
        assert_eq!(ranked[0].card_name.as_deref(), Some("Scored"));
        assert_eq!(ranked[1].card_name.as_deref(), Some("No Roi"));
    }
}
