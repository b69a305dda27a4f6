//! End-to-end offer pipeline: extract, score, filter, rank, format.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::display::format_offers;
use crate::eligibility::filter_eligible;
use crate::extract::{extract_offers, RuleSet};
use crate::models::claim::HistoricalClaim;
use crate::models::offer::{DisplayOffer, OfferType};
use crate::score::score_offers;

/// Default number of ranked offers handed to the renderer.
pub const DEFAULT_TOP_N: usize = 10;

/// A configured pipeline for one offer type.
///
/// Bundles the rule set and the scoring branch; the claims ledger and the
/// reference date are passed per run, since only they change between runs.
pub struct OfferPipeline {
    offer_type: OfferType,
    rules: RuleSet,
    top_n: usize,
}

impl OfferPipeline {
    /// Pipeline with the built-in rule set for the given offer type.
    pub fn new(offer_type: OfferType) -> Self {
        Self {
            offer_type,
            rules: RuleSet::for_offer_type(offer_type),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Override the extraction rule set.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Limit the number of ranked offers returned.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Run the full pipeline over pre-segmented listing blocks.
    ///
    /// Blocks that fail extraction or scoring degrade by omission; the
    /// output contains at most `top_n` complete display rows, ranked by
    /// monthly ROI descending.
    pub fn run<S: AsRef<str>>(
        &self,
        blocks: &[S],
        claims: &[HistoricalClaim],
        today: NaiveDate,
    ) -> Vec<DisplayOffer> {
        info!(
            "processing {} listing blocks ({:?} offers)",
            blocks.len(),
            self.offer_type
        );

        let extracted = extract_offers(blocks, &self.rules);
        let scored = score_offers(extracted, self.offer_type);
        let mut ranked = filter_eligible(scored, claims, today);
        ranked.truncate(self.top_n);

        let rows = format_offers(&ranked);
        debug!("{} display rows after formatting", rows.len());
        rows
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn cash_blocks() -> Vec<String> {
        vec![
            // 28.5% ROI once scored.
            "1. Amex Explorer 50000 points. $300 profit after meeting spend requirements. \
             Spend $1,000 in 30 days. $149 faf."
                .to_string(),
            // Recently claimed; the ledger should drop it.
            "2. ANZ Rewards Black 75000 points. $500 profit after meeting spend requirements. \
             Spend $1,500 in 45 days. $0 faf."
                .to_string(),
            // Normalizes to $3000/month, over the spend cap.
            "3. Citi Premier 90000 points. $800 profit after meeting spend requirements. \
             Spend $3,000 in 30 days. $300 faf."
                .to_string(),
            // No profit figure: scores partially, dropped at the display boundary.
            "4. HSBC Platinum 60000 points. Spend $2,000 in 60 days. $99 faf.".to_string(),
        ]
    }

    #[test]
    fn test_end_to_end_cash_pipeline() {
        let claims = vec![HistoricalClaim::new("ANZ", "Rewards", "01/01/24")];
        let pipeline = OfferPipeline::new(OfferType::Cash);

        let rows = pipeline.run(&cash_blocks(), &claims, today());

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].card_name, "Amex Explorer");
        assert_eq!(rows[0].monthly_roi, "28.5%");
        assert_eq!(rows[0].monthly_spend, "$1000");
    }

    #[test]
    fn test_top_n_truncates_after_ranking() {
        let blocks: Vec<String> = (1..=4)
            .map(|i| {
                format!(
                    "{i}. Card Number{i} 50000 points. \
                     ${} profit after meeting spend requirements. \
                     Spend $1,000 in 30 days. $99 faf.",
                    100 * i
                )
            })
            .collect();

        let pipeline = OfferPipeline::new(OfferType::Cash).with_top_n(2);
        let rows = pipeline.run(&blocks, &[], today());

        assert_eq!(rows.len(), 2);
        // Highest profit ranks first; truncation happens after the sort.
        assert_eq!(rows[0].card_name, "Card Number4");
        assert_eq!(rows[1].card_name, "Card Number3");
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let pipeline = OfferPipeline::new(OfferType::Points);
        let rows = pipeline.run(&Vec::<String>::new(), &[], today());

        assert!(rows.is_empty());
    }
}
