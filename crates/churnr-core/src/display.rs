//! Display formatting for ranked offers.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::offer::{DisplayOffer, ScoredOffer};

lazy_static! {
    // Parenthetical suffixes on card names, e.g. "(Limited Time)".
    static ref PAREN_SUFFIX: Regex = Regex::new(r"\(.*\)").unwrap();
}

/// Strip parenthesized runs from a card name and trim the remainder.
/// A no-op on names without parentheses.
pub fn clean_card_name(name: &str) -> String {
    PAREN_SUFFIX.replace_all(name, "").trim().to_string()
}

/// Format one scored offer into a report row.
///
/// Returns `None` when any display column is missing; the renderer cannot
/// tolerate partial rows. Called once per record by the pipeline.
pub fn format_offer(offer: &ScoredOffer) -> Option<DisplayOffer> {
    Some(DisplayOffer {
        card_name: clean_card_name(offer.card_name.as_deref()?),
        monthly_roi: format!("{}%", offer.monthly_roi?.normalize()),
        time_to_bonus: offer.time_to_bonus.clone()?,
        fee: dollars(offer.fee?),
        monthly_spend: dollars(offer.monthly_spend?),
        net_monthly_profit: dollars(offer.net_monthly_profit?),
        net_total_profit: dollars(offer.net_total_profit?),
    })
}

/// Format a ranked batch, dropping incomplete rows.
pub fn format_offers(offers: &[ScoredOffer]) -> Vec<DisplayOffer> {
    let rows: Vec<DisplayOffer> = offers.iter().filter_map(format_offer).collect();
    if rows.len() < offers.len() {
        debug!("dropped {} incomplete rows", offers.len() - rows.len());
    }
    rows
}

fn dollars(amount: i64) -> String {
    format!("${amount}")
}
