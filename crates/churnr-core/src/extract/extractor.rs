//! Field extraction from raw offer listing text.

use tracing::debug;

use super::rules::{Capture, Field, RuleSet};
use crate::models::offer::ExtractedOffer;

/// Extract one offer record from a single listing block.
///
/// Each rule is scanned once against the block, first match only. A rule
/// that does not match leaves its field unset; that is not an error.
pub fn extract_offer(block: &str, rules: &RuleSet) -> ExtractedOffer {
    let mut offer = ExtractedOffer::default();

    for rule in rules.rules() {
        let Some(caps) = rule.pattern.captures(block) else {
            continue;
        };

        match rule.capture {
            Capture::Text { group } => {
                if let Some(m) = caps.get(group) {
                    let text = m.as_str().trim();
                    if !text.is_empty() {
                        set_text(&mut offer, rule.field, text);
                    }
                }
            }
            Capture::Number => {
                let Some(m) = caps.get(1) else {
                    continue;
                };
                match parse_amount(m.as_str()) {
                    Some(value) => set_number(&mut offer, rule.field, value),
                    // A match that fails integer parsing counts as a miss.
                    None => debug!("unparseable {} value: {:?}", rule.field.name(), m.as_str()),
                }
            }
        }
    }

    offer
}

/// Extract records from a sequence of listing blocks, preserving source
/// order. Blocks are independent; a block that matches nothing still yields
/// an (empty) record.
pub fn extract_offers<S: AsRef<str>>(blocks: &[S], rules: &RuleSet) -> Vec<ExtractedOffer> {
    let offers: Vec<ExtractedOffer> = blocks
        .iter()
        .map(|block| extract_offer(block.as_ref(), rules))
        .collect();
    debug!("extracted {} offer records", offers.len());
    offers
}

/// Parse an integer amount, ignoring thousands commas.
fn parse_amount(s: &str) -> Option<i64> {
    s.replace(',', "").parse().ok()
}

fn set_text(offer: &mut ExtractedOffer, field: Field, value: &str) {
    match field {
        Field::CardName => offer.card_name = Some(value.to_string()),
        // Numeric fields never carry a text capture in practice.
        _ => debug!("ignoring text capture for numeric field {}", field.name()),
    }
}

fn set_number(offer: &mut ExtractedOffer, field: Field, value: i64) {
    match field {
        Field::Spend => offer.spend = Some(value),
        Field::Days => offer.days = Some(value),
        Field::Fee => offer.fee = Some(value),
        Field::Points => offer.points = Some(value),
        Field::Profit => offer.profit = Some(value),
        Field::CardName => debug!("ignoring numeric capture for card name"),
    }
}
