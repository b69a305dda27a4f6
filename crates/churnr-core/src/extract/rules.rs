//! Extraction rule sets keyed by offer field.
//!
//! A rule set is the only per-offer-type configuration the pipeline has:
//! cash listings carry a stated profit, points listings do not, and the two
//! formats phrase the card name differently. The built-in sets cover both;
//! [`RuleSet::from_patterns`] exists so the matching rules can be swapped
//! without touching the scorer or filter.

use regex::Regex;

use super::patterns;
use crate::error::PatternError;
use crate::models::offer::OfferType;

/// Fields an extraction rule can capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CardName,
    Spend,
    Days,
    Fee,
    Points,
    Profit,
}

impl Field {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Field::CardName => "card name",
            Field::Spend => "spend",
            Field::Days => "days",
            Field::Fee => "fee",
            Field::Points => "points",
            Field::Profit => "profit",
        }
    }
}

/// How a rule's match turns into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Parse capture group 1 as an integer, ignoring thousands commas.
    Number,
    /// Take the given capture group as trimmed text.
    Text { group: usize },
}

/// A single named extraction rule.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub pattern: Regex,
    pub capture: Capture,
}

/// An ordered set of extraction rules for one listing format.
///
/// Rules are applied independently, first match only; field names are
/// disjoint in the listing text, so no overlap resolution is needed.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Rule set for cash-back offer listings.
    pub fn cash() -> Self {
        Self {
            rules: vec![
                rule(Field::CardName, &patterns::CARD_NAME_CASH, Capture::Text { group: 2 }),
                rule(Field::Profit, &patterns::PROFIT, Capture::Number),
                rule(Field::Fee, &patterns::FEE, Capture::Number),
                rule(Field::Points, &patterns::POINTS, Capture::Number),
                rule(Field::Spend, &patterns::SPEND, Capture::Number),
                rule(Field::Days, &patterns::DAYS, Capture::Number),
            ],
        }
    }

    /// Rule set for points offer listings. No profit rule: points offers
    /// never state one.
    pub fn points() -> Self {
        Self {
            rules: vec![
                rule(Field::CardName, &patterns::CARD_NAME_POINTS, Capture::Text { group: 2 }),
                rule(Field::Fee, &patterns::FEE, Capture::Number),
                rule(Field::Points, &patterns::POINTS, Capture::Number),
                rule(Field::Spend, &patterns::SPEND, Capture::Number),
                rule(Field::Days, &patterns::DAYS, Capture::Number),
            ],
        }
    }

    /// The built-in rule set for an offer type.
    pub fn for_offer_type(offer_type: OfferType) -> Self {
        match offer_type {
            OfferType::Cash => Self::cash(),
            OfferType::Points => Self::points(),
        }
    }

    /// Build a rule set from raw pattern strings.
    ///
    /// Fails if a pattern does not compile or a text rule names a capture
    /// group its pattern does not have.
    pub fn from_patterns<I, S>(rules: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (Field, S, Capture)>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for (field, pattern, capture) in rules {
            let pattern = Regex::new(pattern.as_ref()).map_err(|source| PatternError::Invalid {
                field: field.name().to_string(),
                source,
            })?;

            if let Capture::Text { group } = capture {
                if group >= pattern.captures_len() {
                    return Err(PatternError::MissingGroup {
                        field: field.name().to_string(),
                        group,
                    });
                }
            }

            compiled.push(FieldRule { field, pattern, capture });
        }
        Ok(Self { rules: compiled })
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}

fn rule(field: Field, pattern: &Regex, capture: Capture) -> FieldRule {
    FieldRule {
        field,
        pattern: pattern.clone(),
        capture,
    }
}
