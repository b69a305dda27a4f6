//! Offer field extraction module.
//!
//! The extractor is the seam between free text and typed records: callers
//! hand it pre-segmented listing blocks plus a [`RuleSet`], and get back
//! [`crate::models::offer::ExtractedOffer`] records with only the fields
//! whose rules matched.

mod extractor;
pub mod patterns;
mod rules;

pub use extractor::{extract_offer, extract_offers};
pub use rules::{Capture, Field, FieldRule, RuleSet};
