//! Core library for credit-card offer churn analysis.
//!
//! This crate provides:
//! - Pattern-based field extraction from offer listing text
//! - Offer scoring (time-to-bonus, monthly spend normalization, net profit, ROI)
//! - Eligibility filtering against a historical-claims ledger
//! - ROI ranking and display formatting
//!
//! The pipeline is a single-pass batch computation over pre-segmented text
//! blocks; fetching pages, loading the ledger, and rendering reports live
//! with the callers.

pub mod display;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod score;

pub use error::{ChurnError, LedgerError, PatternError, Result};
pub use models::claim::HistoricalClaim;
pub use models::offer::{DisplayOffer, ExtractedOffer, NetRevenue, OfferType, ScoredOffer};
pub use extract::{extract_offer, extract_offers, Capture, Field, FieldRule, RuleSet};
pub use score::{score_offer, score_offers, MONTHLY_SPEND_CAP};
pub use eligibility::{claim_within_window, filter_eligible, ELIGIBILITY_WINDOW_DAYS};
pub use display::{clean_card_name, format_offer, format_offers};
pub use pipeline::{OfferPipeline, DEFAULT_TOP_N};
