//! Data models for offers and the claims ledger.

pub mod claim;
pub mod offer;
