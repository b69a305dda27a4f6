//! Historical-claims ledger loading.

use std::io::Read;
use std::path::Path;

use churnr_core::{HistoricalClaim, LedgerError};
use tracing::debug;

/// Columns the ledger CSV must carry.
const REQUIRED_COLUMNS: [&str; 3] = ["Bank", "Type", "Close Date"];

/// Load the claims ledger from a CSV file.
pub fn load_ledger(path: &Path) -> Result<Vec<HistoricalClaim>, LedgerError> {
    let file = std::fs::File::open(path)?;
    let claims = read_ledger(file)?;
    debug!("loaded {} ledger rows from {}", claims.len(), path.display());
    Ok(claims)
}

/// Read ledger rows from any CSV source.
///
/// The header must carry the three required columns; each row deserializes
/// straight into a [`HistoricalClaim`]. Close dates are not validated here,
/// since the eligibility filter treats unparseable dates as recent.
pub fn read_ledger<R: Read>(reader: R) -> Result<Vec<HistoricalClaim>, LedgerError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LedgerError::Row(e.to_string()))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header.trim() == column) {
            return Err(LedgerError::MissingColumn(column.to_string()));
        }
    }

    let mut claims = Vec::new();
    for row in csv_reader.deserialize() {
        let claim: HistoricalClaim = row.map_err(|e| LedgerError::Row(e.to_string()))?;
        claims.push(claim);
    }
    Ok(claims)
}
