//! Report command - fetch both offer pages, score and rank against the
//! claims ledger, and write the combined HTML report.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use churnr_core::{DisplayOffer, HistoricalClaim, OfferPipeline, OfferType, DEFAULT_TOP_N};

use crate::fetch::{fetch_page, segment_listings, LISTING_SELECTOR};
use crate::ledger::load_ledger;
use crate::render::render_report;

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Cash offers page URL
    #[arg(long, default_value = "https://www.rwrds.com.au/")]
    cash_url: String,

    /// Points offers page URL
    #[arg(long, default_value = "https://www.rwrds.com.au/qantas")]
    points_url: String,

    /// Claims ledger CSV (columns: Bank, Type, Close Date)
    #[arg(short, long, default_value = "churn_history.csv")]
    ledger: PathBuf,

    /// CSS selector for one listing block
    #[arg(long, default_value = LISTING_SELECTOR)]
    selector: String,

    /// Offers per table
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Output HTML file
    #[arg(short, long, default_value = "current_offers.html")]
    output: PathBuf,
}

pub async fn run(args: ReportArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let claims = load_ledger(&args.ledger)
        .with_context(|| format!("failed to load ledger {}", args.ledger.display()))?;
    info!("loaded {} historical claims", claims.len());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );

    spinner.set_message("Fetching cash offers...");
    let cash_html = fetch_page(&args.cash_url).await?;
    spinner.set_message("Fetching points offers...");
    let points_html = fetch_page(&args.points_url).await?;
    spinner.finish_and_clear();

    let today = Local::now().date_naive();

    let cash_rows = run_pipeline(OfferType::Cash, &cash_html, &args, &claims, today)?;
    let points_rows = run_pipeline(OfferType::Points, &points_html, &args, &claims, today)?;

    let html = render_report(&[
        ("Cash Offers", cash_rows.as_slice()),
        ("Qantas Offers", points_rows.as_slice()),
    ]);
    fs::write(&args.output, html)
        .with_context(|| format!("failed to write report {}", args.output.display()))?;

    println!(
        "{} Report written to {} ({} cash, {} points offers)",
        style("✓").green(),
        args.output.display(),
        cash_rows.len(),
        points_rows.len()
    );

    debug!("total time: {:?}", start.elapsed());
    Ok(())
}

fn run_pipeline(
    offer_type: OfferType,
    html: &str,
    args: &ReportArgs,
    claims: &[HistoricalClaim],
    today: NaiveDate,
) -> anyhow::Result<Vec<DisplayOffer>> {
    let blocks = segment_listings(html, &args.selector)?;
    if blocks.is_empty() {
        warn!("no listing blocks matched for {:?} offers; page layout may have changed", offer_type);
    }

    let pipeline = OfferPipeline::new(offer_type).with_top_n(args.top);
    Ok(pipeline.run(&blocks, claims, today))
}
