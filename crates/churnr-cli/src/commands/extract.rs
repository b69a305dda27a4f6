//! Extract command - dump extracted (and optionally scored) offers from a
//! single source as JSON. Useful when a page layout shifts and a rule set
//! stops matching.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::info;

use churnr_core::{extract_offers, score_offers, OfferType, RuleSet};

use crate::fetch::{fetch_page, segment_listings, LISTING_SELECTOR};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Offers page URL
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,

    /// Local HTML file instead of a URL
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Offer type selecting the rule set and scoring branch
    #[arg(short = 't', long, value_enum, default_value = "cash")]
    offer_type: OfferTypeArg,

    /// CSS selector for one listing block
    #[arg(long, default_value = LISTING_SELECTOR)]
    selector: String,

    /// Dump raw extracted fields without scoring
    #[arg(long)]
    raw: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OfferTypeArg {
    Cash,
    Points,
}

impl From<OfferTypeArg> for OfferType {
    fn from(arg: OfferTypeArg) -> Self {
        match arg {
            OfferTypeArg::Cash => OfferType::Cash,
            OfferTypeArg::Points => OfferType::Points,
        }
    }
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let html = match (&args.url, &args.input) {
        (Some(url), None) => fetch_page(url).await?,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => anyhow::bail!("provide a source via --url or --input"),
    };

    let blocks = segment_listings(&html, &args.selector)?;
    if blocks.is_empty() {
        anyhow::bail!("no listing blocks matched selector {:?}", args.selector);
    }

    let offer_type = OfferType::from(args.offer_type);
    let extracted = extract_offers(&blocks, &RuleSet::for_offer_type(offer_type));
    info!("extracted {} records from {} blocks", extracted.len(), blocks.len());

    let json = if args.raw {
        serde_json::to_string_pretty(&extracted)?
    } else {
        serde_json::to_string_pretty(&score_offers(extracted, offer_type))?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
