//! HTML report rendering for ranked offer tables.

use churnr_core::DisplayOffer;

/// Column order for the report tables.
const COLUMNS: [&str; 7] = [
    "Card Name",
    "Monthly ROI",
    "Time To Reach Bonus",
    "Fee",
    "Monthly Spend",
    "Net Monthly Profit",
    "Net Total Profit",
];

/// Monthly spend above which a row is struck through. Cosmetic only; the
/// hard $2000 cap already ran in the pipeline.
const HIGH_SPEND_THRESHOLD: f64 = 1000.0;

/// Render the full report: one titled table per offer-type section.
pub fn render_report(sections: &[(&str, &[DisplayOffer])]) -> String {
    let mut body = String::new();
    for (title, offers) in sections {
        body.push_str(&format!("        <h1>{}</h1>\n", escape(title)));
        body.push_str(&render_table(offers));
    }

    format!(
        r#"<html>
    <head>
        <title>Offers</title>
        <style>
            body {{ font-family: Arial, sans-serif; }}
            table {{ border-collapse: collapse; width: 100%; }}
            th, td {{ border: 1px solid #ddd; padding: 8px; }}
            tr:nth-child(even) {{ background-color: #f2f2f2; }}
            th {{ background-color: #4CAF50; color: white; }}
            h1 {{ margin-top: 40px; }}
        </style>
    </head>
    <body>
{body}    </body>
</html>
"#
    )
}

fn render_table(offers: &[DisplayOffer]) -> String {
    let mut html = String::from("        <table>\n            <tr>");
    html.push_str("<th>#</th>");
    for column in COLUMNS {
        html.push_str(&format!("<th>{column}</th>"));
    }
    html.push_str("</tr>\n");

    for (index, offer) in offers.iter().enumerate() {
        let style = if high_spend(&offer.monthly_spend) {
            " style=\"color: red; text-decoration: line-through\""
        } else {
            ""
        };
        html.push_str(&format!("            <tr{style}><td>{}</td>", index + 1));
        for cell in [
            &offer.card_name,
            &offer.monthly_roi,
            &offer.time_to_bonus,
            &offer.fee,
            &offer.monthly_spend,
            &offer.net_monthly_profit,
            &offer.net_total_profit,
        ] {
            html.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("        </table>\n");
    html
}

fn high_spend(monthly_spend: &str) -> bool {
    monthly_spend
        .trim_start_matches('$')
        .parse::<f64>()
        .map(|spend| spend > HIGH_SPEND_THRESHOLD)
        .unwrap_or(false)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
