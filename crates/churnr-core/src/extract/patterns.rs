//! Regex patterns for the offer listing formats.
//!
//! The source pages render each listing as one flattened text run, so the
//! patterns anchor on the surrounding phrasing rather than markup. Numeric
//! captures allow thousands commas; group 1 is always the value.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Listings are numbered ("12. Card Name ..."); the name runs up to the
    // points blurb. Group 2 is the name, group 1 swallows the numbering.
    pub static ref CARD_NAME_CASH: Regex = Regex::new(
        r"(\d+\.)\s(.*?)\w+\s*points"
    ).unwrap();

    // Points pages put the program name and balance right after the card
    // name: "...CardQantas points120,000".
    pub static ref CARD_NAME_POINTS: Regex = Regex::new(
        r"(\d+\.)\s(.*?)Qantas points\d+"
    ).unwrap();

    pub static ref PROFIT: Regex = Regex::new(
        r"\$(\d+[,]*\d*)\s*profit after meeting spend requirements"
    ).unwrap();

    // "faf." is the site's shorthand for the first annual fee.
    pub static ref FEE: Regex = Regex::new(
        r"\$(\d+[,]*\d*)\s*faf\."
    ).unwrap();

    pub static ref POINTS: Regex = Regex::new(
        r"(\d+[,]*\d*)\s*points"
    ).unwrap();

    pub static ref SPEND: Regex = Regex::new(
        r"Spend\s*\$(\d+[,]*\d*)"
    ).unwrap();

    pub static ref DAYS: Regex = Regex::new(
        r"in\s*(\d+[,]*\d*)\s*days"
    ).unwrap();
}
