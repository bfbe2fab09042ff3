//! Text cleanup for scraped market data.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static FILLER_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(loppemarked|marked|flea market|loppis|bazaar|loppemarkeder|market|og)\b")
        .expect("filler word pattern")
});

static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[–—\-]").expect("dash pattern"));

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern"));

static ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&#?\w+;").expect("entity pattern"));

/// Shorten a market name for list display.
///
/// Drops generic Danish/English words such as "loppemarked" or "flea market",
/// turns dashes into spaces and squeezes the result.
///
/// ```
/// use loppestars::text::clean_market_name;
///
/// assert_eq!(
///     clean_market_name("Loppemarked ved Søerne - København"),
///     "ved Søerne København"
/// );
/// ```
pub fn clean_market_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let without_fillers = FILLER_WORDS.replace_all(name, "");
    let without_dashes = DASHES.replace_all(&without_fillers, " ");
    WHITESPACE_RUNS
        .replace_all(&without_dashes, " ")
        .trim()
        .to_string()
}

fn entity_replacement(entity: &str) -> Option<&'static str> {
    let literal = match entity {
        "&#038;" | "&amp;" => "&",
        "&#8211;" | "&ndash;" => "–",
        "&#8212;" | "&mdash;" => "—",
        "&nbsp;" => " ",
        "&quot;" => "\"",
        "&#39;" | "&apos;" => "'",
        "&lt;" => "<",
        "&gt;" => ">",
        _ => return None,
    };
    Some(literal)
}

/// Decode the HTML entities that show up in scraped WordPress titles.
///
/// Entities outside the known set are kept verbatim. Decoding is a single
/// pass, so `&amp;lt;` becomes `&lt;`, not `<`.
pub fn decode_html_entities(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            let entity = &caps[0];
            match entity_replacement(entity) {
                Some(literal) => literal.to_string(),
                None => entity.to_string(),
            }
        })
        .into_owned()
}
