use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::session::{LL_BASE, Session};

const STANDINGS_URL: &str = "https://www.learnedleague.com/standings.php?";
const STANDINGS_HREF_PREFIX: &str = "/standings.php?";

/// Class token marking a roster cell; the player name sits one token before it.
const PLAYER_CELL_MARKER: &str = "std-mid";

static ANCHORS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector parses"));
static CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td[class]").expect("cell selector parses"));

/// Collect standings links naming one division, in page order.
/// Repeats are kept; the page is trusted as-is.
pub fn rundle_links(html: &str, division: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();
    for anchor in document.select(&ANCHORS) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if href.starts_with(STANDINGS_HREF_PREFIX) && href.contains(division) {
            links.push(href.to_string());
        }
    }
    links
}

/// Add every player named on a rundle page to `roster`, skipping names that
/// are already there. The name rides in the cell's class list, one token
/// before the marker.
pub fn add_roster_names(html: &str, roster: &mut Vec<String>) {
    let document = Html::parse_document(html);
    for cell in document.select(&CELLS) {
        let Some(class) = cell.value().attr("class") else {
            continue;
        };
        let tokens: Vec<&str> = class.split_whitespace().collect();
        let [.., name, marker] = tokens.as_slice() else {
            continue;
        };
        if *marker != PLAYER_CELL_MARKER {
            continue;
        }
        if !roster.iter().any(|have| have == name) {
            roster.push((*name).to_string());
        }
    }
}

/// Fetch a division's A-rundle standings page, follow every rundle link on
/// it, and accumulate the division-wide deduplicated roster.
pub fn division_roster(session: &Session, season: u32, division: &str) -> Result<Vec<String>> {
    let url = format!("{STANDINGS_URL}{season}&A_{division}");
    let body = session
        .get(&url)
        .with_context(|| format!("standings page request failed for {division}"))?;
    let links = rundle_links(&body, division);
    let mut roster = Vec::new();
    for link in &links {
        let page = session
            .get(&format!("{LL_BASE}{link}"))
            .with_context(|| format!("rundle page request failed: {link}"))?;
        add_roster_names(&page, &mut roster);
    }
    debug!(
        season,
        division,
        rundles = links.len(),
        players = roster.len(),
        "division roster collected"
    );
    Ok(roster)
}
