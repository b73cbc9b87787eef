use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use scraper::{Html, Node};
use tracing::debug;

use crate::score::{MatchRecord, parse_score_token};
use crate::session::Session;

const PROFILE_URL: &str = "https://www.learnedleague.com/profiles/previous.php?";

/// Anchor prefix shared by both halves of a match entry.
const MATCH_HREF_PREFIX: &str = "/match.php?";

/// Season number -> match number -> parsed record.
pub type ResultsBySeason = BTreeMap<u32, BTreeMap<u32, MatchRecord>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    AwaitingKey,
    AwaitingScore,
}

/// Pull `"season&game" -> "9(5)-4(4)"` pairs out of a results page.
///
/// Each match appears as two anchors: the first links the match page with the
/// composite key as its whole query string, the second carries an `id=` query
/// and the score as its link text. The scan holds the last key seen plus a
/// one-shot "next text node is that key's score" state; anything that does
/// not pair up drops out without complaint.
pub fn extract_raw_scores(html: &str) -> HashMap<String, String> {
    let document = Html::parse_document(html);
    let mut scores = HashMap::new();
    let mut last_key: Option<String> = None;
    let mut scan = Scan::AwaitingKey;

    for node in document.root_element().descendants() {
        match node.value() {
            Node::Element(el) if el.name() == "a" => {
                let Some(query) = el
                    .attr("href")
                    .and_then(|href| href.strip_prefix(MATCH_HREF_PREFIX))
                else {
                    continue;
                };
                if query.starts_with("id=") {
                    scan = Scan::AwaitingScore;
                } else {
                    last_key = Some(query.to_string());
                }
            }
            Node::Text(text) if scan == Scan::AwaitingScore => {
                if let Some(key) = &last_key {
                    scores.insert(key.clone(), text.to_string());
                }
                scan = Scan::AwaitingKey;
            }
            _ => {}
        }
    }
    scores
}

/// Split composite keys into season and game numbers and parse every score
/// token. A key that repeats on the page keeps the value seen last; a key or
/// token that does not parse is a hard error.
pub fn season_results(raw: &HashMap<String, String>) -> Result<ResultsBySeason> {
    let mut results = ResultsBySeason::new();
    for (key, token) in raw {
        let mut parts = key.split('&');
        let season: u32 = parts
            .next()
            .unwrap_or_default()
            .parse()
            .with_context(|| format!("bad season in match key {key:?}"))?;
        let game: u32 = parts
            .next()
            .with_context(|| format!("match key {key:?} is not season&game"))?
            .parse()
            .with_context(|| format!("bad game number in match key {key:?}"))?;
        let record = parse_score_token(token)
            .with_context(|| format!("score for match {key} does not parse"))?;
        results.entry(season).or_default().insert(game, record);
    }
    Ok(results)
}

/// Fetch a player's results page and structure every season found on it.
pub fn fetch_player_results(session: &Session, player: &str) -> Result<ResultsBySeason> {
    let url = format!("{PROFILE_URL}{player}");
    let body = session
        .get(&url)
        .with_context(|| format!("results page request failed for {player}"))?;
    let raw = extract_raw_scores(&body);
    debug!(player, matches = raw.len(), "extracted raw scores");
    season_results(&raw)
}
