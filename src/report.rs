use anyhow::Result;
use tracing::{debug, warn};

use crate::defense::{DefenseStat, START_SEASON, SwingGame, season_defense};
use crate::results::fetch_player_results;
use crate::session::Session;
use crate::standings::division_roster;

/// Defensive showing for one player in one season.
#[derive(Debug, Clone)]
pub struct SeasonDefense {
    pub season: u32,
    pub stat: DefenseStat,
    pub swings: Vec<SwingGame>,
}

/// Division-wide best-defender rundown for one season.
#[derive(Debug, Clone)]
pub struct BestDefense {
    pub rating: i32,
    pub names: Vec<String>,
    /// Roster in discovery order, for the chatty output mode.
    pub roster: Vec<String>,
    /// Every measured player with their season stat, roster order.
    pub evaluated: Vec<(String, DefenseStat)>,
}

/// Measure one player across the scan window starting at [`START_SEASON`].
/// Seasons the player did not play simply do not appear.
pub fn measure_player(session: &Session, player: &str, span: u32) -> Result<Vec<SeasonDefense>> {
    let results = fetch_player_results(session, player)?;
    let mut seasons = Vec::new();
    for season in START_SEASON..START_SEASON + span {
        let Some(matches) = results.get(&season) else {
            continue;
        };
        let (stat, swings) = season_defense(matches);
        seasons.push(SeasonDefense {
            season,
            stat,
            swings,
        });
    }
    Ok(seasons)
}

/// Measure every rostered player for one season and keep the top net rating
/// with everyone tied at it. A player whose page will not parse is skipped
/// with a warning; a player without that season is skipped silently.
pub fn best_defenders(session: &Session, season: u32, division: &str) -> Result<BestDefense> {
    let roster = division_roster(session, season, division)?;
    let mut evaluated = Vec::new();
    for name in &roster {
        let results = match fetch_player_results(session, name) {
            Ok(results) => results,
            Err(err) => {
                warn!(player = name.as_str(), error = %err, "skipping player, results failed");
                continue;
            }
        };
        let Some(matches) = results.get(&season) else {
            debug!(player = name.as_str(), season, "no results for season");
            continue;
        };
        let (stat, _) = season_defense(matches);
        evaluated.push((name.clone(), stat));
    }
    let (rating, names) = rank_best(&evaluated);
    Ok(BestDefense {
        rating,
        names,
        roster,
        evaluated,
    })
}

/// Single pass over measured players: the running best starts at zero, a
/// rating equal to it appends the name, a higher one resets the list. Zero
/// scorers therefore ride along until somebody beats zero, and a division
/// where defense only ever hurt reports rating 0.
pub fn rank_best(evaluated: &[(String, DefenseStat)]) -> (i32, Vec<String>) {
    let mut best = 0;
    let mut names: Vec<String> = Vec::new();
    for (name, stat) in evaluated {
        if stat.net == best {
            names.push(name.clone());
        }
        if stat.net > best {
            best = stat.net;
            names = vec![name.clone()];
        }
    }
    (best, names)
}
