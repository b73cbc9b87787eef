use std::collections::BTreeMap;

use chrono::{Datelike, Utc};

use crate::score::MatchRecord;

/// First season with adjusted-score data, and the year it ran.
pub const START_SEASON: u32 = 52;
pub const START_YEAR: i32 = 2011;

/// Net and total outcome swing the defense produced over one season.
/// Positive net means the defense moved results upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefenseStat {
    pub net: i32,
    pub total: i32,
}

/// Match outcome category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Tie,
    Win,
}

impl Outcome {
    fn from_sign(sign: i32) -> Outcome {
        match sign {
            s if s < 0 => Outcome::Loss,
            0 => Outcome::Tie,
            _ => Outcome::Win,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
            Outcome::Win => "win",
        }
    }
}

/// One match where the adjusted score landed in a different outcome category
/// than the raw question counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingGame {
    pub game: u32,
    pub from: Outcome,
    pub to: Outcome,
}

/// Compare question-count outcomes against adjusted-score outcomes for one
/// season's matches.
///
/// Forfeits carry no defensive information and are skipped outright. A match
/// contributes only when the two outcome categories differ: the net statistic
/// sums the signed category moves, the total sums their sizes.
pub fn season_defense(matches: &BTreeMap<u32, MatchRecord>) -> (DefenseStat, Vec<SwingGame>) {
    let mut stat = DefenseStat::default();
    let mut swings = Vec::new();
    for (&game, rec) in matches {
        if rec.has_forfeit() {
            continue;
        }
        let qval = (rec.my_qs - rec.opp_qs).signum() + 1;
        let sval = (rec.my_score - rec.opp_score).signum() + 1;
        if qval == sval {
            continue;
        }
        stat.net += sval - qval;
        stat.total += (sval - qval).abs();
        swings.push(SwingGame {
            game,
            from: Outcome::from_sign(qval - 1),
            to: Outcome::from_sign(sval - 1),
        });
    }
    (stat, swings)
}

/// Seasons to scan forward from [`START_SEASON`]; the league runs four a year.
pub fn seasons_since_start(year: i32) -> u32 {
    (year - START_YEAR).max(0) as u32 * 4
}

pub fn current_season_span() -> u32 {
    seasons_since_start(Utc::now().year())
}
