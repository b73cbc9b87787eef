use anyhow::{Context, Result, bail};

/// Question-count value standing in for a forfeited side.
pub const FORFEIT: i32 = -1;

/// One match off a player's results page: adjusted points and raw question
/// counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub my_score: i32,
    pub my_qs: i32,
    pub opp_score: i32,
    pub opp_qs: i32,
}

impl MatchRecord {
    /// True when either side's question count carries the forfeit sentinel.
    pub fn has_forfeit(&self) -> bool {
        self.my_qs < 0 || self.opp_qs < 0
    }
}

/// Parse one raw score token, `9(5)-4(4)` for instance, into a [`MatchRecord`].
///
/// A forfeited side shows `F` in its question slot and maps to [`FORFEIT`].
/// Rewrite order matters: `-` separators must become spaces before `F`
/// becomes `-1`, or the sentinel's sign would get split off.
pub fn parse_score_token(raw: &str) -> Result<MatchRecord> {
    let cleaned = raw
        .replace(')', "")
        .replace('(', " ")
        .replace('-', " ")
        .replace('F', "-1");
    let fields: Vec<&str> = cleaned.split(' ').collect();
    if fields.len() != 4 {
        bail!(
            "score token {raw:?} has {} fields, expected 4",
            fields.len()
        );
    }
    let mut nums = [0i32; 4];
    for (slot, field) in nums.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .with_context(|| format!("bad number {field:?} in score token {raw:?}"))?;
    }
    Ok(MatchRecord {
        my_score: nums[0],
        my_qs: nums[1],
        opp_score: nums[2],
        opp_qs: nums[3],
    })
}
