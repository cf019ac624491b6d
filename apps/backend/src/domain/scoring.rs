/// Points awarded for one successful (non-criminal) elimination.
///
/// `level` is the 1-based count of investigations started in the game;
/// `eliminations_in_round` counts eliminations recorded in the round the
/// action belongs to, including the one being scored. Rewards longevity
/// (level multiplier) and risk (several eliminations before the round's
/// answer is known).
pub fn score_delta(level: i64, eliminations_in_round: i64) -> i64 {
    level * eliminations_in_round
}
