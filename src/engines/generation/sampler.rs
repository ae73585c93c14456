use super::mutator::Mutator;
use crate::engines::population::RobotInfo;
use crate::types::Polarity;

/// Sum of scores over the candidates in one polarity pool
pub fn total_score(candidates: &[RobotInfo], polarity: Polarity) -> f64 {
    candidates
        .iter()
        .filter(|info| polarity.matches(info.weight()))
        .map(RobotInfo::score)
        .sum()
}

/// Roulette-wheel draw restricted to one polarity pool, without replacement.
///
/// Candidates are scanned in their current order; the first pool member whose
/// running score reaches `total * next_double()` is removed and returned. With a
/// zero total that is simply the first pool member. If rounding leaves the
/// running score short of the target, the last pool member is taken.
pub fn sample<M: Mutator + ?Sized>(
    candidates: &mut Vec<RobotInfo>,
    polarity: Polarity,
    mutator: &mut M,
) -> Option<RobotInfo> {
    let total = total_score(candidates, polarity);
    let target = total * mutator.next_double();

    let mut score_so_far = 0.0;
    let mut last_match = None;
    let mut chosen = None;
    for (index, info) in candidates.iter().enumerate() {
        if !polarity.matches(info.weight()) {
            continue;
        }
        score_so_far += info.score();
        last_match = Some(index);
        if score_so_far >= target {
            chosen = Some(index);
            break;
        }
    }

    chosen.or(last_match).map(|index| candidates.remove(index))
}
