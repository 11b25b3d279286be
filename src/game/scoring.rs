//! Round scoring
//!
//! Points reward solving early: a solve at guess `g` under quota `Q` is worth
//! `(Q - g + 1)^2` times a base value. Anything past the quota, and any
//! abandoned round, is worth nothing.

use super::engine::RoundOutcome;
use super::round::RoundShape;

/// Base points for solving a single-answer round
pub const SINGLE_BASE: u32 = 100;
/// Base points for each answer of a dual round
pub const DUAL_PARTIAL_BASE: u32 = 50;
/// Base points for solving both answers of a dual round
pub const DUAL_BONUS_BASE: u32 = 100;

/// `(quota - guess + 1)^2 * base`, or 0 outside `1..=quota`
#[must_use]
pub fn weighted_points(quota: usize, guess: usize, base: u32) -> u32 {
    if guess == 0 || guess > quota {
        return 0;
    }
    let remaining = (quota - guess + 1) as u32;
    remaining * remaining * base
}

/// Points for a single-answer round solved at guess `guess`
#[must_use]
pub fn single_points(quota: usize, guess: usize) -> u32 {
    weighted_points(quota, guess, SINGLE_BASE)
}

/// Points for a dual round with each answer's solving guess, if any
///
/// Each answer solved within quota earns its own partial score; solving both
/// within quota adds a bonus keyed to whichever was solved last.
#[must_use]
pub fn dual_points(quota: usize, first: Option<usize>, second: Option<usize>) -> u32 {
    let partial = |solved: Option<usize>| {
        solved.map_or(0, |guess| weighted_points(quota, guess, DUAL_PARTIAL_BASE))
    };

    let bonus = match (first, second) {
        (Some(a), Some(b)) => weighted_points(quota, a.max(b), DUAL_BONUS_BASE),
        _ => 0,
    };

    partial(first) + partial(second) + bonus
}

/// Points earned by a finished round
#[must_use]
pub fn score_round(shape: RoundShape, quota: usize, outcome: &RoundOutcome) -> u32 {
    match outcome {
        RoundOutcome::Abandoned => 0,
        RoundOutcome::Solved { solved_at } => match shape {
            RoundShape::Fixed { .. } | RoundShape::Variable => solved_at
                .first()
                .map_or(0, |&guess| single_points(quota, guess)),
            RoundShape::Dual { .. } => dual_points(
                quota,
                solved_at.first().copied(),
                solved_at.get(1).copied(),
            ),
        },
    }
}

/// Running total across the rounds of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTally {
    rounds: Vec<u32>,
}

impl ScoreTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a round's points and return the new total
    pub fn record(&mut self, points: u32) -> u32 {
        self.rounds.push(points);
        self.total()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.rounds.iter().sum()
    }

    /// Points per round, in play order
    #[must_use]
    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: RoundShape = RoundShape::Fixed { length: 5 };
    const DUAL: RoundShape = RoundShape::Dual { length: 5 };

    #[test]
    fn single_round_points_by_guess() {
        assert_eq!(single_points(6, 1), 3600);
        assert_eq!(single_points(6, 3), 1600);
        assert_eq!(single_points(6, 6), 100);
        assert_eq!(single_points(6, 7), 0);
        assert_eq!(single_points(6, 0), 0);
    }

    #[test]
    fn dual_round_partials_and_bonus() {
        // 1250 + 200 + 400
        assert_eq!(dual_points(6, Some(2), Some(5)), 1850);
        assert_eq!(dual_points(6, Some(5), Some(2)), 1850);
    }

    #[test]
    fn dual_round_one_answer_past_quota_keeps_other_partial() {
        assert_eq!(dual_points(6, Some(2), Some(8)), 1250);
        assert_eq!(dual_points(6, Some(2), None), 1250);
        assert_eq!(dual_points(6, None, None), 0);
    }

    #[test]
    fn score_round_by_shape() {
        let solved = RoundOutcome::Solved { solved_at: vec![3] };
        assert_eq!(score_round(FIXED, 6, &solved), 1600);
        assert_eq!(score_round(RoundShape::Variable, 6, &solved), 1600);

        let both = RoundOutcome::Solved { solved_at: vec![2, 5] };
        assert_eq!(score_round(DUAL, 6, &both), 1850);
    }

    #[test]
    fn abandoned_round_scores_zero_for_every_shape() {
        for shape in [FIXED, RoundShape::Variable, DUAL] {
            assert_eq!(score_round(shape, 6, &RoundOutcome::Abandoned), 0);
        }
    }

    #[test]
    fn solving_past_quota_scores_zero() {
        let late = RoundOutcome::Solved { solved_at: vec![9] };
        assert_eq!(score_round(FIXED, 6, &late), 0);
    }

    #[test]
    fn tally_accumulates_monotonically() {
        let mut tally = ScoreTally::new();
        assert_eq!(tally.record(1600), 1600);
        assert_eq!(tally.record(0), 1600);
        assert_eq!(tally.record(1850), 3450);
        assert_eq!(tally.rounds(), &[1600, 0, 1850]);
        assert_eq!(tally.total(), 3450);
    }
}
