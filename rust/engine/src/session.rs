use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::player::Mark;
use crate::round::{Round, RoundResult};

/// Cumulative outcome counts for one session. Owned and threaded
/// explicitly by the session; there is no ambient global.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SessionStats {
    wins_x: u32,
    wins_o: u32,
    ties: u32,
}

impl SessionStats {
    /// Tally one finished round. Exactly one category moves, by one.
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win(Mark::X) => self.wins_x += 1,
            RoundResult::Win(Mark::O) => self.wins_o += 1,
            RoundResult::Tie => self.ties += 1,
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn rounds_played(&self) -> u32 {
        self.wins_x + self.wins_o + self.ties
    }
}

/// Session bookkeeping: the running stats and the starting-player
/// rotation. The first opening mark is drawn uniformly from a seeded RNG;
/// every later round opens with the other mark than the previous one,
/// regardless of who won.
///
/// # Examples
///
/// ```
/// use noughts_engine::round::RoundResult;
/// use noughts_engine::session::Session;
///
/// let mut session = Session::with_seed(7);
/// let opener = session.opening_mark();
///
/// let round = session.begin_round();
/// assert_eq!(round.current_mark(), opener);
///
/// session.finish_round(RoundResult::Tie);
/// assert_eq!(session.opening_mark(), opener.other());
/// assert_eq!(session.stats().rounds_played(), 1);
/// ```
#[derive(Debug)]
pub struct Session {
    stats: SessionStats,
    next_opening: Mark,
}

impl Session {
    /// New session; the seed pins the starting-player draw so tests are
    /// reproducible.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let next_opening = if rng.random_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        };
        Self {
            stats: SessionStats::default(),
            next_opening,
        }
    }

    /// The mark that opens the next round.
    pub fn opening_mark(&self) -> Mark {
        self.next_opening
    }

    /// Fresh round with an empty board, opened by the rotation's mark.
    pub fn begin_round(&self) -> Round {
        Round::new(self.next_opening)
    }

    /// Tally the result and flip the rotation. Doing both in one step
    /// keeps the flip tied to the round count.
    pub fn finish_round(&mut self, result: RoundResult) {
        self.stats.record(result);
        self.next_opening = self.next_opening.other();
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_start_at_zero() {
        let stats = SessionStats::default();
        assert_eq!(stats.wins(Mark::X), 0);
        assert_eq!(stats.wins(Mark::O), 0);
        assert_eq!(stats.ties(), 0);
        assert_eq!(stats.rounds_played(), 0);
    }

    #[test]
    fn each_result_moves_exactly_one_category() {
        let mut stats = SessionStats::default();
        stats.record(RoundResult::Win(Mark::X));
        stats.record(RoundResult::Win(Mark::O));
        stats.record(RoundResult::Tie);
        stats.record(RoundResult::Tie);
        assert_eq!(stats.wins(Mark::X), 1);
        assert_eq!(stats.wins(Mark::O), 1);
        assert_eq!(stats.ties(), 2);
        assert_eq!(stats.rounds_played(), 4);
    }

    #[test]
    fn same_seed_draws_same_opening_mark() {
        assert_eq!(
            Session::with_seed(1234).opening_mark(),
            Session::with_seed(1234).opening_mark()
        );
    }

    #[test]
    fn rotation_flips_every_round_independent_of_winner() {
        let mut session = Session::with_seed(9);
        let first = session.opening_mark();

        // winner and rotation are unrelated: let the same mark win twice
        session.finish_round(RoundResult::Win(first));
        assert_eq!(session.opening_mark(), first.other());
        session.finish_round(RoundResult::Win(first));
        assert_eq!(session.opening_mark(), first);
        session.finish_round(RoundResult::Tie);
        assert_eq!(session.opening_mark(), first.other());
    }

    #[test]
    fn begin_round_hands_the_opening_to_the_rotation() {
        let mut session = Session::with_seed(5);
        let first = session.opening_mark();
        assert_eq!(session.begin_round().current_mark(), first);
        session.finish_round(RoundResult::Tie);
        assert_eq!(session.begin_round().current_mark(), first.other());
    }
}
