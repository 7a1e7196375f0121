use crate::board::Mark;

/// The outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The mark the search was run for.
    pub player: Mark,
    /// The game-theoretic value of the searched board: `1` X wins, `0` draw, `-1` O wins.
    pub value: i32,
    /// Every root move whose successor attains `value`, in move-generation order.
    pub optimal_moves: Vec<M>,
    /// The number of successor states generated while searching.
    pub states_searched: u64,
}

impl<M> SearchResult<M> {
    /// Returns `true` if the searched side wins with perfect play.
    pub fn is_win(&self) -> bool {
        match self.player {
            Mark::X => self.value > 0,
            Mark::O => self.value < 0,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.value == 0
    }
}
