use crate::error::Result;
use std::fmt::Debug;

/// The central trait of the library, defining the interface for a two-player game state.
///
/// The search engine only ever talks to a game through this trait. Implementations are
/// expected to be cheap immutable values: every transition returns a new board rather than
/// mutating the receiver.
pub trait Board: Default + Clone + PartialEq {
    /// The type representing a move in the game.
    type Move: Copy + Eq + Debug;

    /// Returns the mark whose turn it is.
    ///
    /// Must be total: on a terminal board an arbitrary but defined mark is returned.
    fn active_player(&self) -> Mark;

    /// Returns every legal move from the current state, without duplicates.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns the board that results from the active player making `b_move`.
    ///
    /// Fails with [`crate::error::Error::IllegalMove`] when the move targets an occupied cell.
    fn apply(&self, b_move: Self::Move) -> Result<Self>;

    /// Returns the winning mark, if any.
    fn winner(&self) -> Option<Mark>;

    /// Returns `true` once somebody has won or no legal moves remain.
    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.legal_moves().is_empty()
    }

    /// Terminal score from the maximizer's (`X`) perspective.
    ///
    /// Non-terminal boards score `0` by convention.
    fn utility(&self) -> i32 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }
}

/// A player's symbol. `X` always moves first and is the maximizing side.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}
