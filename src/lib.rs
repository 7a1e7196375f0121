//! Exhaustive minimax search with alpha-beta pruning for Tic-Tac-Toe.
//!
//! The library models a 3x3 board as an immutable value and searches every reachable state to
//! find the game-theoretic value of a position together with all moves that achieve it. Ties
//! between equally good moves are broken at random, so perfect play is not predictable.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::board::Board;
//! use minimax_ttt::boards::tic_tac_toe::{Position, TicTacToeBoard};
//! use minimax_ttt::random::SeededRandomGenerator;
//! use minimax_ttt::search::MinimaxSearch;
//!
//! // X to move, with a win available at the end of the top row
//! let board: TicTacToeBoard = "XX. / OO. / ...".parse().unwrap();
//!
//! // Create and configure a new search using the builder
//! let mut minimax = MinimaxSearch::builder()
//!     .with_random_generator(SeededRandomGenerator::default())
//!     .with_alpha_beta_pruning(true)
//!     .build();
//!
//! let best_move = minimax.best_move(&board).unwrap();
//! assert_eq!(best_move, Some(Position::new(0, 2).unwrap()));
//!
//! let next = board.apply(best_move.unwrap()).unwrap();
//! assert_eq!(next.utility(), 1);
//! ```

/// Contains the `Board` trait and the `Mark` enum that define the interface for a game.
pub mod board;
/// Contains implementations of the `Board` trait.
pub mod boards;
/// The error type shared by board construction and move application.
pub mod error;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod search;
/// Contains the `SearchResult` struct returned by a root search.
pub mod search_result;
