extern crate minimax_ttt;

use minimax_ttt::board::Board;
use minimax_ttt::boards::tic_tac_toe::TicTacToeBoard;
use minimax_ttt::error::Result;
use minimax_ttt::random::StandardRandomGenerator;
use minimax_ttt::search::MinimaxSearch;

fn main() -> Result<()> {
    // Start from an empty board
    let mut board = TicTacToeBoard::initial_state();

    // Create a new search instance
    let mut minimax = MinimaxSearch::builder()
        .with_random_generator(StandardRandomGenerator)
        .with_alpha_beta_pruning(true)
        .build();

    // Show the value of every opening move
    if let Some(result) = minimax.analyze(&board)? {
        println!(
            "Opening value: {} ({} states searched)",
            result.value, result.states_searched
        );
        println!("Optimal openings: {:?}", result.optimal_moves);
    }

    // Let both sides play perfectly until the game ends
    while let Some(best_move) = minimax.best_move(&board)? {
        let player = board.active_player();
        board = board.apply(best_move)?;
        println!(
            "\n{:?} plays {} ({} states searched)\n{}",
            player,
            best_move,
            minimax.last_states_searched(),
            board
        );
    }

    match board.winner() {
        Some(mark) => println!("\n{:?} wins", mark),
        None => println!("\nDraw"),
    }

    // Perfect play from the empty board is always a draw
    assert_eq!(board.utility(), 0);
    Ok(())
}
