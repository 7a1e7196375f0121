use crate::board::{Board, Mark};
use crate::error::Result;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::search_result::SearchResult;
use log::{debug, trace};

/// The value of a node together with the moves reaching it.
///
/// The move list is `None` for terminal boards and for nodes whose loop was cut short by
/// pruning; only a fully explored node can vouch for its optimal moves.
type NodeValue<M> = (i32, Option<Vec<M>>);

/// Exhaustive minimax search with optional alpha-beta pruning.
///
/// Every search runs to terminal states. Ties between equally good root moves are broken by the
/// configured random generator.
pub struct MinimaxSearch<K: RandomGenerator> {
    random: K,
    use_alpha_beta_pruning: bool,
    last_states_searched: u64,
}

impl<K: RandomGenerator> Default for MinimaxSearch<K> {
    fn default() -> Self {
        MinimaxSearch::new(K::default(), true)
    }
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder<K: RandomGenerator> {
    random_generator: K,
    use_alpha_beta_pruning: bool,
}

impl MinimaxSearchBuilder<StandardRandomGenerator> {
    pub fn new() -> Self {
        Self {
            random_generator: StandardRandomGenerator,
            use_alpha_beta_pruning: true,
        }
    }
}

impl Default for MinimaxSearchBuilder<StandardRandomGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> MinimaxSearchBuilder<K> {
    /// Sets the random number generator used for tie-breaking.
    pub fn with_random_generator<R: RandomGenerator>(self, rg: R) -> MinimaxSearchBuilder<R> {
        MinimaxSearchBuilder {
            random_generator: rg,
            use_alpha_beta_pruning: self.use_alpha_beta_pruning,
        }
    }

    /// Enables or disables alpha-beta pruning. The chosen moves are the same either way.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    pub fn build(self) -> MinimaxSearch<K> {
        MinimaxSearch::new(self.random_generator, self.use_alpha_beta_pruning)
    }
}

impl MinimaxSearch<StandardRandomGenerator> {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder() -> MinimaxSearchBuilder<StandardRandomGenerator> {
        MinimaxSearchBuilder::new()
    }
}

impl<K: RandomGenerator> MinimaxSearch<K> {
    /// Creates a new `MinimaxSearch` instance.
    ///
    /// It is recommended to use the builder pattern via `MinimaxSearch::builder()` instead.
    pub fn new(rg: K, use_alpha_beta_pruning: bool) -> Self {
        Self {
            random: rg,
            use_alpha_beta_pruning,
            last_states_searched: 0,
        }
    }

    /// Returns the number of states generated by the most recent search.
    pub fn last_states_searched(&self) -> u64 {
        self.last_states_searched
    }

    /// Returns an optimal move for the active player, or `None` if the board is terminal.
    ///
    /// When several moves share the optimal value, one of them is picked uniformly at random.
    pub fn best_move<B: Board>(&mut self, board: &B) -> Result<Option<B::Move>> {
        let Some(result) = self.analyze(board)? else {
            return Ok(None);
        };
        Ok(self.random.choose(&result.optimal_moves).copied())
    }

    /// Searches `board` to the end of the game and reports its value and every optimal move.
    ///
    /// Returns `None` if the board is already terminal.
    pub fn analyze<B: Board>(&mut self, board: &B) -> Result<Option<SearchResult<B::Move>>> {
        if board.is_terminal() {
            return Ok(None);
        }

        let mut ctx = SearchContext::new(self.use_alpha_beta_pruning);
        let player = board.active_player();
        // Root bounds are infinite, so the root loop always completes and yields its moves.
        let (value, optimal_moves) = match player {
            Mark::X => max_value(board, i32::MAX, &mut ctx)?,
            Mark::O => min_value(board, i32::MIN, &mut ctx)?,
        };
        let optimal_moves = optimal_moves.unwrap_or_default();

        self.last_states_searched = ctx.states_searched;
        debug!(
            "{} states searched for {:?}: value {}, {} optimal move(s)",
            ctx.states_searched,
            player,
            value,
            optimal_moves.len()
        );

        Ok(Some(SearchResult {
            player,
            value,
            optimal_moves,
            states_searched: ctx.states_searched,
        }))
    }
}

/// Per-search bookkeeping threaded through the recursion.
struct SearchContext {
    use_alpha_beta_pruning: bool,
    states_searched: u64,
}

impl SearchContext {
    fn new(use_alpha_beta_pruning: bool) -> Self {
        Self {
            use_alpha_beta_pruning,
            states_searched: 0,
        }
    }

    /// The bound handed to a child: the running best when pruning, otherwise `unbounded`.
    fn child_bound(&self, running_best: i32, unbounded: i32) -> i32 {
        if self.use_alpha_beta_pruning {
            running_best
        } else {
            unbounded
        }
    }
}

/// Maximizing side. `current_min` is the best the minimizer can already force elsewhere; once a
/// child beats it this node can no longer be chosen and the search of it stops.
fn max_value<B: Board>(
    board: &B,
    current_min: i32,
    ctx: &mut SearchContext,
) -> Result<NodeValue<B::Move>> {
    if board.is_terminal() {
        return Ok((board.utility(), None));
    }

    let mut value = i32::MIN;
    let mut optimal_moves = Vec::new();

    for b_move in board.legal_moves() {
        ctx.states_searched += 1;
        let child = board.apply(b_move)?;
        let (child_value, _) = min_value(&child, ctx.child_bound(value, i32::MIN), ctx)?;

        if child_value > value {
            value = child_value;
            optimal_moves.clear();
        }
        if child_value == value {
            optimal_moves.push(b_move);
        }

        if child_value > current_min {
            trace!("max cut-off: {} > {}", child_value, current_min);
            return Ok((value, None));
        }
    }

    Ok((value, Some(optimal_moves)))
}

/// Minimizing side, the mirror of [`max_value`].
fn min_value<B: Board>(
    board: &B,
    current_max: i32,
    ctx: &mut SearchContext,
) -> Result<NodeValue<B::Move>> {
    if board.is_terminal() {
        return Ok((board.utility(), None));
    }

    let mut value = i32::MAX;
    let mut optimal_moves = Vec::new();

    for b_move in board.legal_moves() {
        ctx.states_searched += 1;
        let child = board.apply(b_move)?;
        let (child_value, _) = max_value(&child, ctx.child_bound(value, i32::MAX), ctx)?;

        if child_value < value {
            value = child_value;
            optimal_moves.clear();
        }
        if child_value == value {
            optimal_moves.push(b_move);
        }

        if child_value < current_max {
            trace!("min cut-off: {} < {}", child_value, current_max);
            return Ok((value, None));
        }
    }

    Ok((value, Some(optimal_moves)))
}
