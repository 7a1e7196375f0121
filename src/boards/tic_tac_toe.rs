use crate::board::{Board, Mark};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

const SIZE: usize = 3;
const CELLS: usize = SIZE * SIZE;

/// Every line of three cells that wins the game, in scan order: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A `(row, col)` cell coordinate on the 3x3 grid. Ordered row-major.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= SIZE || col >= SIZE {
            return Err(Error::PositionOutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    fn index(&self) -> usize {
        self.row() * SIZE + self.col()
    }

    fn from_index(index: usize) -> Self {
        Self {
            row: (index / SIZE) as u8,
            col: (index % SIZE) as u8,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is a 9-element array stored row-major, where `None` is an empty cell.
/// It is a plain value: equality is structural and [`Board::apply`] returns a fresh copy.
#[derive(Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
pub struct TicTacToeBoard {
    field: [Option<Mark>; CELLS],
}

impl TicTacToeBoard {
    /// Creates an empty board with `X` to move.
    pub fn initial_state() -> Self {
        Self::default()
    }

    pub fn cell(&self, position: Position) -> Option<Mark> {
        self.field[position.index()]
    }

    /// Pairs every legal move with the board it leads to.
    pub fn successors(&self) -> Vec<(Position, TicTacToeBoard)> {
        let mark = self.active_player();
        self.legal_moves()
            .into_iter()
            .map(|position| {
                let mut next = *self;
                next.field[position.index()] = Some(mark);
                (position, next)
            })
            .collect()
    }

    fn count(&self, mark: Mark) -> usize {
        self.field.iter().filter(|&&cell| cell == Some(mark)).count()
    }
}

impl Board for TicTacToeBoard {
    type Move = Position;

    fn active_player(&self) -> Mark {
        if *self == Self::initial_state() || self.is_terminal() {
            return Mark::X;
        }

        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Position::from_index(i))
            .collect()
    }

    fn apply(&self, b_move: Self::Move) -> Result<Self> {
        if self.field[b_move.index()].is_some() {
            return Err(Error::IllegalMove(b_move));
        }

        let mut next = *self;
        next.field[b_move.index()] = Some(self.active_player());
        Ok(next)
    }

    fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match self.field[a] {
            Some(mark) if self.field[b] == Some(mark) && self.field[c] == Some(mark) => {
                Some(mark)
            }
            _ => None,
        })
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.field.iter().all(|cell| cell.is_some())
    }
}

impl FromStr for TicTacToeBoard {
    type Err = Error;

    /// Parses nine cells written row-major. `X`/`O` (either case) are marks, `.`, `_` and `-`
    /// are empty cells; whitespace and `/` may separate rows and are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut field = [None; CELLS];
        let mut len = 0;

        for character in s.chars().filter(|c| !c.is_whitespace() && *c != '/') {
            let cell = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character,
                        index: len,
                    });
                }
            };
            if len < CELLS {
                field[len] = cell;
            }
            len += 1;
        }

        if len != CELLS {
            return Err(Error::InvalidBoardLength(len));
        }

        let board = Self { field };
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        if x != o && x != o + 1 {
            return Err(Error::InvalidPieceCounts { x, o });
        }

        Ok(board)
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.field.chunks(SIZE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Mark::to_char).to_string())
                .collect();
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Mark};
    use crate::boards::tic_tac_toe::{Position, TicTacToeBoard};
    use crate::error::Error;
    use std::collections::HashSet;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board(s: &str) -> TicTacToeBoard {
        s.parse().unwrap()
    }

    /// Every board reachable from the empty board by legal play, including terminal ones.
    fn reachable_boards() -> Vec<TicTacToeBoard> {
        let mut seen = HashSet::new();
        let mut stack = vec![TicTacToeBoard::initial_state()];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if current.is_terminal() {
                continue;
            }
            for (_, next) in current.successors() {
                stack.push(next);
            }
        }
        seen.into_iter().collect()
    }

    #[test]
    fn initial_state_is_empty() {
        // arrange
        let board = TicTacToeBoard::initial_state();

        // assert
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.active_player(), Mark::X);
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn position_rejects_out_of_bounds() {
        assert_eq!(
            Position::new(3, 0),
            Err(Error::PositionOutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Position::new(1, 7),
            Err(Error::PositionOutOfBounds { row: 1, col: 7 })
        );
        assert!(Position::new(2, 2).is_ok());
    }

    #[test]
    fn active_player_alternates_on_every_reachable_board() {
        let mut stack = vec![(TicTacToeBoard::initial_state(), Mark::X)];
        while let Some((current, expected)) = stack.pop() {
            if current.is_terminal() {
                assert_eq!(current.active_player(), Mark::X);
                continue;
            }
            assert_eq!(current.active_player(), expected);
            for (_, next) in current.successors() {
                stack.push((next, expected.opponent()));
            }
        }
    }

    #[test]
    fn apply_places_active_mark_and_changes_one_cell() {
        // arrange
        let start = board("X.. / .O. / ...");

        // act
        let next = start.apply(pos(2, 2)).unwrap();

        // assert
        assert_eq!(next.cell(pos(2, 2)), Some(Mark::X));
        let changed = (0..3)
            .flat_map(|r| (0..3).map(move |c| pos(r, c)))
            .filter(|&p| start.cell(p) != next.cell(p))
            .count();
        assert_eq!(changed, 1);
        assert_eq!(start.cell(pos(2, 2)), None);
    }

    #[test]
    fn apply_to_occupied_cell_fails() {
        // arrange
        let start = board("X.. / .O. / ...");

        // act
        let on_x = start.apply(pos(0, 0));
        let on_o = start.apply(pos(1, 1));

        // assert
        assert_eq!(on_x, Err(Error::IllegalMove(pos(0, 0))));
        assert_eq!(on_o, Err(Error::IllegalMove(pos(1, 1))));
    }

    #[test]
    fn apply_succeeds_on_every_empty_cell_of_reachable_boards() {
        for current in reachable_boards() {
            for position in current.legal_moves() {
                let next = current.apply(position).unwrap();
                assert_eq!(next.cell(position), Some(current.active_player()));
                assert_eq!(next.legal_moves().len(), current.legal_moves().len() - 1);
            }
        }
    }

    #[test]
    fn terminal_is_consistent_with_winner_and_moves() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), 5478);
        for current in boards {
            assert_eq!(
                current.is_terminal(),
                current.winner().is_some() || current.legal_moves().is_empty()
            );
            if current.is_terminal() && current.winner().is_none() {
                assert_eq!(current.utility(), 0);
            }
        }
    }

    #[test]
    fn winner_detects_rows_columns_and_diagonals() {
        assert_eq!(board("XXX / OO. / ...").winner(), Some(Mark::X));
        assert_eq!(board("XX. / OOO / X..").winner(), Some(Mark::O));
        assert_eq!(board("X.O / X.O / X..").winner(), Some(Mark::X));
        assert_eq!(board("XXO / .O. / OX.").winner(), Some(Mark::O));
        assert_eq!(board("XO. / OX. / ..X").winner(), Some(Mark::X));
        assert_eq!(board("XO. / XO. / ...").winner(), None);
    }

    #[test]
    fn utility_scores_from_x_perspective() {
        assert_eq!(board("XXX / OO. / ...").utility(), 1);
        assert_eq!(board("XX. / OOO / X..").utility(), -1);
        assert_eq!(board("XX. / OO. / ...").utility(), 0);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // arrange
        let full = board("XOX / XOO / OXX");

        // assert
        assert!(full.is_terminal());
        assert_eq!(full.winner(), None);
        assert_eq!(full.utility(), 0);
        assert!(full.legal_moves().is_empty());
        assert_eq!(full.active_player(), Mark::X);
    }

    #[test]
    fn equality_is_structural_and_moves_are_idempotent() {
        // arrange
        let played = TicTacToeBoard::initial_state()
            .apply(pos(1, 1))
            .and_then(|b| b.apply(pos(0, 2)))
            .unwrap();
        let parsed = board("..O / .X. / ...");

        // assert
        assert_eq!(played, parsed);
        assert_eq!(played.legal_moves(), played.legal_moves());
        assert_eq!(played.legal_moves(), parsed.legal_moves());
    }

    #[test]
    fn legal_moves_are_row_major() {
        let moves = board("X.. / .O. / ..X").legal_moves();
        assert_eq!(
            moves,
            vec![pos(0, 1), pos(0, 2), pos(1, 0), pos(1, 2), pos(2, 0), pos(2, 1)]
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(
            "XO.".parse::<TicTacToeBoard>(),
            Err(Error::InvalidBoardLength(3))
        );
        assert_eq!(
            "XO. / ... / .....".parse::<TicTacToeBoard>(),
            Err(Error::InvalidBoardLength(11))
        );
        assert_eq!(
            "XO. / .Z. / ...".parse::<TicTacToeBoard>(),
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                index: 4
            })
        );
        assert_eq!(
            "XX. / ... / ...".parse::<TicTacToeBoard>(),
            Err(Error::InvalidPieceCounts { x: 2, o: 0 })
        );
        assert_eq!(
            "O.. / ... / ...".parse::<TicTacToeBoard>(),
            Err(Error::InvalidPieceCounts { x: 0, o: 1 })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let original = board("XO. / .X. / O..");
        let rendered = original.to_string();
        assert_eq!(rendered, "X|O|.\n.|X|.\nO|.|.");
        assert_eq!(board(&rendered.replace('|', "")), original);
    }
}
