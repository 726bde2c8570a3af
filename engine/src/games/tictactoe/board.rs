use std::ops::Index;
use std::str::FromStr;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// Rows, then columns, then diagonals. The order decides which line is
/// reported when more than one is complete.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 board, cells indexed 0..9 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

/// Parses nine cells written as `X`, `O` and `_` (or `.`), ignoring
/// whitespace and `|` separators, e.g. `"XX_|OO_|___"`.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if count >= CELL_COUNT {
                return Err(format!("Board '{}' has more than {} cells", s, CELL_COUNT));
            }
            cells[count] = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '_' | '.' => Mark::Empty,
                other => return Err(format!("Unexpected cell character '{}'", other)),
            };
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(format!("Board '{}' has {} cells, expected {}", s, count, CELL_COUNT));
        }

        Ok(Self { cells })
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}
