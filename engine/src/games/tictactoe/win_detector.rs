use super::board::{Board, WINNING_LINES};
use super::types::{Mark, Outcome, WinningLine};

/// First completed line in declaration order, if any.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in WINNING_LINES {
        let [a, b, c] = cells;
        let mark = board[a];
        if mark != Mark::Empty && mark == board[b] && mark == board[c] {
            return Some(WinningLine::new(mark, cells));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::Win(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
