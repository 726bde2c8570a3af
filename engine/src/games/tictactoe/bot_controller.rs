use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT, get_available_moves};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

/// The AI always plays O. Scores are from O's point of view.
pub const AI_MARK: Mark = Mark::O;

const AI_WIN_SCORE: i32 = 1;
const AI_LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

/// Exhaustive minimax choice for O.
///
/// Empty cells are tried in index order and the first cell reaching the best
/// score is kept, so the result is deterministic. Returns `None` only for a
/// full board, which callers rule out before asking.
pub fn find_best_move(board: &Board) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&board) {
        board.set(index, AI_MARK);
        let score = minimax(&mut board, false);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Full-depth minimax without pruning. `is_maximizing` means O is to move.
///
/// The board is restored before returning.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        Outcome::Win(mark) if mark == AI_MARK => return AI_WIN_SCORE,
        Outcome::Win(_) => return AI_LOSS_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::Ongoing => {}
    }

    let (mark, mut best_score) = if is_maximizing {
        (AI_MARK, i32::MIN)
    } else {
        (Mark::X, i32::MAX)
    };

    for index in 0..CELL_COUNT {
        if board[index] != Mark::Empty {
            continue;
        }

        board.set(index, mark);
        let score = minimax(board, !is_maximizing);
        board.set(index, Mark::Empty);

        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}

/// Uniformly random empty cell. Used as a weak opponent in simulations.
pub fn pick_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&get_available_moves(board))
}
