use super::board::CELL_COUNT;
use super::game_state::TicTacToeGameState;
use super::score_board::ScoreBoard;
use super::types::{GameMode, Mark, Outcome, TurnStatus, WinningLine};

/// Snapshot published after every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateUpdate {
    pub board: [Mark; CELL_COUNT],
    pub current_mark: Mark,
    pub status: TurnStatus,
    pub mode: GameMode,
    pub scores: ScoreBoard,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl GameStateUpdate {
    pub fn new(game_state: &TicTacToeGameState, scores: &ScoreBoard) -> Self {
        Self {
            board: *game_state.board.cells(),
            current_mark: game_state.current_mark,
            status: game_state.status,
            mode: game_state.mode,
            scores: *scores,
            last_move: game_state.last_move,
            winning_line: game_state.winning_line(),
        }
    }
}

/// Published once when a game reaches a win or a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverNotification {
    pub outcome: Outcome,
    pub winning_line: Option<WinningLine>,
    pub mode: GameMode,
    pub scores: ScoreBoard,
}

impl GameOverNotification {
    pub fn from_game_state(game_state: &TicTacToeGameState, scores: &ScoreBoard) -> Option<Self> {
        let outcome = game_state.outcome();
        if !outcome.is_terminal() {
            return None;
        }

        Some(Self {
            outcome,
            winning_line: game_state.winning_line(),
            mode: game_state.mode,
            scores: *scores,
        })
    }
}
