mod board;
mod bot_controller;
mod events;
mod game_state;
mod score_board;
mod session;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, WINNING_LINES, get_available_moves, is_valid_move};
pub use bot_controller::{AI_MARK, find_best_move, minimax, pick_random_move};
pub use events::{GameOverNotification, GameStateUpdate};
pub use game_state::TicTacToeGameState;
pub use score_board::ScoreBoard;
pub use session::{TicTacToeSession, TicTacToeSessionState};
pub use types::{GameMode, Mark, MoveError, Outcome, TurnStatus, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
