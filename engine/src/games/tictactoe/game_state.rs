use super::board::{Board, CELL_COUNT};
use super::bot_controller::{AI_MARK, find_best_move};
use super::types::{GameMode, Mark, MoveError, Outcome, TurnStatus, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// State of a single game: board, whose turn it is and the turn status.
///
/// Scores are kept outside, see `ScoreBoard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: TurnStatus,
    pub mode: GameMode,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: TurnStatus::AwaitingHumanMove,
            mode,
            last_move: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.status == TurnStatus::AwaitingAiMove
    }

    /// Places the current human player's mark.
    ///
    /// On failure nothing changes.
    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::SessionInactive);
        }
        self.place(index)
    }

    /// Computes and places the AI reply.
    pub fn play_ai_move(&mut self) -> Result<(usize, Outcome), MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotAiTurn);
        }
        let index = find_best_move(&self.board).ok_or(MoveError::NoMovesLeft)?;
        let outcome = self.place(index)?;
        Ok((index, outcome))
    }

    /// Places an AI reply computed elsewhere, e.g. on a blocking thread.
    pub fn apply_ai_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if !self.is_ai_turn() {
            return Err(MoveError::NotAiTurn);
        }
        self.place(index)
    }

    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }

    fn place(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if self.board[index] != Mark::Empty {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);

        let outcome = evaluate(&self.board);
        self.advance(outcome);
        Ok(outcome)
    }

    fn advance(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(mark) => self.status = TurnStatus::Won(mark),
            Outcome::Draw => self.status = TurnStatus::Draw,
            Outcome::Ongoing => self.switch_turn(),
        }
    }

    fn switch_turn(&mut self) {
        let next_mark = if self.current_mark == Mark::X { Mark::O } else { Mark::X };
        self.current_mark = next_mark;
        self.status = if self.mode.is_ai() && next_mark == AI_MARK {
            TurnStatus::AwaitingAiMove
        } else {
            TurnStatus::AwaitingHumanMove
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_awaits_x() {
        let state = TicTacToeGameState::new(GameMode::VsAi);
        assert!(state.board.is_empty());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, TurnStatus::AwaitingHumanMove);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_human_move_hands_turn_to_ai() {
        let mut state = TicTacToeGameState::new(GameMode::VsAi);
        assert_eq!(state.place_mark(0), Ok(Outcome::Ongoing));
        assert_eq!(state.board[0], Mark::X);
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.status, TurnStatus::AwaitingAiMove);
        assert!(!state.is_active());
    }

    #[test]
    fn test_moves_rejected_while_ai_is_pending() {
        let mut state = TicTacToeGameState::new(GameMode::VsAi);
        state.place_mark(0).unwrap();
        let before = state.clone();
        assert_eq!(state.place_mark(4), Err(MoveError::SessionInactive));
        assert_eq!(state, before);
    }

    #[test]
    fn test_ai_move_hands_turn_back() {
        let mut state = TicTacToeGameState::new(GameMode::VsAi);
        state.place_mark(0).unwrap();
        let (index, outcome) = state.play_ai_move().unwrap();
        assert_eq!(index, 4);
        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(state.board[4], Mark::O);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, TurnStatus::AwaitingHumanMove);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_ai_cannot_move_on_human_turn() {
        let mut state = TicTacToeGameState::new(GameMode::VsAi);
        assert_eq!(state.play_ai_move(), Err(MoveError::NotAiTurn));
        assert_eq!(state.apply_ai_move(3), Err(MoveError::NotAiTurn));
        assert!(state.board.is_empty());
    }

    #[test]
    fn test_occupied_and_out_of_range_cells_are_rejected() {
        let mut state = TicTacToeGameState::new(GameMode::VsPlayer);
        state.place_mark(4).unwrap();
        let before = state.clone();
        assert_eq!(state.place_mark(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(state.place_mark(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_two_player_mode_alternates_marks() {
        let mut state = TicTacToeGameState::new(GameMode::VsPlayer);
        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.status, TurnStatus::AwaitingHumanMove);
        state.place_mark(1).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.board[1], Mark::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new(GameMode::VsPlayer);
        for index in [0, 3, 1, 4] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.place_mark(2), Ok(Outcome::Win(Mark::X)));
        assert_eq!(state.status, TurnStatus::Won(Mark::X));
        assert_eq!(state.winning_line().map(|line| line.cells), Some([0, 1, 2]));
        assert_eq!(state.place_mark(8), Err(MoveError::SessionInactive));
    }

    #[test]
    fn test_full_board_ends_in_draw() {
        let mut state = TicTacToeGameState::new(GameMode::VsPlayer);
        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(state.place_mark(index), Ok(Outcome::Ongoing));
        }
        assert_eq!(state.place_mark(8), Ok(Outcome::Draw));
        assert_eq!(state.status, TurnStatus::Draw);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = TicTacToeGameState::new(GameMode::VsPlayer);
        state.place_mark(0).unwrap();
        state.reset();
        assert_eq!(state, TicTacToeGameState::new(GameMode::VsPlayer));

        state.place_mark(0).unwrap();
        state.set_mode(GameMode::VsAi);
        assert_eq!(state, TicTacToeGameState::new(GameMode::VsAi));
    }
}
