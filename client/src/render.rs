use tictactoe_engine::games::tictactoe::{
    GameMode, GameOverNotification, GameStateUpdate, Mark, Outcome, ScoreBoard, TurnStatus,
};

pub fn mode_line(mode: GameMode) -> String {
    format!("Mode: {}", mode)
}

pub fn status_text(update: &GameStateUpdate) -> String {
    match (update.status, update.mode) {
        (TurnStatus::AwaitingHumanMove, GameMode::VsAi) => "Your turn (X)".to_string(),
        (TurnStatus::AwaitingHumanMove, GameMode::VsPlayer) => {
            if update.last_move.is_none() {
                "Player 1's turn (X)".to_string()
            } else {
                format!("Player {}'s turn", update.current_mark)
            }
        }
        (TurnStatus::AwaitingAiMove, _) => "AI is thinking...".to_string(),
        (TurnStatus::Won(mark), mode) => format!("{} wins!", winner_label(mark, mode)),
        (TurnStatus::Draw, _) => "Game ended in a draw!".to_string(),
    }
}

pub fn winner_label(mark: Mark, mode: GameMode) -> &'static str {
    match (mark, mode) {
        (Mark::X, GameMode::VsAi) => "Player",
        (Mark::X, GameMode::VsPlayer) => "Player 1",
        (_, GameMode::VsAi) => "AI",
        (_, GameMode::VsPlayer) => "Player 2",
    }
}

pub fn score_line(scores: &ScoreBoard, mode: GameMode) -> String {
    match mode {
        GameMode::VsAi => format!(
            "Player: {} | AI: {} | Draws: {}",
            scores.player1, scores.player2, scores.draws
        ),
        GameMode::VsPlayer => format!(
            "Player 1 (X): {} | Player 2 (O): {} | Draws: {}",
            scores.player1, scores.player2, scores.draws
        ),
    }
}

/// Empty cells show their 1-based number; cells of the winning line are
/// bracketed.
pub fn render_board(update: &GameStateUpdate) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let content = match update.board[index] {
                    Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                    mark => mark.symbol(),
                };
                let highlighted = update
                    .winning_line
                    .is_some_and(|line| line.contains(index));
                if highlighted {
                    format!("[{}]", content)
                } else {
                    format!(" {} ", content)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn render_update(update: &GameStateUpdate) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        mode_line(update.mode),
        render_board(update),
        status_text(update),
        score_line(&update.scores, update.mode)
    )
}

pub fn game_over_banner(notification: &GameOverNotification) -> String {
    match notification.outcome {
        Outcome::Win(mark) => format!(
            "*** {} wins! ***",
            winner_label(mark, notification.mode)
        ),
        Outcome::Draw => "*** Game ended in a draw! ***".to_string(),
        Outcome::Ongoing => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::TicTacToeSessionState;

    fn update_after(mode: GameMode, moves: &[usize]) -> GameStateUpdate {
        let mut state = TicTacToeSessionState::new(mode);
        for &index in moves {
            state.submit_move(index).unwrap();
        }
        state.state_update()
    }

    #[test]
    fn test_status_text_in_ai_mode() {
        assert_eq!(status_text(&update_after(GameMode::VsAi, &[])), "Your turn (X)");
        assert_eq!(status_text(&update_after(GameMode::VsAi, &[0])), "AI is thinking...");
    }

    #[test]
    fn test_status_text_in_two_player_mode() {
        assert_eq!(status_text(&update_after(GameMode::VsPlayer, &[])), "Player 1's turn (X)");
        assert_eq!(status_text(&update_after(GameMode::VsPlayer, &[0])), "Player O's turn");
        assert_eq!(status_text(&update_after(GameMode::VsPlayer, &[0, 1])), "Player X's turn");
        assert_eq!(
            status_text(&update_after(GameMode::VsPlayer, &[0, 3, 1, 4, 2])),
            "Player 1 wins!"
        );
        assert_eq!(
            status_text(&update_after(GameMode::VsPlayer, &[0, 1, 2, 4, 3, 5, 7, 6, 8])),
            "Game ended in a draw!"
        );
    }

    #[test]
    fn test_winner_labels_follow_mode() {
        assert_eq!(winner_label(Mark::X, GameMode::VsAi), "Player");
        assert_eq!(winner_label(Mark::O, GameMode::VsAi), "AI");
        assert_eq!(winner_label(Mark::X, GameMode::VsPlayer), "Player 1");
        assert_eq!(winner_label(Mark::O, GameMode::VsPlayer), "Player 2");
    }

    #[test]
    fn test_board_shows_numbers_and_highlights_win() {
        let update = update_after(GameMode::VsPlayer, &[0, 3, 1, 4, 2]);
        assert_eq!(
            render_board(&update),
            "[X]|[X]|[X]\n---+---+---\n O | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_score_line() {
        let scores = ScoreBoard { player1: 2, player2: 1, draws: 3 };
        assert_eq!(score_line(&scores, GameMode::VsAi), "Player: 2 | AI: 1 | Draws: 3");
        assert_eq!(
            score_line(&scores, GameMode::VsPlayer),
            "Player 1 (X): 2 | Player 2 (O): 1 | Draws: 3"
        );
    }
}
