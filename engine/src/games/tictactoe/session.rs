use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{debug_log, log};
use crate::games::GameBroadcaster;
use super::bot_controller::find_best_move;
use super::events::{GameOverNotification, GameStateUpdate};
use super::game_state::TicTacToeGameState;
use super::score_board::ScoreBoard;
use super::types::{GameMode, MoveError, Outcome};

/// Game plus cumulative scores, owned by the caller.
///
/// A turn has two phases: `submit_move` applies the human move, and in
/// `GameMode::VsAi` leaves the game in `AwaitingAiMove` until `play_ai_turn`
/// (or `apply_ai_move`) runs. `apply_move` does both in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionState {
    pub game_state: TicTacToeGameState,
    pub scores: ScoreBoard,
    generation: u64,
}

impl TicTacToeSessionState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game_state: TicTacToeGameState::new(mode),
            scores: ScoreBoard::new(),
            generation: 0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.game_state.mode
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game_state.is_ai_turn()
    }

    /// Bumped whenever the game is reset, so late AI replies can be dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Phase one: the human move.
    pub fn submit_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let outcome = self.game_state.place_mark(index)?;
        self.scores.record(outcome);
        Ok(outcome)
    }

    /// Phase two: the AI reply, computed in place.
    pub fn play_ai_turn(&mut self) -> Result<(usize, Outcome), MoveError> {
        let (index, outcome) = self.game_state.play_ai_move()?;
        self.scores.record(outcome);
        Ok((index, outcome))
    }

    /// Phase two with a move computed off the session.
    pub fn apply_ai_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let outcome = self.game_state.apply_ai_move(index)?;
        self.scores.record(outcome);
        Ok(outcome)
    }

    /// Human move followed by the AI reply when one is due.
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let outcome = self.submit_move(index)?;
        if self.is_ai_turn() {
            let (_, outcome) = self.play_ai_turn()?;
            return Ok(outcome);
        }
        Ok(outcome)
    }

    pub fn restart_game(&mut self) {
        self.game_state.reset();
        self.generation += 1;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.game_state.set_mode(mode);
        self.generation += 1;
    }

    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    pub fn state_update(&self) -> GameStateUpdate {
        GameStateUpdate::new(&self.game_state, &self.scores)
    }

    pub fn game_over_notification(&self) -> Option<GameOverNotification> {
        GameOverNotification::from_game_state(&self.game_state, &self.scores)
    }
}

/// Async front of a session: runs the AI phase after `ai_delay` and publishes
/// every change through the broadcaster.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    state: Arc<Mutex<TicTacToeSessionState>>,
    broadcaster: B,
    ai_delay: Duration,
    pending_ai: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(mode: GameMode, ai_delay: Duration, broadcaster: B) -> Self {
        Self::from_state(TicTacToeSessionState::new(mode), ai_delay, broadcaster)
    }

    pub fn from_state(state: TicTacToeSessionState, ai_delay: Duration, broadcaster: B) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            broadcaster,
            ai_delay,
            pending_ai: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn snapshot(&self) -> TicTacToeSessionState {
        self.state.lock().await.clone()
    }

    /// Sends the current state without changing anything.
    pub async fn publish(&self) {
        let update = self.state.lock().await.state_update();
        self.broadcaster.broadcast_state(update).await;
    }

    pub async fn submit_move(&self, index: usize) -> Result<Outcome, MoveError> {
        let (outcome, ai_pending, generation) = {
            let mut state = self.state.lock().await;
            match state.submit_move(index) {
                Ok(outcome) => (outcome, state.is_ai_turn(), state.generation()),
                Err(e) => {
                    debug_log!("Ignored move at cell {}: {}", index, e);
                    return Err(e);
                }
            }
        };

        debug_log!("Human placed at cell {}: {:?}", index, outcome);
        self.broadcast_after_move(outcome).await;

        if ai_pending {
            self.schedule_ai_turn(generation).await;
        }

        Ok(outcome)
    }

    pub async fn restart_game(&self) {
        self.state.lock().await.restart_game();
        self.publish().await;
    }

    pub async fn set_mode(&self, mode: GameMode) {
        self.state.lock().await.set_mode(mode);
        log!("Mode: {}", mode);
        self.publish().await;
    }

    pub async fn reset_scores(&self) {
        self.state.lock().await.reset_scores();
        self.publish().await;
    }

    /// Waits for a scheduled AI turn, if any, to finish.
    pub async fn settle(&self) {
        let handle = self.pending_ai.lock().await.take();
        if let Some(handle) = handle
            && let Err(e) = handle.await
        {
            log!("AI turn task failed: {}", e);
        }
    }

    async fn schedule_ai_turn(&self, generation: u64) {
        let session = self.clone();
        let handle = tokio::spawn(async move {
            session.run_ai_turn(generation).await;
        });
        *self.pending_ai.lock().await = Some(handle);
    }

    async fn run_ai_turn(&self, generation: u64) {
        if !self.ai_delay.is_zero() {
            tokio::time::sleep(self.ai_delay).await;
        }

        let board = {
            let state = self.state.lock().await;
            if state.generation() != generation || !state.is_ai_turn() {
                debug_log!("Dropping AI turn for a game that was reset");
                return;
            }
            state.game_state.board
        };

        let index = match tokio::task::spawn_blocking(move || find_best_move(&board)).await {
            Ok(Some(index)) => index,
            Ok(None) => {
                log!("AI asked to move on a full board");
                return;
            }
            Err(e) => {
                log!("AI search failed: {}", e);
                return;
            }
        };

        let outcome = {
            let mut state = self.state.lock().await;
            if state.generation() != generation {
                debug_log!("Dropping AI move {} for a game that was reset", index);
                return;
            }
            match state.apply_ai_move(index) {
                Ok(outcome) => outcome,
                Err(e) => {
                    log!("AI failed to place at cell {}: {}", index, e);
                    return;
                }
            }
        };

        debug_log!("AI placed at cell {}: {:?}", index, outcome);
        self.broadcast_after_move(outcome).await;
    }

    async fn broadcast_after_move(&self, outcome: Outcome) {
        let (update, game_over) = {
            let state = self.state.lock().await;
            let game_over = if outcome.is_terminal() {
                state.game_over_notification()
            } else {
                None
            };
            (state.state_update(), game_over)
        };

        self.broadcaster.broadcast_state(update).await;

        if let Some(notification) = game_over {
            log!("Game over: {:?}", notification.outcome);
            self.broadcaster.broadcast_game_over(notification).await;
        }
    }
}
