use std::future::Future;

use crate::games::tictactoe::{GameOverNotification, GameStateUpdate};

/// Receives everything a front end needs to render a session.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameStateUpdate) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
