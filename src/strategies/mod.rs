pub mod sweep;

use color_eyre::Result;
pub use sweep::SweepStrategy;

use crate::{
    board::Board,
    wire::{models::GameState, types::Direction},
};

pub trait Strategy {
    /// # Errors
    ///
    /// Can fail on snapshots the strategy cannot evaluate, such as a
    /// snake with an empty body.
    fn get_movement(
        &self,
        game_state: &GameState,
        board: &Board,
    ) -> Result<Option<Direction>>;
}
