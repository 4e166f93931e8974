mod food;
mod obstacles;

use std::collections::HashSet;

use color_eyre::{eyre::eyre, Result};
use log::info;

use super::Strategy;
use crate::{
    board::Board,
    wire::{
        models::GameState,
        types::{Coord, Direction},
    },
};

/// Candidate evaluation order. Every free candidate overwrites the
/// previous pick, so when several are free the later entry wins: down
/// beats left beats up beats right.
const CANDIDATE_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

pub struct SweepStrategy;

fn is_free(cell: Coord, obstacles: &HashSet<Coord>, board: &Board) -> bool {
    !obstacles.contains(&cell) && board.contains(cell)
}

impl Strategy for SweepStrategy {
    fn get_movement(
        &self,
        game_state: &GameState,
        board: &Board,
    ) -> Result<Option<Direction>> {
        let head = *game_state.you.body.front().ok_or_else(|| {
            eyre!("snake {} has an empty body", game_state.you.id)
        })?;

        let obstacles =
            obstacles::build(&game_state.board.snakes, &game_state.you.id);

        // ranked for the logs only; the sweep below never reads it.
        let ranked = food::rank(head, &game_state.board.food);
        info!("foods by distance from {head}: {ranked:?}");

        let mut movement = None;
        for direction in CANDIDATE_ORDER {
            if is_free(head.neighbour(direction), &obstacles, board) {
                movement = Some(direction);
            }
        }

        Ok(movement)
    }
}
