use std::collections::HashSet;

use crate::wire::{models::Snake, types::Coord};

/// Collects every body segment of every opposing snake. The agent's own
/// snake never contributes, head and tail included.
pub fn build(snakes: &[Snake], you_id: &str) -> HashSet<Coord> {
    snakes
        .iter()
        .filter(|snake| snake.id != you_id)
        .flat_map(|snake| snake.body.iter().copied())
        .collect()
}
