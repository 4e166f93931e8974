use itertools::Itertools;

use crate::wire::{types::Coord, utils::manhattan_distance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub at:       Coord,
    pub distance: i64,
}

/// Orders food by Manhattan distance from the head, closest first. The
/// ranking is only ever logged; nothing downstream reads it.
pub fn rank(head: Coord, food: &[Coord]) -> Vec<Food> {
    food.iter()
        .map(|&at| Food {
            at,
            distance: manhattan_distance(at, head),
        })
        .sorted_by_key(|food| food.distance)
        .collect()
}
