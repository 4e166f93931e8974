use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::wire::types::{Coord, Direction};

#[derive(Deserialize, Debug, Clone)]
pub struct Game {
    pub id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Board {
    pub width:  i64,
    pub food:   Vec<Coord>,
    pub snakes: Vec<Snake>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Snake {
    pub id:   String,
    pub body: VecDeque<Coord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GameState {
    pub game:  Game,
    pub board: Board,
    pub you:   Snake,
}

#[derive(Serialize, Debug)]
pub struct StartResponse {
    pub color: String,
}

#[derive(Serialize, Debug)]
pub struct MoveResponse {
    /// Absent when no candidate cell was free this turn.
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    pub movement: Option<Direction>,
}

#[derive(Serialize, Debug)]
pub struct Empty {}
