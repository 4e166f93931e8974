use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use color_eyre::{eyre::eyre, Result};
use log::info;

use crate::{
    board::Board,
    strategies::Strategy,
    wire::models::{Empty, GameState, MoveResponse, StartResponse},
};

/// Display color sent back on every game start.
const COLOR: &str = "#420069";

/// Handles one request to completion. The only state outliving a single
/// turn is the board extent of each known game, keyed by game id so that
/// concurrent games cannot clobber each other's extent.
pub struct TurnProcessor<S> {
    strategy: S,
    boards:   Mutex<HashMap<String, Board>>,
}

impl<S: Strategy> TurnProcessor<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            boards: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn ping(&self) -> Empty {
        Empty {}
    }

    /// # Errors
    ///
    /// Fails if the board registry lock is poisoned.
    pub fn start(&self, game_state: &GameState) -> Result<StartResponse> {
        let board = Board::from_width(game_state.board.width);
        info!(
            "game {} started with board size {}",
            game_state.game.id, board.size
        );
        self.boards()?.insert(game_state.game.id.clone(), board);
        Ok(StartResponse {
            color: COLOR.to_owned(),
        })
    }

    /// # Errors
    ///
    /// Fails on a game that was never started, or on a snapshot the
    /// strategy cannot evaluate.
    pub fn make_move(&self, game_state: &GameState) -> Result<MoveResponse> {
        let board = self
            .boards()?
            .get(&game_state.game.id)
            .copied()
            .ok_or_else(|| {
                eyre!("no board registered for game {}", game_state.game.id)
            })?;

        let movement = self.strategy.get_movement(game_state, &board)?;
        Ok(MoveResponse { movement })
    }

    /// The board entry stays registered; a later start for the same game
    /// id overwrites it.
    #[must_use]
    pub fn end(&self) -> Empty {
        Empty {}
    }

    fn boards(&self) -> Result<MutexGuard<'_, HashMap<String, Board>>> {
        self.boards
            .lock()
            .map_err(|_| eyre!("board registry lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        strategies::SweepStrategy,
        wire::{
            models::{Board as WireBoard, Game, Snake},
            types::{Coord, Direction},
        },
    };

    fn snapshot(game_id: &str, width: i64, head: (i64, i64)) -> GameState {
        let you = Snake {
            id:   "you".to_owned(),
            body: [Coord {
                x: head.0,
                y: head.1,
            }]
            .into_iter()
            .collect(),
        };
        GameState {
            game: Game {
                id: game_id.to_owned(),
            },
            board: WireBoard {
                width,
                food: vec![],
                snakes: vec![you.clone()],
            },
            you,
        }
    }

    #[test]
    fn start_replies_with_the_display_color() {
        let processor = TurnProcessor::new(SweepStrategy);
        let response = processor
            .start(&snapshot("g", 10, (0, 0)))
            .map(|r| r.color)
            .map_err(|e| e.to_string());
        assert_eq!(response, Ok("#420069".to_owned()));
    }

    #[test]
    fn a_started_game_can_move() {
        let processor = TurnProcessor::new(SweepStrategy);
        let state = snapshot("g", 10, (5, 5));
        assert!(processor.start(&state).is_ok());
        let response = processor.make_move(&state);
        assert!(
            matches!(response.map(|r| r.movement), Ok(Some(Direction::Down))),
            "an open neighbourhood sweeps down"
        );
    }

    #[test]
    fn a_move_for_an_unknown_game_is_an_error() {
        let processor = TurnProcessor::new(SweepStrategy);
        assert!(processor.make_move(&snapshot("g", 10, (5, 5))).is_err());
    }

    #[test]
    fn games_do_not_share_boards() {
        let processor = TurnProcessor::new(SweepStrategy);
        assert!(processor.start(&snapshot("small", 1, (0, 0))).is_ok());
        assert!(processor.start(&snapshot("large", 10, (5, 5))).is_ok());

        // the 1x1 game stays pinned even though a wider game started
        // after it.
        let pinned = processor.make_move(&snapshot("small", 1, (0, 0)));
        assert!(matches!(pinned.map(|r| r.movement), Ok(None)));

        let moving = processor.make_move(&snapshot("large", 10, (5, 5)));
        assert!(matches!(
            moving.map(|r| r.movement),
            Ok(Some(Direction::Down))
        ));
    }

    #[test]
    fn restarting_a_game_replaces_its_board() {
        let processor = TurnProcessor::new(SweepStrategy);
        assert!(processor.start(&snapshot("g", 10, (5, 5))).is_ok());
        assert!(processor.start(&snapshot("g", 6, (5, 5))).is_ok());

        // on the shrunken board right and down fall off the edge, so the
        // sweep keeps left instead of down.
        let response = processor.make_move(&snapshot("g", 6, (5, 5)));
        assert!(matches!(
            response.map(|r| r.movement),
            Ok(Some(Direction::Left))
        ));
    }

    #[test]
    fn end_keeps_the_board_registered() {
        let processor = TurnProcessor::new(SweepStrategy);
        let state = snapshot("g", 10, (5, 5));
        assert!(processor.start(&state).is_ok());
        let _ = processor.end();
        assert!(processor.make_move(&state).is_ok());
    }

    #[test]
    fn ping_and_end_reply_with_empty_objects() {
        let processor = TurnProcessor::new(SweepStrategy);
        let ping = serde_json::to_string(&processor.ping())
            .map_err(|e| e.to_string());
        let end = serde_json::to_string(&processor.end())
            .map_err(|e| e.to_string());
        assert_eq!(ping, Ok("{}".to_owned()));
        assert_eq!(end, Ok("{}".to_owned()));
    }
}
