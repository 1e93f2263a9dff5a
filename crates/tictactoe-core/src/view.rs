//! Read model consumed by the renderer.
//!
//! A `GameSnapshot` carries everything needed to draw one frame: the grid,
//! each cell's label and color, the status line, and the display flags.

use crate::board::{GameResult, PlayerId, Symbol};
use crate::game::{GamePhase, GameSession};
use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Color of an empty cell label
pub const EMPTY_CELL_COLOR: &str = "#FFFFFF";

/// Color of the status line after a draw
pub const DRAW_COLOR: &str = "#000000";

/// One cell as drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub symbol: Option<Symbol>,
    pub color: String,
}

/// Status text shown above the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub text: String,
    pub color: String,
}

/// Everything the renderer needs to draw the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board_size: usize,
    pub win_length: usize,
    pub cells: Vec<CellView>,
    pub players: Vec<Player>,
    /// Seat to move, only while the game is in progress
    pub current_player: Option<PlayerId>,
    pub result: GameResult,
    pub phase: GamePhase,
    /// `None` until players are seated
    pub status: Option<StatusLine>,
    pub dark_mode: bool,
    pub setup_open: bool,
}

impl GameSnapshot {
    /// Build a snapshot of a session
    pub fn from_session(session: &GameSession) -> Self {
        let players = session.players();
        let dimensions = session.dimensions();
        let phase = session.phase();

        let cells = session
            .board()
            .cells()
            .iter()
            .map(|&symbol| CellView {
                symbol,
                color: symbol
                    .and_then(|s| players.by_symbol(s))
                    .map_or_else(|| EMPTY_CELL_COLOR.to_string(), |p| p.color.css()),
            })
            .collect();

        let status = match phase {
            GamePhase::Setup => None,
            GamePhase::InProgress => session.current_player().map(|p| StatusLine {
                text: format!("{}'s Turn", p.name),
                color: p.color.css(),
            }),
            GamePhase::Won { .. } => session.winner().map(|p| StatusLine {
                text: format!("{} wins!", p.name),
                color: p.color.css(),
            }),
            GamePhase::Draw => Some(StatusLine {
                text: "It's a Draw!".to_string(),
                color: DRAW_COLOR.to_string(),
            }),
        };

        let current_player = (phase == GamePhase::InProgress).then(|| session.current_player_id());

        Self {
            board_size: dimensions.size,
            win_length: dimensions.win_length,
            cells,
            players: players.as_slice().to_vec(),
            current_player,
            result: session.result(),
            phase,
            status,
            dark_mode: session.dark_mode(),
            setup_open: session.setup_open(),
        }
    }
}
