//! Game actions that the renderer forwards into the engine.
//!
//! This module defines every user intent the engine understands and the
//! events that result from those intents.

use crate::board::{PlayerId, Symbol};
use serde::{Deserialize, Serialize};

/// All possible user intents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    // ==================== Setup ====================
    /// Submit the setup form: player count plus one name per seat
    SubmitSetup { player_count: u8, names: Vec<String> },
    /// Reopen the setup dialog (settings button)
    OpenSetup,
    /// Dismiss the setup dialog without submitting
    CloseSetup,

    // ==================== Play ====================
    /// Click on a cell (row-major index)
    PlaceMark(usize),
    /// Clear the board and start over with the same players
    Reset,

    // ==================== Display ====================
    /// Flip between light and dark display
    ToggleDarkMode,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new roster was seated and the board rebuilt
    PlayersConfigured {
        player_count: u8,
        board_size: usize,
        win_length: usize,
    },

    /// A mark was written into a cell
    MarkPlaced {
        player: PlayerId,
        symbol: Symbol,
        cell: usize,
    },

    /// Turn moved to the next seat
    TurnPassed {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// A player completed a line
    GameWon { player: PlayerId, symbol: Symbol },

    /// The board filled up without a completed line
    GameDrawn,

    /// Board cleared, first player to move
    BoardReset,

    /// Display mode changed
    DarkModeToggled { dark_mode: bool },

    /// Setup dialog shown
    SetupOpened,

    /// Setup dialog dismissed
    SetupClosed,
}

impl GameEvent {
    /// Whether this event ends the game
    pub fn is_game_over(&self) -> bool {
        matches!(self, GameEvent::GameWon { .. } | GameEvent::GameDrawn)
    }
}
