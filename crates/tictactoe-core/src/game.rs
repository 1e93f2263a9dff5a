//! Core game state machine.
//!
//! This module contains the `GameSession` struct: the board, the roster,
//! whose turn it is, the result, and the display flags of one game.
//! Every user intent is a discrete transition on an exclusively owned
//! session; transitions return the events they produced.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, BoardDimensions, GameResult, PlayerId, Symbol, MIN_PLAYERS};
use crate::player::{Player, Roster};
use crate::setup::validate_setup;
use crate::view::GameSnapshot;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No players seated yet
    Setup,
    /// Moves are accepted
    InProgress,
    /// A player completed a line
    Won { winner: Symbol },
    /// Board full without a completed line
    Draw,
}

/// Errors that can occur when submitting setup
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Player names cannot be empty.")]
    EmptyName,

    #[error("Player names must be unique.")]
    DuplicateName,
}

/// The complete state of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Seated players, empty until setup succeeds
    players: Roster,
    /// Dimensions derived from the roster size
    dimensions: BoardDimensions,
    /// The game board
    board: Board,
    /// Seat to move next
    current_player: PlayerId,
    /// Outcome so far
    result: GameResult,
    /// Cosmetic display flag
    dark_mode: bool,
    /// Whether the setup dialog is showing
    setup_open: bool,
}

impl GameSession {
    /// Create a session waiting for setup
    pub fn new() -> Self {
        let dimensions = BoardDimensions::for_players(MIN_PLAYERS);
        Self {
            players: Roster::default(),
            dimensions,
            board: Board::with_dimensions(dimensions),
            current_player: 0,
            result: GameResult::InProgress,
            dark_mode: false,
            setup_open: true,
        }
    }

    /// Create a session and seat the given players
    pub fn with_players<S: AsRef<str>>(player_count: u8, names: &[S]) -> Result<Self, GameError> {
        let mut session = Self::new();
        session.submit_setup(player_count, names)?;
        Ok(session)
    }

    /// Seated players
    pub fn players(&self) -> &Roster {
        &self.players
    }

    /// The game board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board size and advertised win length
    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Seat to move next
    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    /// Player to move next, if players are seated
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }

    /// Outcome so far
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Get the winner if a line was completed
    pub fn winner(&self) -> Option<&Player> {
        match self.result {
            GameResult::Winner(symbol) => self.players.by_symbol(symbol),
            _ => None,
        }
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.result.is_terminal()
    }

    /// Current phase of the game
    pub fn phase(&self) -> GamePhase {
        if self.players.is_empty() {
            return GamePhase::Setup;
        }
        match self.result {
            GameResult::InProgress => GamePhase::InProgress,
            GameResult::Winner(winner) => GamePhase::Won { winner },
            GameResult::Draw => GamePhase::Draw,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn setup_open(&self) -> bool {
        self.setup_open
    }

    /// Cells the current player may click
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.phase() != GamePhase::InProgress {
            return Vec::new();
        }
        self.board.open_cells()
    }

    /// Read model for the renderer
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_session(self)
    }

    /// Apply a user intent to the game state
    pub fn apply_action(&mut self, action: GameAction) -> Result<Vec<GameEvent>, GameError> {
        match action {
            GameAction::SubmitSetup {
                player_count,
                names,
            } => self.submit_setup(player_count, &names),
            GameAction::OpenSetup => Ok(self.open_setup()),
            GameAction::CloseSetup => Ok(self.close_setup()),
            GameAction::PlaceMark(cell) => Ok(self.place_mark(cell)),
            GameAction::Reset => Ok(self.reset()),
            GameAction::ToggleDarkMode => Ok(self.toggle_dark_mode()),
        }
    }

    /// Validate the setup form and seat a new roster.
    ///
    /// On failure the session is left untouched and the setup dialog stays
    /// open.
    pub fn submit_setup<S: AsRef<str>>(
        &mut self,
        player_count: u8,
        names: &[S],
    ) -> Result<Vec<GameEvent>, GameError> {
        let players = validate_setup(player_count, names).map_err(|e| {
            debug!(player_count, error = %e, "setup rejected");
            e
        })?;

        let dimensions = BoardDimensions::for_players(players.len() as u8);
        let player_count = players.len() as u8;

        self.players = players;
        self.dimensions = dimensions;
        self.board = Board::with_dimensions(dimensions);
        self.current_player = 0;
        self.result = GameResult::InProgress;
        self.setup_open = false;

        info!(
            player_count,
            board_size = dimensions.size,
            win_length = dimensions.win_length,
            "players configured"
        );

        Ok(vec![GameEvent::PlayersConfigured {
            player_count,
            board_size: dimensions.size,
            win_length: dimensions.win_length,
        }])
    }

    /// Place the current player's mark in a cell.
    ///
    /// Clicks before setup, after the game ended, on an occupied cell or off
    /// the board are ignored and produce no events.
    pub fn place_mark(&mut self, cell: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.phase() != GamePhase::InProgress {
            debug!(cell, phase = ?self.phase(), "ignoring move outside play");
            return events;
        }

        let player = self.current_player;
        let Some(symbol) = self.players.get(player).map(|p| p.symbol) else {
            return events;
        };

        if !self.board.place(cell, symbol) {
            debug!(cell, "ignoring move on occupied or missing cell");
            return events;
        }

        debug!(player, %symbol, cell, "mark placed");
        events.push(GameEvent::MarkPlaced {
            player,
            symbol,
            cell,
        });

        self.result = self.board.evaluate();
        match self.result {
            GameResult::Winner(winner) => {
                let winner_id = self.players.by_symbol(winner).map_or(player, |p| p.id);
                info!(player = winner_id, symbol = %winner, "game won");
                events.push(GameEvent::GameWon {
                    player: winner_id,
                    symbol: winner,
                });
            }
            GameResult::Draw => {
                info!("game drawn");
                events.push(GameEvent::GameDrawn);
            }
            GameResult::InProgress => {
                let next_player = self.players.next_after(player);
                self.current_player = next_player;
                events.push(GameEvent::TurnPassed {
                    player,
                    next_player,
                });
            }
        }

        events
    }

    /// Clear the board and hand the first move back to seat 0.
    ///
    /// The roster and board size are kept.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.board.clear();
        self.result = GameResult::InProgress;
        self.current_player = 0;

        debug!(board_size = self.board.size(), "board reset");
        vec![GameEvent::BoardReset]
    }

    /// Flip the display mode
    pub fn toggle_dark_mode(&mut self) -> Vec<GameEvent> {
        self.dark_mode = !self.dark_mode;
        vec![GameEvent::DarkModeToggled {
            dark_mode: self.dark_mode,
        }]
    }

    /// Show the setup dialog
    pub fn open_setup(&mut self) -> Vec<GameEvent> {
        if self.setup_open {
            return Vec::new();
        }
        self.setup_open = true;
        vec![GameEvent::SetupOpened]
    }

    /// Dismiss the setup dialog, keeping the current game
    pub fn close_setup(&mut self) -> Vec<GameEvent> {
        if !self.setup_open {
            return Vec::new();
        }
        self.setup_open = false;
        vec![GameEvent::SetupClosed]
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
