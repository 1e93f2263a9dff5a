//! Players and the roster.
//!
//! This module contains:
//! - Player colors for UI rendering
//! - The Player struct (name, symbol, color)
//! - Roster, the ordered list of active players with lookup by symbol

use crate::board::{PlayerId, Symbol};
use serde::{Deserialize, Serialize};

/// Player color for UI rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Green,
    Red,
    Blue,
    Yellow,
    Magenta,
}

impl PlayerColor {
    /// Get color for a player index
    pub fn for_player(id: PlayerId) -> Self {
        match id % 5 {
            0 => PlayerColor::Green,
            1 => PlayerColor::Red,
            2 => PlayerColor::Blue,
            3 => PlayerColor::Yellow,
            _ => PlayerColor::Magenta,
        }
    }

    /// Get hex color code for rendering
    pub fn hex_code(&self) -> u32 {
        match self {
            PlayerColor::Green => 0x00FF00,
            PlayerColor::Red => 0xFF0000,
            PlayerColor::Blue => 0x0000FF,
            PlayerColor::Yellow => 0xFFFF00,
            PlayerColor::Magenta => 0xFF00FF,
        }
    }

    /// CSS form of the color, e.g. `#00FF00`
    pub fn css(&self) -> String {
        format!("#{:06X}", self.hex_code())
    }
}

/// A seated player. Immutable for the duration of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat index, also the turn order
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Mark this player places
    pub symbol: Symbol,
    /// Color used for the player's marks and status line
    pub color: PlayerColor,
}

impl Player {
    /// Create a player, assigning symbol and color by seat
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            symbol: Symbol::for_player(id),
            color: PlayerColor::for_player(id),
        }
    }
}

/// Ordered list of active players
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Create a roster from names in seat order
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(i as PlayerId, name))
            .collect();
        Self { players }
    }

    /// Number of players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if nobody is seated
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get a player by ID
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    /// Find the player who owns a symbol
    pub fn by_symbol(&self, symbol: Symbol) -> Option<&Player> {
        self.players.iter().find(|p| p.symbol == symbol)
    }

    /// Iterate players in seat order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Players as a slice
    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    /// Seat that moves after `id`, wrapping round
    pub fn next_after(&self, id: PlayerId) -> PlayerId {
        if self.players.is_empty() {
            return 0;
        }
        ((id as usize + 1) % self.players.len()) as PlayerId
    }
}
