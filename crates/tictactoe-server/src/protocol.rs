//! WebSocket protocol messages between the renderer and the game host.

use serde::{Deserialize, Serialize};
use tictactoe_core::{GameAction, GameEvent, GameSnapshot};
use uuid::Uuid;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Forward a user intent to the session
    Action { action: GameAction },

    /// Ask for the current snapshot
    GetSnapshot,

    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Welcome message with the session ID
    Welcome { session_id: Uuid },

    /// Everything needed to draw the game
    Snapshot { snapshot: GameSnapshot },

    /// Outcome of an action. Rejected setup forms carry the user-facing
    /// message in `error`.
    ActionResult {
        success: bool,
        events: Vec<GameEvent>,
        error: Option<String>,
    },

    /// Error occurred
    Error { message: String },

    /// Pong response
    Pong,
}
