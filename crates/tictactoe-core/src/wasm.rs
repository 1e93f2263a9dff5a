//! WebAssembly bindings for the Tic-Tac-Toe engine.
//!
//! This module exposes the game session to a browser renderer through
//! wasm-bindgen. State crosses the boundary as JSON.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::{GameAction, GameEvent};
#[cfg(feature = "wasm")]
use crate::game::GameSession;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[cfg(feature = "wasm")]
fn events_json(events: &[GameEvent]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a game waiting for player setup
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            session: GameSession::new(),
        }
    }

    /// Get everything needed to draw the game as JSON
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the cells the current player may click as a JSON array
    #[wasm_bindgen(js_name = getValidMoves)]
    pub fn get_valid_moves(&self) -> String {
        serde_json::to_string(&self.session.valid_moves()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Submit the setup form. Names are a JSON array of strings; a rejected
    /// form throws with the user-facing message.
    #[wasm_bindgen(js_name = submitSetup)]
    pub fn submit_setup(&mut self, player_count: u8, names_json: &str) -> Result<String, JsValue> {
        let names: Vec<String> = serde_json::from_str(names_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid player names: {}", e)))?;

        self.session
            .submit_setup(player_count, &names)
            .map(|events| events_json(&events))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Click a cell, returns events JSON (empty when the click is ignored)
    #[wasm_bindgen(js_name = placeMark)]
    pub fn place_mark(&mut self, cell: usize) -> String {
        events_json(&self.session.place_mark(cell))
    }

    /// Clear the board, keeping the players
    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&mut self) -> String {
        events_json(&self.session.reset())
    }

    #[wasm_bindgen(js_name = toggleDarkMode)]
    pub fn toggle_dark_mode(&mut self) -> String {
        events_json(&self.session.toggle_dark_mode())
    }

    #[wasm_bindgen(js_name = openSetup)]
    pub fn open_setup(&mut self) -> String {
        events_json(&self.session.open_setup())
    }

    #[wasm_bindgen(js_name = closeSetup)]
    pub fn close_setup(&mut self) -> String {
        events_json(&self.session.close_setup())
    }

    /// Apply an action from JSON, returns events JSON or error
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction = serde_json::from_str(action_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid action JSON: {}", e)))?;

        self.session
            .apply_action(action)
            .map(|events| events_json(&events))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    /// Get the winner's seat (if a line was completed)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        self.session.winner().map(|p| p.id)
    }

    /// Get the board size (rows and columns)
    #[wasm_bindgen(js_name = getBoardSize)]
    pub fn get_board_size(&self) -> usize {
        self.session.dimensions().size
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
