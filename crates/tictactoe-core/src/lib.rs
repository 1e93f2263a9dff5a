//! Multi-player Tic-Tac-Toe game engine
//!
//! This crate provides the core game logic for a Tic-Tac-Toe variant played
//! by 2 to 5 players on a board that grows with the player count:
//! - Board sizing policy and win/draw evaluation
//! - Player roster with symbols and colors
//! - Setup validation for the player form
//! - Game state machine driven by user intents
//! - A serialisable snapshot for the renderer
//!
//! # Architecture
//!
//! The engine is platform-agnostic and synchronous. It can be compiled to:
//! - Native Rust for server-side hosting
//! - WebAssembly (feature `wasm`) for a browser renderer
//!
//! # Modules
//!
//! - [`board`]: Symbols, board grid, sizing policy and evaluator
//! - [`player`]: Players, colors and the roster
//! - [`setup`]: Setup form validation
//! - [`game`]: Game state machine
//! - [`actions`]: User intents and resulting events
//! - [`view`]: Read model for rendering

pub mod actions;
pub mod board;
pub mod game;
pub mod player;
pub mod setup;
pub mod view;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, BoardDimensions, GameResult, PlayerId, Symbol, MAX_PLAYERS, MIN_PLAYERS};
pub use game::{GameError, GamePhase, GameSession};
pub use player::{Player, PlayerColor, Roster};
pub use setup::validate_setup;
pub use view::{CellView, GameSnapshot, StatusLine};
