//! Per-connection game session.

use tictactoe_core::{GameEvent, GameSession};
use tracing::{debug, info};
use uuid::Uuid;

use crate::protocol::{ClientMessage, ServerMessage};

/// One renderer's game. Owned by its connection task, never shared.
pub struct Session {
    pub id: Uuid,
    pub game: GameSession,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            game: GameSession::new(),
        }
    }

    /// Messages sent when the connection opens
    pub fn greeting(&self) -> Vec<ServerMessage> {
        vec![
            ServerMessage::Welcome {
                session_id: self.id,
            },
            self.snapshot(),
        ]
    }

    fn snapshot(&self) -> ServerMessage {
        ServerMessage::Snapshot {
            snapshot: self.game.snapshot(),
        }
    }

    /// Handle a client message, returning the replies in send order
    pub fn handle(&mut self, msg: ClientMessage) -> Vec<ServerMessage> {
        match msg {
            ClientMessage::Action { action } => {
                debug!(session = %self.id, ?action, "applying action");
                let result = match self.game.apply_action(action) {
                    Ok(events) => {
                        if events.iter().any(GameEvent::is_game_over) {
                            info!(session = %self.id, phase = ?self.game.phase(), "game over");
                        }
                        ServerMessage::ActionResult {
                            success: true,
                            events,
                            error: None,
                        }
                    }
                    Err(e) => ServerMessage::ActionResult {
                        success: false,
                        events: vec![],
                        error: Some(e.to_string()),
                    },
                };
                vec![result, self.snapshot()]
            }

            ClientMessage::GetSnapshot => vec![self.snapshot()],

            ClientMessage::Ping => vec![ServerMessage::Pong],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{GameAction, GamePhase, Symbol};

    fn setup(session: &mut Session, names: &[&str]) -> Vec<ServerMessage> {
        session.handle(ClientMessage::Action {
            action: GameAction::SubmitSetup {
                player_count: names.len() as u8,
                names: names.iter().map(|n| n.to_string()).collect(),
            },
        })
    }

    #[test]
    fn test_greeting() {
        let id = Uuid::new_v4();
        let session = Session::new(id);
        let greeting = session.greeting();

        assert!(matches!(greeting[0], ServerMessage::Welcome { session_id } if session_id == id));
        assert!(matches!(
            &greeting[1],
            ServerMessage::Snapshot { snapshot } if snapshot.phase == GamePhase::Setup
        ));
    }

    #[test]
    fn test_rejected_setup_reports_message() {
        let mut session = Session::new(Uuid::new_v4());
        let replies = setup(&mut session, &["Alice", "Alice"]);

        match &replies[0] {
            ServerMessage::ActionResult { success, error, .. } => {
                assert!(!success);
                assert_eq!(error.as_deref(), Some("Player names must be unique."));
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        assert!(matches!(
            &replies[1],
            ServerMessage::Snapshot { snapshot } if snapshot.setup_open
        ));
    }

    #[test]
    fn test_move_returns_events_and_snapshot() {
        let mut session = Session::new(Uuid::new_v4());
        setup(&mut session, &["Alice", "Bob"]);

        let replies = session.handle(ClientMessage::Action {
            action: GameAction::PlaceMark(0),
        });
        assert_eq!(replies.len(), 2);
        match &replies[0] {
            ServerMessage::ActionResult { success, events, .. } => {
                assert!(success);
                assert_eq!(events.len(), 2);
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        match &replies[1] {
            ServerMessage::Snapshot { snapshot } => {
                assert_eq!(snapshot.cells[0].symbol, Some(Symbol::X));
            }
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_ping() {
        let mut session = Session::new(Uuid::new_v4());
        let replies = session.handle(ClientMessage::Ping);
        assert!(matches!(replies.as_slice(), [ServerMessage::Pong]));
    }

    #[test]
    fn test_wire_format() {
        let msg: ClientMessage = serde_json::from_str(
            r#"{"type":"Action","payload":{"action":{"PlaceMark":3}}}"#,
        )
        .unwrap();
        assert!(matches!(
            msg,
            ClientMessage::Action {
                action: GameAction::PlaceMark(3)
            }
        ));

        let pong = serde_json::to_string(&ServerMessage::Pong).unwrap();
        assert_eq!(pong, r#"{"type":"Pong"}"#);
    }
}
