//! Integration tests for the Tic-Tac-Toe engine.
//!
//! These tests drive complete games from setup through to a result using
//! only the public action interface.

use tictactoe_core::*;

/// Seat players through the action interface
fn start_game(names: &[&str]) -> GameSession {
    let mut game = GameSession::new();
    game.apply_action(GameAction::SubmitSetup {
        player_count: names.len() as u8,
        names: names.iter().map(|n| n.to_string()).collect(),
    })
    .expect("setup should be accepted");
    game
}

/// Click a sequence of cells, returning every event produced
fn play(game: &mut GameSession, cells: &[usize]) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for &cell in cells {
        events.extend(game.apply_action(GameAction::PlaceMark(cell)).unwrap());
    }
    events
}

/// Play the first open cell until the game ends
fn play_to_end(game: &mut GameSession, max_moves: usize) {
    let mut moves = 0;
    while let Some(&cell) = game.valid_moves().first() {
        game.place_mark(cell);
        moves += 1;
        assert!(moves <= max_moves, "game should end within {} moves", max_moves);
    }
}

#[test]
fn test_sizing_for_every_player_count() {
    let expected = [(2, 3, 3), (3, 5, 4), (4, 6, 4), (5, 7, 4)];
    let names = ["Ann", "Ben", "Cid", "Dee", "Eve"];

    for (count, size, win_length) in expected {
        let game = start_game(&names[..count as usize]);
        assert_eq!(game.dimensions(), BoardDimensions { size, win_length });
        assert_eq!(game.board().cells().len(), size * size);
    }
}

#[test]
fn test_two_player_top_row_win() {
    let mut game = start_game(&["Alice", "Bob"]);
    let events = play(&mut game, &[0, 3, 1, 4, 2]);

    let placed: Vec<Symbol> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::MarkPlaced { symbol, .. } => Some(*symbol),
            _ => None,
        })
        .collect();
    assert_eq!(placed, vec![Symbol::X, Symbol::O, Symbol::X, Symbol::O, Symbol::X]);

    assert_eq!(game.result(), GameResult::Winner(Symbol::X));
    assert_eq!(game.winner().map(|p| p.name.as_str()), Some("Alice"));
    assert!(events.last().unwrap().is_game_over());
}

#[test]
fn test_two_player_draw() {
    let mut game = start_game(&["Alice", "Bob"]);
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let rendered = game.board().to_string();
    let rows: Vec<&str> = rendered.lines().step_by(2).collect();
    assert_eq!(rows, vec![" X | O | X ", " X | O | O ", " O | X | X "]);
    assert_eq!(game.result(), GameResult::Draw);
}

#[test]
fn test_three_players_need_a_full_row() {
    // X takes the top row of the 5x5 board while O and A play elsewhere.
    let mut game = start_game(&["Ann", "Ben", "Cid"]);
    assert_eq!(game.dimensions().win_length, 4);

    play(&mut game, &[0, 10, 20, 1, 11, 21, 2, 12, 22, 3, 13, 23]);
    assert_eq!(
        game.result(),
        GameResult::InProgress,
        "four in a row is not a win on a 5x5 board"
    );

    play(&mut game, &[4]);
    assert_eq!(game.result(), GameResult::Winner(Symbol::X));
    assert_eq!(game.winner().unwrap().name, "Ann");
}

#[test]
fn test_terminal_result_freezes_board_and_turn() {
    let mut game = start_game(&["Alice", "Bob"]);
    play(&mut game, &[0, 3, 1, 4, 2]);

    let board = game.board().clone();
    let turn = game.current_player_id();
    assert!(play(&mut game, &[5, 6, 7, 8]).is_empty());
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_player_id(), turn);
}

#[test]
fn test_reset_after_any_state() {
    for count in 2..=5u8 {
        let names: Vec<String> = (0..count).map(|i| format!("P{}", i)).collect();
        let mut game = GameSession::with_players(count, &names).unwrap();
        play_to_end(&mut game, 49);
        assert!(game.is_finished());

        game.apply_action(GameAction::Reset).unwrap();
        assert!(game.board().cells().iter().all(Option::is_none));
        assert_eq!(game.result(), GameResult::InProgress);
        assert_eq!(game.current_player_id(), 0);
        assert_eq!(game.players().len(), count as usize);
    }
}

#[test]
fn test_rejected_setup_keeps_game() {
    let mut game = start_game(&["Alice", "Bob"]);
    play(&mut game, &[4, 0]);
    let before = game.clone();

    let empty = game.apply_action(GameAction::SubmitSetup {
        player_count: 2,
        names: vec!["".into(), "Bob".into()],
    });
    assert_eq!(empty, Err(GameError::EmptyName));

    let duplicate = game.apply_action(GameAction::SubmitSetup {
        player_count: 2,
        names: vec!["Alice".into(), "Alice".into()],
    });
    assert_eq!(duplicate, Err(GameError::DuplicateName));

    assert_eq!(game, before);
}

#[test]
fn test_five_players_rotate_symbols() {
    let mut game = start_game(&["Ann", "Ben", "Cid", "Dee", "Eve"]);
    play(&mut game, &[0, 1, 2, 3, 4, 5]);

    let symbols: Vec<Option<Symbol>> = (0..6).map(|cell| game.board().get(cell)).collect();
    assert_eq!(
        symbols,
        vec![
            Some(Symbol::X),
            Some(Symbol::O),
            Some(Symbol::A),
            Some(Symbol::B),
            Some(Symbol::C),
            Some(Symbol::X),
        ]
    );
    assert_eq!(game.current_player().unwrap().name, "Ben");
}

#[test]
fn test_actions_round_trip_through_json() {
    let mut game = GameSession::new();
    let json = r#"{"SubmitSetup":{"player_count":2,"names":["Alice","Bob"]}}"#;
    let action: GameAction = serde_json::from_str(json).unwrap();
    game.apply_action(action).unwrap();

    let click: GameAction = serde_json::from_str(r#"{"PlaceMark":4}"#).unwrap();
    let events = game.apply_action(click).unwrap();
    let value = serde_json::to_value(&events).unwrap();
    assert_eq!(value[0]["MarkPlaced"]["cell"], 4);

    let snapshot = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(snapshot["cells"][4]["symbol"], "X");
}
