//! Player setup validation.
//!
//! Turns the raw setup form (player count plus name fields) into a roster,
//! or reports why the form was rejected.

use crate::board::{MAX_PLAYERS, MIN_PLAYERS};
use crate::game::GameError;
use crate::player::Roster;
use std::collections::HashSet;

/// Validate a setup submission and build the roster.
///
/// The count is clamped to the supported range and only the first `count`
/// names are considered; extra fields are ignored. Missing fields count as
/// empty names.
pub fn validate_setup<S: AsRef<str>>(player_count: u8, names: &[S]) -> Result<Roster, GameError> {
    let count = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS) as usize;

    let chosen: Vec<&str> = (0..count)
        .map(|i| names.get(i).map_or("", |name| name.as_ref()))
        .collect();

    if chosen.iter().any(|name| name.trim().is_empty()) {
        return Err(GameError::EmptyName);
    }

    let mut seen = HashSet::with_capacity(count);
    if !chosen.iter().all(|name| seen.insert(*name)) {
        return Err(GameError::DuplicateName);
    }

    Ok(Roster::from_names(chosen.into_iter().map(str::to_owned)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Symbol;

    #[test]
    fn test_valid_names() {
        let roster = validate_setup(3, &["Alice", "Bob", "Carol"]).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.get(1).unwrap().symbol, Symbol::O);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(validate_setup(2, &["", "Bob"]), Err(GameError::EmptyName));
        assert_eq!(validate_setup(2, &["Alice", "   "]), Err(GameError::EmptyName));
    }

    #[test]
    fn test_missing_name_rejected() {
        assert_eq!(validate_setup(3, &["Alice", "Bob"]), Err(GameError::EmptyName));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        assert_eq!(validate_setup(2, &["Alice", "Alice"]), Err(GameError::DuplicateName));
    }

    #[test]
    fn test_empty_checked_before_duplicates() {
        assert_eq!(validate_setup(3, &["", "", "Bob"]), Err(GameError::EmptyName));
    }

    #[test]
    fn test_count_is_clamped() {
        let names = ["A1", "B2", "C3", "D4", "E5", "F6"];
        assert_eq!(validate_setup(0, &names).unwrap().len(), 2);
        assert_eq!(validate_setup(42, &names).unwrap().len(), 5);
    }

    #[test]
    fn test_names_beyond_count_ignored() {
        // Third field duplicates the first but is not part of a 2-player game.
        let roster = validate_setup(2, &["Alice", "Bob", "Alice", ""]).unwrap();
        assert_eq!(roster.len(), 2);
    }
}
