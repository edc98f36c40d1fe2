//! Game catalog with one high score per game.
//!
//! Catalog writes (create, rename, delete) are administrative; reads and
//! score submission are open. Transport and authentication live outside
//! this crate: callers map `GameNotFound` to a 404 and `DuplicateGame` /
//! `InvalidScore` to a 400.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{EngineError, Result};

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: u64,
    pub name: String,
    pub high_score: i64,
    pub high_score_player: Option<String>,
}

/// Result of a score submission. Both are successes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The score beat the record and replaced it.
    NewHighScore,
    /// The score was accepted but did not beat the record.
    Recorded,
}

/// In-memory game catalog.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    games: FxHashMap<String, GameEntry>,
    next_id: u64,
}

impl Leaderboard {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a game with a zero high score.
    pub fn create_game(&mut self, name: &str) -> Result<&GameEntry> {
        let name = Self::clean_name(name)?;
        if self.games.contains_key(&name) {
            return Err(EngineError::DuplicateGame { name });
        }
        self.next_id += 1;
        let entry = GameEntry {
            id: self.next_id,
            name: name.clone(),
            high_score: 0,
            high_score_player: None,
        };
        debug!(%name, id = entry.id, "game created");
        Ok(self.games.entry(name).or_insert(entry))
    }

    /// Look up a game by name. Surrounding whitespace is ignored, as on create.
    pub fn get(&self, name: &str) -> Result<&GameEntry> {
        let name = name.trim();
        self.games.get(name).ok_or_else(|| Self::not_found(name))
    }

    /// All games, sorted by name.
    pub fn list(&self) -> Vec<&GameEntry> {
        let mut games: Vec<_> = self.games.values().collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        games
    }

    /// Number of games in the catalog.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// True when no game has been created.
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Rename a game, keeping its id and record.
    pub fn rename_game(&mut self, name: &str, new_name: &str) -> Result<&GameEntry> {
        let name = name.trim();
        let new_name = Self::clean_name(new_name)?;
        if new_name != name && self.games.contains_key(&new_name) {
            return Err(EngineError::DuplicateGame { name: new_name });
        }
        let mut entry = self
            .games
            .remove(name)
            .ok_or_else(|| Self::not_found(name))?;
        entry.name = new_name.clone();
        Ok(self.games.entry(new_name).or_insert(entry))
    }

    /// Remove a game and its record.
    pub fn delete_game(&mut self, name: &str) -> Result<GameEntry> {
        let name = name.trim();
        self.games.remove(name).ok_or_else(|| Self::not_found(name))
    }

    /// Submit a score; the record changes only if the score is greater.
    pub fn submit_score(
        &mut self,
        game_name: &str,
        player: &str,
        score: i64,
    ) -> Result<SubmitOutcome> {
        if score < 0 {
            return Err(EngineError::InvalidScore {
                score,
                message: "scores cannot be negative".to_string(),
            });
        }
        let game_name = game_name.trim();
        let entry = self
            .games
            .get_mut(game_name)
            .ok_or_else(|| Self::not_found(game_name))?;

        if score > entry.high_score {
            entry.high_score = score;
            entry.high_score_player = Some(player.to_string());
            info!(game = game_name, player, score, "new high score");
            Ok(SubmitOutcome::NewHighScore)
        } else {
            debug!(game = game_name, player, score, "score recorded");
            Ok(SubmitOutcome::Recorded)
        }
    }

    /// Serialize the catalog.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a catalog from `snapshot` bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn not_found(name: &str) -> EngineError {
        EngineError::GameNotFound {
            name: name.to_string(),
        }
    }

    fn clean_name(name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::invalid_config("game name cannot be empty"));
        }
        if name.chars().count() > 100 {
            return Err(EngineError::invalid_config(
                "game name is limited to 100 characters",
            ));
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Leaderboard {
        let mut board = Leaderboard::new();
        board.create_game("Snake").unwrap();
        board.create_game("Black Jack").unwrap();
        board
    }

    #[test]
    fn test_create_and_list() {
        let board = catalog();
        let names: Vec<_> = board.list().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Black Jack", "Snake"]);
        assert_eq!(board.get("Snake").unwrap().high_score, 0);
        assert_ne!(board.get("Snake").unwrap().id, board.get("Black Jack").unwrap().id);
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let mut board = catalog();
        assert!(matches!(
            board.create_game(" Snake "),
            Err(EngineError::DuplicateGame { .. })
        ));
        assert!(matches!(
            board.create_game("   "),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_higher_score_replaces_record() {
        let mut board = catalog();
        assert_eq!(
            board.submit_score("Snake", "ada", 40).unwrap(),
            SubmitOutcome::NewHighScore
        );
        let entry = board.get("Snake").unwrap();
        assert_eq!(entry.high_score, 40);
        assert_eq!(entry.high_score_player.as_deref(), Some("ada"));
    }

    #[test]
    fn test_lower_score_leaves_record() {
        let mut board = catalog();
        board.submit_score("Snake", "ada", 40).unwrap();

        assert_eq!(
            board.submit_score("Snake", "bob", 12).unwrap(),
            SubmitOutcome::Recorded
        );
        assert_eq!(
            board.submit_score("Snake", "bob", 40).unwrap(),
            SubmitOutcome::Recorded
        );
        let entry = board.get("Snake").unwrap();
        assert_eq!(entry.high_score, 40);
        assert_eq!(entry.high_score_player.as_deref(), Some("ada"));
    }

    #[test]
    fn test_unknown_game() {
        let mut board = catalog();
        assert!(matches!(
            board.submit_score("Pong", "ada", 1),
            Err(EngineError::GameNotFound { .. })
        ));
    }

    #[test]
    fn test_negative_score_rejected() {
        let mut board = catalog();
        assert!(matches!(
            board.submit_score("Snake", "ada", -5),
            Err(EngineError::InvalidScore { .. })
        ));
    }

    #[test]
    fn test_rename_keeps_record() {
        let mut board = catalog();
        board.submit_score("Snake", "ada", 9).unwrap();
        let id = board.get("Snake").unwrap().id;

        board.rename_game("Snake", "Snake II").unwrap();
        assert!(board.get("Snake").is_err());
        let entry = board.get("Snake II").unwrap();
        assert_eq!(entry.id, id);
        assert_eq!(entry.high_score, 9);

        assert!(matches!(
            board.rename_game("Snake II", "Black Jack"),
            Err(EngineError::DuplicateGame { .. })
        ));
    }

    #[test]
    fn test_delete() {
        let mut board = catalog();
        let removed = board.delete_game("Snake").unwrap();
        assert_eq!(removed.name, "Snake");
        assert_eq!(board.len(), 1);
        assert!(board.delete_game("Snake").is_err());
    }

    #[test]
    fn test_lookups_ignore_surrounding_whitespace() {
        let mut board = catalog();
        assert_eq!(
            board.submit_score(" Snake ", "ada", 5).unwrap(),
            SubmitOutcome::NewHighScore
        );
        assert_eq!(board.get("Snake ").unwrap().high_score, 5);

        board.rename_game("\tSnake", "Snake II").unwrap();
        assert_eq!(board.get(" Snake II").unwrap().high_score, 5);

        let removed = board.delete_game("Snake II  ").unwrap();
        assert_eq!(removed.name, "Snake II");
        match board.get("  Pong ") {
            Err(EngineError::GameNotFound { name }) => assert_eq!(name, "Pong"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_restore() {
        let mut board = catalog();
        board.submit_score("Black Jack", "ada", 1500).unwrap();

        let bytes = board.snapshot().unwrap();
        let mut restored = Leaderboard::restore(&bytes).unwrap();
        assert_eq!(restored.get("Black Jack").unwrap().high_score, 1500);

        // Ids keep counting from where the snapshot left off.
        let id = restored.create_game("Mole").unwrap().id;
        assert_eq!(id, 3);
    }
}
