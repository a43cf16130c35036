//! Rules files.
//!
//! A rules file is a JSON object whose fields all default to the standard
//! rules, so `{}` is a valid file and `{"piece_count": 3}` changes only the
//! piece count.

use std::fs;
use std::path::Path;
use std::time::Duration;

use landgrab::Rules;
use serde::{Deserialize, Serialize};

use super::CliError;

/// Serialized form of [`Rules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(super) struct RulesConfig {
    /// Time a strategy gets per turn, in milliseconds.
    pub(super) turn_timeout_ms: u64,
    /// Pieces per side.
    pub(super) piece_count: u32,
    /// Starting life of every piece.
    pub(super) life: i32,
    /// Starting damage of every piece.
    pub(super) damage: i32,
    /// Life gained per kill.
    pub(super) life_growth: i32,
    /// Damage gained per kill.
    pub(super) damage_growth: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::from_rules(&Rules::standard())
    }
}

impl RulesConfig {
    /// Capture existing rules.
    pub(super) fn from_rules(rules: &Rules) -> Self {
        Self {
            turn_timeout_ms: u64::try_from(rules.turn_timeout().as_millis()).unwrap_or(u64::MAX),
            piece_count: rules.piece_count(),
            life: rules.life(),
            damage: rules.damage(),
            life_growth: rules.life_growth(),
            damage_growth: rules.damage_growth(),
        }
    }

    /// Validate into [`Rules`].
    ///
    /// # Errors
    ///
    /// Returns an error if the values don't make a playable game.
    pub(super) fn into_rules(self) -> Result<Rules, CliError> {
        Ok(Rules::new(
            Duration::from_millis(self.turn_timeout_ms),
            self.piece_count,
            self.life,
            self.damage,
            self.life_growth,
            self.damage_growth,
        )?)
    }

    /// Parse a rules file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid JSON.
    pub(super) fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path)
            .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&text)
            .map_err(|e| CliError::new(format!("Failed to parse {}: {e}", path.display())))
    }
}

/// Load rules from an optional file, falling back to the standard rules.
///
/// # Errors
///
/// Returns an error if the file can't be loaded or holds invalid rules.
pub(super) fn load_rules(path: Option<&Path>) -> Result<Rules, CliError> {
    match path {
        Some(path) => RulesConfig::load(path)?.into_rules(),
        None => Ok(Rules::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_is_standard() {
        let file = write_config("{}");
        assert_eq!(load_rules(Some(file.path())).unwrap(), Rules::standard());
    }

    #[test]
    fn test_no_file_is_standard() {
        assert_eq!(load_rules(None).unwrap(), Rules::standard());
    }

    #[test]
    fn test_partial_override() {
        let file = write_config(r#"{"piece_count": 3, "turn_timeout_ms": 500}"#);
        let rules = load_rules(Some(file.path())).unwrap();
        assert_eq!(rules.piece_count(), 3);
        assert_eq!(rules.board_size(), 7);
        assert_eq!(rules.turn_timeout(), Duration::from_millis(500));
        assert_eq!(rules.life(), Rules::standard().life());
    }

    #[test]
    fn test_invalid_rules_rejected() {
        let file = write_config(r#"{"life": 0}"#);
        let err = load_rules(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("life must be positive"));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let file = write_config(r#"{"piece_count": 16384}"#);
        let err = load_rules(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("piece count 16384 is too large"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let file = write_config(r#"{"pieces": 3}"#);
        assert!(load_rules(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_rules(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_serialized_round_trip() {
        let config = RulesConfig::default();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<RulesConfig>(&text).unwrap(), config);
    }
}
