//! Scorecard snapshot files (YAML) for the `card` subcommand.
//!
//! A snapshot is the collaborator's per-player scoring record as a map of
//! wire names to recorded scores; loading never mutates anything.

use std::path::Path;

use thiserror::Error;
use yb_core::Scorecard;

/// Scorecard snapshot loading errors.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("failed to read scorecard file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a scorecard snapshot from a YAML file.
pub fn load_card<P: AsRef<Path>>(path: P) -> Result<Scorecard, CardError> {
    let contents = std::fs::read_to_string(path)?;
    let card: Scorecard = serde_yaml::from_str(&contents)?;
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yb_core::{grand_total, Category};

    #[test]
    fn loads_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.yaml");
        std::fs::write(&path, "ones: 3\nyatzy: 50\n").unwrap();

        let card = load_card(&path).unwrap();
        assert_eq!(card.get(Category::Ones), Some(3));
        assert_eq!(card.get(Category::Twos), None);
        assert_eq!(grand_total(&card), 53);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_card("no-such-card.yaml").unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }

    #[test]
    fn bad_yaml_is_a_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.yaml");
        std::fs::write(&path, "ones: [not a score\n").unwrap();

        let err = load_card(&path).unwrap_err();
        assert!(matches!(err, CardError::Yaml(_)));
    }
}
