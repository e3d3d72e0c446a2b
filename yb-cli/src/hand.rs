//! Hand parsing for the CLI boundary.
//!
//! The core scorer trusts its input; the CLI owns the five-dice contract
//! (exactly 5 values, faces 1..=6) before any scoring call.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseHandError {
    #[error("expected 5 dice, got {0}")]
    WrongCount(usize),
    #[error("invalid die value: {0}")]
    BadValue(String),
    #[error("die out of range 1..=6: {0}")]
    OutOfRange(u8),
}

/// Parse a comma-separated hand like `1,2,3,4,5`.
pub fn parse_hand(s: &str) -> Result<[u8; 5], ParseHandError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 5 {
        return Err(ParseHandError::WrongCount(parts.len()));
    }

    let mut dice = [0u8; 5];
    for (slot, part) in dice.iter_mut().zip(&parts) {
        let v: u8 = part
            .parse()
            .map_err(|_| ParseHandError::BadValue(part.to_string()))?;
        if !(1..=6).contains(&v) {
            return Err(ParseHandError::OutOfRange(v));
        }
        *slot = v;
    }
    Ok(dice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_hand() {
        assert_eq!(parse_hand("1,2,3,4,5").unwrap(), [1, 2, 3, 4, 5]);
        assert_eq!(parse_hand("6, 6, 6, 6, 6").unwrap(), [6, 6, 6, 6, 6]);
    }

    #[test]
    fn rejects_wrong_count() {
        assert_eq!(parse_hand("1,2,3").unwrap_err(), ParseHandError::WrongCount(3));
        assert_eq!(
            parse_hand("1,2,3,4,5,6").unwrap_err(),
            ParseHandError::WrongCount(6)
        );
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        assert_eq!(
            parse_hand("1,2,x,4,5").unwrap_err(),
            ParseHandError::BadValue("x".to_string())
        );
        assert_eq!(
            parse_hand("1,2,7,4,5").unwrap_err(),
            ParseHandError::OutOfRange(7)
        );
        assert_eq!(
            parse_hand("0,2,3,4,5").unwrap_err(),
            ParseHandError::OutOfRange(0)
        );
    }
}
