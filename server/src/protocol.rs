use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::difficulty::size_for_difficulty;

/// One maze request, e.g. `{"difficulty": 3}`. The difficulty is kept as raw
/// JSON so that strings or other odd values fall back to the default size
/// instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct MazeRequest {
    pub difficulty: Option<Value>,
}

impl MazeRequest {
    /// The difficulty as a whole number. `2.0` counts as level 2.
    pub fn level(&self) -> Option<i64> {
        let value = self.difficulty.as_ref()?;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|level| level.fract() == 0.0)
                .map(|level| level as i64)
        })
    }

    pub fn size(&self) -> usize {
        size_for_difficulty(self.level())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> MazeRequest {
        serde_json::from_str(json).expect("request should parse")
    }

    #[test]
    fn test_request_size_follows_difficulty() {
        assert_eq!(parse(r#"{"difficulty": 1}"#).size(), 4);
        assert_eq!(parse(r#"{"difficulty": 4}"#).size(), 7);
    }

    #[test]
    fn test_missing_or_odd_difficulty_defaults() {
        assert_eq!(parse("{}").size(), 4);
        assert_eq!(parse(r#"{"difficulty": null}"#).size(), 4);
        assert_eq!(parse(r#"{"difficulty": "3"}"#).size(), 4);
        assert_eq!(parse(r#"{"difficulty": 2.5}"#).size(), 4);
        assert_eq!(parse(r#"{"difficulty": 9}"#).size(), 4);
        assert_eq!(parse(r#"{"difficulty": true}"#).size(), 4);
    }

    #[test]
    fn test_whole_number_float_difficulty_is_mapped() {
        assert_eq!(parse(r#"{"difficulty": 1.0}"#).size(), 4);
        assert_eq!(parse(r#"{"difficulty": 2.0}"#).size(), 5);
        assert_eq!(parse(r#"{"difficulty": 3.0}"#).size(), 6);
        assert_eq!(parse(r#"{"difficulty": 4.0}"#).size(), 7);
        assert_eq!(parse(r#"{"difficulty": 2.0}"#).level(), Some(2));
        assert_eq!(parse(r#"{"difficulty": 2.5}"#).level(), None);
        assert_eq!(parse(r#"{"difficulty": 4.0e0}"#).size(), 7);
    }

    #[test]
    fn test_non_object_request_is_rejected() {
        assert!(serde_json::from_str::<MazeRequest>("42").is_err());
        assert!(serde_json::from_str::<MazeRequest>(r#""hard""#).is_err());
        assert!(serde_json::from_str::<MazeRequest>("difficulty=2").is_err());
    }
}
