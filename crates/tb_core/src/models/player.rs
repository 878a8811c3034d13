use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable roster identifier. Assigned by the roster owner and unique for
/// the lifetime of the roster; share merges and selections key on it.
pub type PlayerId = u64;

/// A rating value as it appears in roster data.
///
/// Hand-edited roster files and imported share payloads may carry ratings
/// as strings ("7", "unrated"). These are normal inputs, never errors:
/// resolution coerces what it can and falls back for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl Rating {
    /// Numeric value of this rating, if it has one.
    ///
    /// Text coerces via an `f64` parse of the trimmed string. Non-finite
    /// numbers count as non-numeric; zero and negatives pass through.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Rating::Number(n) if n.is_finite() => Some(*n),
            Rating::Number(_) => None,
            Rating::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl From<f64> for Rating {
    fn from(n: f64) -> Self {
        Rating::Number(n)
    }
}

/// A scored roster entry.
///
/// Only `id`, `name` and the ratings carry balancing semantics; `nickname`
/// and `tags` ride along for the presentation and filtering layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    #[serde(default)]
    pub nickname: String,

    /// Primary rating used for balancing unless a tag rating overrides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Free-form labels used by callers for filtering and bulk edits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Per-tag rating overrides, keyed by tag name.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tag_ratings: HashMap<String, Rating>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            nickname: String::new(),
            rating: None,
            tags: Vec::new(),
            tag_ratings: HashMap::new(),
        }
    }

    pub fn with_rating(mut self, rating: impl Into<Rating>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_tag_rating(mut self, tag: impl Into<String>, rating: impl Into<Rating>) -> Self {
        self.tag_ratings.insert(tag.into(), rating.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_deserializes_number_or_text() {
        let n: Rating = serde_json::from_str("7.5").unwrap();
        assert_eq!(n, Rating::Number(7.5));

        let t: Rating = serde_json::from_str("\"strong\"").unwrap();
        assert_eq!(t, Rating::Text("strong".into()));
    }

    #[test]
    fn text_rating_coerces_like_a_number_field() {
        assert_eq!(Rating::Text("7".into()).as_number(), Some(7.0));
        assert_eq!(Rating::Text(" 3.5 ".into()).as_number(), Some(3.5));
        assert_eq!(Rating::Text("strong".into()).as_number(), None);
        assert_eq!(Rating::Text(String::new()).as_number(), None);
    }

    #[test]
    fn non_finite_numbers_count_as_unrated() {
        assert_eq!(Rating::Number(f64::NAN).as_number(), None);
        assert_eq!(Rating::Number(f64::INFINITY).as_number(), None);
        assert_eq!(Rating::Number(0.0).as_number(), Some(0.0));
        assert_eq!(Rating::Number(-2.0).as_number(), Some(-2.0));
    }

    #[test]
    fn player_deserializes_with_optional_fields_absent() {
        let p: Player = serde_json::from_str(r#"{"id": 3, "name": "Ada"}"#).unwrap();
        assert_eq!(p.id, 3);
        assert_eq!(p.name, "Ada");
        assert!(p.nickname.is_empty());
        assert!(p.rating.is_none());
        assert!(p.tags.is_empty());
        assert!(p.tag_ratings.is_empty());
    }
}
