//! Post kind - what the outer document wraps

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of an input post by the payload it wraps
///
/// Precedence matches canonical-post resolution:
/// - Retweet: carries a `retweeted_status` payload (wins over a quote)
/// - Quote: carries a `quoted_status` payload
/// - Original: neither; the input is its own canonical post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    /// Plain post (including replies)
    Original,

    /// Repost of another post
    Retweet,

    /// Post quoting another post
    Quote,
}

impl PostKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Original => "original",
            PostKind::Retweet => "retweet",
            PostKind::Quote => "quote",
        }
    }

    /// Parse a kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "original" => Some(PostKind::Original),
            "retweet" => Some(PostKind::Retweet),
            "quote" => Some(PostKind::Quote),
            _ => None,
        }
    }

    /// Name of the raw key holding the wrapped payload, if any
    pub fn payload_key(&self) -> Option<&'static str> {
        match self {
            PostKind::Original => None,
            PostKind::Retweet => Some("retweeted_status"),
            PostKind::Quote => Some("quoted_status"),
        }
    }

    /// Whether the input wraps another post
    pub fn is_wrapper(&self) -> bool {
        !matches!(self, PostKind::Original)
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid post kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_keys() {
        assert_eq!(PostKind::Original.payload_key(), None);
        assert_eq!(PostKind::Retweet.payload_key(), Some("retweeted_status"));
        assert_eq!(PostKind::Quote.payload_key(), Some("quoted_status"));
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in [PostKind::Original, PostKind::Retweet, PostKind::Quote] {
            assert_eq!(kind.as_str().parse::<PostKind>(), Ok(kind));
        }
        assert!("reply".parse::<PostKind>().is_err());
    }

    #[test]
    fn test_is_wrapper() {
        assert!(!PostKind::Original.is_wrapper());
        assert!(PostKind::Retweet.is_wrapper());
        assert!(PostKind::Quote.is_wrapper());
    }
}
