//! Canonical-post and text resolution
//!
//! A raw post may wrap another post (a repost or a quote). Every stage that
//! needs "the post" goes through [`canonical_post`] so the choice is made the
//! same way everywhere: repost payload, else quote payload, else the input.

use crate::config::EntityScope;
use crate::error::{ExtractorError, Result};
use crate::fields::Fields;
use crate::parse::sanitize;
use serde_json::Value;
use tracing::warn;
use tweetrow_domain::PostKind;

/// Where a post's display text was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Top-level `full_text` (extended-mode API responses)
    FullText,
    /// `extended_tweet.full_text` (streaming payloads over 140 chars)
    ExtendedTweet,
    /// Legacy `text`
    Legacy,
}

/// Wrap the raw input as the outer post
pub fn input_post(raw: &Value) -> Result<Fields<'_>> {
    Fields::new(raw, "post")
}

/// Classify the outer input by the payload it wraps
pub fn classify(raw: &Value) -> Result<PostKind> {
    Ok(wrapped(&input_post(raw)?)?.map_or(PostKind::Original, |(kind, _)| kind))
}

/// The post whose content is persisted: the wrapped payload if there is one,
/// otherwise the input itself
pub fn canonical_post(raw: &Value) -> Result<Fields<'_>> {
    let input = input_post(raw)?;
    Ok(wrapped(&input)?.map_or(input, |(_, payload)| payload))
}

/// The post the entity and place stages read from
pub fn select_post(raw: &Value, scope: EntityScope) -> Result<Fields<'_>> {
    match scope {
        EntityScope::Canonical => canonical_post(raw),
        EntityScope::Input => input_post(raw),
    }
}

/// The payload wrapped by `post`, with its kind, in resolution order
pub(crate) fn wrapped<'a>(post: &Fields<'a>) -> Result<Option<(PostKind, Fields<'a>)>> {
    for kind in [PostKind::Retweet, PostKind::Quote] {
        let Some(key) = kind.payload_key() else {
            continue;
        };
        if let Some(payload) = post.opt_object(key, key)? {
            return Ok(Some((kind, payload)));
        }
    }

    if let Ok(Some(true)) = post.opt_bool("is_quote_status") {
        warn!(
            "Post {} is flagged as a quote but carries no quoted payload",
            post.opt_str("id_str").ok().flatten().unwrap_or("<unknown>")
        );
    }
    Ok(None)
}

/// Which text field a post would be read from
pub fn text_source(post: &Fields<'_>) -> Result<TextSource> {
    if post.opt_str("full_text")?.is_some() {
        Ok(TextSource::FullText)
    } else if post.opt_object("extended_tweet", "extended_tweet")?.is_some() {
        Ok(TextSource::ExtendedTweet)
    } else if post.opt_str("text")?.is_some() {
        Ok(TextSource::Legacy)
    } else {
        Err(ExtractorError::missing(
            "full_text|extended_tweet.full_text|text",
            post.context(),
        ))
    }
}

/// Display text of a post, with NUL characters replaced
pub fn resolve_text(post: &Fields<'_>, replacement: &str) -> Result<String> {
    let raw = match text_source(post)? {
        TextSource::FullText => post.require_str("full_text")?,
        TextSource::ExtendedTweet => post
            .object("extended_tweet", "extended_tweet")?
            .require_str("full_text")?,
        TextSource::Legacy => post.require_str("text")?,
    };
    Ok(sanitize(raw, replacement).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_post_is_its_own_canonical() {
        let raw = json!({"id": 1, "text": "hi"});
        let canonical = canonical_post(&raw).unwrap();

        assert!(std::ptr::eq(canonical.as_map(), raw.as_object().unwrap()));
        assert_eq!(classify(&raw).unwrap(), PostKind::Original);
    }

    #[test]
    fn test_retweet_payload_wins_over_quote() {
        let raw = json!({
            "id": 3,
            "retweeted_status": {"id": 1},
            "quoted_status": {"id": 2}
        });

        assert_eq!(canonical_post(&raw).unwrap().require_i64("id").unwrap(), 1);
        assert_eq!(classify(&raw).unwrap(), PostKind::Retweet);
    }

    #[test]
    fn test_quote_payload() {
        let raw = json!({"id": 3, "is_quote_status": true, "quoted_status": {"id": 2}});

        assert_eq!(canonical_post(&raw).unwrap().require_i64("id").unwrap(), 2);
        assert_eq!(classify(&raw).unwrap(), PostKind::Quote);
    }

    #[test]
    fn test_null_payload_is_absent() {
        let raw = json!({"id": 3, "retweeted_status": null, "is_quote_status": true});

        assert_eq!(classify(&raw).unwrap(), PostKind::Original);
        assert_eq!(canonical_post(&raw).unwrap().require_i64("id").unwrap(), 3);
    }

    #[test]
    fn test_non_object_payload_is_an_error() {
        let raw = json!({"id": 3, "retweeted_status": "oops"});
        assert!(matches!(
            canonical_post(&raw),
            Err(ExtractorError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_select_post_by_scope() {
        let raw = json!({"id": 3, "quoted_status": {"id": 2}});

        let input = select_post(&raw, EntityScope::Input).unwrap();
        let canonical = select_post(&raw, EntityScope::Canonical).unwrap();
        assert_eq!(input.require_i64("id").unwrap(), 3);
        assert_eq!(canonical.require_i64("id").unwrap(), 2);
    }

    #[test]
    fn test_text_from_legacy_field() {
        let raw = json!({"text": "legacy\0text"});
        let post = input_post(&raw).unwrap();

        assert_eq!(text_source(&post).unwrap(), TextSource::Legacy);
        assert_eq!(resolve_text(&post, " ").unwrap(), "legacy text");
    }

    #[test]
    fn test_text_from_extended_tweet() {
        let raw = json!({
            "text": "truncated…",
            "extended_tweet": {"full_text": "the whole\0story"}
        });
        let post = input_post(&raw).unwrap();

        assert_eq!(text_source(&post).unwrap(), TextSource::ExtendedTweet);
        assert_eq!(resolve_text(&post, " ").unwrap(), "the whole story");
    }

    #[test]
    fn test_text_prefers_full_text() {
        let raw = json!({
            "full_text": "\0full",
            "extended_tweet": {"full_text": "extended"},
            "text": "legacy"
        });
        let post = input_post(&raw).unwrap();

        assert_eq!(text_source(&post).unwrap(), TextSource::FullText);
        assert_eq!(resolve_text(&post, " ").unwrap(), " full");
    }

    #[test]
    fn test_text_missing_everywhere() {
        let raw = json!({"id": 1});
        let post = input_post(&raw).unwrap();
        assert!(matches!(
            resolve_text(&post, " "),
            Err(ExtractorError::MissingField { .. })
        ));
    }

    #[test]
    fn test_extended_tweet_without_full_text() {
        let raw = json!({"extended_tweet": {}, "text": "short"});
        let post = input_post(&raw).unwrap();
        assert_eq!(
            resolve_text(&post, " "),
            Err(ExtractorError::missing("full_text", "extended_tweet"))
        );
    }
}
