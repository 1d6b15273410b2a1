//! Post and link mapping

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};
use crate::fields::Fields;
use crate::parse::{app_source, parse_timestamp};
use crate::resolve::{canonical_post, input_post, resolve_text, wrapped};
use serde_json::Value;
use tweetrow_domain::{PostKind, PostRecord, QuoteLinkRecord, RepostLinkRecord};

/// Flatten the canonical post of `raw` into a `tweet` row
pub fn map_post(raw: &Value, config: &ExtractorConfig) -> Result<PostRecord> {
    post_record(&canonical_post(raw)?, config)
}

/// Flatten one post-shaped object
pub(crate) fn post_record(post: &Fields<'_>, config: &ExtractorConfig) -> Result<PostRecord> {
    let user = post.object("user", "user")?;

    Ok(PostRecord {
        id: post.require_i64("id")?,
        id_str: post.require_str("id_str")?.to_string(),
        user_id: user.require_i64("id")?,
        created_at: parse_timestamp(post.require_str("created_at")?, config)?,
        text: resolve_text(post, &config.null_replacement)?,
        source: app_source(post.require_str("source")?).to_string(),
        truncated: post.opt_bool("truncated")?.unwrap_or(false),
        lang: post.opt_str("lang")?.map(str::to_string),
        retweet_count: post.require_i64("retweet_count")?,
        // Absent on post shapes older than the counters
        quote_count: post.opt_i64("quote_count")?.unwrap_or(0),
        reply_count: post.opt_i64("reply_count")?.unwrap_or(0),
        in_reply_to_status_id: post.nullable_i64("in_reply_to_status_id")?,
        in_reply_to_status_id_str: post
            .nullable_str("in_reply_to_status_id_str")?
            .map(str::to_string),
        in_reply_to_user_id: post.nullable_i64("in_reply_to_user_id")?,
        in_reply_to_user_id_str: post
            .nullable_str("in_reply_to_user_id_str")?
            .map(str::to_string),
    })
}

/// Link row for an input that is itself a repost
pub fn map_repost_link(raw: &Value, config: &ExtractorConfig) -> Result<RepostLinkRecord> {
    let link = link_parts(raw, PostKind::Retweet, config)?;
    Ok(RepostLinkRecord {
        tweet_id: link.tweet_id,
        retweeted_id: link.target_id,
        retweet_user: link.user_id,
        retweet_text: link.text,
    })
}

/// Link row for an input that is itself a quote
pub fn map_quote_link(raw: &Value, config: &ExtractorConfig) -> Result<QuoteLinkRecord> {
    let link = link_parts(raw, PostKind::Quote, config)?;
    Ok(QuoteLinkRecord {
        tweet_id: link.tweet_id,
        quoted_id: link.target_id,
        quoted_user: link.user_id,
        quoted_text: link.text,
    })
}

struct LinkParts {
    tweet_id: i64,
    target_id: i64,
    user_id: i64,
    text: String,
}

/// Shared link projection; the text is the wrapper's own, not the payload's
fn link_parts(raw: &Value, kind: PostKind, config: &ExtractorConfig) -> Result<LinkParts> {
    let input = input_post(raw)?;

    let payload = match wrapped(&input)? {
        Some((found, payload)) if found == kind => payload,
        Some((found, _)) => {
            return Err(ExtractorError::link(
                kind,
                format!("input is a {} wrapper", found),
            ))
        }
        None => return Err(ExtractorError::link(kind, "input wraps no payload")),
    };

    let target_id = payload
        .opt_i64("id")?
        .ok_or_else(|| ExtractorError::link(kind, "wrapped payload has no id"))?;
    let user_id = input
        .opt_object("user", "user")?
        .map(|user| user.opt_i64("id"))
        .transpose()?
        .flatten()
        .ok_or_else(|| ExtractorError::link(kind, "input has no author id"))?;

    Ok(LinkParts {
        tweet_id: input.require_i64("id")?,
        target_id,
        user_id,
        text: resolve_text(&input, &config.null_replacement)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_post() -> Value {
        json!({
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "id": 1050118621198921728_i64,
            "id_str": "1050118621198921728",
            "text": "To make room for more expression",
            "source": "<a href=\"http://twitter.com\" rel=\"nofollow\">Twitter Web Client</a>",
            "truncated": false,
            "in_reply_to_status_id": null,
            "in_reply_to_status_id_str": null,
            "in_reply_to_user_id": null,
            "in_reply_to_user_id_str": null,
            "user": {"id": 6253282, "id_str": "6253282"},
            "lang": "en",
            "retweet_count": 161,
            "quote_count": 4,
            "reply_count": 9
        })
    }

    #[test]
    fn test_map_plain_post() {
        let record = map_post(&base_post(), &ExtractorConfig::default()).unwrap();

        assert_eq!(record.id, 1050118621198921728);
        assert_eq!(record.user_id, 6253282);
        assert_eq!(record.created_at, "2018-10-10 20:19:24");
        assert_eq!(record.source, "Twitter Web Client");
        assert_eq!(record.lang.as_deref(), Some("en"));
        assert_eq!((record.retweet_count, record.quote_count, record.reply_count), (161, 4, 9));
        assert_eq!(record.in_reply_to_status_id, None);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let mut raw = base_post();
        let object = raw.as_object_mut().unwrap();
        object.remove("quote_count");
        object.remove("reply_count");

        let record = map_post(&raw, &ExtractorConfig::default()).unwrap();
        assert_eq!(record.quote_count, 0);
        assert_eq!(record.reply_count, 0);
    }

    #[test]
    fn test_missing_retweet_count_fails() {
        let mut raw = base_post();
        raw.as_object_mut().unwrap().remove("retweet_count");

        assert_eq!(
            map_post(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::missing("retweet_count", "post"))
        );
    }

    #[test]
    fn test_mistyped_counter_is_not_defaulted() {
        let mut raw = base_post();
        raw["reply_count"] = json!("nine");

        assert!(matches!(
            map_post(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_reply_targets_pass_through() {
        let mut raw = base_post();
        raw["in_reply_to_status_id"] = json!(1050118621198921700_i64);
        raw["in_reply_to_status_id_str"] = json!("1050118621198921700");
        raw["in_reply_to_user_id"] = json!(783214);
        raw["in_reply_to_user_id_str"] = json!("783214");

        let record = map_post(&raw, &ExtractorConfig::default()).unwrap();
        assert_eq!(record.in_reply_to_status_id, Some(1050118621198921700));
        assert_eq!(record.in_reply_to_user_id_str.as_deref(), Some("783214"));
    }

    #[test]
    fn test_reply_target_keys_are_required() {
        let mut raw = base_post();
        raw.as_object_mut().unwrap().remove("in_reply_to_user_id");

        assert_eq!(
            map_post(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::missing("in_reply_to_user_id", "post"))
        );
    }

    #[test]
    fn test_malformed_created_at() {
        let mut raw = base_post();
        raw["created_at"] = json!("2018-10-10 20:19:24");

        assert!(matches!(
            map_post(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::MalformedTimestamp { .. })
        ));
    }

    #[test]
    fn test_repost_maps_payload_and_link() {
        let mut payload = base_post();
        payload["id"] = json!(1);
        let raw = json!({
            "id": 2,
            "id_str": "2",
            "text": "RT @TwitterAPI: To make room\0",
            "user": {"id": 42},
            "retweeted_status": payload
        });
        let config = ExtractorConfig::default();

        assert_eq!(map_post(&raw, &config).unwrap().id, 1);

        let link = map_repost_link(&raw, &config).unwrap();
        assert_eq!(
            link,
            RepostLinkRecord {
                tweet_id: 2,
                retweeted_id: 1,
                retweet_user: 42,
                retweet_text: "RT @TwitterAPI: To make room ".to_string(),
            }
        );
    }

    #[test]
    fn test_quote_link_uses_wrapper_text() {
        let raw = json!({
            "id": 5,
            "full_text": "look at this",
            "user": {"id": 7},
            "quoted_status": {"id": 4, "text": "original"}
        });

        let link = map_quote_link(&raw, &ExtractorConfig::default()).unwrap();
        assert_eq!(link.quoted_id, 4);
        assert_eq!(link.quoted_user, 7);
        assert_eq!(link.quoted_text, "look at this");
    }

    #[test]
    fn test_link_without_author_is_inconsistent() {
        let raw = json!({"id": 5, "text": "x", "quoted_status": {"id": 4}});
        assert!(matches!(
            map_quote_link(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::InconsistentLink { kind: PostKind::Quote, .. })
        ));
    }

    #[test]
    fn test_link_without_payload_id_is_inconsistent() {
        let raw = json!({"id": 5, "text": "x", "user": {"id": 1}, "retweeted_status": {"text": "y"}});
        assert!(matches!(
            map_repost_link(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::InconsistentLink { kind: PostKind::Retweet, .. })
        ));
    }

    #[test]
    fn test_link_for_wrong_kind_is_inconsistent() {
        let raw = json!({"id": 5, "text": "x", "user": {"id": 1}});
        assert!(matches!(
            map_repost_link(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::InconsistentLink { .. })
        ));

        let raw = json!({"id": 5, "text": "x", "user": {"id": 1}, "retweeted_status": {"id": 4}});
        assert!(matches!(
            map_quote_link(&raw, &ExtractorConfig::default()),
            Err(ExtractorError::InconsistentLink { .. })
        ));
    }
}
