//! Entity unpacking: hashtags, symbols, mentions, media
//!
//! Hashtags and symbols are kept as one JSON list per post, written as
//! compact JSON with every item's keys in source order. Mentions and
//! media are expanded one row per item through lazy iterators; collect them
//! with `collect::<Result<Vec<_>>>()` to get all rows or the first error.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::fields::Fields;
use crate::parse::sanitize_opt;
use serde_json::Value;
use std::fmt;
use std::slice;
use tweetrow_domain::{HashtagRecord, MediaRecord, MentionRecord, SymbolRecord};

/// Per-item rows of one entity list, tagged with the owning post id
pub struct EntityItems<'a, T> {
    items: slice::Iter<'a, Value>,
    tweet_id: i64,
    replacement: &'a str,
    context: &'static str,
    map: fn(Fields<'a>, i64, &str) -> Result<T>,
}

/// Mentioned users of a post
pub type Mentions<'a> = EntityItems<'a, MentionRecord>;

/// Media items of a post
pub type MediaItems<'a> = EntityItems<'a, MediaRecord>;

impl<'a, T> EntityItems<'a, T> {
    /// Id of the post every item is attached to
    pub fn tweet_id(&self) -> i64 {
        self.tweet_id
    }
}

impl<T> Clone for EntityItems<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            tweet_id: self.tweet_id,
            replacement: self.replacement,
            context: self.context,
            map: self.map,
        }
    }
}

impl<T> fmt::Debug for EntityItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityItems")
            .field("context", &self.context)
            .field("tweet_id", &self.tweet_id)
            .field("remaining", &self.items.len())
            .finish()
    }
}

impl<'a, T> Iterator for EntityItems<'a, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        Some(Fields::new(item, self.context).and_then(|f| (self.map)(f, self.tweet_id, self.replacement)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for EntityItems<'_, T> {}

/// Aggregated hashtag row, `None` for an absent or empty list
pub fn hashtags(post: &Fields<'_>, config: &ExtractorConfig) -> Result<Option<HashtagRecord>> {
    Ok(aggregate(post, "hashtags", config)?.map(|(tweet_id, hashtag)| HashtagRecord { tweet_id, hashtag }))
}

/// Aggregated symbol row, `None` for an absent or empty list
pub fn symbols(post: &Fields<'_>, config: &ExtractorConfig) -> Result<Option<SymbolRecord>> {
    Ok(aggregate(post, "symbols", config)?.map(|(tweet_id, symbol)| SymbolRecord { tweet_id, symbol }))
}

/// One row per mentioned user; empty when the post has no mention list
pub fn mentions<'a>(post: &Fields<'a>, config: &'a ExtractorConfig) -> Result<Mentions<'a>> {
    let list = entity_block(post, config)?
        .map(|entities| entities.opt_array("user_mentions"))
        .transpose()?
        .flatten();
    items(post, list, config, "user_mentions item", mention_record)
}

/// One row per media item; empty when the post has no media list
pub fn media<'a>(post: &Fields<'a>, config: &'a ExtractorConfig) -> Result<MediaItems<'a>> {
    items(post, media_list(post, config)?, config, "media item", media_record)
}

fn items<'a, T>(
    post: &Fields<'a>,
    list: Option<&'a [Value]>,
    config: &'a ExtractorConfig,
    context: &'static str,
    map: fn(Fields<'a>, i64, &str) -> Result<T>,
) -> Result<EntityItems<'a, T>> {
    Ok(EntityItems {
        items: list.unwrap_or_default().iter(),
        tweet_id: post.require_i64("id")?,
        replacement: &config.null_replacement,
        context,
        map,
    })
}

fn mention_record(item: Fields<'_>, tweet_id: i64, replacement: &str) -> Result<MentionRecord> {
    Ok(MentionRecord {
        screen_name: item.require_str("screen_name")?.to_string(),
        name: sanitize_opt(item.opt_str("name")?, replacement),
        id: item.require_i64("id")?,
        id_str: item.require_str("id_str")?.to_string(),
        tweet_id,
    })
}

fn media_record(item: Fields<'_>, tweet_id: i64, _replacement: &str) -> Result<MediaRecord> {
    let text = |key: &str| -> Result<Option<String>> { Ok(item.opt_str(key)?.map(str::to_string)) };

    Ok(MediaRecord {
        id: item.require_i64("id")?,
        id_str: item.require_str("id_str")?.to_string(),
        media_url: text("media_url")?,
        media_url_https: text("media_url_https")?,
        display_url: text("display_url")?,
        expanded_url: text("expanded_url")?,
        kind: text("type")?,
        tweet_id,
    })
}

/// `(tweet_id, json)` for a non-empty entity list
fn aggregate(post: &Fields<'_>, key: &str, config: &ExtractorConfig) -> Result<Option<(i64, String)>> {
    let list = entity_block(post, config)?
        .map(|entities| entities.opt_array(key))
        .transpose()?
        .flatten();

    match list {
        Some(items) if !items.is_empty() => {
            Ok(Some((post.require_i64("id")?, serde_json::to_string(items)?)))
        }
        _ => Ok(None),
    }
}

/// The entity block to read: `extended_tweet.entities` when preferred and
/// present, otherwise `entities`
fn entity_block<'a>(post: &Fields<'a>, config: &ExtractorConfig) -> Result<Option<Fields<'a>>> {
    if config.prefer_extended_entities {
        if let Some(extended) = post.opt_object("extended_tweet", "extended_tweet")? {
            if let Some(entities) = extended.opt_object("entities", "extended_tweet.entities")? {
                return Ok(Some(entities));
            }
        }
    }
    post.opt_object("entities", "entities")
}

/// The media list to read
///
/// `extended_entities.media` lists every attached item while
/// `entities.media` only lists the first, so the extended lists win when
/// preferred.
fn media_list<'a>(post: &Fields<'a>, config: &ExtractorConfig) -> Result<Option<&'a [Value]>> {
    if config.prefer_extended_entities {
        let extended_tweet = post.opt_object("extended_tweet", "extended_tweet")?;
        for holder in extended_tweet.iter().chain(Some(post)) {
            if let Some(extended) = holder.opt_object("extended_entities", "extended_entities")? {
                if let Some(list) = extended.opt_array("media")? {
                    return Ok(Some(list));
                }
            }
        }
    }

    Ok(entity_block(post, config)?
        .map(|entities| entities.opt_array("media"))
        .transpose()?
        .flatten())
}
