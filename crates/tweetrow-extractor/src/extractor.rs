//! Core Extractor implementation

use crate::config::{EntityScope, ExtractorConfig};
use crate::entities::{self, MediaItems, Mentions};
use crate::error::{ExtractorError, Result};
use crate::place::normalize_place;
use crate::post::{map_post, map_quote_link, map_repost_link};
use crate::resolve::{classify, select_post};
use crate::user::{canonical_author, input_author, map_user};
use serde_json::Value;
use tracing::{debug, trace};
use tweetrow_domain::{
    ExtractedPost, HashtagRecord, PlaceRecord, PostKind, PostRecord, QuoteLinkRecord,
    RepostLinkRecord, SymbolRecord, UserRecord,
};

/// The Extractor turns one raw post into its destination rows
///
/// Holds only its configuration, so one instance can serve any number of
/// threads. Inputs are borrowed and never modified.
#[derive(Debug, Clone, Default)]
pub struct PostExtractor {
    config: ExtractorConfig,
}

impl PostExtractor {
    /// Create a new Extractor, rejecting an invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse JSON text, then extract
    pub fn extract_str(&self, json: &str) -> Result<ExtractedPost> {
        let raw: Value = serde_json::from_str(json)?;
        self.extract(&raw)
    }

    /// Extract every row of one post
    ///
    /// All-or-nothing: the first failing stage aborts the whole document.
    pub fn extract(&self, raw: &Value) -> Result<ExtractedPost> {
        let kind = classify(raw)?;

        // A wrapper must name its payload and author before anything is mapped
        let repost = match kind {
            PostKind::Retweet => Some(self.repost_link(raw)?),
            _ => None,
        };
        let quote = match kind {
            PostKind::Quote => Some(self.quote_link(raw)?),
            _ => None,
        };

        let post = self.post(raw)?;
        debug!("Extracting post {} ({})", post.id, kind);
        let users = self.users(raw, kind)?;

        let scope = self.config.entity_scope;
        let hashtags = self.hashtags(raw, scope)?;
        let symbols = self.symbols(raw, scope)?;
        let mentions = self.mentions(raw, scope)?.collect::<Result<Vec<_>>>()?;
        let media = self.media(raw, scope)?.collect::<Result<Vec<_>>>()?;
        let place = self.place(raw, scope)?;

        trace!(
            "Post {}: {} users, {} mentions, {} media, hashtags={}, symbols={}, place={}",
            post.id,
            users.len(),
            mentions.len(),
            media.len(),
            hashtags.is_some(),
            symbols.is_some(),
            place.is_some()
        );

        Ok(ExtractedPost {
            kind,
            post,
            users,
            repost,
            quote,
            hashtags,
            symbols,
            mentions,
            media,
            place,
        })
    }

    /// The canonical post row
    pub fn post(&self, raw: &Value) -> Result<PostRecord> {
        map_post(raw, &self.config)
    }

    /// Profile of the outer input's author
    pub fn input_user(&self, raw: &Value) -> Result<UserRecord> {
        map_user(&input_author(raw)?, &self.config)
    }

    /// Profile of the canonical post's author
    pub fn canonical_user(&self, raw: &Value) -> Result<UserRecord> {
        map_user(&canonical_author(raw)?, &self.config)
    }

    /// Input author, then the canonical author when configured and distinct
    pub fn users(&self, raw: &Value, kind: PostKind) -> Result<Vec<UserRecord>> {
        let mut users = vec![self.input_user(raw)?];
        if kind.is_wrapper() && self.config.include_canonical_author {
            let author = self.canonical_user(raw)?;
            if users.iter().all(|u| u.id != author.id) {
                users.push(author);
            }
        }
        Ok(users)
    }

    /// Repost link row; the input must be a repost
    pub fn repost_link(&self, raw: &Value) -> Result<RepostLinkRecord> {
        map_repost_link(raw, &self.config)
    }

    /// Quote link row; the input must be a quote
    pub fn quote_link(&self, raw: &Value) -> Result<QuoteLinkRecord> {
        map_quote_link(raw, &self.config)
    }

    /// Aggregated hashtags of the scoped post
    pub fn hashtags(&self, raw: &Value, scope: EntityScope) -> Result<Option<HashtagRecord>> {
        entities::hashtags(&select_post(raw, scope)?, &self.config)
    }

    /// Aggregated symbols of the scoped post
    pub fn symbols(&self, raw: &Value, scope: EntityScope) -> Result<Option<SymbolRecord>> {
        entities::symbols(&select_post(raw, scope)?, &self.config)
    }

    /// Lazy mention rows of the scoped post
    pub fn mentions<'a>(&'a self, raw: &'a Value, scope: EntityScope) -> Result<Mentions<'a>> {
        entities::mentions(&select_post(raw, scope)?, &self.config)
    }

    /// Lazy media rows of the scoped post
    pub fn media<'a>(&'a self, raw: &'a Value, scope: EntityScope) -> Result<MediaItems<'a>> {
        entities::media(&select_post(raw, scope)?, &self.config)
    }

    /// Place of the scoped post
    pub fn place(&self, raw: &Value, scope: EntityScope) -> Result<Option<PlaceRecord>> {
        normalize_place(&select_post(raw, scope)?, &self.config)
    }
}
