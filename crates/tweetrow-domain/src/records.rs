//! Row records - one flattened record type per destination table
//!
//! Field names are the destination column names, so serializing a record
//! yields exactly the column set of its table. Optional values serialize
//! as `null` rather than being skipped.

use crate::table::Table;
use crate::traits::Row;
use serde::{Deserialize, Serialize};

/// A canonical post, written to `twitter.tweet`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post id
    pub id: i64,

    /// Post id as a string
    pub id_str: String,

    /// Author id
    pub user_id: i64,

    /// Creation time as `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,

    /// Resolved, sanitized display text
    pub text: String,

    /// Client label extracted from the source markup
    pub source: String,

    /// Whether the legacy text was truncated
    pub truncated: bool,

    /// BCP 47 language tag
    pub lang: Option<String>,

    /// Repost count
    pub retweet_count: i64,

    /// Quote count (0 on post shapes that predate it)
    pub quote_count: i64,

    /// Reply count (0 on post shapes that predate it)
    pub reply_count: i64,

    /// Replied-to post id
    pub in_reply_to_status_id: Option<i64>,

    /// Replied-to post id as a string
    pub in_reply_to_status_id_str: Option<String>,

    /// Replied-to author id
    pub in_reply_to_user_id: Option<i64>,

    /// Replied-to author id as a string
    pub in_reply_to_user_id_str: Option<String>,
}

/// Link from a repost wrapper to the post it reposts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepostLinkRecord {
    /// Id of the wrapping (input) post
    pub tweet_id: i64,

    /// Id of the reposted (canonical) post
    pub retweeted_id: i64,

    /// Author of the wrapping post
    pub retweet_user: i64,

    /// Text of the wrapping post
    pub retweet_text: String,
}

/// Link from a quote wrapper to the post it quotes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLinkRecord {
    /// Id of the wrapping (input) post
    pub tweet_id: i64,

    /// Id of the quoted (canonical) post
    pub quoted_id: i64,

    /// Author of the wrapping post
    pub quoted_user: i64,

    /// Text of the wrapping post
    pub quoted_text: String,
}

/// Author profile, written to `twitter.tweet_user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User id
    pub id: i64,
    /// User id as a string
    pub id_str: String,
    /// Display name (sanitized)
    pub name: String,
    /// Handle without the `@`
    pub screen_name: String,
    /// Free-form location (sanitized)
    pub location: Option<String>,
    /// Profile bio (sanitized)
    pub description: Option<String>,
    /// Profile link
    pub url: Option<String>,
    /// Whether the account is protected
    pub protected: bool,
    /// Follower count
    pub followers_count: i64,
    /// Following count
    pub friends_count: i64,
    /// Number of lists the user is on
    pub listed_count: i64,
    /// Account creation time as `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
    /// Likes count
    pub favourites_count: i64,
    /// UTC offset in seconds
    pub utc_offset: Option<i64>,
    /// Whether geotagging is enabled
    pub geo_enabled: bool,
    /// Verified badge
    pub verified: bool,
    /// Post count
    pub statuses_count: i64,
    /// Interface language
    pub lang: Option<String>,
    /// Contributor mode
    pub contributors_enabled: bool,
    /// Translator community member
    pub is_translator: bool,
    #[allow(missing_docs)]
    pub profile_background_color: Option<String>,
    #[allow(missing_docs)]
    pub profile_background_image_url: Option<String>,
    #[allow(missing_docs)]
    pub profile_background_tile: bool,
    #[allow(missing_docs)]
    pub profile_image_url: Option<String>,
    #[allow(missing_docs)]
    pub profile_image_url_https: Option<String>,
    #[allow(missing_docs)]
    pub profile_link_color: Option<String>,
    #[allow(missing_docs)]
    pub profile_sidebar_border_color: Option<String>,
    #[allow(missing_docs)]
    pub profile_sidebar_fill_color: Option<String>,
    #[allow(missing_docs)]
    pub profile_text_color: Option<String>,
    #[allow(missing_docs)]
    pub profile_use_background_image: bool,
    /// Untouched profile theme
    pub default_profile: bool,
    /// Untouched avatar
    pub default_profile_image: bool,
    /// Viewer-relative; null outside authenticated contexts
    pub following: Option<bool>,
    /// Viewer-relative; null outside authenticated contexts
    pub follow_request_sent: Option<bool>,
    /// Viewer-relative; null outside authenticated contexts
    pub notifications: Option<bool>,
    /// Translator role
    pub translator_type: Option<String>,
}

/// Every hashtag of a post, serialized as one JSON list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagRecord {
    /// Owning post id
    pub tweet_id: i64,

    /// JSON text of the raw hashtag entity list
    pub hashtag: String,
}

/// Every cashtag of a post, serialized as one JSON list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Owning post id
    pub tweet_id: i64,

    /// JSON text of the raw symbol entity list
    pub symbol: String,
}

/// One mentioned user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionRecord {
    /// Mentioned handle
    pub screen_name: String,

    /// Mentioned display name
    pub name: Option<String>,

    /// Mentioned user id
    pub id: i64,

    /// Mentioned user id as a string
    pub id_str: String,

    /// Owning post id
    pub tweet_id: i64,
}

/// One attached media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Media id
    pub id: i64,

    /// Media id as a string
    pub id_str: String,

    /// Plain-http asset URL
    pub media_url: Option<String>,

    /// https asset URL
    pub media_url_https: Option<String>,

    /// Shortened URL shown in the text
    pub display_url: Option<String>,

    /// Full permalink
    pub expanded_url: Option<String>,

    /// `photo`, `video` or `animated_gif`
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Owning post id
    pub tweet_id: i64,
}

/// Geotag place of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    /// Place API URL
    pub url: Option<String>,

    /// `city`, `poi`, `admin`, ...
    pub place_type: Option<String>,

    /// Short name
    pub name: Option<String>,

    /// Full name
    pub full_name: Option<String>,

    /// ISO country code
    pub country_code: Option<String>,

    /// Country name
    pub country: Option<String>,

    /// Bounding-box coordinates serialized as JSON text
    pub coordinates: Option<String>,

    /// Owning post id
    pub tweet_id: i64,
}

impl Row for PostRecord {
    const TABLE: Table = Table::Tweet;
}

impl Row for RepostLinkRecord {
    const TABLE: Table = Table::RetweetedTweet;
}

impl Row for QuoteLinkRecord {
    const TABLE: Table = Table::QuotedTweet;
}

impl Row for UserRecord {
    const TABLE: Table = Table::TweetUser;
}

impl Row for HashtagRecord {
    const TABLE: Table = Table::Hashtags;
}

impl Row for SymbolRecord {
    const TABLE: Table = Table::Symbol;
}

impl Row for MentionRecord {
    const TABLE: Table = Table::UserMentions;
}

impl Row for MediaRecord {
    const TABLE: Table = Table::Media;
}

impl Row for PlaceRecord {
    const TABLE: Table = Table::Place;
}
