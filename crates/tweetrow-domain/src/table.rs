//! Destination tables and their fixed insert statements
//!
//! Every statement lives in the `twitter` schema, binds positional
//! parameters in [`Table::columns`] order, and skips rows that conflict on
//! the table's key.

use std::fmt;

/// Schema holding every destination table
pub const SCHEMA: &str = "twitter";

/// Insert into `twitter.tweet_user`, keyed by user id
pub const TWEET_USER_INSERT: &str = r#"insert into "twitter"."tweet_user" ("id", "id_str", "name", "screen_name", "location", "description", "url", "protected", "followers_count", "friends_count", "listed_count", "created_at", "favourites_count", "utc_offset", "geo_enabled", "verified", "statuses_count", "lang", "contributors_enabled", "is_translator", "profile_background_color", "profile_background_image_url", "profile_background_tile", "profile_image_url", "profile_image_url_https", "profile_link_color", "profile_sidebar_border_color", "profile_sidebar_fill_color", "profile_text_color", "profile_use_background_image", "default_profile", "default_profile_image", "following", "follow_request_sent", "notifications", "translator_type") values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30, $31, $32, $33, $34, $35, $36) on conflict do nothing"#;

/// Insert into `twitter.tweet`, keyed by post id
pub const TWEET_INSERT: &str = r#"insert into "twitter"."tweet" ("id", "id_str", "user_id", "created_at", "text", "source", "truncated", "lang", "retweet_count", "quote_count", "reply_count", "in_reply_to_status_id", "in_reply_to_status_id_str", "in_reply_to_user_id", "in_reply_to_user_id_str") values ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) on conflict do nothing"#;

/// Insert into `twitter.retweeted_tweet`, keyed by the wrapping post id
pub const RETWEETED_TWEET_INSERT: &str = r#"insert into "twitter"."retweeted_tweet" ("tweet_id", "retweeted_id", "retweet_user", "retweet_text") values ($1, $2, $3, $4) on conflict do nothing"#;

/// Insert into `twitter.quoted_tweet`, keyed by the wrapping post id
pub const QUOTED_TWEET_INSERT: &str = r#"insert into "twitter"."quoted_tweet" ("tweet_id", "quoted_id", "quoted_user", "quoted_text") values ($1, $2, $3, $4) on conflict do nothing"#;

/// Insert into `twitter.hashtags`, keyed by post id and serialized list
pub const HASHTAGS_INSERT: &str = r#"insert into "twitter"."hashtags" ("tweet_id", "hashtag") values ($1, $2) on conflict do nothing"#;

/// Insert into `twitter.symbol`, keyed by post id and serialized list
pub const SYMBOL_INSERT: &str = r#"insert into "twitter"."symbol" ("tweet_id", "symbol") values ($1, $2) on conflict do nothing"#;

/// Insert into `twitter.place`, keyed by post id
pub const PLACE_INSERT: &str = r#"insert into "twitter"."place" ("url", "place_type", "name", "full_name", "country_code", "country", "coordinates", "tweet_id") values ($1, $2, $3, $4, $5, $6, $7, $8) on conflict do nothing"#;

/// Insert into `twitter.media`, keyed by media id and post id
pub const MEDIA_INSERT: &str = r#"insert into "twitter"."media" ("id", "id_str", "media_url", "media_url_https", "display_url", "expanded_url", "type", "tweet_id") values ($1, $2, $3, $4, $5, $6, $7, $8) on conflict do nothing"#;

/// Insert into `twitter.user_mentions`, keyed by mentioned user id and post id
pub const USER_MENTIONS_INSERT: &str = r#"insert into "twitter"."user_mentions" ("screen_name", "name", "id", "id_str", "tweet_id") values ($1, $2, $3, $4, $5) on conflict do nothing"#;

const TWEET_USER_COLUMNS: &[&str] = &[
    "id",
    "id_str",
    "name",
    "screen_name",
    "location",
    "description",
    "url",
    "protected",
    "followers_count",
    "friends_count",
    "listed_count",
    "created_at",
    "favourites_count",
    "utc_offset",
    "geo_enabled",
    "verified",
    "statuses_count",
    "lang",
    "contributors_enabled",
    "is_translator",
    "profile_background_color",
    "profile_background_image_url",
    "profile_background_tile",
    "profile_image_url",
    "profile_image_url_https",
    "profile_link_color",
    "profile_sidebar_border_color",
    "profile_sidebar_fill_color",
    "profile_text_color",
    "profile_use_background_image",
    "default_profile",
    "default_profile_image",
    "following",
    "follow_request_sent",
    "notifications",
    "translator_type",
];

const TWEET_COLUMNS: &[&str] = &[
    "id",
    "id_str",
    "user_id",
    "created_at",
    "text",
    "source",
    "truncated",
    "lang",
    "retweet_count",
    "quote_count",
    "reply_count",
    "in_reply_to_status_id",
    "in_reply_to_status_id_str",
    "in_reply_to_user_id",
    "in_reply_to_user_id_str",
];

const RETWEETED_TWEET_COLUMNS: &[&str] = &["tweet_id", "retweeted_id", "retweet_user", "retweet_text"];
const QUOTED_TWEET_COLUMNS: &[&str] = &["tweet_id", "quoted_id", "quoted_user", "quoted_text"];
const HASHTAGS_COLUMNS: &[&str] = &["tweet_id", "hashtag"];
const SYMBOL_COLUMNS: &[&str] = &["tweet_id", "symbol"];

const PLACE_COLUMNS: &[&str] = &[
    "url",
    "place_type",
    "name",
    "full_name",
    "country_code",
    "country",
    "coordinates",
    "tweet_id",
];

const MEDIA_COLUMNS: &[&str] = &[
    "id",
    "id_str",
    "media_url",
    "media_url_https",
    "display_url",
    "expanded_url",
    "type",
    "tweet_id",
];

const USER_MENTIONS_COLUMNS: &[&str] = &["screen_name", "name", "id", "id_str", "tweet_id"];

/// A destination table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Author profiles
    TweetUser,
    /// Canonical posts
    Tweet,
    /// Repost links
    RetweetedTweet,
    /// Quote links
    QuotedTweet,
    /// Aggregated hashtag lists
    Hashtags,
    /// Aggregated cashtag lists
    Symbol,
    /// Geotag places
    Place,
    /// Attached media
    Media,
    /// Mentioned users
    UserMentions,
}

impl Table {
    /// Every table, in the order rows should be written
    ///
    /// Users and posts come first so link and entity rows never reference
    /// a row that does not exist yet.
    pub const ALL: [Table; 9] = [
        Table::TweetUser,
        Table::Tweet,
        Table::RetweetedTweet,
        Table::QuotedTweet,
        Table::Hashtags,
        Table::Symbol,
        Table::Place,
        Table::Media,
        Table::UserMentions,
    ];

    /// Unqualified table name
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::TweetUser => "tweet_user",
            Table::Tweet => "tweet",
            Table::RetweetedTweet => "retweeted_tweet",
            Table::QuotedTweet => "quoted_tweet",
            Table::Hashtags => "hashtags",
            Table::Symbol => "symbol",
            Table::Place => "place",
            Table::Media => "media",
            Table::UserMentions => "user_mentions",
        }
    }

    /// Columns bound by the insert statement, in placeholder order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::TweetUser => TWEET_USER_COLUMNS,
            Table::Tweet => TWEET_COLUMNS,
            Table::RetweetedTweet => RETWEETED_TWEET_COLUMNS,
            Table::QuotedTweet => QUOTED_TWEET_COLUMNS,
            Table::Hashtags => HASHTAGS_COLUMNS,
            Table::Symbol => SYMBOL_COLUMNS,
            Table::Place => PLACE_COLUMNS,
            Table::Media => MEDIA_COLUMNS,
            Table::UserMentions => USER_MENTIONS_COLUMNS,
        }
    }

    /// The fixed `insert ... on conflict do nothing` statement
    pub fn insert_statement(&self) -> &'static str {
        match self {
            Table::TweetUser => TWEET_USER_INSERT,
            Table::Tweet => TWEET_INSERT,
            Table::RetweetedTweet => RETWEETED_TWEET_INSERT,
            Table::QuotedTweet => QUOTED_TWEET_INSERT,
            Table::Hashtags => HASHTAGS_INSERT,
            Table::Symbol => SYMBOL_INSERT,
            Table::Place => PLACE_INSERT,
            Table::Media => MEDIA_INSERT,
            Table::UserMentions => USER_MENTIONS_INSERT,
        }
    }

    /// Schema-qualified, quoted table name as it appears in the statement
    pub fn qualified_name(&self) -> String {
        format!("\"{}\".\"{}\"", SCHEMA, self.as_str())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", SCHEMA, self.as_str())
    }
}
