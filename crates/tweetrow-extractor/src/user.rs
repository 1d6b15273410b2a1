//! Author profile mapping
//!
//! Profiles are projected onto the fixed `tweet_user` columns. Raw keys with
//! no column, notably the bulky `entities`, `time_zone`,
//! `profile_background_image_url_https`, `is_translation_enabled`,
//! `profile_banner_url` and `has_extended_profile`, are simply never read.
//! The input document is left untouched.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::fields::Fields;
use crate::parse::{parse_timestamp, sanitize, sanitize_opt};
use crate::resolve::{canonical_post, input_post};
use serde_json::Value;
use tweetrow_domain::UserRecord;

/// Author of the outer input post
pub fn input_author(raw: &Value) -> Result<Fields<'_>> {
    input_post(raw)?.object("user", "user")
}

/// Author of the canonical post
pub fn canonical_author(raw: &Value) -> Result<Fields<'_>> {
    canonical_post(raw)?.object("user", "user")
}

/// Project a user object onto the profile columns
pub fn map_user(user: &Fields<'_>, config: &ExtractorConfig) -> Result<UserRecord> {
    let replacement = config.null_replacement.as_str();
    let text = |key: &str| -> Result<Option<String>> { Ok(user.opt_str(key)?.map(str::to_string)) };
    let count = |key: &str| -> Result<i64> { Ok(user.opt_i64(key)?.unwrap_or(0)) };
    let flag = |key: &str| -> Result<bool> { Ok(user.opt_bool(key)?.unwrap_or(false)) };

    Ok(UserRecord {
        id: user.require_i64("id")?,
        id_str: user.require_str("id_str")?.to_string(),
        name: sanitize(user.require_str("name")?, replacement).into_owned(),
        screen_name: user.require_str("screen_name")?.to_string(),
        location: sanitize_opt(user.opt_str("location")?, replacement),
        description: sanitize_opt(user.opt_str("description")?, replacement),
        url: text("url")?,
        protected: flag("protected")?,
        followers_count: count("followers_count")?,
        friends_count: count("friends_count")?,
        listed_count: count("listed_count")?,
        created_at: parse_timestamp(user.require_str("created_at")?, config)?,
        favourites_count: count("favourites_count")?,
        utc_offset: user.opt_i64("utc_offset")?,
        geo_enabled: flag("geo_enabled")?,
        verified: flag("verified")?,
        statuses_count: count("statuses_count")?,
        lang: text("lang")?,
        contributors_enabled: flag("contributors_enabled")?,
        is_translator: flag("is_translator")?,
        profile_background_color: text("profile_background_color")?,
        profile_background_image_url: text("profile_background_image_url")?,
        profile_background_tile: flag("profile_background_tile")?,
        profile_image_url: text("profile_image_url")?,
        profile_image_url_https: text("profile_image_url_https")?,
        profile_link_color: text("profile_link_color")?,
        profile_sidebar_border_color: text("profile_sidebar_border_color")?,
        profile_sidebar_fill_color: text("profile_sidebar_fill_color")?,
        profile_text_color: text("profile_text_color")?,
        profile_use_background_image: flag("profile_use_background_image")?,
        default_profile: flag("default_profile")?,
        default_profile_image: flag("default_profile_image")?,
        following: user.opt_bool("following")?,
        follow_request_sent: user.opt_bool("follow_request_sent")?,
        notifications: user.opt_bool("notifications")?,
        translator_type: text("translator_type")?,
    })
}
