//! Place normalization
//!
//! The nested geo structure is flattened to its descriptive fields plus a
//! single coordinate string. `id`, `contained_within` and `attributes` have
//! no column and are not read.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::fields::Fields;
use crate::parse::sanitize_opt;
use tweetrow_domain::PlaceRecord;

/// Flattened place of a post, `None` when the post has no place
///
/// A missing or null bounding box yields `coordinates: None`; that is an
/// expected shape, not an error.
pub fn normalize_place(post: &Fields<'_>, config: &ExtractorConfig) -> Result<Option<PlaceRecord>> {
    let Some(place) = post.opt_object("place", "place")? else {
        return Ok(None);
    };
    let replacement = config.null_replacement.as_str();
    let text = |key: &str| -> Result<Option<String>> { Ok(place.opt_str(key)?.map(str::to_string)) };

    Ok(Some(PlaceRecord {
        url: text("url")?,
        place_type: text("place_type")?,
        name: sanitize_opt(place.opt_str("name")?, replacement),
        full_name: sanitize_opt(place.opt_str("full_name")?, replacement),
        country_code: text("country_code")?,
        country: text("country")?,
        coordinates: coordinates(&place)?,
        tweet_id: post.require_i64("id")?,
    }))
}

/// `bounding_box.coordinates` as compact JSON text
fn coordinates(place: &Fields<'_>) -> Result<Option<String>> {
    let Some(bounding_box) = place.opt_object("bounding_box", "bounding_box")? else {
        return Ok(None);
    };
    bounding_box
        .get("coordinates")
        .map(serde_json::to_string)
        .transpose()
        .map_err(Into::into)
}
