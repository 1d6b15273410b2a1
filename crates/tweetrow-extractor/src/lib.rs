//! Tweetrow Extractor
//!
//! Projects one Twitter v1.1 post document onto the parameter sets of the
//! `twitter` relational schema.
//!
//! # Overview
//!
//! Every input document is classified (original, retweet or quote), reduced
//! to its canonical post, and flattened into one record per destination row:
//! the post, its authors, the repost or quote link, aggregated hashtags and
//! symbols, one row per mention and media item, and the flattened place.
//!
//! # Architecture
//!
//! ```text
//! JSON → classify → resolve canonical post → map stages → ExtractedPost → RecordSink
//! ```
//!
//! # Key Features
//!
//! - **Pure Projection**: The input `Value` is borrowed and never modified
//! - **Typed Failures**: Missing fields, type mismatches, bad timestamps and
//!   inconsistent links are distinct [`ExtractorError`] variants
//! - **Lazy Entities**: Mentions and media are streamed by restartable iterators
//! - **Configurable**: Sentinel replacement, timestamp formats and entity scope
//!   load from TOML
//!
//! # Example Usage
//!
//! ```
//! use tweetrow_extractor::{ExtractorConfig, PostExtractor};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = PostExtractor::new(ExtractorConfig::default())?;
//!
//! let extracted = extractor.extract_str(r#"{
//!     "created_at": "Wed Oct 10 20:19:24 +0000 2018",
//!     "id": 1050118621198921728,
//!     "id_str": "1050118621198921728",
//!     "text": "To make room for more expression",
//!     "source": "<a href=\"http://twitter.com\" rel=\"nofollow\">Twitter Web Client</a>",
//!     "in_reply_to_status_id": null,
//!     "in_reply_to_status_id_str": null,
//!     "in_reply_to_user_id": null,
//!     "in_reply_to_user_id_str": null,
//!     "retweet_count": 0,
//!     "user": {
//!         "id": 6253282,
//!         "id_str": "6253282",
//!         "name": "Twitter API",
//!         "screen_name": "TwitterAPI",
//!         "created_at": "Wed May 23 06:01:13 +0000 2007"
//!     }
//! }"#)?;
//!
//! let mut rows = Vec::<tweetrow_domain::InsertRow>::new();
//! let written = extracted.write_to(&mut rows)?;
//! assert_eq!(written, 2);
//! assert_eq!(extracted.post.source, "Twitter Web Client");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(test, recursion_limit = "256")]

mod config;
mod entities;
mod error;
mod extractor;
mod fields;
mod parse;
mod place;
mod post;
mod resolve;
mod user;


pub use config::{EntityScope, ExtractorConfig};
pub use entities::{hashtags, media, mentions, symbols, EntityItems, MediaItems, Mentions};
pub use error::{ExtractorError, Result};
pub use extractor::PostExtractor;
pub use fields::Fields;
pub use parse::{app_source, parse_timestamp, sanitize};
pub use place::normalize_place;
pub use post::{map_post, map_quote_link, map_repost_link};
pub use resolve::{
    canonical_post, classify, input_post, resolve_text, select_post, text_source, TextSource,
};
pub use user::{canonical_author, input_author, map_user};
