//! Tweetrow Domain Layer
//!
//! Row records and the destination contract for flattened social-media
//! posts. This crate knows nothing about raw API documents; it only defines
//! what comes out of extraction and how it binds to the fixed insert
//! statements.
//!
//! ## Key Concepts
//!
//! - **Record**: one flattened row, field names equal to column names
//! - **Table**: a destination table with its fixed column order and statement
//! - **Row**: turns a record into ordered statement parameters
//! - **RecordSink**: the storage layer's side of the boundary
//! - **ExtractedPost**: every record derived from one input post

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod extracted;
pub mod post_kind;
pub mod records;
pub mod table;
pub mod traits;

// Re-exports for convenience
pub use extracted::ExtractedPost;
pub use post_kind::PostKind;
pub use records::{
    HashtagRecord, MediaRecord, MentionRecord, PlaceRecord, PostRecord, QuoteLinkRecord,
    RepostLinkRecord, SymbolRecord, UserRecord,
};
pub use table::Table;
pub use traits::{InsertRow, RecordSink, Row};
