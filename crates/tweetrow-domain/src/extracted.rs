//! The full set of records derived from one input post

use crate::post_kind::PostKind;
use crate::records::{
    HashtagRecord, MediaRecord, MentionRecord, PlaceRecord, PostRecord, QuoteLinkRecord,
    RepostLinkRecord, SymbolRecord, UserRecord,
};
use crate::traits::{InsertRow, RecordSink, Row};
use serde::{Deserialize, Serialize};

/// Every row derived from one input post
///
/// Built fresh per extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPost {
    /// What the input wraps
    pub kind: PostKind,

    /// The canonical post
    pub post: PostRecord,

    /// Input author first, then the canonical author when it differs
    pub users: Vec<UserRecord>,

    /// Present only when the input is a repost
    pub repost: Option<RepostLinkRecord>,

    /// Present only when the input is a quote
    pub quote: Option<QuoteLinkRecord>,

    /// Aggregated hashtags, if any
    pub hashtags: Option<HashtagRecord>,

    /// Aggregated symbols, if any
    pub symbols: Option<SymbolRecord>,

    /// One record per mentioned user
    pub mentions: Vec<MentionRecord>,

    /// One record per media item
    pub media: Vec<MediaRecord>,

    /// Geotag place, if any
    pub place: Option<PlaceRecord>,
}

impl ExtractedPost {
    /// Number of rows this post produces
    pub fn row_count(&self) -> usize {
        1 + self.users.len()
            + usize::from(self.repost.is_some())
            + usize::from(self.quote.is_some())
            + usize::from(self.hashtags.is_some())
            + usize::from(self.symbols.is_some())
            + usize::from(self.place.is_some())
            + self.mentions.len()
            + self.media.len()
    }

    /// All rows, users and the post first so dependent rows follow them
    pub fn rows(&self) -> Result<Vec<InsertRow>, serde_json::Error> {
        let mut rows = Vec::with_capacity(self.row_count());
        for user in &self.users {
            rows.push(InsertRow::from_row(user)?);
        }
        rows.push(InsertRow::from_row(&self.post)?);
        push_opt(&mut rows, self.repost.as_ref())?;
        push_opt(&mut rows, self.quote.as_ref())?;
        push_opt(&mut rows, self.hashtags.as_ref())?;
        push_opt(&mut rows, self.symbols.as_ref())?;
        push_opt(&mut rows, self.place.as_ref())?;
        for media in &self.media {
            rows.push(InsertRow::from_row(media)?);
        }
        for mention in &self.mentions {
            rows.push(InsertRow::from_row(mention)?);
        }
        Ok(rows)
    }

    /// Hand every row to a sink, returning how many were written
    pub fn write_to<S: RecordSink>(&self, sink: &mut S) -> Result<usize, S::Error> {
        let rows = self.rows()?;
        let count = rows.len();
        for row in rows {
            sink.write_row(row)?;
        }
        Ok(count)
    }
}

fn push_opt<R: Row>(rows: &mut Vec<InsertRow>, record: Option<&R>) -> Result<(), serde_json::Error> {
    if let Some(record) = record {
        rows.push(InsertRow::from_row(record)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures;
    use crate::table::Table;

    fn sample() -> ExtractedPost {
        ExtractedPost {
            kind: PostKind::Original,
            post: fixtures::post(),
            users: vec![fixtures::user()],
            repost: None,
            quote: None,
            hashtags: Some(HashtagRecord {
                tweet_id: 1050118621198921728,
                hashtag: r#"[{"text":"api","indices":[0,4]}]"#.to_string(),
            }),
            symbols: None,
            mentions: vec![],
            media: vec![fixtures::media()],
            place: Some(fixtures::place()),
        }
    }

    #[test]
    fn test_row_count_matches_rows() {
        let extracted = sample();
        assert_eq!(extracted.row_count(), 5);
        assert_eq!(extracted.rows().unwrap().len(), 5);
    }

    #[test]
    fn test_rows_written_in_dependency_order() {
        let mut sink: Vec<InsertRow> = Vec::new();
        let written = sample().write_to(&mut sink).unwrap();
        assert_eq!(written, 5);

        let tables: Vec<Table> = sink.iter().map(|r| r.table).collect();
        assert_eq!(
            tables,
            vec![Table::TweetUser, Table::Tweet, Table::Hashtags, Table::Place, Table::Media]
        );
    }
}
