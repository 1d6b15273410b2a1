//! Trait definitions for the write boundary
//!
//! The extractor never talks to a database. These traits describe how its
//! records become statement parameters and who receives them.

use crate::table::Table;
use serde::Serialize;
use serde_json::Value;

/// A record bound to one destination table
pub trait Row: Serialize {
    /// Table the record is inserted into
    const TABLE: Table;

    /// Statement parameters in [`Table::columns`] order
    fn params(&self) -> Result<Vec<Value>, serde_json::Error> {
        let mut object = match serde_json::to_value(self)? {
            Value::Object(object) => object,
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "{} record serialized to a non-object: {}",
                    Self::TABLE,
                    other
                )))
            }
        };

        Ok(Self::TABLE
            .columns()
            .iter()
            .map(|column| object.remove(*column).unwrap_or(Value::Null))
            .collect())
    }
}

/// A parameter set ready to bind to a table's insert statement
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRow {
    /// Target table
    pub table: Table,

    /// Parameters in column order
    pub params: Vec<Value>,
}

impl InsertRow {
    /// Build the parameter set for a record
    pub fn from_row<R: Row>(row: &R) -> Result<Self, serde_json::Error> {
        Ok(Self {
            table: R::TABLE,
            params: row.params()?,
        })
    }

    /// The statement these parameters bind to
    pub fn statement(&self) -> &'static str {
        self.table.insert_statement()
    }
}

/// Receiver of insert rows
///
/// Implemented by the storage layer, which owns connections, transactions,
/// conflict handling and retries.
pub trait RecordSink {
    /// Error type for sink operations
    type Error: From<serde_json::Error>;

    /// Accept one row
    fn write_row(&mut self, row: InsertRow) -> Result<(), Self::Error>;
}

/// Collects rows in memory, in insertion order
impl RecordSink for Vec<InsertRow> {
    type Error = serde_json::Error;

    fn write_row(&mut self, row: InsertRow) -> Result<(), Self::Error> {
        self.push(row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::fixtures;
    use crate::records::MentionRecord;

    #[test]
    fn test_params_follow_column_order() {
        let mention = MentionRecord {
            screen_name: "jack".to_string(),
            name: Some("jack".to_string()),
            id: 12,
            id_str: "12".to_string(),
            tweet_id: 99,
        };
        let params = mention.params().unwrap();
        assert_eq!(
            params,
            vec![
                Value::from("jack"),
                Value::from("jack"),
                Value::from(12),
                Value::from("12"),
                Value::from(99),
            ]
        );
    }

    #[test]
    fn test_params_len_matches_columns() {
        let row = InsertRow::from_row(&fixtures::user()).unwrap();
        assert_eq!(row.table, Table::TweetUser);
        assert_eq!(row.params.len(), Table::TweetUser.columns().len());
        assert_eq!(row.statement(), Table::TweetUser.insert_statement());
    }

    #[test]
    fn test_null_params_for_missing_values() {
        let params = fixtures::place().params().unwrap();
        // coordinates is the seventh column
        assert_eq!(params[6], Value::Null);
        assert_eq!(params[7], Value::from(1050118621198921728_i64));
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<InsertRow> = Vec::new();
        sink.write_row(InsertRow::from_row(&fixtures::user()).unwrap()).unwrap();
        sink.write_row(InsertRow::from_row(&fixtures::post()).unwrap()).unwrap();
        let tables: Vec<Table> = sink.iter().map(|r| r.table).collect();
        assert_eq!(tables, vec![Table::TweetUser, Table::Tweet]);
    }
}
