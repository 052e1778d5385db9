pub mod schema;
pub mod sqlite;
pub mod table;

pub use sqlite::SqliteStore;
pub use table::{Column, Row, Schema, Table, Value};

use crate::error::Result;

/// Gateway to the relational store.
///
/// User-supplied values always travel in `params` and are bound by the
/// driver; they are never spliced into `sql`. Each call is issued once with
/// no retry.
pub trait Store {
    /// Runs a statement that returns rows.
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Table>;

    /// Runs a statement that modifies rows and returns how many were affected.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize>;

    /// Closes the underlying connection.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}
