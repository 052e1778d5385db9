use rusqlite::types::{Null, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection};
use std::path::Path;

use super::schema::{SCHEMA_SQL, SEED_SQL};
use super::table::{Row, Schema, Table, Value};
use super::Store;
use crate::error::Result;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the tables exist.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Inserts the sample records, but only into a database without departments.
    /// Returns whether anything was written.
    pub fn seed(&mut self) -> Result<bool> {
        let existing: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))?;
        if existing > 0 {
            log::debug!("Skipping seed, {} departments already present", existing);
            return Ok(false);
        }

        self.insert_batch(SEED_SQL)?;
        Ok(true)
    }

    /// Runs `sql` in one transaction, so a failing statement leaves nothing behind.
    fn insert_batch(&mut self, sql: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Table> {
        log::debug!("query ({} params): {}", params.len(), sql.trim());

        let mut stmt = self.conn.prepare(sql)?;
        let schema = Schema::from_names(stmt.column_names());
        let column_count = schema.column_count();
        let mut table = Table::new(schema);

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        while let Some(row) = rows.next()? {
            let values = (0..column_count)
                .map(|i| row.get_ref(i).map(value_from_ref))
                .collect::<rusqlite::Result<Vec<_>>>()?;
            table.add_row(Row::new(values));
        }

        Ok(table)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize> {
        log::debug!("execute ({} params): {}", params.len(), sql.trim());
        Ok(self.conn.execute(sql, params_from_iter(params.iter()))?)
    }

    fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e.into())
    }
}

fn value_from_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(v) => Value::Integer(v),
        ValueRef::Real(v) => Value::Float(v),
        ValueRef::Text(v) => Value::String(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(_) => Value::String("[BLOB]".to_string()),
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Integer(v) => ToSqlOutput::from(*v),
            Value::Float(v) => ToSqlOutput::from(*v),
            Value::String(v) => ToSqlOutput::from(v.as_str()),
            Value::Null => ToSqlOutput::from(Null),
        })
    }
}
