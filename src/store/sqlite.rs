//! SQLite-backed persistence gateway for TODO rows.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::model::{StoreError, StoreResult, Todo};

const SCHEMA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    subject TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    updated_at TIMESTAMP NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)
"#;

const SCHEMA_TRIGGER: &str = r#"
CREATE TRIGGER IF NOT EXISTS todos_updated_at AFTER UPDATE ON todos
BEGIN
    UPDATE todos SET updated_at = strftime('%Y-%m-%d %H:%M:%f', 'now')
    WHERE id = NEW.id;
END
"#;

const SELECT_BY_ID: &str =
    "SELECT id, subject, description, created_at, updated_at FROM todos WHERE id = ?";

/// Gateway issuing parameterized SQL for TODO CRUD.
///
/// Cheap to clone; the pool handle is shared.
#[derive(Clone)]
pub struct TodoStore {
    pool: SqlitePool,
}

impl TodoStore {
    /// Connect to the database at `url` (e.g. `sqlite:todo.db` or
    /// `sqlite::memory:`), creating the file if missing.
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create the todos table and its updated_at trigger if absent.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_TABLE).execute(&self.pool).await?;
        sqlx::query(SCHEMA_TRIGGER).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new TODO and read back the stored row.
    ///
    /// The insert and the confirming read are two statements, not one
    /// transaction; a concurrent mutation of the same row can land between
    /// them. Known consistency gap, kept from the original behavior.
    pub async fn create(&self, subject: &str, description: &str) -> StoreResult<Todo> {
        let result = sqlx::query("INSERT INTO todos (subject, description) VALUES (?, ?)")
            .bind(subject)
            .bind(description)
            .execute(&self.pool)
            .await
            .map_err(|e| self.log(e))?;

        let id = result.last_insert_rowid();
        let todo = sqlx::query_as::<_, Todo>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| self.log(e))?;
        Ok(todo)
    }

    /// Read up to `size` TODOs ordered by id descending.
    ///
    /// `prev_id == 0` returns the most recent page; otherwise only rows with
    /// `id < prev_id` are returned, so the smallest id seen so far is the
    /// cursor for stable backward paging.
    pub async fn read(&self, prev_id: i64, size: i64) -> StoreResult<Vec<Todo>> {
        let query = if prev_id == 0 {
            sqlx::query_as::<_, Todo>(
                "SELECT id, subject, description, created_at, updated_at \
                 FROM todos ORDER BY id DESC LIMIT ?",
            )
            .bind(size)
        } else {
            sqlx::query_as::<_, Todo>(
                "SELECT id, subject, description, created_at, updated_at \
                 FROM todos WHERE id < ? ORDER BY id DESC LIMIT ?",
            )
            .bind(prev_id)
            .bind(size)
        };

        let todos = query.fetch_all(&self.pool).await.map_err(|e| self.log(e))?;
        Ok(todos)
    }

    /// Update the row matching `id`; `NotFound` if no row matched.
    pub async fn update(&self, id: i64, subject: &str, description: &str) -> StoreResult<Todo> {
        let result = sqlx::query("UPDATE todos SET subject = ?, description = ? WHERE id = ?")
            .bind(subject)
            .bind(description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| self.log(e))?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "update matched no rows");
            return Err(StoreError::NotFound);
        }

        let todo = sqlx::query_as::<_, Todo>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| self.log(e))?;
        Ok(todo)
    }

    /// Delete all rows matching `ids` in one statement.
    ///
    /// Empty `ids` is a no-op success. `NotFound` only when the affected
    /// count is zero: a mixed existing/missing list deletes the matches and
    /// succeeds.
    pub async fn delete(&self, ids: &[i64]) -> StoreResult<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM todos WHERE id IN ({placeholders})");
        let mut query = sqlx::query(&sql);
        for id in ids {
            query = query.bind(*id);
        }

        let result = query.execute(&self.pool).await.map_err(|e| self.log(e))?;
        if result.rows_affected() == 0 {
            tracing::debug!(?ids, "delete matched no rows");
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn log(&self, err: sqlx::Error) -> StoreError {
        tracing::error!(error = %err, "store operation failed");
        StoreError::Database(err)
    }
}
