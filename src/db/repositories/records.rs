use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use serde::Serialize;

use crate::db::{helpers::parse_datetime, Database};
use crate::store::RecordStore;

/// Listing entry for one stored key, without the payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    pub key: String,
    pub bytes: usize,
    pub updated_at: DateTime<Utc>,
}

fn row_to_meta(row: &Row) -> Result<RecordMeta> {
    let updated_at: String = row.get("updated_at")?;
    let bytes: i64 = row.get("bytes")?;

    Ok(RecordMeta {
        key: row.get("key")?,
        bytes: usize::try_from(bytes).unwrap_or(0),
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

impl Database {
    /// Every stored key with its size and last write time.
    pub async fn list_records(&self) -> Result<Vec<RecordMeta>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT key, LENGTH(CAST(value AS BLOB)) AS bytes, updated_at
                 FROM records
                 ORDER BY key ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_meta(row)?);
            }

            Ok(records)
        })
        .await
    }
}

impl RecordStore for Database {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.execute(move |conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM records WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()
                .with_context(|| format!("failed to read record '{key}'"))?;
            Ok(value)
        })
        .await
    }

    async fn put(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO records (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("failed to write record '{key}'"))?;
            Ok(())
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute("DELETE FROM records WHERE key = ?1", params![key])
                .with_context(|| format!("failed to delete record '{key}'"))?;
            Ok(())
        })
        .await
    }

    async fn clear(&self) -> Result<()> {
        self.execute(|conn| {
            conn.execute("DELETE FROM records", [])
                .context("failed to clear records")?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("records.sqlite3")).unwrap();
        (dir, db)
    }

    #[tokio::test]
    async fn put_overwrites_existing_value() {
        let (_dir, db) = open();
        db.put("wellnessData", "{\"a\":1}".into()).await.unwrap();
        db.put("wellnessData", "{\"a\":2}".into()).await.unwrap();

        assert_eq!(
            db.get("wellnessData").await.unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        let listed = db.list_records().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].bytes, 7);
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let (_dir, db) = open();
        db.put("a", "1".into()).await.unwrap();
        db.put("b", "2".into()).await.unwrap();

        db.remove("a").await.unwrap();
        assert!(db.get("a").await.unwrap().is_none());
        assert!(db.get("b").await.unwrap().is_some());

        db.clear().await.unwrap();
        assert!(db.list_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.sqlite3");
        {
            let db = Database::new(path.clone()).unwrap();
            db.put("checkIns", "[]".into()).await.unwrap();
        }

        let db = Database::new(path).unwrap();
        assert_eq!(db.get("checkIns").await.unwrap().as_deref(), Some("[]"));
    }
}
