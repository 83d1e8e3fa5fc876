use crate::domain::error::ExplorerError;
use crate::domain::traits::KvStore;
use async_trait::async_trait;
use std::io::Cursor;
use std::path::Path;
use tokio_rusqlite::{params, Connection};
use zstd::stream::{decode_all, encode_all};

pub async fn init_database(db_path: &Path) -> Result<Connection, ExplorerError> {
    let db = Connection::open(db_path.to_path_buf()).await?;
    create_schema(&db).await?;
    Ok(db)
}

async fn create_schema(db: &Connection) -> Result<(), ExplorerError> {
    db.call(|conn| {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                data BLOB NOT NULL,
                compressed_size INTEGER NOT NULL,
                original_size INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )
    })
    .await?;

    Ok(())
}

/// SQLite-backed store. Values are zstd-compressed JSON text.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub async fn open_in_memory() -> Result<Self, ExplorerError> {
        let conn = Connection::open_in_memory().await?;
        create_schema(&conn).await?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl KvStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ExplorerError> {
        use rusqlite::OptionalExtension;

        let key = key.to_string();
        let value = self
            .conn
            .call(move |conn| {
                conn.query_row("SELECT data FROM kv WHERE key = ?", params![key], |row| {
                    let compressed: Vec<u8> = row.get(0)?;
                    let decompressed = decode_all(Cursor::new(&compressed)).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            0,
                            rusqlite::types::Type::Blob,
                            Box::new(e),
                        )
                    })?;
                    String::from_utf8(decompressed).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            0,
                            rusqlite::types::Type::Blob,
                            Box::new(e),
                        )
                    })
                })
                .optional()
            })
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), ExplorerError> {
        let compressed = encode_all(Cursor::new(value.as_bytes()), 0)?;
        let compressed_len = compressed.len() as i64;
        let original_len = value.len() as i64;
        let now = chrono::Utc::now().timestamp();
        let key = key.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO kv (key, data, compressed_size, original_size, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?5)
                     ON CONFLICT(key) DO UPDATE SET
                         data = excluded.data,
                         compressed_size = excluded.compressed_size,
                         original_size = excluded.original_size,
                         updated_at = excluded.updated_at",
                    params![key, compressed, compressed_len, original_len, now],
                )
            })
            .await?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, ExplorerError> {
        let count: i64 = self
            .conn
            .call(|conn| conn.query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0)))
            .await?;

        Ok(count as usize)
    }
}
