use redis::{Client, Commands};

use super::{KeyValueStore, StorageError};

/// Redis-backed store using plain `GET`/`SET`.
/// A connection is opened per call; writes happen at human speed.
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn open(url: &str) -> Result<Self, StorageError> {
        Ok(Self {
            client: Client::open(url)?,
        })
    }
}

impl KeyValueStore for RedisStore {
    fn get(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_connection()?;
        let value: Option<String> = conn.get(key)?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_connection()?;
        conn.set::<_, _, ()>(key, value)?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
