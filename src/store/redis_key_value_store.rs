use super::{Error, KeyValueStore};
use axum::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, Value};
use std::time::Duration;

pub struct RedisKeyValueStore {
    connection: ConnectionManager,
}

impl RedisKeyValueStore {
    pub async fn new(connection_string: &str) -> Result<Self, Error> {
        let client = Client::open(connection_string)?;
        let connection = ConnectionManager::new(client).await?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), Error> {
        let mut connection = self.connection.clone();

        let _: () = connection.set_ex(key, value, ttl.as_secs()).await?;

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let mut connection = self.connection.clone();

        let value: Option<String> = connection.get(key).await?;

        Ok(value)
    }

    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> Result<bool, Error> {
        let mut connection = self.connection.clone();

        // SET NX EX replies nil when the key already exists
        let reply: Value = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("NX")
            .arg("EX")
            .arg(ttl.as_secs())
            .query_async(&mut connection)
            .await?;

        Ok(!matches!(reply, Value::Nil))
    }
}
