use super::{ShuttleStatusService, ShuttleStatusServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    store::KeyValueStore,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

const SHUTTLE_KEY_PREFIX: &str = "shuttle:";
const DEFAULT_SHUTTLE_ID: &str = "default";

pub struct ShuttleStatusServiceImpl {
    config: ShuttleStatusServiceConfig,
    store: Arc<dyn KeyValueStore>,
}

impl ShuttleStatusServiceImpl {
    pub fn new(config: ShuttleStatusServiceConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self { config, store }
    }

    fn shuttle_key(shuttle_id: Option<&str>) -> String {
        let shuttle_id = shuttle_id.unwrap_or(DEFAULT_SHUTTLE_ID);
        format!("{SHUTTLE_KEY_PREFIX}{shuttle_id}")
    }
}

#[async_trait]
impl ShuttleStatusService for ShuttleStatusServiceImpl {
    async fn publish_location(&self, location: input::ShuttleLocation) -> Result<(), Error> {
        tracing::info!(shuttle_id = location.shuttle_id, "publishing location");

        let status = output::ShuttleStatus {
            coords: location.coords,
            speed: location.speed,
            heading: location.heading,
            current_stop_index: location.current_stop_index,
            dist_to_next: location.dist_to_next,
            last_updated: OffsetDateTime::now_utc(),
        };

        self.store
            .put(
                &Self::shuttle_key(location.shuttle_id.as_deref()),
                &serde_json::to_string(&status)?,
                self.config.status_ttl,
            )
            .await?;

        Ok(())
    }

    async fn get_status(
        &self,
        shuttle_id: Option<String>,
    ) -> Result<Option<output::ShuttleStatus>, Error> {
        let raw_status = self
            .store
            .get(&Self::shuttle_key(shuttle_id.as_deref()))
            .await?;

        let status = match raw_status {
            Some(raw_status) => Some(serde_json::from_str(&raw_status)?),
            None => None,
        };

        Ok(status)
    }
}
