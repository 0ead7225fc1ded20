use super::{
    DriverIdentityHints, DriverIdentityResolver, TicketRecord, TicketStatus, TicketsService,
    TicketsServiceConfig,
};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{PassengersRepository, VerificationLogsRepository},
    store::KeyValueStore,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

const TICKET_KEY_PREFIX: &str = "ticket:";
const DEDUP_KEY_PREFIX: &str = "ticket-verify-dedup:";
const DEFAULT_SHUTTLE_ID: &str = "default";

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    store: Arc<dyn KeyValueStore>,
    driver_identity_resolver: DriverIdentityResolver,
    passengers_repository: Arc<dyn PassengersRepository>,
    verification_logs_repository: Arc<dyn VerificationLogsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        store: Arc<dyn KeyValueStore>,
        driver_identity_resolver: DriverIdentityResolver,
        passengers_repository: Arc<dyn PassengersRepository>,
        verification_logs_repository: Arc<dyn VerificationLogsRepository>,
    ) -> Self {
        Self {
            config,
            store,
            driver_identity_resolver,
            passengers_repository,
            verification_logs_repository,
        }
    }

    fn ticket_key(ticket_id: &str) -> String {
        format!("{TICKET_KEY_PREFIX}{ticket_id}")
    }

    fn dedup_key(ticket_id: &str) -> String {
        format!("{DEDUP_KEY_PREFIX}{ticket_id}")
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn issue_ticket(&self, user_id: Uuid) -> Result<output::IssuedTicket, Error> {
        tracing::info!(%user_id, "issuing ticket");

        let ticket_id = Uuid::new_v4().to_string();
        let record = TicketRecord {
            user_id,
            issued_at: OffsetDateTime::now_utc(),
            status: TicketStatus::Valid,
        };

        self.store
            .put(
                &Self::ticket_key(&ticket_id),
                &serde_json::to_string(&record)?,
                self.config.ticket_ttl,
            )
            .await?;

        tracing::info!(ticket_id, "ticket issued");

        Ok(output::IssuedTicket {
            ticket_id,
            expires_in: self.config.ticket_ttl.as_secs(),
        })
    }

    async fn verify_ticket(
        &self,
        verify: input::VerifyTicket,
        identity: DriverIdentityHints,
    ) -> Result<output::Verification, Error> {
        tracing::info!(ticket_id = verify.ticket_id, "verifying ticket");

        let driver_id = self.driver_identity_resolver.resolve(&identity).await?;

        // Absence is checked before the dedup marker is written so an
        // unknown or expired ticket never consumes a dedup slot.
        let Some(raw_record) = self.store.get(&Self::ticket_key(&verify.ticket_id)).await? else {
            tracing::info!(ticket_id = verify.ticket_id, "ticket unknown or expired");
            return Ok(output::Verification::rejected(
                output::VerificationFailureReason::InvalidOrExpired,
            ));
        };
        let record = serde_json::from_str::<TicketRecord>(&raw_record)?;

        let first_attempt = self
            .store
            .set_if_absent(
                &Self::dedup_key(&verify.ticket_id),
                "1",
                self.config.dedup_window,
            )
            .await?;

        let profile = self
            .passengers_repository
            .find_profile(record.user_id)
            .await?;

        if !first_attempt {
            tracing::info!(ticket_id = verify.ticket_id, "duplicate scan");
            return Ok(output::Verification::accepted(
                record.user_id,
                profile,
                true,
            ));
        }

        if !self.config.allow_reuse && record.status == TicketStatus::Used {
            tracing::info!(ticket_id = verify.ticket_id, "ticket already used");
            return Ok(output::Verification::rejected(
                output::VerificationFailureReason::AlreadyUsed,
            ));
        }

        if !self.config.allow_reuse {
            // ttl is refreshed in full so ALREADY_USED can still be
            // reported for the whole ticket lifetime.
            let used = TicketRecord {
                status: TicketStatus::Used,
                ..record
            };
            self.store
                .put(
                    &Self::ticket_key(&verify.ticket_id),
                    &serde_json::to_string(&used)?,
                    self.config.ticket_ttl,
                )
                .await?;
        }

        let shuttle_id = verify.shuttle_id.as_deref().unwrap_or(DEFAULT_SHUTTLE_ID);
        self.verification_logs_repository
            .insert(
                record.user_id,
                driver_id,
                shuttle_id,
                OffsetDateTime::now_utc(),
            )
            .await?;

        tracing::info!(
            ticket_id = verify.ticket_id,
            %driver_id,
            "ticket verified"
        );

        Ok(output::Verification::accepted(
            record.user_id,
            profile,
            false,
        ))
    }
}
