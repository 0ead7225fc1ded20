use super::ApplicationEnv;
use crate::{
    repository::{PassengersRepositoryImpl, UsersRepositoryImpl, VerificationLogsRepositoryImpl},
    service::{
        ride_stats_service::{RideStatsService, RideStatsServiceImpl},
        shuttle_status_service::{
            ShuttleStatusService, ShuttleStatusServiceConfig, ShuttleStatusServiceImpl,
        },
        tickets_service::{
            DriverIdentityResolver, TicketsService, TicketsServiceConfig, TicketsServiceImpl,
        },
    },
    store::RedisKeyValueStore,
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub shuttle_status_service: Arc<dyn ShuttleStatusService>,
    pub ride_stats_service: Arc<dyn RideStatsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("connecting to key-value store");
    let store = RedisKeyValueStore::new(&env.kv_connection_string).await?;
    let store = Arc::new(store);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(db.clone()).await?;
    let users_repository = Arc::new(users_repository);
    let passengers_repository = PassengersRepositoryImpl::new(db.clone()).await?;
    let passengers_repository = Arc::new(passengers_repository);
    let verification_logs_repository = VerificationLogsRepositoryImpl::new(db).await?;
    let verification_logs_repository = Arc::new(verification_logs_repository);

    tracing::info!("creating services");
    let driver_identity_resolver = DriverIdentityResolver::new(
        users_repository.clone(),
        env.jwt_key.clone(),
        env.jwt_algorithms.clone(),
        env.default_driver_openid.clone(),
    );
    let config = TicketsServiceConfig {
        ticket_ttl: env.ticket_ttl,
        dedup_window: env.ticket_dedup_window,
        allow_reuse: env.ticket_allow_reuse,
    };
    let tickets_service = TicketsServiceImpl::new(
        config,
        store.clone(),
        driver_identity_resolver,
        passengers_repository,
        verification_logs_repository.clone(),
    );
    let tickets_service = Arc::new(tickets_service);

    let config = ShuttleStatusServiceConfig {
        status_ttl: env.shuttle_status_ttl,
    };
    let shuttle_status_service = ShuttleStatusServiceImpl::new(config, store);
    let shuttle_status_service = Arc::new(shuttle_status_service);

    let ride_stats_service = RideStatsServiceImpl::new(verification_logs_repository);
    let ride_stats_service = Arc::new(ride_stats_service);

    Ok((
        ApplicationState {
            tickets_service,
            shuttle_status_service,
            ride_stats_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
