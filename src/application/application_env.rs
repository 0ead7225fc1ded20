use crate::auth::util::{parse_jwt_algorithms, parse_jwt_key};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub kv_connection_string: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,

    pub ticket_ttl: Duration,
    pub ticket_dedup_window: Duration,
    pub ticket_allow_reuse: bool,

    pub shuttle_status_ttl: Duration,

    pub default_driver_openid: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("COMMUTESMART_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("COMMUTESMART_CORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("COMMUTESMART_CORE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("COMMUTESMART_CORE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("COMMUTESMART_CORE_DB_NAME")?;
        let kv_connection_string = Self::env_var("COMMUTESMART_CORE_KV_CONNECTION_STRING")?;
        let max_http_content_len =
            Self::env_var("COMMUTESMART_CORE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(Self::env_var("COMMUTESMART_CORE_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "COMMUTESMART_CORE_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, Self::env_var("COMMUTESMART_CORE_JWT_KEY")?)?;

        let ticket_ttl = Self::env_var_or("COMMUTESMART_CORE_TICKET_TTL_SECONDS", "180").parse()?;
        let ticket_ttl = Duration::from_secs(ticket_ttl);
        let ticket_dedup_window =
            Self::env_var_or("COMMUTESMART_CORE_TICKET_DEDUP_WINDOW_SECONDS", "3").parse()?;
        let ticket_dedup_window = Duration::from_secs(ticket_dedup_window);
        let ticket_allow_reuse =
            Self::env_var_or("COMMUTESMART_CORE_TICKET_ALLOW_REUSE", "false").parse()?;
        let shuttle_status_ttl =
            Self::env_var_or("COMMUTESMART_CORE_SHUTTLE_STATUS_TTL_SECONDS", "3600").parse()?;
        let shuttle_status_ttl = Duration::from_secs(shuttle_status_ttl);
        let default_driver_openid = Self::env_var_or(
            "COMMUTESMART_CORE_DEFAULT_DRIVER_OPENID",
            "shuttle_default_driver",
        );

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            kv_connection_string,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            ticket_ttl,
            ticket_dedup_window,
            ticket_allow_reuse,
            shuttle_status_ttl,
            default_driver_openid,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn env_var_or(name: &'static str, default: &str) -> String {
        std::env::var(name).unwrap_or_else(|_| default.to_string())
    }
}
