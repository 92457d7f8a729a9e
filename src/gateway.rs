//! Database access, kept apart from the entity model.
//!
//! Nothing in the registry is persisted: the gateway only knows how to open
//! and close a connection described by the `[database]` configuration
//! section.

use crate::config::{Config, get_config};
use sqlx::any::AnyConnectOptions;
use sqlx::{AnyConnection, Connection};
use std::str::FromStr;
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

const DEFAULT_URL: &str = "mysql://localhost:3306/universitySystem";
const DEFAULT_USER: &str = "universityUser";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid database url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("cannot use credentials with database url {0}")]
    Credentials(String),

    #[error("unsupported database url")]
    UnsupportedUrl(#[source] sqlx::Error),

    #[error("cannot connect to database")]
    Connect(#[source] sqlx::Error),

    #[error("cannot close database connection")]
    Close(#[source] sqlx::Error),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DatabaseConfig {
    pub fn from_config(config: &Config) -> DatabaseConfig {
        DatabaseConfig {
            url: get_config(config, "database", "url").unwrap_or_else(|| DEFAULT_URL.to_owned()),
            user: get_config(config, "database", "user").or_else(|| Some(DEFAULT_USER.to_owned())),
            password: get_config(config, "database", "password"),
        }
    }

    /// The configured url with the user and password embedded. Credentials
    /// already present in the url are replaced.
    pub fn connection_url(&self) -> Result<Url, GatewayError> {
        let mut url = Url::parse(&self.url)?;
        if let Some(user) = &self.user {
            url.set_username(user)
                .map_err(|()| GatewayError::Credentials(self.url.clone()))?;
        }
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|()| GatewayError::Credentials(self.url.clone()))?;
        }
        Ok(url)
    }
}

#[allow(async_fn_in_trait)]
pub trait Gateway {
    type Connection;

    async fn open(&self) -> Result<Self::Connection, GatewayError>;
    async fn close(&self, connection: Self::Connection) -> Result<(), GatewayError>;
}

pub struct SqlGateway {
    config: DatabaseConfig,
}

impl SqlGateway {
    pub fn new(config: DatabaseConfig) -> Self {
        sqlx::any::install_default_drivers();
        Self { config }
    }
}

impl Gateway for SqlGateway {
    type Connection = AnyConnection;

    async fn open(&self) -> Result<AnyConnection, GatewayError> {
        let url = self.config.connection_url()?;
        let options =
            AnyConnectOptions::from_str(url.as_str()).map_err(GatewayError::UnsupportedUrl)?;
        // An unknown scheme is only detected when looking up the driver.
        AnyConnection::connect_with(&options)
            .await
            .map_err(|e| match e {
                sqlx::Error::Configuration(_) => GatewayError::UnsupportedUrl(e),
                e => GatewayError::Connect(e),
            })
    }

    async fn close(&self, connection: AnyConnection) -> Result<(), GatewayError> {
        connection.close().await.map_err(GatewayError::Close)
    }
}

/// Open then immediately close a connection. Failures are logged and
/// reported as `false`, they never abort the caller.
pub async fn check_connection<G: Gateway>(gateway: &G) -> bool {
    let connection = match gateway.open().await {
        Ok(connection) => connection,
        Err(e) => {
            let report = eyre::Report::new(e);
            error!("database connection failed: {report:#}");
            return false;
        }
    };
    info!("database connection successful");
    match gateway.close(connection).await {
        Ok(()) => {
            info!("database connection closed");
            true
        }
        Err(e) => {
            let report = eyre::Report::new(e);
            warn!("error when closing database connection: {report:#}");
            false
        }
    }
}
