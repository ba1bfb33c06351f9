use core_config::{AppInfo, FromEnv, app_info, env_optional, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Parking API configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` keeps users in memory for the lifetime of the process
    pub database: Option<PostgresConfig>,
    pub run_migrations: bool,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8080 unless set
        let database = match env_optional("DATABASE_URL") {
            Some(_) => Some(PostgresConfig::from_env()?),
            None => None,
        };

        Ok(Self {
            app: app_info!(),
            database,
            run_migrations: env_parse("RUN_MIGRATIONS", true)?,
            server,
            environment,
        })
    }
}
