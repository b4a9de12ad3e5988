use std::path::PathBuf;

use clap::{
    Args, Command as ClapCommand, FromArgMatches, Parser, Subcommand,
    builder::BoolishValueParser,
};

/// Command-line arguments for the hellohub binary.
#[derive(Debug, Parser)]
#[command(name = "hellohub", version, about = "hellohub demo service")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "HELLOHUB_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run the API and data-file listeners.
    Serve(Box<ServeArgs>),
    /// Apply pending database migrations and exit.
    Migrate(MigrateArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct DatabaseOverride {
    /// Override the database connection URL.
    #[arg(long = "database-url", env = "DATABASE_URI", value_name = "URL")]
    pub database_url: Option<String>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseOverride,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,
}

impl ServeArgs {
    /// Serve arguments taken from their `env` sources only, for runs without a subcommand.
    pub fn from_env() -> Result<Self, clap::Error> {
        let command = Self::augment_args(ClapCommand::new("hellohub"));
        let matches = command.try_get_matches_from(["hellohub"])?;
        Self::from_arg_matches(&matches)
    }
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    #[command(flatten)]
    pub database: DatabaseOverride,

    /// Override the listener host shared by both surfaces.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the API listener port.
    #[arg(long = "server-public-port", value_name = "PORT")]
    pub public_port: Option<u16>,

    /// Override the data-file listener port.
    #[arg(long = "server-files-port", value_name = "PORT")]
    pub files_port: Option<u16>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,

    /// Enable debug mode.
    #[arg(
        long = "debug",
        env = "DEBUG",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub debug: Option<bool>,

    /// Override the database pool size.
    #[arg(long = "database-max-connections", value_name = "COUNT")]
    pub database_max_connections: Option<u32>,

    /// Select the cache backend (redis|memory).
    #[arg(long = "cache-backend", value_name = "BACKEND")]
    pub cache_backend: Option<String>,

    /// Full Redis connection URL; wins over host and port.
    #[arg(long = "redis-url", env = "REDIS_URL", value_name = "URL")]
    pub redis_url: Option<String>,

    #[arg(long = "redis-host", env = "REDIS_HOST", value_name = "HOST")]
    pub redis_host: Option<String>,

    #[arg(long = "redis-port", env = "REDIS_PORT", value_name = "PORT")]
    pub redis_port: Option<u16>,

    /// Override how long the greeting stays cached.
    #[arg(long = "hello-ttl-seconds", value_name = "SECONDS")]
    pub hello_ttl_seconds: Option<u64>,

    /// Override the directory holding names.json, fizz.json and buzz.json.
    #[arg(long = "data-directory", value_name = "PATH")]
    pub data_directory: Option<PathBuf>,

    #[arg(long = "secret-key", env = "SECRET_KEY", value_name = "KEY", hide_env_values = true)]
    pub secret_key: Option<String>,
}
