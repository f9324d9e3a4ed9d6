use std::path::PathBuf;

use clap::Parser;
use mealguard_core::domain::common::{CacheConfig, DatabaseConfig, MealguardConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealguard", version, about = "Allergen and dietary conflict analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mealguard")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    /// HS256 secret for Bearer tokens. Without it only device identities are accepted.
    #[arg(long, env = "JWT_SECRET")]
    pub jwt_secret: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    /// Directory for the local preference cache. In-memory when unset.
    #[arg(long, env = "PREFERENCE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    #[arg(long, env = "CONFLICT_RULES_PATH")]
    pub conflict_rules_path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when RUST_LOG is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for MealguardConfig {
    fn from(args: Args) -> Self {
        MealguardConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            cache: CacheConfig {
                directory: args.storage.cache_dir,
            },
            conflict_rules_path: args.storage.conflict_rules_path,
        }
    }
}
