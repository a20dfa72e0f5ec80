use clap::Parser;
use recanto_core::domain::common::{
    DatabaseConfig, JwtConfig, ObjectStorageConfig, RecantoConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "recanto-api", version, about = "Recanto HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

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

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix applied to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "recanto")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "recanto")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "recanto")]
    pub name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,

    /// Access token lifetime, in seconds.
    #[arg(long = "jwt-ttl", env = "JWT_TTL_SECONDS", default_value_t = 28_800)]
    pub jwt_ttl_seconds: i64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(
        long = "storage-endpoint",
        env = "STORAGE_ENDPOINT",
        default_value = "http://localhost:9000"
    )]
    pub endpoint: String,

    #[arg(long = "storage-region", env = "STORAGE_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(long = "storage-access-key", env = "STORAGE_ACCESS_KEY", default_value = "minioadmin")]
    pub access_key: String,

    #[arg(long = "storage-secret-key", env = "STORAGE_SECRET_KEY", default_value = "minioadmin")]
    pub secret_key: String,

    #[arg(long = "storage-bucket", env = "STORAGE_BUCKET", default_value = "recanto")]
    pub bucket: String,

    /// Base URL under which uploaded objects are served to browsers.
    #[arg(
        long = "storage-public-url",
        env = "STORAGE_PUBLIC_URL",
        default_value = "http://localhost:9000"
    )]
    pub public_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for RecantoConfig {
    fn from(args: Args) -> Self {
        RecantoConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            jwt: JwtConfig {
                secret: args.auth.jwt_secret,
                ttl_seconds: args.auth.jwt_ttl_seconds,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.endpoint,
                region: args.storage.region,
                access_key: args.storage.access_key,
                secret_key: args.storage.secret_key,
                bucket: args.storage.bucket,
                public_url: args.storage.public_url,
            },
        }
    }
}
