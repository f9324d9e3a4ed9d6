use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!("Connected to Postgres");

        Ok(Self { db })
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        sqlx::migrate!("./migrations")
            .run(self.db.get_postgres_connection_pool())
            .await?;
        info!("Database migrations applied");

        Ok(())
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
