pub mod seed;

use crate::DbPool;
use anyhow::{anyhow, Context};
use diesel::{
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, PooledConnection},
    SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub fn get_db_conn(pool: &DbPool) -> anyhow::Result<DbConn> {
    pool.get().context("DB connection")
}

#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // Concurrent form posts would otherwise fail fast with SQLITE_BUSY.
        conn.batch_execute("PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    r2d2::Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
        .with_context(|| format!("Failed to create pool for {}", database_url))
}

/// Creates missing tables, then fills the sample doctors and services.
pub fn init(pool: &DbPool) -> anyhow::Result<()> {
    let mut conn = get_db_conn(pool)?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run migrations: {}", err))?;
    for version in applied {
        log::info!("Applied migration {}", version);
    }

    seed::seed_if_empty(&mut conn)
}
