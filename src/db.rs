use crate::config::Config;
use diesel::{
	prelude::*,
	r2d2::{self, ConnectionManager, PoolError},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn get_db_pool(config: &Config) -> Result<DbPool, PoolError> {
	let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
	r2d2::Pool::builder()
		.max_size(config.db_pool_size)
		.connection_timeout(Duration::from_secs(config.db_connect_timeout_secs))
		.build(manager)
}

/// Brings the schema up to date. Runs once, before the server starts accepting requests.
pub fn init(pool: &DbPool) -> anyhow::Result<()> {
	let mut conn = pool.get()?;
	let applied = conn
		.run_pending_migrations(MIGRATIONS)
		.map_err(|e| anyhow::anyhow!("failed to run migrations: {e}"))?;
	for version in applied {
		log::info!("Applied migration {}", version);
	}
	Ok(())
}
