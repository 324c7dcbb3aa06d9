use clap::Parser;

/// Runtime settings. Every flag falls back to the environment, which `main`
/// primes from `.env` before parsing.
#[derive(Parser, Debug, Clone)]
#[command(name = "register-api", version, about = "Bank accounts, transactions and users over HTTP")]
pub struct Config {
	#[arg(long, env = "DATABASE_URL")]
	pub database_url: String,

	#[arg(long, env = "JWT_SECRET", hide_env_values = true)]
	pub jwt_secret: String,

	#[arg(long, env = "JWT_ISSUER", default_value = "register-api")]
	pub jwt_issuer: String,

	#[arg(long, env = "JWT_AUDIENCE", default_value = "register-api")]
	pub jwt_audience: String,

	#[arg(long, env = "SOCKET_URL", default_value = "127.0.0.1:8080")]
	pub socket_url: String,

	#[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
	pub db_pool_size: u32,

	/// Seconds to wait for a pooled connection before giving up.
	#[arg(long, env = "DB_CONNECT_TIMEOUT_SECS", default_value_t = 5)]
	pub db_connect_timeout_secs: u64,

	#[arg(long, env = "WORKERS", default_value_t = num_cpus::get())]
	pub workers: usize,
}
