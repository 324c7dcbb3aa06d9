mod account_routes;
mod config;
mod constants;
mod db;
mod error;
mod handler;
mod midware;
mod models;
mod repo;
mod schema;
mod services;
#[cfg(test)]
mod tests;
mod transaction_routes;
mod user_routes;
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use config::Config;
use dotenvy::dotenv;
use env_logger::Env;
use midware::jwt::{Authentication, JWT};
use repo::{AccountRepo, PgRepo, UserRepo};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	dotenv().ok();
	env_logger::init_from_env(Env::default().default_filter_or("info"));
	let config = Config::parse();

	let pool = db::get_db_pool(&config)?;
	db::init(&pool)?;

	let store = Arc::new(PgRepo::new(pool));
	let accounts: web::Data<dyn AccountRepo> =
		web::Data::from(store.clone() as Arc<dyn AccountRepo>);
	let users: web::Data<dyn UserRepo> = web::Data::from(store as Arc<dyn UserRepo>);
	let jwt = JWT::new(&config.jwt_secret, &config.jwt_issuer, &config.jwt_audience);

	log::info!("Listening on: {} with {} workers", config.socket_url, config.workers);

	HttpServer::new(move || {
		App::new()
			.app_data(accounts.clone())
			.app_data(users.clone())
			.app_data(web::Data::new(jwt.clone()))
			.wrap(Authentication::new(jwt.clone()))
			.wrap(Cors::default().allow_any_origin().allow_any_method().allow_any_header().max_age(3600))
			.wrap(actix_web::middleware::Logger::default())
			.configure(user_routes::init)
			.configure(account_routes::init)
			.configure(transaction_routes::init)
	})
	.workers(config.workers)
	.bind(&config.socket_url)?
	.run()
	.await?;

	Ok(())
}
