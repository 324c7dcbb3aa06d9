use crate::handler::AccountHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::scope("/api/accounts")
			.route("", web::post().to(AccountHandler::create_account_handler))
			.route("/user/{user_id}", web::get().to(AccountHandler::user_accounts_handler))
			.route("/{account_id}", web::get().to(AccountHandler::get_account_handler)),
	);
}
