use crate::handler::UserHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::scope("/api/user")
			// user mgmt routes
			.route("", web::get().to(UserHandler::list_users_handler))
			.route("", web::post().to(UserHandler::register_handler))
			.route("/login", web::post().to(UserHandler::login_handler))
			.route("/me", web::get().to(UserHandler::current_user_handler)),
	);
}
