use crate::handler::TransactionHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::scope("/api/transactions")
			.route("/deposit", web::post().to(TransactionHandler::deposit_handler))
			.route("/withdraw", web::post().to(TransactionHandler::withdraw_handler))
			.route("/transfer", web::post().to(TransactionHandler::transfer_handler))
			.route(
				"/recent/{account_id}",
				web::get().to(TransactionHandler::recent_transactions_handler),
			)
			.route("/summary/{account_id}", web::get().to(TransactionHandler::summary_handler)),
	);
}
