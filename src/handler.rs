use crate::{
	constants::RECENT_TRANSACTION_COUNT,
	error::ServiceError,
	midware::jwt::{Claims, JWT},
	models::{ErrorResponse, LoginRequest, RegisterRequest, TransactionRequest, TransferRequest, UserDto},
	repo::{AccountRepo, UserRepo},
	services::{AccountService, TransactionService, UserService},
};
use actix_web::{http::header, web, HttpResponse};
use validator::Validate;

pub struct UserHandler;

impl UserHandler {
	pub async fn list_users_handler(
		repo: web::Data<dyn UserRepo>,
		jwt: web::Data<JWT>,
	) -> Result<HttpResponse, ServiceError> {
		let users = web::block(move || UserService::new(repo.get_ref(), jwt.get_ref()).list_users())
			.await??;
		log::info!("Listed {} users", users.len());
		Ok(HttpResponse::Ok().json(users))
	}

	pub async fn login_handler(
		repo: web::Data<dyn UserRepo>,
		jwt: web::Data<JWT>,
		req: web::Json<LoginRequest>,
	) -> Result<HttpResponse, ServiceError> {
		let login = req.into_inner();
		if login.user_name.is_empty() || login.password_hash.is_empty() {
			return Ok(HttpResponse::BadRequest()
				.json(ErrorResponse { error: "Invalid input".to_string() }));
		}

		let user_name = login.user_name.clone();
		let user = web::block(move || {
			UserService::new(repo.get_ref(), jwt.get_ref())
				.authenticate(&login.user_name, &login.password_hash)
		})
		.await??;

		match user {
			Some(user) => {
				log::info!("Login successful for user: {}", user_name);
				Ok(HttpResponse::Ok().json(user))
			},
			None => {
				log::warn!("Login failed for user: {}", user_name);
				Ok(HttpResponse::Unauthorized()
					.json(ErrorResponse { error: "Invalid credentials.".to_string() }))
			},
		}
	}

	pub async fn register_handler(
		repo: web::Data<dyn UserRepo>,
		jwt: web::Data<JWT>,
		req: web::Json<RegisterRequest>,
	) -> Result<HttpResponse, ServiceError> {
		let registration = req.into_inner();
		if let Err(e) = registration.validate() {
			log::warn!("Registration rejected: {}", e);
			return Ok(HttpResponse::BadRequest()
				.json(ErrorResponse { error: "All fields must be filled".to_string() }));
		}

		let (registered, registration) = web::block(move || {
			let registered =
				UserService::new(repo.get_ref(), jwt.get_ref()).register(&registration)?;
			Ok::<_, ServiceError>((registered, registration))
		})
		.await??;

		if !registered {
			log::error!("Registration stored no rows for email: {}", registration.email);
			return Ok(HttpResponse::BadRequest().finish());
		}

		log::info!("Registered user with email: {}", registration.email);
		let created = UserDto {
			user_name: Some(format!("{}{}", registration.first_name, registration.last_name)),
			first_name: Some(registration.first_name),
			last_name: Some(registration.last_name),
			email: Some(registration.email),
			..Default::default()
		};
		Ok(HttpResponse::Created().insert_header((header::LOCATION, "/api/user")).json(created))
	}

	pub async fn current_user_handler(claims: web::ReqData<Claims>) -> HttpResponse {
		let claims = claims.into_inner();
		HttpResponse::Ok().json(UserDto {
			user_id: claims.user_id(),
			user_name: Some(claims.name),
			email: Some(claims.email),
			..Default::default()
		})
	}
}

pub struct AccountHandler;

impl AccountHandler {
	pub async fn create_account_handler(
		repo: web::Data<dyn AccountRepo>,
		claims: web::ReqData<Claims>,
	) -> Result<HttpResponse, ServiceError> {
		let Some(user_id) = claims.user_id() else {
			log::error!("Token subject is not a user id: {}", claims.sub);
			return Ok(HttpResponse::Unauthorized()
				.json(ErrorResponse { error: "Invalid token subject".to_string() }));
		};

		let account =
			web::block(move || AccountService::new(repo.get_ref()).create_account(user_id)).await??;
		Ok(HttpResponse::Created().json(account))
	}

	pub async fn get_account_handler(
		repo: web::Data<dyn AccountRepo>,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ServiceError> {
		let account_id = path.into_inner();
		let account =
			web::block(move || AccountService::new(repo.get_ref()).get_account(account_id)).await??;

		match account {
			Some(account) => Ok(HttpResponse::Ok().json(account)),
			None => {
				log::info!("Account {} not found", account_id);
				Ok(HttpResponse::NotFound()
					.json(ErrorResponse { error: ServiceError::AccountNotFound.to_string() }))
			},
		}
	}

	pub async fn user_accounts_handler(
		repo: web::Data<dyn AccountRepo>,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ServiceError> {
		let user_id = path.into_inner();
		let accounts =
			web::block(move || AccountService::new(repo.get_ref()).accounts_for_user(user_id))
				.await??;
		Ok(HttpResponse::Ok().json(accounts))
	}
}

pub struct TransactionHandler;

impl TransactionHandler {
	pub async fn deposit_handler(
		repo: web::Data<dyn AccountRepo>,
		req: web::Json<TransactionRequest>,
	) -> Result<HttpResponse, ServiceError> {
		let TransactionRequest { account_id, amount } = req.into_inner();
		let transaction = web::block(move || {
			TransactionService::new(repo.get_ref()).deposit(account_id, amount)
		})
		.await??;
		Ok(HttpResponse::Ok().json(transaction))
	}

	pub async fn withdraw_handler(
		repo: web::Data<dyn AccountRepo>,
		req: web::Json<TransactionRequest>,
	) -> Result<HttpResponse, ServiceError> {
		let TransactionRequest { account_id, amount } = req.into_inner();
		let transaction = web::block(move || {
			TransactionService::new(repo.get_ref()).withdraw(account_id, amount)
		})
		.await??;
		Ok(HttpResponse::Ok().json(transaction))
	}

	pub async fn transfer_handler(
		repo: web::Data<dyn AccountRepo>,
		req: web::Json<TransferRequest>,
	) -> Result<HttpResponse, ServiceError> {
		let TransferRequest { from_account_id, to_account_id, amount } = req.into_inner();
		let transaction = web::block(move || {
			TransactionService::new(repo.get_ref()).transfer(from_account_id, to_account_id, amount)
		})
		.await??;
		Ok(HttpResponse::Ok().json(transaction))
	}

	pub async fn recent_transactions_handler(
		repo: web::Data<dyn AccountRepo>,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ServiceError> {
		let account_id = path.into_inner();
		let transactions = web::block(move || {
			TransactionService::new(repo.get_ref())
				.recent_transactions(account_id, RECENT_TRANSACTION_COUNT)
		})
		.await??;
		Ok(HttpResponse::Ok().json(transactions))
	}

	pub async fn summary_handler(
		repo: web::Data<dyn AccountRepo>,
		path: web::Path<i32>,
	) -> Result<HttpResponse, ServiceError> {
		let account_id = path.into_inner();
		let summary = web::block(move || {
			TransactionService::new(repo.get_ref()).financial_summary(account_id)
		})
		.await??;
		Ok(HttpResponse::Ok().json(summary))
	}
}
