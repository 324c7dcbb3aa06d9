use crate::models::ErrorResponse;
use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use diesel::r2d2::PoolError;

/// Failures raised by the account, transaction and user services.
///
/// None of these are mapped to a client error: they reach the caller as a
/// plain 500 carrying the message.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Account not found.")]
	AccountNotFound,
	#[error("One or both accounts not found.")]
	AccountsNotFound,
	#[error("Insufficient balance.")]
	InsufficientBalance,
	#[error("database error: {0}")]
	Database(#[from] diesel::result::Error),
	#[error("database pool error: {0}")]
	Pool(#[from] PoolError),
	#[error("blocking task failed")]
	Blocking(#[from] BlockingError),
	#[error("token error: {0}")]
	Token(#[from] jsonwebtoken::errors::Error),
}

impl ResponseError for ServiceError {
	fn status_code(&self) -> StatusCode {
		StatusCode::INTERNAL_SERVER_ERROR
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() })
	}
}
