use crate::schema::*;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Queryable, Serialize, Deserialize, Debug, Clone, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id: i32,
	pub username: String,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	#[serde(skip_serializing)]
	pub password_hash: String,
	pub date_of_birth: Option<NaiveDate>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
pub struct NewUser {
	pub username: String,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub password_hash: String,
	pub date_of_birth: Option<NaiveDate>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = roles)]
#[diesel(check_for_backend(Pg))]
pub struct Role {
	pub id: i32,
	pub name: String,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = bank_accounts)]
#[diesel(check_for_backend(Pg))]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
	#[serde(rename = "accountId")]
	pub id: i32,
	pub user_id: i32,
	pub account_number: String,
	pub balance: BigDecimal,
	pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = bank_accounts)]
pub struct NewBankAccount {
	pub user_id: i32,
	pub account_number: String,
	pub balance: BigDecimal,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = transactions)]
#[diesel(check_for_backend(Pg))]
pub struct Transaction {
	pub id: i32,
	pub account_id: i32,
	pub transaction_type: String,
	pub amount: BigDecimal,
	pub to_account_id: Option<i32>,
	pub transaction_date: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = transactions)]
pub struct NewTransaction {
	pub account_id: i32,
	pub transaction_type: String,
	pub amount: BigDecimal,
	pub to_account_id: Option<i32>,
	pub transaction_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
	Deposit,
	Withdrawal,
	Transfer,
}

impl TransactionType {
	pub fn as_str(&self) -> &str {
		match self {
			TransactionType::Deposit => "Deposit",
			TransactionType::Withdrawal => "Withdrawal",
			TransactionType::Transfer => "Transfer",
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
	pub account_id: i32,
	pub amount: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
	pub from_account_id: i32,
	pub to_account_id: i32,
	pub amount: BigDecimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
	pub transaction_id: i32,
	pub account_id: i32,
	pub amount: BigDecimal,
	pub transaction_type: String,
	pub to_account_id: Option<i32>,
	pub transaction_date: DateTime<Utc>,
}

impl From<Transaction> for TransactionDto {
	fn from(t: Transaction) -> Self {
		Self {
			transaction_id: t.id,
			account_id: t.account_id,
			amount: t.amount,
			transaction_type: t.transaction_type,
			to_account_id: t.to_account_id,
			transaction_date: t.transaction_date,
		}
	}
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
	pub total_deposits: BigDecimal,
	pub total_withdrawals: BigDecimal,
	pub net_balance: BigDecimal,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	#[serde(default)]
	#[validate(custom(function = "not_blank"))]
	pub first_name: String,
	#[serde(default)]
	#[validate(custom(function = "not_blank"))]
	pub last_name: String,
	#[serde(default)]
	#[validate(custom(function = "not_blank"))]
	pub email: String,
	#[serde(default)]
	#[validate(custom(function = "not_blank"))]
	pub password: String,
	pub date_of_birth: Option<NaiveDate>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
	if value.trim().is_empty() {
		return Err(ValidationError::new("blank").with_message("All fields must be filled".into()));
	}
	Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
	#[serde(default)]
	pub user_name: String,
	#[serde(default)]
	pub password_hash: String,
}

/// Outward view of a user. Fields a given endpoint does not fill are omitted.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_id: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub user_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub first_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
}

impl From<User> for UserDto {
	fn from(u: User) -> Self {
		Self {
			user_id: Some(u.id),
			user_name: Some(u.username),
			first_name: Some(u.first_name),
			last_name: Some(u.last_name),
			email: Some(u.email),
			token: None,
		}
	}
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
	pub error: String,
}
