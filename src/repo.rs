use crate::{
	db::DbPool,
	error::ServiceError,
	models::{BankAccount, NewBankAccount, NewTransaction, NewUser, Role, Transaction, User},
	schema::{bank_accounts, roles, transactions, user_roles, users},
};
use bigdecimal::BigDecimal;
use diesel::{
	prelude::*,
	r2d2::{ConnectionManager, PooledConnection},
	sql_types::Text,
};

diesel::define_sql_function!(fn lower(x: Text) -> Text);

/// New balance for one account, computed by the caller before the write.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceChange {
	pub account_id: i32,
	pub balance: BigDecimal,
}

/// Everything a single deposit, withdrawal or transfer writes. Committed as
/// one database transaction: either all of it lands or none of it does.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOfWork {
	pub balances: Vec<BalanceChange>,
	pub transaction: NewTransaction,
}

#[cfg_attr(test, mockall::automock)]
pub trait AccountRepo: Send + Sync {
	fn insert_account(&self, account: NewBankAccount) -> Result<BankAccount, ServiceError>;
	fn find_account(&self, account_id: i32) -> Result<Option<BankAccount>, ServiceError>;
	fn accounts_for_user(&self, user_id: i32) -> Result<Vec<BankAccount>, ServiceError>;
	fn commit(&self, work: UnitOfWork) -> Result<Transaction, ServiceError>;
	/// Newest first, at most `count` rows.
	fn recent_transactions(
		&self,
		account_id: i32,
		count: i64,
	) -> Result<Vec<Transaction>, ServiceError>;
	fn account_transactions(&self, account_id: i32) -> Result<Vec<Transaction>, ServiceError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepo: Send + Sync {
	fn insert_user(&self, user: NewUser) -> Result<usize, ServiceError>;
	/// Case-insensitive match on the username.
	fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;
	fn list_users(&self) -> Result<Vec<User>, ServiceError>;
	fn role_names(&self, user_id: i32) -> Result<Vec<String>, ServiceError>;
}

pub struct PgRepo {
	pool: DbPool,
}

impl PgRepo {
	pub fn new(pool: DbPool) -> Self {
		Self { pool }
	}

	fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, ServiceError> {
		self.pool.get().map_err(|e| {
			log::error!("Database connection error: {:?}", e);
			ServiceError::Pool(e)
		})
	}
}

impl AccountRepo for PgRepo {
	fn insert_account(&self, account: NewBankAccount) -> Result<BankAccount, ServiceError> {
		let mut conn = self.conn()?;
		let account = diesel::insert_into(bank_accounts::table)
			.values(&account)
			.returning(BankAccount::as_returning())
			.get_result(&mut conn)?;
		Ok(account)
	}

	fn find_account(&self, account_id: i32) -> Result<Option<BankAccount>, ServiceError> {
		let mut conn = self.conn()?;
		let account = bank_accounts::table
			.find(account_id)
			.select(BankAccount::as_select())
			.first(&mut conn)
			.optional()?;
		Ok(account)
	}

	fn accounts_for_user(&self, user_id: i32) -> Result<Vec<BankAccount>, ServiceError> {
		let mut conn = self.conn()?;
		let accounts = bank_accounts::table
			.filter(bank_accounts::user_id.eq(user_id))
			.order(bank_accounts::id.asc())
			.select(BankAccount::as_select())
			.load(&mut conn)?;
		Ok(accounts)
	}

	fn commit(&self, work: UnitOfWork) -> Result<Transaction, ServiceError> {
		let mut conn = self.conn()?;
		let transaction = conn.transaction::<_, diesel::result::Error, _>(|conn| {
			for change in &work.balances {
				diesel::update(bank_accounts::table.find(change.account_id))
					.set(bank_accounts::balance.eq(change.balance.clone()))
					.execute(conn)?;
			}
			diesel::insert_into(transactions::table)
				.values(&work.transaction)
				.returning(Transaction::as_returning())
				.get_result(conn)
		})?;
		Ok(transaction)
	}

	fn recent_transactions(
		&self,
		account_id: i32,
		count: i64,
	) -> Result<Vec<Transaction>, ServiceError> {
		let mut conn = self.conn()?;
		let rows = transactions::table
			.filter(transactions::account_id.eq(account_id))
			.order(transactions::transaction_date.desc())
			.limit(count)
			.select(Transaction::as_select())
			.load(&mut conn)?;
		Ok(rows)
	}

	fn account_transactions(&self, account_id: i32) -> Result<Vec<Transaction>, ServiceError> {
		let mut conn = self.conn()?;
		let rows = transactions::table
			.filter(transactions::account_id.eq(account_id))
			.select(Transaction::as_select())
			.load(&mut conn)?;
		Ok(rows)
	}
}

impl UserRepo for PgRepo {
	fn insert_user(&self, user: NewUser) -> Result<usize, ServiceError> {
		let mut conn = self.conn()?;
		let inserted = diesel::insert_into(users::table).values(&user).execute(&mut conn)?;
		Ok(inserted)
	}

	fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
		let mut conn = self.conn()?;
		let user = users::table
			.filter(lower(users::username).eq(lower(username)))
			.select(User::as_select())
			.first(&mut conn)
			.optional()?;
		Ok(user)
	}

	fn list_users(&self) -> Result<Vec<User>, ServiceError> {
		let mut conn = self.conn()?;
		let all = users::table.order(users::id.asc()).select(User::as_select()).load(&mut conn)?;
		Ok(all)
	}

	fn role_names(&self, user_id: i32) -> Result<Vec<String>, ServiceError> {
		let mut conn = self.conn()?;
		let granted = user_roles::table
			.inner_join(roles::table)
			.filter(user_roles::user_id.eq(user_id))
			.select(Role::as_select())
			.load(&mut conn)?;
		Ok(granted.into_iter().map(|role| role.name).collect())
	}
}
