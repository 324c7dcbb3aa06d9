use crate::{
	constants::ACCOUNT_NUMBER_PREFIX,
	error::ServiceError,
	models::{BankAccount, NewBankAccount},
	repo::AccountRepo,
};
use bigdecimal::BigDecimal;
use rand::Rng;

pub struct AccountService<'a> {
	repo: &'a dyn AccountRepo,
}

impl<'a> AccountService<'a> {
	pub fn new(repo: &'a dyn AccountRepo) -> Self {
		Self { repo }
	}

	pub fn create_account(&self, user_id: i32) -> Result<BankAccount, ServiceError> {
		let account = NewBankAccount {
			user_id,
			account_number: Self::generate_account_number(),
			balance: BigDecimal::from(0),
		};
		let account = self.repo.insert_account(account)?;
		log::info!("Opened account {} ({}) for user {}", account.id, account.account_number, user_id);
		Ok(account)
	}

	pub fn get_account(&self, account_id: i32) -> Result<Option<BankAccount>, ServiceError> {
		self.repo.find_account(account_id)
	}

	pub fn accounts_for_user(&self, user_id: i32) -> Result<Vec<BankAccount>, ServiceError> {
		self.repo.accounts_for_user(user_id)
	}

	pub fn generate_account_number() -> String {
		let number: u32 = rand::thread_rng().gen_range(100_000..999_999);
		format!("{}{}", ACCOUNT_NUMBER_PREFIX, number)
	}
}
