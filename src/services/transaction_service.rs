use crate::{
	error::ServiceError,
	models::{FinancialSummary, NewTransaction, TransactionDto, TransactionType},
	repo::{AccountRepo, BalanceChange, UnitOfWork},
};
use bigdecimal::BigDecimal;

pub struct TransactionService<'a> {
	repo: &'a dyn AccountRepo,
}

impl<'a> TransactionService<'a> {
	pub fn new(repo: &'a dyn AccountRepo) -> Self {
		Self { repo }
	}

	pub fn deposit(&self, account_id: i32, amount: BigDecimal) -> Result<TransactionDto, ServiceError> {
		log::info!("Starting deposit. AccountId: {}, Amount: {}", account_id, amount);

		let account = self.repo.find_account(account_id)?.ok_or_else(|| {
			log::warn!("Deposit failed: account {} not found", account_id);
			ServiceError::AccountNotFound
		})?;

		let balance = account.balance + &amount;
		let work = UnitOfWork {
			balances: vec![BalanceChange { account_id, balance: balance.clone() }],
			transaction: Self::record(account_id, TransactionType::Deposit, amount, None),
		};
		let transaction = self.repo.commit(work)?;

		log::info!("Deposit successful. AccountId: {}, New balance: {}", account_id, balance);
		Ok(transaction.into())
	}

	pub fn withdraw(&self, account_id: i32, amount: BigDecimal) -> Result<TransactionDto, ServiceError> {
		log::info!("Starting withdrawal. AccountId: {}, Amount: {}", account_id, amount);

		let account = self.repo.find_account(account_id)?.ok_or_else(|| {
			log::warn!("Withdrawal failed: account {} not found", account_id);
			ServiceError::AccountNotFound
		})?;

		if account.balance < amount {
			log::warn!("Withdrawal failed: insufficient balance in account {}", account_id);
			return Err(ServiceError::InsufficientBalance);
		}

		let balance = account.balance - &amount;
		let work = UnitOfWork {
			balances: vec![BalanceChange { account_id, balance: balance.clone() }],
			transaction: Self::record(account_id, TransactionType::Withdrawal, amount, None),
		};
		let transaction = self.repo.commit(work)?;

		log::info!("Withdrawal successful. AccountId: {}, New balance: {}", account_id, balance);
		Ok(transaction.into())
	}

	pub fn transfer(
		&self,
		from_account_id: i32,
		to_account_id: i32,
		amount: BigDecimal,
	) -> Result<TransactionDto, ServiceError> {
		log::info!(
			"Starting transfer. From: {}, To: {}, Amount: {}",
			from_account_id,
			to_account_id,
			amount
		);

		let from = self.repo.find_account(from_account_id)?;
		let to = self.repo.find_account(to_account_id)?;
		let (from, to) = match (from, to) {
			(Some(from), Some(to)) => (from, to),
			_ => {
				log::warn!(
					"Transfer failed: one or both accounts not found. From: {}, To: {}",
					from_account_id,
					to_account_id
				);
				return Err(ServiceError::AccountsNotFound);
			},
		};

		if from.balance < amount {
			log::warn!("Transfer failed: insufficient balance in account {}", from_account_id);
			return Err(ServiceError::InsufficientBalance);
		}

		// A self-transfer debits and credits the same row: one write, net zero.
		let (from_balance, to_balance, balances) = if from_account_id == to_account_id {
			let unchanged = from.balance;
			(
				unchanged.clone(),
				unchanged.clone(),
				vec![BalanceChange { account_id: from_account_id, balance: unchanged }],
			)
		} else {
			let from_balance = from.balance - &amount;
			let to_balance = to.balance + &amount;
			(
				from_balance.clone(),
				to_balance.clone(),
				vec![
					BalanceChange { account_id: from_account_id, balance: from_balance },
					BalanceChange { account_id: to_account_id, balance: to_balance },
				],
			)
		};
		let work = UnitOfWork {
			balances,
			transaction: Self::record(
				from_account_id,
				TransactionType::Transfer,
				amount,
				Some(to_account_id),
			),
		};
		let transaction = self.repo.commit(work)?;

		log::info!(
			"Transfer successful. From: {} (balance {}), To: {} (balance {})",
			from_account_id,
			from_balance,
			to_account_id,
			to_balance
		);
		Ok(transaction.into())
	}

	pub fn recent_transactions(
		&self,
		account_id: i32,
		count: i64,
	) -> Result<Vec<TransactionDto>, ServiceError> {
		let rows = self.repo.recent_transactions(account_id, count)?;
		Ok(rows.into_iter().map(TransactionDto::from).collect())
	}

	/// Totals over the account's own records.
	///
	/// The withdrawals bucket filters on the label "Withdraw" while withdrawals
	/// are recorded as "Withdrawal", so it reads zero.
	pub fn financial_summary(&self, account_id: i32) -> Result<FinancialSummary, ServiceError> {
		let rows = self.repo.account_transactions(account_id)?;

		let sum_where = |label: &str| {
			rows.iter()
				.filter(|t| t.transaction_type == label)
				.fold(BigDecimal::from(0), |acc, t| acc + &t.amount)
		};

		Ok(FinancialSummary {
			total_deposits: sum_where(TransactionType::Deposit.as_str()),
			total_withdrawals: sum_where("Withdraw"),
			net_balance: rows.iter().fold(BigDecimal::from(0), |acc, t| acc + &t.amount),
		})
	}

	fn record(
		account_id: i32,
		kind: TransactionType,
		amount: BigDecimal,
		to_account_id: Option<i32>,
	) -> NewTransaction {
		NewTransaction {
			account_id,
			transaction_type: kind.as_str().to_string(),
			amount,
			to_account_id,
			transaction_date: chrono::Utc::now(),
		}
	}
}
