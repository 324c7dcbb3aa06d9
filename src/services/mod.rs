//! Business rules for accounts, money movement and users. Services borrow a
//! repository for the duration of one request and hold no state of their own.

pub mod account_service;
pub mod transaction_service;
pub mod user_service;

pub use account_service::AccountService;
pub use transaction_service::TransactionService;
pub use user_service::UserService;
