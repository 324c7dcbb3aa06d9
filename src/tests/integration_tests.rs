use actix_web::{http::StatusCode, test};
use bigdecimal::BigDecimal;
use mockall::predicate::eq;
use serde_json::json;

use crate::{
	midware::jwt::ResponseBody,
	models::{BankAccount, ErrorResponse, FinancialSummary, TransactionDto, UserDto},
	repo::{MockAccountRepo, MockUserRepo},
	tests::{
		fixtures::TestFixtures,
		test_utils::{bearer, committed},
	},
};

#[actix_web::test]
async fn test_protected_routes_require_token() {
	let app = init_app!(MockAccountRepo::new(), MockUserRepo::new());

	for uri in ["/api/user", "/api/transactions/recent/1", "/api/accounts/1"] {
		let resp = test::TestRequest::get().uri(uri).send_request(&app).await;
		assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
	}

	let resp = test::TestRequest::post()
		.uri("/api/transactions/deposit")
		.insert_header(("Authorization", "Bearer not-a-token"))
		.set_json(json!({ "accountId": 1, "amount": 5 }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
	let body: ResponseBody = test::read_body_json(resp).await;
	assert!(!body.message.is_empty());
}

#[actix_web::test]
async fn test_register_user() {
	let mut users = MockUserRepo::new();
	users.expect_insert_user().times(1).returning(|_| Ok(1));
	let app = init_app!(MockAccountRepo::new(), users);

	let resp = test::TestRequest::post()
		.uri("/api/user")
		.set_json(&TestFixtures::valid_registration())
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::CREATED);
	let body: UserDto = test::read_body_json(resp).await;
	assert_eq!(body.user_name.as_deref(), Some("JaneDoe"));
	assert!(body.token.is_none());
}

#[actix_web::test]
async fn test_register_with_empty_field_is_rejected() {
	let mut users = MockUserRepo::new();
	users.expect_insert_user().never();
	let app = init_app!(MockAccountRepo::new(), users);

	let resp = test::TestRequest::post()
		.uri("/api/user")
		.set_json(json!({
			"firstName": "Jane",
			"lastName": "",
			"email": "jane.doe@example.com",
			"password": "Secret123"
		}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

	let resp = test::TestRequest::post()
		.uri("/api/user")
		.set_json(json!({ "firstName": "Jane", "lastName": "Doe", "email": "jane.doe@example.com" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_validates_input_and_credentials() {
	let mut users = MockUserRepo::new();
	users
		.expect_find_by_username()
		.returning(|_| Ok(Some(TestFixtures::user(7, "JaneDoe", "Secret123"))));
	let app = init_app!(MockAccountRepo::new(), users);

	let resp = test::TestRequest::post()
		.uri("/api/user/login")
		.set_json(json!({ "userName": "JaneDoe", "passwordHash": "" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

	let resp = test::TestRequest::post()
		.uri("/api/user/login")
		.set_json(json!({ "userName": "JaneDoe", "passwordHash": "wrong" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_complete_user_flow() {
	let mut users = MockUserRepo::new();
	users
		.expect_find_by_username()
		.withf(|username| username == "janedoe")
		.returning(|_| Ok(Some(TestFixtures::user(7, "JaneDoe", "Secret123"))));
	users.expect_role_names().with(eq(7)).returning(|_| Ok(vec!["User".to_string()]));
	users
		.expect_list_users()
		.times(1)
		.returning(|| Ok(vec![TestFixtures::user(7, "JaneDoe", "Secret123")]));
	let app = init_app!(MockAccountRepo::new(), users);

	// Step 1: login
	let resp = test::TestRequest::post()
		.uri("/api/user/login")
		.set_json(json!({ "userName": "janedoe", "passwordHash": "Secret123" }))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let login: UserDto = test::read_body_json(resp).await;
	let token = login.token.expect("Token not found in response");

	// Step 2: the token opens the protected user list
	let resp = test::TestRequest::get()
		.uri("/api/user")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let listed: Vec<UserDto> = test::read_body_json(resp).await;
	assert_eq!(listed.len(), 1);
	assert_eq!(listed[0].first_name.as_deref(), Some("Jane"));

	// Step 3: and identifies the caller
	let resp = test::TestRequest::get()
		.uri("/api/user/me")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.send_request(&app)
		.await;
	let me: UserDto = test::read_body_json(resp).await;
	assert_eq!(me.user_id, Some(7));
	assert_eq!(me.user_name.as_deref(), Some("JaneDoe"));
}

#[actix_web::test]
async fn test_deposit_over_http() {
	let mut accounts = MockAccountRepo::new();
	accounts
		.expect_find_account()
		.with(eq(1))
		.returning(|_| Ok(Some(TestFixtures::account(1, 1000))));
	accounts
		.expect_commit()
		.times(1)
		.withf(|work| work.balances[0].balance == BigDecimal::from(1500))
		.returning(|work| Ok(committed(work, 21)));
	let app = init_app!(accounts, MockUserRepo::new());

	let resp = test::TestRequest::post()
		.uri("/api/transactions/deposit")
		.insert_header(bearer(12))
		.set_json(json!({ "accountId": 1, "amount": 500 }))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::OK);
	let body: TransactionDto = test::read_body_json(resp).await;
	assert_eq!(body.transaction_id, 21);
	assert_eq!(body.account_id, 1);
	assert_eq!(body.transaction_type, "Deposit");
	assert_eq!(body.amount, BigDecimal::from(500));
}

#[actix_web::test]
async fn test_insufficient_balance_is_a_server_fault() {
	let mut accounts = MockAccountRepo::new();
	accounts.expect_find_account().returning(|id| Ok(Some(TestFixtures::account(id, 100))));
	accounts.expect_commit().never();
	let app = init_app!(accounts, MockUserRepo::new());

	let resp = test::TestRequest::post()
		.uri("/api/transactions/withdraw")
		.insert_header(bearer(12))
		.set_json(json!({ "accountId": 3, "amount": 100000 }))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body: ErrorResponse = test::read_body_json(resp).await;
	assert_eq!(body.error, "Insufficient balance.");
}

#[actix_web::test]
async fn test_transfer_over_http() {
	let mut accounts = MockAccountRepo::new();
	accounts.expect_find_account().returning(|id| Ok(Some(TestFixtures::account(id, 500))));
	accounts.expect_commit().times(1).returning(|work| Ok(committed(work, 22)));
	let app = init_app!(accounts, MockUserRepo::new());

	let resp = test::TestRequest::post()
		.uri("/api/transactions/transfer")
		.insert_header(bearer(12))
		.set_json(json!({ "fromAccountId": 1, "toAccountId": 2, "amount": 250 }))
		.send_request(&app)
		.await;

	assert_eq!(resp.status(), StatusCode::OK);
	let body: TransactionDto = test::read_body_json(resp).await;
	assert_eq!(body.transaction_type, "Transfer");
	assert_eq!(body.to_account_id, Some(2));
}

#[actix_web::test]
async fn test_recent_and_summary_over_http() {
	let mut accounts = MockAccountRepo::new();
	accounts.expect_recent_transactions().withf(|id, count| *id == 4 && *count == 5).returning(
		|_, _| {
			Ok(vec![
				TestFixtures::transaction(2, 4, "Withdrawal", 40, 1),
				TestFixtures::transaction(1, 4, "Deposit", 100, 2),
			])
		},
	);
	accounts.expect_account_transactions().with(eq(4)).returning(|_| {
		Ok(vec![
			TestFixtures::transaction(1, 4, "Deposit", 100, 2),
			TestFixtures::transaction(2, 4, "Withdrawal", 40, 1),
		])
	});
	let app = init_app!(accounts, MockUserRepo::new());

	let resp = test::TestRequest::get()
		.uri("/api/transactions/recent/4")
		.insert_header(bearer(12))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let recent: Vec<TransactionDto> = test::read_body_json(resp).await;
	assert_eq!(recent.iter().map(|t| t.transaction_id).collect::<Vec<_>>(), vec![2, 1]);

	let resp = test::TestRequest::get()
		.uri("/api/transactions/summary/4")
		.insert_header(bearer(12))
		.send_request(&app)
		.await;
	assert_eq!(resp.status(), StatusCode::OK);
	let summary: FinancialSummary = test::read_body_json(resp).await;
	assert_eq!(summary, FinancialSummary {
		total_deposits: BigDecimal::from(100),
		total_withdrawals: BigDecimal::from(0),
		net_balance: BigDecimal::from(140),
	});
}

#[actix_web::test]
async fn test_account_routes() {
	let mut accounts = MockAccountRepo::new();
	accounts.expect_insert_account().withf(|account| account.user_id == 12).returning(|account| {
		Ok(BankAccount {
			id: 9,
			user_id: account.user_id,
			account_number: account.account_number,
			balance: account.balance,
			created_at: chrono::Utc::now(),
		})
	});
	accounts.expect_find_account().with(eq(404)).returning(|_| Ok(None));
	accounts
		.expect_find_account()
		.with(eq(9))
		.returning(|_| Ok(Some(TestFixtures::account(9, 0))));
	accounts
		.expect_accounts_for_user()
		.with(eq(12))
		.returning(|_| Ok(vec![TestFixtures::account(9, 0)]));
	let app = init_app!(accounts, MockUserRepo::new());

	let resp = test::TestRequest::post().uri("/api/accounts").insert_header(bearer(12)).send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::CREATED);
	let created: BankAccount = test::read_body_json(resp).await;
	assert_eq!(created.user_id, 12);
	assert!(created.account_number.starts_with("BA"));

	let resp = test::TestRequest::get().uri("/api/accounts/9").insert_header(bearer(12)).send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::OK);

	let resp = test::TestRequest::get().uri("/api/accounts/404").insert_header(bearer(12)).send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::NOT_FOUND);

	let resp =
		test::TestRequest::get().uri("/api/accounts/user/12").insert_header(bearer(12)).send_request(&app).await;
	assert_eq!(resp.status(), StatusCode::OK);
	let listed: Vec<BankAccount> = test::read_body_json(resp).await;
	assert_eq!(listed.len(), 1);
}
