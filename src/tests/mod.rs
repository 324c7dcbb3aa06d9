/// Builds the full application (routes plus authentication) over the given
/// repository mocks and returns the initialised test service.
macro_rules! init_app {
	($accounts:expr, $users:expr) => {{
		let jwt = $crate::tests::fixtures::TestFixtures::jwt();
		let accounts: actix_web::web::Data<dyn $crate::repo::AccountRepo> =
			actix_web::web::Data::from(
				std::sync::Arc::new($accounts) as std::sync::Arc<dyn $crate::repo::AccountRepo>
			);
		let users: actix_web::web::Data<dyn $crate::repo::UserRepo> = actix_web::web::Data::from(
			std::sync::Arc::new($users) as std::sync::Arc<dyn $crate::repo::UserRepo>,
		);
		actix_web::test::init_service(
			actix_web::App::new()
				.app_data(accounts)
				.app_data(users)
				.app_data(actix_web::web::Data::new(jwt.clone()))
				.wrap($crate::midware::jwt::Authentication::new(jwt))
				.configure($crate::user_routes::init)
				.configure($crate::account_routes::init)
				.configure($crate::transaction_routes::init),
		)
		.await
	}};
}

mod integration_tests;
