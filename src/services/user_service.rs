use crate::{
	error::ServiceError,
	midware::jwt::JWT,
	models::{NewUser, RegisterRequest, User, UserDto},
	repo::UserRepo,
};

pub struct UserService<'a> {
	repo: &'a dyn UserRepo,
	jwt: &'a JWT,
}

impl<'a> UserService<'a> {
	pub fn new(repo: &'a dyn UserRepo, jwt: &'a JWT) -> Self {
		Self { repo, jwt }
	}

	/// Stores the user. Callers validate the request first.
	///
	/// The password is kept as given; `password_hash` holds plaintext.
	pub fn register(&self, req: &RegisterRequest) -> Result<bool, ServiceError> {
		let user = NewUser {
			username: format!("{}{}", req.first_name, req.last_name),
			first_name: req.first_name.clone(),
			last_name: req.last_name.clone(),
			email: req.email.clone(),
			password_hash: req.password.clone(),
			date_of_birth: req.date_of_birth,
		};
		let inserted = self.repo.insert_user(user)?;
		Ok(inserted > 0)
	}

	/// `Ok(None)` for an unknown user or a wrong password.
	pub fn authenticate(&self, username: &str, password: &str) -> Result<Option<UserDto>, ServiceError> {
		let user = match self.repo.find_by_username(username)? {
			Some(user) if Self::verify_password(password, &user.password_hash) => user,
			_ => return Ok(None),
		};

		let roles = self.user_roles(user.id)?;
		let token = self.jwt.create_jwt(&user, roles)?;

		let mut dto = UserDto::from(user);
		dto.token = Some(token);
		Ok(Some(dto))
	}

	pub fn list_users(&self) -> Result<Vec<UserDto>, ServiceError> {
		let users = self.repo.list_users()?;
		Ok(users
			.into_iter()
			.map(|u: User| UserDto {
				first_name: Some(u.first_name),
				last_name: Some(u.last_name),
				email: Some(u.email),
				..Default::default()
			})
			.collect())
	}

	pub fn user_roles(&self, user_id: i32) -> Result<Vec<String>, ServiceError> {
		self.repo.role_names(user_id)
	}

	fn verify_password(password: &str, stored: &str) -> bool {
		password == stored
	}
}
