use crate::{
	constants::{EMPTY, MESSAGE_INVALID_TOKEN, PUBLIC_ROUTES, TOKEN_LIFETIME},
	models::User,
};
use actix_service::forward_ready;
use actix_web::{
	body::EitherBody,
	dev::{Service, ServiceRequest, ServiceResponse, Transform},
	http::{header::Header, Method},
	Error as AxError, HttpMessage, HttpResponse,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use chrono::Utc;
use futures::future::{ok, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, encode, errors::Error, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
	pub sub: String,
	pub name: String,
	pub email: String,
	#[serde(default)]
	pub roles: Vec<String>,
	pub iss: String,
	pub aud: String,
	pub iat: usize,
	pub exp: usize,
}

impl Claims {
	pub fn user_id(&self) -> Option<i32> {
		self.sub.parse().ok()
	}
}

#[derive(Serialize, Deserialize)]
pub struct ResponseBody {
	pub message: String,
	pub data: String,
}

impl ResponseBody {
	fn new(m: &str, d: &str) -> Self {
		Self { message: String::from(m), data: String::from(d) }
	}
}

#[derive(Clone)]
pub struct JWT {
	secret: String,
	issuer: String,
	audience: String,
}

impl JWT {
	pub fn new(secret: &str, issuer: &str, audience: &str) -> Self {
		Self { secret: secret.to_string(), issuer: issuer.to_string(), audience: audience.to_string() }
	}

	pub fn create_jwt(&self, user: &User, roles: Vec<String>) -> Result<String, Error> {
		let now = Utc::now().timestamp() as usize;
		let claims = Claims {
			sub: user.id.to_string(),
			name: user.username.clone(),
			email: user.email.clone(),
			roles,
			iss: self.issuer.clone(),
			aud: self.audience.clone(),
			iat: now,
			exp: now + TOKEN_LIFETIME,
		};
		debug!("Issuing token for user {} with roles {:?}", claims.sub, claims.roles);
		encode(
			&JwtHeader::new(Algorithm::HS256),
			&claims,
			&EncodingKey::from_secret(self.secret.as_bytes()),
		)
	}

	pub fn verify_jwt(&self, token: &str) -> Result<Claims, Error> {
		let mut validation = Validation::new(Algorithm::HS256);
		validation.set_issuer(&[&self.issuer]);
		validation.set_audience(&[&self.audience]);
		validation.leeway = 0;
		decode::<Claims>(token, &DecodingKey::from_secret(self.secret.as_bytes()), &validation)
			.map(|data| data.claims)
	}
}

fn is_public(method: &Method, path: &str) -> bool {
	*method == Method::OPTIONS ||
		PUBLIC_ROUTES.iter().any(|(m, p)| m == method && path.trim_end_matches('/') == *p)
}

/// Rejects requests without a valid bearer token, except on public routes.
/// Verified claims are placed in the request extensions for handlers to read
/// through `web::ReqData<Claims>`.
pub struct Authentication {
	jwt: JWT,
}

impl Authentication {
	pub fn new(jwt: JWT) -> Self {
		Self { jwt }
	}
}

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
	S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = AxError>,
	S::Future: 'static,
	B: 'static,
{
	type Response = ServiceResponse<EitherBody<B>>;
	type Error = AxError;
	type InitError = ();
	type Transform = AuthenticationMiddleware<S>;
	type Future = Ready<Result<Self::Transform, Self::InitError>>;

	fn new_transform(&self, service: S) -> Self::Future {
		ok(AuthenticationMiddleware { jwt: self.jwt.clone(), service })
	}
}

pub struct AuthenticationMiddleware<S> {
	jwt: JWT,
	service: S,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
	S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = AxError>,
	S::Future: 'static,
	B: 'static,
{
	type Response = ServiceResponse<EitherBody<B>>;
	type Error = AxError;
	type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

	forward_ready!(service);

	fn call(&self, req: ServiceRequest) -> Self::Future {
		let mut authenticate_pass = is_public(req.method(), req.path());

		if !authenticate_pass {
			match Authorization::<Bearer>::parse(&req) {
				Ok(auth) => match self.jwt.verify_jwt(auth.as_ref().token()) {
					Ok(claims) => {
						req.extensions_mut().insert(claims);
						authenticate_pass = true;
					},
					Err(e) => warn!("Invalid token on {}: {:?}", req.path(), e),
				},
				Err(_) => debug!("No bearer token on {}", req.path()),
			}
		}

		if !authenticate_pass {
			let (request, _pl) = req.into_parts();
			let response = HttpResponse::Unauthorized()
				.json(ResponseBody::new(MESSAGE_INVALID_TOKEN, EMPTY))
				.map_into_right_body();

			return Box::pin(async { Ok(ServiceResponse::new(request, response)) });
		}

		let res = self.service.call(req);

		Box::pin(async move { res.await.map(ServiceResponse::map_into_left_body) })
	}
}
