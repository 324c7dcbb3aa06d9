use actix_web::http::Method;

pub const EMPTY: &str = "";
pub const MESSAGE_INVALID_TOKEN: &str = "Invalid token, please login again";

// 2 hours, in seconds
pub const TOKEN_LIFETIME: usize = 2 * 60 * 60;

pub const RECENT_TRANSACTION_COUNT: i64 = 5;

pub const ACCOUNT_NUMBER_PREFIX: &str = "BA";

// Reachable without a bearer token
pub const PUBLIC_ROUTES: [(Method, &str); 2] =
	[(Method::POST, "/api/user"), (Method::POST, "/api/user/login")];
