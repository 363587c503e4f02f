use crate::session::SessionToken;
use cookie::{Cookie, SameSite};
use http::{header, HeaderMap};

pub const ADMIN_SESSION_COOKIE: &str = "admin_session";

/// Pulls the admin session token out of the request's `Cookie` header.
pub fn session_cookie(headers: &HeaderMap) -> Option<SessionToken> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ADMIN_SESSION_COOKIE)
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| SessionToken::from(value))
}

pub fn login_cookie(token: &SessionToken) -> String {
    let mut cookie = Cookie::new(ADMIN_SESSION_COOKIE, token.as_str().to_owned());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.to_string()
}

pub fn logout_cookie() -> String {
    let mut cookie = Cookie::new(ADMIN_SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie.to_string()
}
