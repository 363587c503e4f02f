use crate::{
    app::{
        api::{AppResult, MessageResponse},
        error::{Error, ErrorExt, ErrorKind},
        state::State,
        util,
    },
    session::SessionToken,
};
use anyhow::{anyhow, Context};
use axum::{body, extract::Query, response::IntoResponse, Extension, Json};
use http::HeaderMap;
use serde_derive::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginParams {
    username: String,
    password: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct StatusResponse {
    pub is_admin: bool,
}

/// Fails with 403 unless the supplied token is a recognized admin session.
pub async fn require_admin<S: State>(
    state: &S,
    token: Option<&SessionToken>,
) -> Result<(), Error> {
    if let Some(token) = token {
        if state.sessions().contains(token).await {
            return Ok(());
        }
    }

    Err(Error::new(
        ErrorKind::AdminRequired,
        anyhow!("missing or unrecognized admin session cookie"),
    ))
}

pub async fn status<S: State>(Extension(state): Extension<S>, headers: HeaderMap) -> AppResult {
    do_status(state, util::session_cookie(&headers)).await
}

async fn do_status<S: State>(state: S, token: Option<SessionToken>) -> AppResult {
    let is_admin = match token.as_ref() {
        Some(token) => state.sessions().contains(token).await,
        None => false,
    };

    Ok(Json(StatusResponse { is_admin }).into_response())
}

pub async fn login<S: State>(
    Extension(state): Extension<S>,
    Query(params): Query<LoginParams>,
) -> AppResult {
    do_login(state, params).await
}

async fn do_login<S: State>(state: S, params: LoginParams) -> AppResult {
    if !state.credentials().verify(&params.username, &params.password) {
        state.metrics().login_failure().inc();
        return Err(Error::new(
            ErrorKind::InvalidCredentials,
            anyhow!("login rejected for {:?}", params.username),
        ));
    }

    let token = SessionToken::generate();
    state.sessions().insert(token.clone()).await;
    state.metrics().login_success().inc();
    state.metrics().active_sessions().inc();

    let body = serde_json::to_string(&MessageResponse {
        message: "Logged in successfully".to_owned(),
    })
    .context("Failed to serialize login response")
    .error(ErrorKind::SerializationFailed)?;

    let resp = http::Response::builder()
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::SET_COOKIE, util::login_cookie(&token))
        .body(body::boxed(body::Full::from(body)))
        .context("Failed to build response for login")
        .error(ErrorKind::ResponseBuildFailed)?;

    Ok(resp)
}

pub async fn logout<S: State>(Extension(state): Extension<S>, headers: HeaderMap) -> AppResult {
    do_logout(state, util::session_cookie(&headers)).await
}

async fn do_logout<S: State>(state: S, token: Option<SessionToken>) -> AppResult {
    if let Some(token) = token {
        if state.sessions().remove(&token).await {
            state.metrics().active_sessions().dec();
        }
    }

    let body = serde_json::to_string(&MessageResponse {
        message: "Logged out successfully".to_owned(),
    })
    .context("Failed to serialize logout response")
    .error(ErrorKind::SerializationFailed)?;

    let resp = http::Response::builder()
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::SET_COOKIE, util::logout_cookie())
        .body(body::boxed(body::Full::from(body)))
        .context("Failed to build response for logout")
        .error(ErrorKind::ResponseBuildFailed)?;

    Ok(resp)
}
