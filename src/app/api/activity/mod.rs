use crate::{
    app::{
        api::{auth, AppResult, MessageResponse},
        error::{ErrorExt, ErrorKind},
        state::State,
        util,
    },
    session::SessionToken,
};
use anyhow::Context;
use axum::{
    body,
    extract::{Path, Query},
    response::IntoResponse,
    Extension, Json,
};
use http::HeaderMap;
use serde_derive::Deserialize;

#[derive(Deserialize)]
pub struct RosterParams {
    email: String,
}

pub async fn list<S: State>(Extension(state): Extension<S>) -> AppResult {
    do_list(state).await
}

async fn do_list<S: State>(state: S) -> AppResult {
    let activities = state.activities().snapshot();

    let body = serde_json::to_string(&activities)
        .context("Failed to serialize activities")
        .error(ErrorKind::SerializationFailed)?;

    let resp = http::Response::builder()
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body::boxed(body::Full::from(body)))
        .context("Failed to build response for activities")
        .error(ErrorKind::ResponseBuildFailed)?;

    Ok(resp)
}

pub async fn signup<S: State>(
    Extension(state): Extension<S>,
    Path(activity_name): Path<String>,
    Query(params): Query<RosterParams>,
    headers: HeaderMap,
) -> AppResult {
    do_signup(state, activity_name, params.email, util::session_cookie(&headers)).await
}

async fn do_signup<S: State>(
    state: S,
    activity_name: String,
    email: String,
    token: Option<SessionToken>,
) -> AppResult {
    auth::require_admin(&state, token.as_ref()).await?;

    state.activities().sign_up(&activity_name, &email)?;
    state.metrics().signup_total().inc();

    let resp = Json(MessageResponse {
        message: format!("Signed up {email} for {activity_name}"),
    })
    .into_response();

    Ok(resp)
}

pub async fn unregister<S: State>(
    Extension(state): Extension<S>,
    Path(activity_name): Path<String>,
    Query(params): Query<RosterParams>,
    headers: HeaderMap,
) -> AppResult {
    do_unregister(state, activity_name, params.email, util::session_cookie(&headers)).await
}

async fn do_unregister<S: State>(
    state: S,
    activity_name: String,
    email: String,
    token: Option<SessionToken>,
) -> AppResult {
    auth::require_admin(&state, token.as_ref()).await?;

    state.activities().unregister(&activity_name, &email)?;
    state.metrics().unregister_total().inc();

    let resp = Json(MessageResponse {
        message: format!("Unregistered {email} from {activity_name}"),
    })
    .into_response();

    Ok(resp)
}
