use crate::app::{
    api,
    state::{AppState, State},
};
use axum::{
    extract::Extension,
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

pub fn new(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(api::healthz))
        .route("/activities", get(api::activity::list::<AppState>))
        .route(
            "/activities/:activity_name/signup",
            post(api::activity::signup::<AppState>),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(api::activity::unregister::<AppState>),
        )
        .route("/auth/status", get(api::auth::status::<AppState>))
        .route("/auth/login", post(api::auth::login::<AppState>))
        .route("/auth/logout", post(api::auth::logout::<AppState>))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}
