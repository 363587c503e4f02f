use axum::{response::IntoResponse, routing::get, Router};
use http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter, register_int_gauge, Encoder, IntCounter, IntGauge, TextEncoder,
};
use std::sync::Arc;
use tracing::error;

pub static METRICS: Lazy<Metrics> = Lazy::new(Metrics::new);

#[derive(Clone)]
pub struct Metrics {
    inner: Arc<InnerMetrics>,
}

struct InnerMetrics {
    login_success: IntCounter,
    login_failure: IntCounter,
    signup_total: IntCounter,
    unregister_total: IntCounter,
    active_sessions: IntGauge,
}

impl Metrics {
    fn new() -> Self {
        Self {
            inner: Arc::new(InnerMetrics {
                login_success: register_int_counter!(
                    "login_success",
                    "Successful teacher logins"
                )
                .expect("failed to register login_success"),
                login_failure: register_int_counter!("login_failure", "Rejected teacher logins")
                    .expect("failed to register login_failure"),
                signup_total: register_int_counter!("signup_total", "Roster signups")
                    .expect("failed to register signup_total"),
                unregister_total: register_int_counter!(
                    "unregister_total",
                    "Roster unregistrations"
                )
                .expect("failed to register unregister_total"),
                active_sessions: register_int_gauge!(
                    "active_sessions",
                    "Admin sessions currently held"
                )
                .expect("failed to register active_sessions"),
            }),
        }
    }

    pub fn login_success(&self) -> &IntCounter {
        &self.inner.login_success
    }

    pub fn login_failure(&self) -> &IntCounter {
        &self.inner.login_failure
    }

    pub fn signup_total(&self) -> &IntCounter {
        &self.inner.signup_total
    }

    pub fn unregister_total(&self) -> &IntCounter {
        &self.inner.unregister_total
    }

    pub fn active_sessions(&self) -> &IntGauge {
        &self.inner.active_sessions
    }
}

pub fn router() -> Router {
    Router::new().route("/metrics", get(handler))
}

async fn handler() -> axum::response::Response {
    let mut buffer = Vec::new();

    match TextEncoder::new().encode(&prometheus::gather(), &mut buffer) {
        Ok(()) => (StatusCode::OK, buffer).into_response(),
        Err(err) => {
            error!(error = %err, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
