use axum::response::Response;
use serde_derive::{Deserialize, Serialize};

pub mod activity;
pub mod auth;

pub type AppError = crate::app::error::Error;
pub type AppResult = Result<Response, AppError>;

#[derive(Deserialize, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn healthz() -> &'static str {
    "Ok"
}
