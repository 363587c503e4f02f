use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use serde_derive::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

/// Opaque admin session token. Possession is the only authority check;
/// no expiry and no per-user identity are tracked.
#[derive(Clone, Debug, Deserialize, Serialize, Hash, Eq, PartialEq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Session storage behind a trait so handlers keep working when a real
/// datastore replaces the in-memory set.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn insert(&self, token: SessionToken);
    async fn remove(&self, token: &SessionToken) -> bool;
    async fn contains(&self, token: &SessionToken) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<HashSet<SessionToken>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, token: SessionToken) {
        if let Ok(mut sessions) = self.inner.lock() {
            sessions.insert(token);
        }
    }

    async fn remove(&self, token: &SessionToken) -> bool {
        self.inner
            .lock()
            .map(|mut sessions| sessions.remove(token))
            .unwrap_or(false)
    }

    async fn contains(&self, token: &SessionToken) -> bool {
        self.inner
            .lock()
            .map(|sessions| sessions.contains(token))
            .unwrap_or(false)
    }
}
