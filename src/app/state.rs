use crate::{
    activity::ActivityMap,
    app::metrics::Metrics,
    authn::TeacherCredentials,
    config::Config,
    session::{MemorySessionStore, SessionStore},
};
use std::sync::Arc;

pub trait State: Send + Sync + Clone + 'static {
    fn config(&self) -> &Config;
    fn metrics(&self) -> Metrics;
    fn credentials(&self) -> &TeacherCredentials;
    fn activities(&self) -> &ActivityMap;
    fn sessions(&self) -> &dyn SessionStore;
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: Config,
    credentials: TeacherCredentials,
    activities: ActivityMap,
    sessions: Box<dyn SessionStore>,
    metrics: Metrics,
}

impl AppState {
    pub fn new(
        config: Config,
        credentials: TeacherCredentials,
        activities: ActivityMap,
        sessions: MemorySessionStore,
        metrics: Metrics,
    ) -> Self {
        Self {
            inner: Arc::new(InnerState {
                config,
                credentials,
                activities,
                sessions: Box::new(sessions) as Box<dyn SessionStore>,
                metrics,
            }),
        }
    }
}

impl State for AppState {
    fn config(&self) -> &Config {
        &self.inner.config
    }

    fn metrics(&self) -> Metrics {
        self.inner.metrics.clone()
    }

    fn credentials(&self) -> &TeacherCredentials {
        &self.inner.credentials
    }

    fn activities(&self) -> &ActivityMap {
        &self.inner.activities
    }

    fn sessions(&self) -> &dyn SessionStore {
        self.inner.sessions.as_ref()
    }
}
