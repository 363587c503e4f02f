use crate::{
    activity::ActivityMap,
    app::{
        metrics::{Metrics, METRICS},
        state::State,
    },
    authn::TeacherCredentials,
    config::Config,
    session::{MemorySessionStore, SessionStore, SessionToken},
};
use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

#[derive(Clone)]
pub struct TestState {
    config: Config,
    credentials: TeacherCredentials,
    activities: ActivityMap,
    sessions: MemorySessionStore,
}

impl TestState {
    pub fn new() -> Self {
        Self {
            config: Config {
                listener_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3000),
                metrics_listener_address: SocketAddr::new(
                    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
                    3001,
                ),
                credentials_file: "teachers.json".into(),
                static_dir: "static".into(),
            },
            credentials: TeacherCredentials::new(HashMap::from([
                ("mrodriguez".to_owned(), "art123".to_owned()),
                ("mchen".to_owned(), "chess456".to_owned()),
            ])),
            activities: ActivityMap::seeded(),
            sessions: MemorySessionStore::new(),
        }
    }

    /// Records a fresh admin session, as a successful login would.
    pub async fn login(&self) -> SessionToken {
        let token = SessionToken::generate();
        self.sessions.insert(token.clone()).await;
        token
    }
}

impl State for TestState {
    fn config(&self) -> &Config {
        &self.config
    }

    fn metrics(&self) -> Metrics {
        METRICS.clone()
    }

    fn credentials(&self) -> &TeacherCredentials {
        &self.credentials
    }

    fn activities(&self) -> &ActivityMap {
        &self.activities
    }

    fn sessions(&self) -> &dyn SessionStore {
        &self.sessions
    }
}
