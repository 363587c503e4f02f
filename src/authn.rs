use anyhow::{Context, Result};
use serde_derive::Deserialize;
use std::{collections::HashMap, path::Path};

/// Teacher username to plaintext password table, loaded once at startup
/// and immutable afterwards. The file has the shape
/// `{"teachers": {"username": "password"}}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeacherCredentials {
    teachers: HashMap<String, String>,
}

impl TeacherCredentials {
    pub fn new(teachers: HashMap<String, String>) -> Self {
        Self { teachers }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credentials file {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse credentials file {}", path.display()))
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.teachers
            .get(username)
            .map_or(false, |stored| stored == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> TeacherCredentials {
        serde_json::from_str(r#"{"teachers": {"mrodriguez": "art123", "mchen": "chess456"}}"#)
            .expect("Failed to parse credentials")
    }

    #[test]
    fn verify_accepts_matching_pair() {
        assert!(credentials().verify("mrodriguez", "art123"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        assert!(!credentials().verify("mrodriguez", "chess456"));
    }

    #[test]
    fn verify_rejects_unknown_username() {
        assert!(!credentials().verify("nobody", "art123"));
    }
}
