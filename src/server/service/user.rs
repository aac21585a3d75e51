use std::collections::HashMap;

use async_trait::async_trait;

use crate::server::model::user::User;

/// Credential check behind the authentication gate.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Returns the user when `username` and `password` are valid, `None` otherwise.
    async fn authenticate(&self, username: &str, password: &str) -> Option<User>;
}

/// User service backed by the credentials in `Config::api_users`.
pub struct ConfiguredUserService {
    credentials: HashMap<String, String>,
}

impl ConfiguredUserService {
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl UserService for ConfiguredUserService {
    async fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        match self.credentials.get(username) {
            Some(expected) if expected == password => Some(User {
                username: username.to_string(),
            }),
            _ => None,
        }
    }
}
