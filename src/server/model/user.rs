//! Authenticated caller identity.

/// Caller that passed the authentication gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
}
