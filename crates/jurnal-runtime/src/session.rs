//! Explicit session: the bearer token and signed-in user, passed to the
//! client at construction instead of read from ambient storage.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use jurnal_types::{LoginData, Role, User};

use crate::{Error, Result};

#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(login: LoginData) -> Self {
        let mut session = Self::default();
        session.sign_in(login);
        session
    }

    pub fn sign_in(&mut self, login: LoginData) {
        self.token = Some(login.token).filter(|t| !t.trim().is_empty());
        self.user = Some(login.user);
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token for a mutating call; fails before anything is sent.
    pub fn require_token(&self) -> Result<&str> {
        self.token().ok_or(Error::MissingCredential)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user.as_ref().map(|u| &u.id))
            .finish()
    }
}

/// `session.json` in the data directory.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means nobody is signed in.
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::anonymous());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn login() -> LoginData {
        LoginData {
            token: "tok-123".into(),
            user: User {
                id: "u1".into(),
                username: Some("sari".into()),
                role: Some(Role::Guru),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_anonymous_session_has_no_token() {
        let session = Session::anonymous();
        assert!(matches!(session.require_token(), Err(Error::MissingCredential)));
    }

    #[test]
    fn test_sign_in_then_out() -> Result<()> {
        let mut session = Session::signed_in(login());
        assert_eq!(session.require_token()?, "tok-123");
        assert_eq!(session.role(), Some(Role::Guru));
        session.sign_out();
        assert!(!session.is_signed_in());
        assert!(session.user().is_none());
        Ok(())
    }

    #[test]
    fn test_blank_token_is_not_a_credential() {
        let mut data = login();
        data.token = " ".into();
        assert!(Session::signed_in(data).require_token().is_err());
    }

    #[test]
    fn test_store_round_trip_and_clear() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = SessionStore::new(temp_dir.path());
        assert!(!store.load()?.is_signed_in());

        store.save(&Session::signed_in(login()))?;
        let loaded = store.load()?;
        assert_eq!(loaded.token(), Some("tok-123"));

        store.clear()?;
        store.clear()?;
        assert!(!store.load()?.is_signed_in());
        Ok(())
    }

    #[test]
    fn test_debug_hides_token() {
        let printed = format!("{:?}", Session::signed_in(login()));
        assert!(!printed.contains("tok-123"));
    }
}
