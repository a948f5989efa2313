//! Credential validation and the external auth-service boundary.
//!
//! The hosted auth API is an opaque collaborator: the client validates input,
//! calls one of the sign-in/sign-up/session operations, and maps the failure
//! categories to user-visible notifications. `FileAuthService` is the local
//! stand-in used by the binary; it keeps accounts and the current session as
//! JSON under `.cache/`, the same way other credentials are cached.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;
const SESSION_TTL_DAYS: i64 = 7;

const ACCOUNTS_FILE: &str = "accounts.json";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,

    #[error("This email is already registered. Please login instead.")]
    AlreadyRegistered,

    #[error("auth service error: {0}")]
    Service(String),
}

/// A signed-in session issued by the auth collaborator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    fn issue(email: &str) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            created_at: now,
            expires_at: now + Duration::days(SESSION_TTL_DAYS),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Checked before any service call; a rejection never reaches the collaborator.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    const MSG: &str = "Please enter a valid email address";
    let Some((local, domain)) = email.split_once('@') else {
        return Err(MSG);
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.contains(char::is_whitespace)
    {
        return Err(MSG);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

pub fn validate_confirmation(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match!");
    }
    Ok(())
}

/// The external auth collaborator, synchronous from the caller's perspective.
pub trait AuthService: Send + Sync {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
    fn sign_up(&self, email: &str, password: &str, redirect: &str) -> Result<Session, AuthError>;
    fn current_session(&self) -> Result<Option<Session>, AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
}

/// Local stand-in for the hosted auth API. Not a credential vault; accounts
/// live in a plain JSON file next to the session cache.
pub struct FileAuthService {
    dir: PathBuf,
}

impl FileAuthService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn accounts_path(&self) -> PathBuf {
        self.dir.join(ACCOUNTS_FILE)
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn read_accounts(&self) -> Result<HashMap<String, String>, AuthError> {
        let path = self.accounts_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(&path).map_err(service_err)?;
        serde_json::from_str(&content).map_err(service_err)
    }

    fn write_accounts(&self, accounts: &HashMap<String, String>) -> Result<(), AuthError> {
        self.ensure_dir()?;
        let content = serde_json::to_string(accounts).map_err(service_err)?;
        fs::write(self.accounts_path(), content).map_err(service_err)
    }

    fn write_session(&self, session: &Session) -> Result<(), AuthError> {
        self.ensure_dir()?;
        let content = serde_json::to_string(session).map_err(service_err)?;
        fs::write(self.session_path(), content).map_err(service_err)
    }

    fn ensure_dir(&self) -> Result<(), AuthError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(service_err)?;
        }
        Ok(())
    }
}

fn service_err(e: impl std::fmt::Display) -> AuthError {
    AuthError::Service(e.to_string())
}

impl AuthService for FileAuthService {
    fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let accounts = self.read_accounts()?;
        match accounts.get(email) {
            Some(stored) if stored == password => {
                let session = Session::issue(email);
                self.write_session(&session)?;
                tracing::info!(email, "sign-in succeeded");
                Ok(session)
            }
            _ => {
                tracing::warn!(email, "sign-in rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    fn sign_up(&self, email: &str, password: &str, redirect: &str) -> Result<Session, AuthError> {
        let mut accounts = self.read_accounts()?;
        if accounts.contains_key(email) {
            tracing::warn!(email, "sign-up rejected, already registered");
            return Err(AuthError::AlreadyRegistered);
        }
        accounts.insert(email.to_string(), password.to_string());
        self.write_accounts(&accounts)?;

        let session = Session::issue(email);
        self.write_session(&session)?;
        tracing::info!(email, redirect, "sign-up succeeded");
        Ok(session)
    }

    fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(service_err)?;
        let session: Session = match serde_json::from_str(&content) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable session cache");
                let _ = fs::remove_file(&path);
                return Ok(None);
            }
        };
        if session.is_expired() {
            let _ = fs::remove_file(&path);
            return Ok(None);
        }
        Ok(Some(session))
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path).map_err(service_err)?;
        }
        Ok(())
    }
}

/// Default cache directory for the stand-in service.
pub fn default_auth_dir() -> PathBuf {
    Path::new(".cache").to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_auth_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("neoverse-auth-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("reader@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user name@example.com").is_err());
    }

    #[test]
    fn password_validation() {
        assert!(validate_password("123456").is_ok());
        assert!(validate_password("12345").is_err());
        assert!(validate_confirmation("secret1", "secret1").is_ok());
        assert!(validate_confirmation("secret1", "secret2").is_err());
    }

    #[test]
    fn sign_up_then_sign_in_round_trip() {
        let dir = temp_auth_dir("roundtrip");
        let _ = fs::remove_dir_all(&dir);
        let service = FileAuthService::new(&dir);

        let session = service
            .sign_up("reader@example.com", "secret1", "/")
            .expect("sign-up");
        assert_eq!(session.email, "reader@example.com");
        assert!(!session.is_expired());

        let current = service.current_session().expect("session lookup");
        assert_eq!(current.map(|s| s.email).as_deref(), Some("reader@example.com"));

        service.sign_out().expect("sign-out");
        assert!(service.current_session().expect("session lookup").is_none());

        let again = service.sign_in("reader@example.com", "secret1").expect("sign-in");
        assert_eq!(again.email, "reader@example.com");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn duplicate_sign_up_is_rejected() {
        let dir = temp_auth_dir("duplicate");
        let _ = fs::remove_dir_all(&dir);
        let service = FileAuthService::new(&dir);

        service.sign_up("reader@example.com", "secret1", "/").expect("sign-up");
        let err = service
            .sign_up("reader@example.com", "other-password", "/")
            .expect_err("duplicate must fail");
        assert!(matches!(err, AuthError::AlreadyRegistered));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let dir = temp_auth_dir("wrongpw");
        let _ = fs::remove_dir_all(&dir);
        let service = FileAuthService::new(&dir);

        service.sign_up("reader@example.com", "secret1", "/").expect("sign-up");
        let err = service
            .sign_in("reader@example.com", "not-it-1")
            .expect_err("wrong password must fail");
        assert!(matches!(err, AuthError::InvalidCredentials));

        let err = service
            .sign_in("stranger@example.com", "secret1")
            .expect_err("unknown email must fail");
        assert!(matches!(err, AuthError::InvalidCredentials));

        let _ = fs::remove_dir_all(&dir);
    }
}
