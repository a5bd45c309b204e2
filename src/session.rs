use std::time::{Duration, Instant};

use crate::error::LedgerError;

/// Who is logged in, and how their movements are shown.
///
/// Expiry only happens when the caller supplies a time to live.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<String>,
    ttl: Option<Duration>,
    expires_at: Option<Instant>,

    /// Show movements sorted ascending instead of in stored order.
    /// Survives logins.
    pub sorted: bool,
}

impl Session {
    pub fn with_ttl(ttl: Duration) -> Self {
        Session {
            ttl: Some(ttl),
            ..Session::default()
        }
    }

    pub fn login(&mut self, login_key: impl Into<String>, now: Instant) {
        self.current = Some(login_key.into());
        self.expires_at = self.ttl.map(|ttl| now + ttl);
    }

    pub fn logout(&mut self) {
        self.current = None;
        self.expires_at = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn toggle_sort(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }

    /// Login key of the current account, checked against `now`.
    /// An expired session is cleared.
    pub fn current(&mut self, now: Instant) -> Result<&str, LedgerError> {
        if matches!(self.expires_at, Some(deadline) if now >= deadline) {
            self.logout();
            return Err(LedgerError::SessionExpired);
        }

        self.current.as_deref().ok_or(LedgerError::NotAuthenticated)
    }
}
