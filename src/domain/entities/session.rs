//! Session entity binding an opaque token to a user.

use chrono::{DateTime, Duration, Utc};

/// Fixed lifetime of a session, counted from creation.
pub const SESSION_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// 64 hex characters (32 random bytes).
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Input data for creating a session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewSession {
    /// Builds a session that starts now and lasts [`SESSION_TTL_DAYS`].
    pub fn starting_now(id: String, user_id: String) -> Self {
        let created_at = Utc::now();
        Self {
            id,
            user_id,
            created_at,
            expires_at: created_at + Duration::days(SESSION_TTL_DAYS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_now_uses_fixed_window() {
        let s = NewSession::starting_now("abc".to_string(), "user1".to_string());
        assert_eq!(s.expires_at - s.created_at, Duration::days(30));
    }
}
