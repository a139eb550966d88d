//! Server-side session store
//!
//! Maps opaque session ids to upstream api credentials. Credentials are
//! held in memory on the server and never serialized into a response;
//! the client only ever sees the session id.
//!
//! Sessions carry a fixed 8-hour TTL, are usable strictly before their
//! expiry, refresh on activity, and are lazily deleted on expired
//! access. The store is pruned past a soft entry bound.

use dashmap::DashMap;

use super::now_millis;

/// Session duration: 8 hours
pub const SESSION_TTL_MS: i64 = 8 * 60 * 60 * 1000;

/// Soft bound on stored sessions before a prune pass runs
const PRUNE_THRESHOLD: usize = 1_000;

/// Input to [`SessionStore::create`]
#[derive(Clone)]
pub struct NewSession {
    pub sid: String,
    pub full_name: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub api_key: String,
    pub api_secret: String,
}

/// Stored session record
#[derive(Clone)]
pub struct Session {
    pub sid: String,
    pub full_name: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub api_key: String,
    pub api_secret: String,
    pub created_at: i64,
    pub expires_at: i64,
}

// Credentials stay out of logs
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("sid", &self.sid)
            .field("full_name", &self.full_name)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Upstream credentials resolved from a session
#[derive(Clone)]
pub struct SessionCredentials {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// TTL session store keyed by opaque session id
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    ttl_ms: i64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(SESSION_TTL_MS)
    }

    /// Store with a custom TTL (ops override and tests)
    pub fn with_ttl(ttl_ms: i64) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl_ms,
        }
    }

    /// Create (or replace) a session and return its id.
    pub fn create(&self, data: NewSession) -> String {
        self.create_at(data, now_millis())
    }

    /// Clock-explicit variant of [`create`](Self::create).
    pub fn create_at(&self, data: NewSession, now_ms: i64) -> String {
        // Opportunistic cleanup; soft bound only
        if self.sessions.len() > PRUNE_THRESHOLD {
            self.sessions.retain(|_, s| now_ms < s.expires_at);
        }

        let sid = data.sid.clone();
        let session = Session {
            sid: sid.clone(),
            full_name: data.full_name,
            username: data.username,
            email: data.email,
            api_key: data.api_key,
            api_secret: data.api_secret,
            created_at: now_ms,
            expires_at: now_ms + self.ttl_ms,
        };
        self.sessions.insert(sid.clone(), session);
        sid
    }

    /// Fetch a live session; an expired one is deleted and None returned.
    pub fn get(&self, sid: &str) -> Option<Session> {
        self.get_at(sid, now_millis())
    }

    /// Clock-explicit variant of [`get`](Self::get).
    pub fn get_at(&self, sid: &str, now_ms: i64) -> Option<Session> {
        let expired = match self.sessions.get(sid) {
            None => return None,
            Some(session) => now_ms >= session.expires_at,
        };

        if expired {
            self.sessions.remove(sid);
            return None;
        }
        self.sessions.get(sid).map(|s| s.clone())
    }

    /// Resolve the upstream credentials behind a live session.
    pub fn credentials(&self, sid: &str) -> Option<SessionCredentials> {
        self.credentials_at(sid, now_millis())
    }

    /// Clock-explicit variant of [`credentials`](Self::credentials).
    pub fn credentials_at(&self, sid: &str, now_ms: i64) -> Option<SessionCredentials> {
        self.get_at(sid, now_ms).map(|s| SessionCredentials {
            api_key: s.api_key,
            api_secret: s.api_secret,
        })
    }

    /// Extend a live session by a full TTL from now. Returns false (and
    /// deletes) when the session is unknown or already expired.
    pub fn refresh(&self, sid: &str) -> bool {
        self.refresh_at(sid, now_millis())
    }

    /// Clock-explicit variant of [`refresh`](Self::refresh).
    pub fn refresh_at(&self, sid: &str, now_ms: i64) -> bool {
        let expired = match self.sessions.get(sid) {
            None => return false,
            Some(session) => now_ms >= session.expires_at,
        };

        if expired {
            self.sessions.remove(sid);
            return false;
        }

        if let Some(mut session) = self.sessions.get_mut(sid) {
            session.expires_at = now_ms + self.ttl_ms;
            true
        } else {
            false
        }
    }

    /// Drop a session (logout).
    pub fn delete(&self, sid: &str) {
        self.sessions.remove(sid);
    }

    /// Number of stored sessions, live or not yet pruned
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
