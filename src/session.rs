use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Role;

/// Principal
///
/// The authenticated actor held by the session for its lifetime: identity plus
/// role. Created on successful registration or login, destroyed on logout.
/// The role is fixed at registration and is what every authorization decision
/// keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Principal {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub email: String,
}

/// Session
///
/// The client-held record of "who is currently using the app".
///
/// Invariant: `token` is present if and only if `principal` is present. The
/// two private fields plus the two constructors make any other combination
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    principal: Option<Principal>,
    token: Option<String>,
}

impl Session {
    /// An anonymous session: nobody is logged in.
    pub fn anonymous() -> Self {
        Self {
            principal: None,
            token: None,
        }
    }

    /// A session holding an authenticated principal and its credential.
    pub fn authenticated(principal: Principal, token: String) -> Self {
        Self {
            principal: Some(principal),
            token: Some(token),
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Storage entry holding the serialized bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage entry holding the serialized principal.
pub const PRINCIPAL_KEY: &str = "user";

/// SessionStorage
///
/// Abstract contract for the session-scoped key/value store backing the
/// session (browser sessionStorage in the real client). The store writes
/// exactly two entries — the token and the serialized principal — always
/// together and cleared together, never one without the other.
///
/// The trait is the seam that lets tests (and any non-browser host) supply
/// an in-memory implementation.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// MemoryStorage
///
/// In-memory `SessionStorage` used in tests and as the default host adapter.
/// Scoped to the store's lifetime, like a tab-scoped sessionStorage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// SessionStore
///
/// The single source of truth for "is anyone logged in, and as whom". An
/// explicit, injectable object: constructed at app start, passed to the guard
/// and filter call sites, reset on logout. There is exactly one writer path
/// (the `set_session`/`clear_session`/`restore` methods) and any number of
/// readers; every mutation is immediately visible to subsequent
/// `current_session()` calls.
///
/// The store begins in a loading phase until `restore()` has run. Callers
/// must not ask the authorization guard to decide while `is_loading()` is
/// true — a restore in progress is not the same as anonymous, and treating it
/// as such would flash-redirect an authenticated user to the login screen.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    session: Session,
    loading: bool,
}

impl SessionStore {
    /// Creates the store over the given storage adapter. The store stays in
    /// the loading phase until [`restore`](Self::restore) is called.
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self {
            storage,
            session: Session::anonymous(),
            loading: true,
        }
    }

    /// Re-reads the persisted token/principal pair, so a page reload within
    /// the same browser session does not lose the login. A half-written or
    /// unparsable pair is treated as absent and wiped, keeping the
    /// both-or-neither storage invariant intact. Ends the loading phase.
    pub fn restore(&mut self) {
        let token = self.storage.read(TOKEN_KEY);
        let principal = self
            .storage
            .read(PRINCIPAL_KEY)
            .and_then(|raw| serde_json::from_str::<Principal>(&raw).ok());

        self.session = match (principal, token) {
            (Some(principal), Some(token)) => Session::authenticated(principal, token),
            _ => {
                self.storage.remove(TOKEN_KEY);
                self.storage.remove(PRINCIPAL_KEY);
                Session::anonymous()
            }
        };
        self.loading = false;
    }

    /// Stores the principal and token, persisting both entries together.
    pub fn set_session(&mut self, principal: Principal, token: String) {
        match serde_json::to_string(&principal) {
            Ok(serialized) => {
                self.storage.write(TOKEN_KEY, &token);
                self.storage.write(PRINCIPAL_KEY, &serialized);
            }
            Err(e) => {
                // Keep the in-memory session usable; storage keeps neither entry.
                tracing::error!("failed to serialize principal: {:?}", e);
                self.storage.remove(TOKEN_KEY);
                self.storage.remove(PRINCIPAL_KEY);
            }
        }
        self.session = Session::authenticated(principal, token);
        self.loading = false;
    }

    /// Removes the principal, the token, and both persisted entries.
    /// No error conditions.
    pub fn clear_session(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(PRINCIPAL_KEY);
        self.session = Session::anonymous();
        self.loading = false;
    }

    /// Returns the current session (possibly anonymous), synchronously.
    pub fn current_session(&self) -> Session {
        self.session.clone()
    }

    /// True until the first `restore`/`set_session`/`clear_session` call.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.principal().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.session.principal().is_some_and(|p| p.role == role)
    }
}
