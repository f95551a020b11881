// ============================================================================
// SESSION STATE - Who is logged in (single source of truth)
// ============================================================================

use std::rc::Rc;

use crate::models::Role;
use crate::services::token_cache::TokenSink;
use crate::state::ReactiveState;

/// Snapshot of the authenticated identity.
///
/// Fields are private: the only way to obtain an authenticated value is
/// through [`SessionStore::login`], so `is_authenticated == false` always
/// comes with `Role::None` and no token or user id.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Session {
    is_authenticated: bool,
    role: Role,
    token: Option<String>,
    user_id: Option<i64>,
}

impl Session {
    /// The state every process starts in
    pub fn anonymous() -> Self {
        Self::default()
    }

    fn authenticated(role: Role, token: Option<String>, user_id: Option<i64>) -> Self {
        Self {
            is_authenticated: true,
            role,
            token,
            user_id,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}

/// Session store shared by reference with every screen
#[derive(Clone)]
pub struct SessionStore {
    session: ReactiveState<Session>,
    token_sink: Rc<dyn TokenSink>,
}

impl SessionStore {
    pub fn new(token_sink: Rc<dyn TokenSink>) -> Self {
        Self {
            session: ReactiveState::new(Session::anonymous()),
            token_sink,
        }
    }

    /// Overwrite the whole session. The role is not checked against the
    /// known set; unknown roles resolve like anonymous visitors.
    pub fn login(&self, role: Role, token: Option<String>, user_id: Option<i64>) {
        log::info!("🔐 [SESSION] Login as {}", role.as_str());

        let mirrored = match token.as_deref() {
            Some(token) => self.token_sink.store(token),
            None => self.token_sink.clear(),
        };
        if let Err(e) = mirrored {
            log::warn!("⚠️ [SESSION] Could not mirror token: {}", e);
        }

        self.session.set(Session::authenticated(role, token, user_id));
    }

    /// Reset to the anonymous state. Callers must also navigate to a
    /// public page; this does not touch navigation.
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logout");

        if let Err(e) = self.token_sink.clear() {
            log::warn!("⚠️ [SESSION] Could not clear token mirror: {}", e);
        }

        self.session.set(Session::anonymous());
    }

    pub fn snapshot(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn role(&self) -> Role {
        self.session.with(|session| session.role.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|session| session.token.clone())
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }
}
