//! Session/role gate.
//!
//! The token is trusted on read: presence of a non-empty `authToken` in
//! storage is what makes a visitor authenticated. The backend is the only
//! verifier; a rejected token surfaces as a 401 which calls
//! [`SessionStore::expire`].

use std::cell::RefCell;
use std::rc::Rc;

use shared_types::{KeyValueStore, Listeners, Role, SessionUser, SubscriptionId, AUTH_TOKEN_KEY, USER_KEY};

/// Where the gate currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GateState {
    /// Persisted state has not been read yet.
    #[default]
    Loading,
    Anonymous,
    /// `user` is `None` when a token exists but no usable profile was
    /// persisted; the guard fetches it.
    Authenticated { user: Option<SessionUser> },
}

/// What the protected-route wrapper renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardView {
    Placeholder,
    Login,
    Protected,
}

impl GateState {
    pub fn guard_view(&self) -> GuardView {
        match self {
            GateState::Loading => GuardView::Placeholder,
            GateState::Anonymous => GuardView::Login,
            GateState::Authenticated { .. } => GuardView::Protected,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            GateState::Authenticated { user } => user.as_ref(),
            _ => None,
        }
    }

    /// Wire role string of the signed-in user, if any.
    pub fn role_str(&self) -> Option<&str> {
        self.user().map(|u| u.role.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().and_then(SessionUser::role)
    }
}

/// Owned session state. Clones share state and listeners.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    state: Rc<RefCell<GateState>>,
    listeners: Listeners<GateState>,
}

impl SessionStore {
    /// A store in the `Loading` state. Call [`SessionStore::restore`] once
    /// the app mounts.
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            state: Rc::new(RefCell::new(GateState::Loading)),
            listeners: Listeners::new(),
        }
    }

    /// Resolve `Loading` from persisted state.
    pub fn restore(&self) -> GateState {
        let next = match self.stored_token() {
            Some(_) => GateState::Authenticated {
                user: self.stored_user(),
            },
            None => {
                if self.storage.get(USER_KEY).is_some() {
                    tracing::debug!("dropping persisted user without a token");
                    self.storage.remove(USER_KEY);
                }
                GateState::Anonymous
            }
        };
        self.transition(next.clone());
        next
    }

    /// True iff a non-empty token is persisted right now.
    pub fn is_authenticated(&self) -> bool {
        self.stored_token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.stored_token()
    }

    /// The cached profile. Always `None` without a token.
    pub fn user(&self) -> Option<SessionUser> {
        if !self.is_authenticated() {
            return None;
        }
        self.state.borrow().user().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.user().as_ref().and_then(SessionUser::role)
    }

    pub fn snapshot(&self) -> GateState {
        self.state.borrow().clone()
    }

    /// Persist a fresh session after a successful login.
    pub fn login(&self, token: &str, user: SessionUser) {
        self.storage.set(AUTH_TOKEN_KEY, token);
        self.persist_user(&user);
        tracing::info!(role = %user.role, "signed in");
        self.transition(GateState::Authenticated { user: Some(user) });
    }

    /// Replace the cached profile, e.g. after `/auth/me` or a profile edit.
    /// Ignored when signed out.
    pub fn set_user(&self, user: SessionUser) {
        if !self.is_authenticated() {
            tracing::debug!("ignoring profile update without a session");
            return;
        }
        self.persist_user(&user);
        self.transition(GateState::Authenticated { user: Some(user) });
    }

    /// Explicit sign-out. Safe to call repeatedly.
    pub fn logout(&self) {
        self.clear();
        tracing::info!("signed out");
        self.transition(GateState::Anonymous);
    }

    /// Forced sign-out after the backend rejected the token.
    pub fn expire(&self) {
        if self.is_authenticated() {
            tracing::warn!("session rejected by the server, signing out");
        }
        self.clear();
        self.transition(GateState::Anonymous);
    }

    pub fn subscribe(&self, callback: impl Fn(&GateState) + 'static) -> SubscriptionId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.unsubscribe(id);
    }

    fn stored_token(&self) -> Option<String> {
        self.storage
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    fn stored_user(&self) -> Option<SessionUser> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable persisted user");
                self.storage.remove(USER_KEY);
                None
            }
        }
    }

    fn persist_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(err) => tracing::warn!(error = %err, "could not persist user"),
        }
    }

    fn clear(&self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    fn transition(&self, next: GateState) {
        let changed = {
            let mut state = self.state.borrow_mut();
            if *state == next {
                false
            } else {
                *state = next.clone();
                true
            }
        };
        if changed {
            self.listeners.notify(&next);
        }
    }
}
