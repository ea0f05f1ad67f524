use client::{GateState, SessionStore};
use dioxus::prelude::*;
use shared_types::SessionUser;

/// Global session state: the owned store plus a signal mirroring its
/// snapshots so components re-render on sign-in and sign-out.
#[derive(Clone)]
pub struct SessionContext {
    pub store: SessionStore,
    pub gate: Signal<GateState>,
    /// Why the signed-in profile could not be fetched, if it could not.
    pub profile_error: Signal<Option<String>>,
    /// Bumped to fetch the profile again.
    pub profile_attempt: Signal<u32>,
}

impl SessionContext {
    pub fn user(&self) -> Option<SessionUser> {
        self.gate.read().user().cloned()
    }

    /// Wire role of the signed-in user.
    pub fn role(&self) -> Option<String> {
        self.gate.read().role_str().map(str::to_string)
    }

    pub fn profile_error(&self) -> Option<String> {
        self.profile_error.read().clone()
    }

    pub fn logout(&self) {
        self.store.logout();
    }
}

/// Provide the session to the tree. Persisted state is read once the root
/// has mounted, so the first frame shows the guard placeholder.
pub fn use_session_provider(store: SessionStore) -> SessionContext {
    let store = use_hook(move || store);
    let gate = use_signal(|| store.snapshot());
    let profile_error = use_signal(|| None::<String>);
    let profile_attempt = use_signal(|| 0u32);

    let subscription = use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |next| {
                let mut mirror = gate;
                mirror.set(next.clone());
            })
        }
    });
    use_drop({
        let store = store.clone();
        move || store.unsubscribe(subscription)
    });

    use_effect({
        let store = store.clone();
        move || {
            if store.snapshot() == GateState::Loading {
                store.restore();
            }
        }
    });

    use_context_provider(|| SessionContext {
        store,
        gate,
        profile_error,
        profile_attempt,
    })
}

/// Hook to access the session.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
