use contracts::shared::session::Session;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    /// Set when the server answered 401; cleared by a successful reload
    pub expired: bool,
}

/// Auth context: the bearer token as read from localStorage and the
/// session-expired flag raised by the resource client.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    storage_key: StoredValue<String>,
}

impl AuthContext {
    /// Read the stored token, if any
    pub fn restore(storage_key: String) -> Self {
        let access_token = storage::get_access_token(&storage_key);
        log::debug!("Auth restored, token present: {}", access_token.is_some());
        Self {
            state: RwSignal::new(AuthState {
                access_token,
                expired: false,
            }),
            storage_key: StoredValue::new(storage_key),
        }
    }

    /// Session handed to the resource client. A 401 clears the stored token
    /// and flips the application into the expired state.
    pub fn session(&self) -> Session {
        let token = self.state.with_untracked(|s| s.access_token.clone());
        let ctx = *self;
        Session::new(token, move || ctx.expire())
    }

    pub fn expire(&self) {
        log::warn!("Session expired, clearing stored token");
        self.storage_key
            .with_value(|key| storage::clear_access_token(key));
        self.state.set(AuthState {
            access_token: None,
            expired: true,
        });
    }

    /// Pick up a token stored meanwhile (e.g. by a sign-in in another tab)
    pub fn reload(&self) {
        let access_token = self
            .storage_key
            .with_value(|key| storage::get_access_token(key));
        let expired = access_token.is_none() && self.state.with_untracked(|s| s.expired);
        self.state.set(AuthState {
            access_token,
            expired,
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn is_expired(&self) -> bool {
        self.state.with(|s| s.expired)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(storage_key: String, children: Children) -> impl IntoView {
    provide_context(AuthContext::restore(storage_key));
    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
