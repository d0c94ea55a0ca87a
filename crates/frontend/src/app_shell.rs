//! Root of the authenticated UI: the session gate around the main layout.

use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireSession>
            <Shell />
        </RequireSession>
    }
}
