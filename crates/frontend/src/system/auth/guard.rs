use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;

/// Renders children only while a token is present.
///
/// Otherwise shows why: no token stored yet, or the server rejected the
/// token (401) and it was cleared.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=move || view! { <SessionMissing /> }
        >
            {children()}
        </Show>
    }
}

#[component]
fn SessionMissing() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="session-gate">
            {move || if auth.is_expired() {
                view! {
                    <MessageBar intent=MessageBarIntent::Warning>
                        "Your session has expired. Sign in again, then retry."
                    </MessageBar>
                }.into_any()
            } else {
                view! {
                    <MessageBar intent=MessageBarIntent::Info>
                        "Not signed in. Sign in to the CMS, then retry."
                    </MessageBar>
                }.into_any()
            }}
            <Button appearance=ButtonAppearance::Primary on_click=move |_| auth.reload()>
                "Retry"
            </Button>
        </div>
    }
}
