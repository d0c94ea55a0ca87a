use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::load_config;
use crate::shared::notifications::{NotificationHost, NotificationService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("API at {}", config.endpoint().api_base());

    let storage_key = config.auth.token_storage_key.clone();
    provide_context(NotificationService::new(config.api.notice_timeout_ms));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <AuthProvider storage_key=storage_key>
            <AppShell />
            <NotificationHost />
        </AuthProvider>
    }
}
