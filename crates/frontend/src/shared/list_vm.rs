use contracts::domain::common::{Resource, ResourceKind};
use contracts::shared::api_error::ApiError;
use contracts::shared::filter::ListFilter;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client::{use_api, ApiClient};
use crate::shared::notifications::{use_notifications, NotificationService};

/// State of a list screen: fetched rows, the active filter, and the
/// commands shared by every list (refresh, open, delete).
pub struct ListViewModel<R: Resource> {
    pub items: RwSignal<Vec<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// `search` is applied locally; the other fields go to the server
    pub filter: RwSignal<ListFilter>,
    api: StoredValue<ApiClient>,
    notifications: NotificationService,
    ctx: AppGlobalContext,
}

impl<R: Resource> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListViewModel<R> {}

impl<R: Resource> ListViewModel<R> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            filter: RwSignal::new(ListFilter::default()),
            api: StoredValue::new(use_api()),
            notifications: use_notifications(),
            ctx: use_context::<AppGlobalContext>().expect("AppGlobalContext not found"),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Absolute URL of a stored media path
    pub fn media_url(&self, path: &str) -> Option<String> {
        self.api
            .try_with_value(|api| api.endpoint().resolve_media_url(path))
            .flatten()
    }

    pub fn refresh(&self) {
        let vm = *self;
        let resource = self.api().resource::<R>();
        let filter = ListFilter {
            search: None,
            ..self.filter.get_untracked()
        };
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = resource.get_all(&filter).await;
            let _ = vm.loading.try_set(false);
            match result {
                Ok(items) => {
                    log::debug!("{}: {} rows", R::KIND.full_name(), items.len());
                    let _ = vm.items.try_set(items);
                }
                Err(e) => {
                    log::error!("Failed to fetch {}: {}", R::KIND.full_name(), e);
                    let _ = vm.error.try_set(Some(e.to_string()));
                    vm.notifications.error(format!(
                        "Failed to load {}: {}",
                        R::KIND.list_name().to_lowercase(),
                        e
                    ));
                }
            }
        });
    }

    pub fn set_search(&self, search: String) {
        self.filter.update(|f| *f = f.clone().with_search(&search));
    }

    /// Server-side status filter; blank clears it. Refetches.
    pub fn set_status(&self, status: String) {
        self.filter.update(|f| {
            f.status = Some(status.trim().to_string()).filter(|s| !s.is_empty());
        });
        self.refresh();
    }

    /// Rows matching the local search
    pub fn visible(&self) -> Vec<R> {
        let search = self.filter.with(|f| f.search.clone().unwrap_or_default());
        self.items.with(|items| {
            items
                .iter()
                .filter(|r| matches_search(r.display_name(), &search))
                .cloned()
                .collect()
        })
    }

    pub fn create_new(&self) {
        self.ctx.open_details(R::KIND, None);
    }

    pub fn open(&self, record: &R) {
        if let Some(id) = record.id() {
            self.ctx.open_details(R::KIND, Some(id.clone()));
        }
    }

    pub fn open_bulk_import(&self) {
        self.ctx.open_bulk_import(R::KIND);
    }

    /// Ask, delete, refetch
    pub fn delete(&self, record: &R) {
        let Some(id) = record.id().cloned() else {
            return;
        };
        let question = format!(
            "Delete {} \"{}\"?",
            R::KIND.element_name().to_lowercase(),
            record.display_name()
        );
        if !confirm(&question) {
            return;
        }
        let resource = self.api().resource::<R>();
        self.run(
            async move { resource.delete(&id).await },
            format!("{} deleted", R::KIND.element_name()),
        );
    }

    /// Run a row action; toast the outcome and refetch on success
    pub fn run<Fut>(&self, action: Fut, success: String)
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let vm = *self;
        spawn_local(async move {
            match action.await {
                Ok(()) => {
                    log::info!("{}: {}", R::KIND.full_name(), success);
                    vm.notifications.success(success);
                    if !vm.items.is_disposed() {
                        vm.refresh();
                    }
                }
                Err(e) => {
                    log::error!("{} action failed: {}", R::KIND.full_name(), e);
                    vm.notifications.error(e.to_string());
                }
            }
        });
    }
}

fn confirm(question: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(question).ok())
        .unwrap_or(false)
}

/// Case-insensitive substring match; a blank search matches everything
pub fn matches_search(text: &str, search: &str) -> bool {
    let search = search.trim();
    search.is_empty() || text.to_lowercase().contains(&search.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search() {
        assert!(matches_search("Acme Corp", ""));
        assert!(matches_search("Acme Corp", "  corp "));
        assert!(!matches_search("Acme Corp", "globex"));
    }
}
