use contracts::shared::notice::{Notice, NoticeKind};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
struct NoticeEntry {
    id: u64,
    notice: Notice,
}

/// Toast queue shared through context.
///
/// Every notice is dismissed automatically after `timeout_ms`, or earlier by
/// the user. Notices never block anything.
#[derive(Clone, Copy)]
pub struct NotificationService {
    entries: RwSignal<Vec<NoticeEntry>>,
    next_id: RwSignal<u64>,
    timeout_ms: StoredValue<u32>,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            timeout_ms: StoredValue::new(timeout_ms),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        match notice.kind {
            NoticeKind::Error => log::error!("{}", notice.message),
            NoticeKind::Warning => log::warn!("{}", notice.message),
            _ => log::info!("{}", notice.message),
        }
        self.entries.update(|e| e.push(NoticeEntry { id, notice }));

        let svc = *self;
        let timeout = self.timeout_ms.get_value();
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.update(|e| e.retain(|entry| entry.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

fn intent(kind: NoticeKind) -> MessageBarIntent {
    match kind {
        NoticeKind::Success => MessageBarIntent::Success,
        NoticeKind::Info => MessageBarIntent::Info,
        NoticeKind::Warning => MessageBarIntent::Warning,
        NoticeKind::Error => MessageBarIntent::Error,
    }
}

/// Renders the queued notices; mount once near the root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry: NoticeEntry| {
                    let id = entry.id;
                    view! {
                        <div class="notification-host__item" on:click=move |_| svc.dismiss(id)>
                            <MessageBar intent=intent(entry.notice.kind)>
                                {entry.notice.message}
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
